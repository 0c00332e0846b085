//! Directional sensory state.
//!
//! Each organism carries a fixed 4x2 grid of activations: one row per vision
//! wedge, one column per relatedness class (same kind / other kind). The grid
//! is zeroed at the start of every tick, filled with closest-wins activations
//! during sensing, flattened into the brain input vector, and zeroed again
//! once the brain has consumed it.

use ndarray::Array1;

use super::geometry::Wedge;

/// Number of brain inputs the grid flattens into.
pub const INPUT_WIDTH: usize = 8;

/// Per-tick sensory accumulator: strongest stimulus per wedge per class.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SenseGrid {
    // [wedge][0 = same kind, 1 = other kind]
    cells: [[f32; 2]; 4],
}

impl SenseGrid {
    /// Creates a zeroed grid.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a stimulus, keeping the strongest activation seen this tick.
    ///
    /// Activations are clamped to `[0, 1]`: 1.0 means contact range, 0.0 the
    /// edge of vision.
    pub fn observe(&mut self, wedge: Wedge, same_kind: bool, activation: f32) {
        let cell = &mut self.cells[wedge.index()][usize::from(!same_kind)];
        *cell = cell.max(activation.clamp(0.0, 1.0));
    }

    /// Returns the stored activation for one wedge and class.
    pub fn activation(&self, wedge: Wedge, same_kind: bool) -> f32 {
        self.cells[wedge.index()][usize::from(!same_kind)]
    }

    /// Zeroes every cell.
    pub fn reset(&mut self) {
        self.cells = [[0.0; 2]; 4];
    }

    /// True when no stimulus has been recorded since the last reset.
    pub fn is_clear(&self) -> bool {
        self.cells.iter().flatten().all(|&v| v == 0.0)
    }

    /// Flattens the grid into the brain input vector.
    ///
    /// Fixed order: above, below, left, right, each contributing
    /// (same kind, other kind).
    pub fn to_inputs(&self) -> Array1<f32> {
        let mut inputs = Vec::with_capacity(INPUT_WIDTH);
        for wedge in Wedge::ALL {
            inputs.extend_from_slice(&self.cells[wedge.index()]);
        }
        Array1::from_vec(inputs)
    }
}
