//! Neural steering network for organisms.
//!
//! A fixed-topology feed-forward network with no training step: the weights
//! come straight from an organism's DNA and only change through breeding.
//! Eight sensory inputs feed a four-unit ReLU hidden layer; two sigmoid
//! outputs are compared to pick a steering turn.

use ndarray::{Array1, Array2, s};
use serde::{Deserialize, Serialize};

use super::dna::Dna;
use super::senses::INPUT_WIDTH;

/// Hidden layer width.
pub const HIDDEN_WIDTH: usize = 4;
/// Output layer width.
pub const OUTPUT_WIDTH: usize = 2;

/// A steering decision derived from the two network outputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Steering {
    /// Turn by the negative heading increment.
    TurnLeft,
    /// Turn by the positive heading increment.
    TurnRight,
    /// Keep the current heading (outputs exactly equal).
    Straight,
}

impl Steering {
    /// Heading change in radians for a given turn increment.
    pub fn heading_delta(self, turn_increment: f32) -> f32 {
        match self {
            Steering::TurnLeft => -turn_increment,
            Steering::TurnRight => turn_increment,
            Steering::Straight => 0.0,
        }
    }
}

/// Feed-forward steering network built from a DNA vector.
///
/// The first 32 genes reshape to the `8x4` input-to-hidden matrix (one row of
/// hidden-unit weights per input), the remaining 8 to the `4x2`
/// hidden-to-output matrix (one row of output weights per hidden unit).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Brain {
    hidden_weights: Array2<f32>,
    output_weights: Array2<f32>,
}

impl Brain {
    /// Builds the weight matrices from a DNA vector.
    pub fn from_dna(dna: &Dna) -> Self {
        let genes = dna.genes();
        let split = INPUT_WIDTH * HIDDEN_WIDTH;
        let hidden_weights = Array2::from_shape_vec(
            (INPUT_WIDTH, HIDDEN_WIDTH),
            genes.slice(s![..split]).to_vec(),
        )
        .expect("hidden weight gene count matches topology");
        let output_weights = Array2::from_shape_vec(
            (HIDDEN_WIDTH, OUTPUT_WIDTH),
            genes.slice(s![split..]).to_vec(),
        )
        .expect("output weight gene count matches topology");
        Self {
            hidden_weights,
            output_weights,
        }
    }

    /// Runs a forward pass and returns the two raw sigmoid outputs.
    #[inline]
    pub fn forward(&self, inputs: &Array1<f32>) -> Array1<f32> {
        let hidden = inputs.dot(&self.hidden_weights).mapv(|x| x.max(0.0));
        hidden.dot(&self.output_weights).mapv(sigmoid)
    }

    /// Maps sensory inputs to a steering decision.
    ///
    /// The first output pulls left, the second right; exactly equal outputs
    /// keep the organism on its current heading.
    pub fn decide(&self, inputs: &Array1<f32>) -> Steering {
        let outputs = self.forward(inputs);
        if outputs[0] > outputs[1] {
            Steering::TurnLeft
        } else if outputs[0] < outputs[1] {
            Steering::TurnRight
        } else {
            Steering::Straight
        }
    }
}

#[inline]
fn sigmoid(x: f32) -> f32 {
    1.0 / (1.0 + (-x).exp())
}
