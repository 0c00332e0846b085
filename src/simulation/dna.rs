//! Heritable weight vectors and breeding operations.
//!
//! DNA is a flat vector of 40 genes in `[0, 1)`, consumed by the brain as two
//! reshaped weight matrices. It is fixed at construction; the only way genes
//! change is gene-wise crossover and mutation between generations.

use ndarray::Array1;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::brain::{HIDDEN_WIDTH, OUTPUT_WIDTH};
use super::error::SimulationError;
use super::senses::INPUT_WIDTH;

/// Number of genes: input-to-hidden weights plus hidden-to-output weights.
pub const GENE_COUNT: usize = INPUT_WIDTH * HIDDEN_WIDTH + HIDDEN_WIDTH * OUTPUT_WIDTH;

/// A fixed-length heritable weight vector.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dna(Array1<f32>);

impl Dna {
    /// Draws a fresh vector of uniform `[0, 1)` genes.
    pub fn random(rng: &mut impl Rng) -> Self {
        Self(Array1::from_shape_fn(GENE_COUNT, |_| rng.random::<f32>()))
    }

    /// Wraps an explicit gene list, rejecting any length other than
    /// [`GENE_COUNT`].
    pub fn from_genes(genes: Vec<f32>) -> Result<Self, SimulationError> {
        if genes.len() != GENE_COUNT {
            return Err(SimulationError::DnaLengthMismatch {
                expected: GENE_COUNT,
                found: genes.len(),
            });
        }
        Ok(Self(Array1::from_vec(genes)))
    }

    /// Returns the gene vector.
    pub fn genes(&self) -> &Array1<f32> {
        &self.0
    }

    /// Number of genes.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True when the vector holds no genes. Never the case for a constructed
    /// `Dna`; present for API completeness.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Breeds a child vector from two parents.
    ///
    /// Each gene is inherited from the mother or the father with equal
    /// probability, then independently mutated: with probability
    /// `mutation_rate` the inherited value is replaced by a fresh uniform
    /// `[0, 1)` draw.
    pub fn breed(mother: &Dna, father: &Dna, mutation_rate: f32, rng: &mut impl Rng) -> Dna {
        let genes = mother
            .0
            .iter()
            .zip(father.0.iter())
            .map(|(&m, &f)| {
                let inherited = if rng.random::<f32>() < 0.5 { m } else { f };
                if rng.random::<f32>() < mutation_rate {
                    rng.random::<f32>()
                } else {
                    inherited
                }
            })
            .collect::<Vec<f32>>();
        Dna(Array1::from_vec(genes))
    }
}
