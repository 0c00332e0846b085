//! Generation turnover.
//!
//! At the end of a generation each role evolves independently: final scores
//! become a fitness pool, every member mothers exactly one child at its own
//! index, and fathers are drawn from the pool by roulette wheel, so fit
//! members sire many children while everyone breeds at least once.

use rand::Rng;
use tracing::debug;

use super::config::SimulationConfig;
use super::dna::Dna;
use super::error::SimulationError;
use super::organism::{Kind, Organism};

/// Builds the fitness weights for a finished cohort.
///
/// Each member's weight is its share of the total score. A cohort that scored
/// nothing at all (no prey survived a tick, or no predator ate) is treated as
/// uniformly fit rather than erroring on the zero total.
pub fn fitness_weights(cohort: &[Organism]) -> Vec<f32> {
    let total: u32 = cohort.iter().map(|o| o.score).sum();
    if total == 0 {
        vec![1.0 / cohort.len() as f32; cohort.len()]
    } else {
        cohort
            .iter()
            .map(|o| o.score as f32 / total as f32)
            .collect()
    }
}

/// Draws one parent index by roulette wheel.
///
/// Walks the pool in order accumulating weight; the first member whose
/// cumulative weight reaches the draw (inclusive, which also absorbs
/// floating-point drift at the boundaries) is selected. Walking off the end
/// without a match means the weights do not sum to the drawn range and is a
/// fatal invariant violation.
pub fn select_parent(weights: &[f32], rng: &mut impl Rng) -> Result<usize, SimulationError> {
    let total: f32 = weights.iter().sum();
    let draw = rng.random_range(0.0..total);
    let mut upto = 0.0;
    for (index, weight) in weights.iter().enumerate() {
        if upto + weight >= draw {
            return Ok(index);
        }
        upto += weight;
    }
    Err(SimulationError::SelectionExhausted)
}

/// Breeds the next generation of a cohort.
///
/// Produces exactly as many children as there were parents. Child `i`
/// inherits gene-wise from mother `i` and an independently drawn father, then
/// spawns at a fresh random pose.
pub fn next_generation(
    cohort: &[Organism],
    config: &SimulationConfig,
    rng: &mut impl Rng,
) -> Result<Vec<Organism>, SimulationError> {
    let Some(first) = cohort.first() else {
        return Ok(Vec::new());
    };
    let kind = first.kind;
    let species = config.species(kind);
    let weights = fitness_weights(cohort);
    let total_score: u32 = cohort.iter().map(|o| o.score).sum();
    debug!(
        role = kind.as_str(),
        population = cohort.len(),
        total_score,
        "breeding next generation"
    );

    let mut next = Vec::with_capacity(cohort.len());
    for mother in cohort {
        let father = &cohort[select_parent(&weights, rng)?];
        let dna = Dna::breed(
            &mother.dna,
            &father.dna,
            config.evolution.mutation_rate,
            rng,
        );
        next.push(Organism::new(kind, species, &config.bounds, dna, rng));
    }
    Ok(next)
}

/// Spawns the founding generation for a role.
///
/// With `seed_dna` the cohort is rebuilt one organism per vector, so a loaded
/// snapshot fully determines the population; otherwise the configured number
/// of organisms start with random DNA.
pub fn founding_generation(
    kind: Kind,
    config: &SimulationConfig,
    seed_dna: Option<Vec<Dna>>,
    rng: &mut impl Rng,
) -> Vec<Organism> {
    let species = config.species(kind);
    match seed_dna {
        Some(vectors) => vectors
            .into_iter()
            .map(|dna| Organism::new(kind, species, &config.bounds, dna, rng))
            .collect(),
        None => (0..species.population)
            .map(|_| Organism::with_random_dna(kind, species, &config.bounds, rng))
            .collect(),
    }
}
