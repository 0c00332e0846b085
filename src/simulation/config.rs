//! Simulation parameters, file loading, and validation.

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::error::SimulationError;
use super::organism::Kind;

/// Rectangular world bounds. Positions live in `[0, width] x [0, height]`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct WorldBounds {
    /// World width.
    pub width: f32,
    /// World height.
    pub height: f32,
}

/// Per-role organism parameters.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpeciesConfig {
    /// Number of organisms of this role per generation.
    pub population: usize,
    /// Body radius.
    pub radius: f32,
    /// Signed movement speed per tick.
    pub speed: f32,
    /// Sensing range beyond physical contact.
    pub vision_range: f32,
}

/// Generation-turnover parameters.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EvolutionConfig {
    /// Per-gene probability of replacing an inherited gene with a fresh draw.
    pub mutation_rate: f32,
    /// Number of generations to simulate.
    pub generations: u32,
    /// Ticks per generation.
    pub ticks_per_generation: u32,
    /// Save a DNA snapshot every this many generations (0 disables snapshots).
    pub snapshot_interval: u32,
}

/// Simulation parameters that control world, organisms, and evolution.
///
/// The core never hardcodes any of these; everything is threaded through this
/// struct so runs are reproducible and testable.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulationConfig {
    /// World bounds.
    pub bounds: WorldBounds,
    /// Prey parameters.
    pub prey: SpeciesConfig,
    /// Predator parameters.
    pub predators: SpeciesConfig,
    /// Heading change per steering decision, in radians.
    pub turn_increment: f32,
    /// Evolution parameters.
    pub evolution: EvolutionConfig,
    /// RNG seed; `None` draws one from the OS.
    pub seed: Option<u64>,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            bounds: WorldBounds {
                width: 640.0,
                height: 480.0,
            },
            prey: SpeciesConfig {
                population: 50,
                radius: 2.0,
                speed: 1.0,
                vision_range: 40.0,
            },
            predators: SpeciesConfig {
                population: 5,
                radius: 6.0,
                speed: 3.0,
                vision_range: 40.0,
            },
            turn_increment: std::f32::consts::FRAC_PI_8,
            evolution: EvolutionConfig {
                mutation_rate: 0.01,
                generations: 1000,
                ticks_per_generation: 850,
                snapshot_interval: 25,
            },
            seed: None,
        }
    }
}

impl SimulationConfig {
    /// Loads a configuration from a JSON file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, SimulationError> {
        let json = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&json)?;
        Ok(config)
    }

    /// Returns the species parameters for a role.
    pub fn species(&self, kind: Kind) -> &SpeciesConfig {
        match kind {
            Kind::Prey => &self.prey,
            Kind::Predator => &self.predators,
        }
    }

    /// Checks every parameter, reporting the first violation.
    ///
    /// Runs before any simulation state is constructed.
    pub fn validate(&self) -> Result<(), SimulationError> {
        if self.bounds.width <= 0.0 || self.bounds.height <= 0.0 {
            return Err(SimulationError::InvalidConfig(format!(
                "world bounds must be positive, got {}x{}",
                self.bounds.width, self.bounds.height
            )));
        }
        for (name, species) in [("prey", &self.prey), ("predators", &self.predators)] {
            if species.population == 0 {
                return Err(SimulationError::InvalidConfig(format!(
                    "{name} population must be at least 1"
                )));
            }
            if species.radius <= 0.0 {
                return Err(SimulationError::InvalidConfig(format!(
                    "{name} radius must be positive, got {}",
                    species.radius
                )));
            }
            if species.vision_range <= 0.0 {
                return Err(SimulationError::InvalidConfig(format!(
                    "{name} vision range must be positive, got {}",
                    species.vision_range
                )));
            }
        }
        let rate = self.evolution.mutation_rate;
        if !(0.0..=1.0).contains(&rate) {
            return Err(SimulationError::InvalidConfig(format!(
                "mutation rate must be within [0, 1], got {rate}"
            )));
        }
        if self.evolution.ticks_per_generation == 0 {
            return Err(SimulationError::InvalidConfig(
                "ticks per generation must be at least 1".into(),
            ));
        }
        Ok(())
    }
}
