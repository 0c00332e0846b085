//! Per-generation summary statistics.

use std::fmt;

use super::world::World;

/// Snapshot of how a generation went, formatted into the per-generation log
/// line and the on-screen HUD text.
#[derive(Debug, Clone, Copy)]
pub struct GenerationStats {
    /// Generation index (0-based).
    pub generation: u32,
    /// Prey still alive at collection time.
    pub living_prey: usize,
    /// Total prey consumed across all predators.
    pub prey_eaten: u32,
    /// Mean survival ticks across the whole prey cohort.
    pub avg_prey_lifespan: f32,
}

impl GenerationStats {
    /// Collects stats from the current world state.
    pub fn collect(generation: u32, world: &World) -> Self {
        let prey_eaten = world.predators.iter().map(|p| p.score).sum();
        let total_lifespan: u32 = world.prey.iter().map(|p| p.score).sum();
        Self {
            generation,
            living_prey: world.living_prey(),
            prey_eaten,
            avg_prey_lifespan: total_lifespan as f32 / world.prey.len() as f32,
        }
    }
}

impl fmt::Display for GenerationStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "gen {} | living prey: {}, prey eaten: {}, avg prey lifespan: {:.1}",
            self.generation, self.living_prey, self.prey_eaten, self.avg_prey_lifespan
        )
    }
}
