//! World stepping.
//!
//! A tick has two phases. First every living organism senses and resolves
//! interactions against an immutable snapshot of positions and liveness taken
//! at tick start, so outcomes never depend on iteration order. Only then do
//! the survivors commit their movement. The sense phase mutates nothing but
//! the sensing organism itself, which makes it safe to run in parallel
//! without reordering effects.

use kdtree::KdTree;
use kdtree::distance::squared_euclidean;
use ndarray::Array1;
use rayon::prelude::*;

use super::config::SimulationConfig;
use super::error::SimulationError;
use super::geometry;
use super::organism::{Kind, Organism};

/// Both populations plus the tick counter for the running generation.
#[derive(Debug, Clone)]
pub struct World {
    /// Prey cohort.
    pub prey: Vec<Organism>,
    /// Predator cohort.
    pub predators: Vec<Organism>,
    /// Ticks stepped so far this generation.
    pub tick: u32,
}

/// Immutable view of one living organism, captured at tick start.
struct SnapshotEntry {
    kind: Kind,
    cohort_index: usize,
    pos: Array1<f32>,
    radius: f32,
}

type Tree2D = KdTree<f32, usize, Vec<f32>>;

impl World {
    /// Builds a world from two freshly spawned cohorts.
    pub fn new(prey: Vec<Organism>, predators: Vec<Organism>) -> Self {
        Self {
            prey,
            predators,
            tick: 0,
        }
    }

    /// Number of prey still alive.
    pub fn living_prey(&self) -> usize {
        self.prey.iter().filter(|p| p.alive).count()
    }

    /// Advances the simulation by one tick.
    ///
    /// Interaction resolution for every organism completes against the
    /// tick-start snapshot before any position changes; this ordering is the
    /// correctness contract of the step function.
    pub fn step(&mut self, config: &SimulationConfig) -> Result<(), SimulationError> {
        let snapshot = self.capture_snapshot();
        let tree = build_tree(&snapshot)?;
        let max_radius = snapshot.iter().map(|e| e.radius).fold(0.0f32, f32::max);

        scan_cohort(&mut self.predators, &snapshot, &tree, max_radius);
        scan_cohort(&mut self.prey, &snapshot, &tree, max_radius);

        for organism in self.predators.iter_mut().chain(self.prey.iter_mut()) {
            if organism.alive {
                organism.advance(config.turn_increment, &config.bounds);
            }
        }

        self.tick += 1;
        Ok(())
    }

    /// Captures positions of every living organism. Dead prey drop out of
    /// sensing and interaction for the rest of the generation.
    fn capture_snapshot(&self) -> Vec<SnapshotEntry> {
        self.predators
            .iter()
            .enumerate()
            .chain(self.prey.iter().enumerate())
            .filter(|(_, o)| o.alive)
            .map(|(i, o)| SnapshotEntry {
                kind: o.kind,
                cohort_index: i,
                pos: o.pos.clone(),
                radius: o.radius,
            })
            .collect()
    }
}

fn build_tree(snapshot: &[SnapshotEntry]) -> Result<Tree2D, SimulationError> {
    let mut tree = KdTree::with_capacity(2, snapshot.len().max(1));
    for (i, entry) in snapshot.iter().enumerate() {
        tree.add(entry.pos.to_vec(), i)?;
    }
    Ok(tree)
}

/// Runs the sense-and-interact phase for one cohort against the snapshot.
fn scan_cohort(
    cohort: &mut [Organism],
    snapshot: &[SnapshotEntry],
    tree: &Tree2D,
    max_radius: f32,
) {
    cohort.par_iter_mut().enumerate().for_each(|(index, organism)| {
        if !organism.alive {
            return;
        }
        organism.begin_tick();

        // Candidate radius covers both the sight rule (other radius + own
        // vision) and the collision rule (own radius + other radius).
        let reach = organism.vision_range.max(organism.radius) + max_radius;
        let candidates = tree
            .within(&organism.pos.to_vec(), reach.powi(2), &squared_euclidean)
            .unwrap_or_else(|e| panic!("spatial query failed: {e:?}"));

        for (_, entry_id) in candidates {
            let other = &snapshot[*entry_id];
            if other.kind == organism.kind && other.cohort_index == index {
                continue; // skip self
            }
            let encounter = geometry::survey(
                &organism.pos,
                organism.heading,
                organism.radius,
                organism.vision_range,
                &other.pos,
                other.radius,
            );
            organism.perceive(other.kind, &encounter);
        }
    });
}
