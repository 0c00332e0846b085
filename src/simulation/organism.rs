//! Organism state and per-tick behavior.
//!
//! A single record covers both roles; interaction rules are selected by the
//! `Kind` tag through an explicit [`Effect`], not by a type hierarchy.

use ndarray::Array1;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::brain::Brain;
use super::config::{SpeciesConfig, WorldBounds};
use super::dna::Dna;
use super::geometry::Encounter;
use super::senses::SenseGrid;

/// Organism role. Interaction rules only fire across differing kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Kind {
    /// Scored by ticks survived; dies on predator contact.
    Prey,
    /// Scored by prey consumed; never dies.
    Predator,
}

impl Kind {
    /// Short role name used in filenames and log lines.
    pub fn as_str(self) -> &'static str {
        match self {
            Kind::Prey => "prey",
            Kind::Predator => "pred",
        }
    }
}

/// What a collision does to the organism that observed it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    /// Same-kind contact: nothing happens.
    None,
    /// Prey touched by a predator dies.
    Die,
    /// Predator touching prey scores a consumption.
    ScoreIncrement,
}

/// Interaction rule for a collision, from the observer's side.
///
/// Both sides of a predator/prey contact observe the same collision and each
/// applies its own effect, so a single touch kills the prey and scores the
/// predator.
pub fn contact_effect(own: Kind, other: Kind) -> Effect {
    match (own, other) {
        (Kind::Prey, Kind::Predator) => Effect::Die,
        (Kind::Predator, Kind::Prey) => Effect::ScoreIncrement,
        _ => Effect::None,
    }
}

/// A simulated organism.
#[derive(Debug, Clone)]
pub struct Organism {
    /// Role tag, immutable.
    pub kind: Kind,
    /// Position; integer-valued coordinates in world bounds, transiently
    /// allowed outside them until the next reflect step.
    pub pos: Array1<f32>,
    /// Heading in radians. Free-ranging; only cos/sin are consumed.
    pub heading: f32,
    /// Signed speed. The sign flips on wall contact.
    pub speed: f32,
    /// Body radius.
    pub radius: f32,
    /// Sensing range beyond physical contact.
    pub vision_range: f32,
    /// Liveness. Prey only transitions true to false; predators stay alive.
    pub alive: bool,
    /// Fitness counter: ticks survived (prey) or prey consumed (predators).
    pub score: u32,
    /// Heritable network weights, fixed after construction.
    pub dna: Dna,
    /// Per-tick sensory accumulator.
    pub senses: SenseGrid,
    /// True when anything was sighted this tick; drives the render highlight.
    pub sighted: bool,
    brain: Brain,
}

impl Organism {
    /// Creates an organism with the given DNA at a random pose.
    ///
    /// Coordinates start on the integer grid within bounds; the heading is a
    /// uniform random angle.
    pub fn new(
        kind: Kind,
        species: &SpeciesConfig,
        bounds: &WorldBounds,
        dna: Dna,
        rng: &mut impl Rng,
    ) -> Self {
        let x = rng.random_range(0..=bounds.width as u32) as f32;
        let y = rng.random_range(0..=bounds.height as u32) as f32;
        let brain = Brain::from_dna(&dna);
        Self {
            kind,
            pos: Array1::from_vec(vec![x, y]),
            heading: rng.random_range(0.0..std::f32::consts::TAU),
            speed: species.speed,
            radius: species.radius,
            vision_range: species.vision_range,
            alive: true,
            score: 0,
            dna,
            senses: SenseGrid::new(),
            sighted: false,
            brain,
        }
    }

    /// Creates an organism with freshly drawn random DNA.
    pub fn with_random_dna(
        kind: Kind,
        species: &SpeciesConfig,
        bounds: &WorldBounds,
        rng: &mut impl Rng,
    ) -> Self {
        let dna = Dna::random(rng);
        Self::new(kind, species, bounds, dna, rng)
    }

    /// Clears transient sensory state at the start of a tick.
    pub fn begin_tick(&mut self) {
        self.senses.reset();
        self.sighted = false;
    }

    /// Applies one surveyed encounter to this organism.
    ///
    /// A collision triggers the kind-pair interaction effect on this organism
    /// only; a sighting records a distance activation in the matching wedge,
    /// keeping the strongest stimulus per wedge per relatedness class.
    pub fn perceive(&mut self, other_kind: Kind, encounter: &Encounter) {
        if encounter.collision {
            match contact_effect(self.kind, other_kind) {
                Effect::Die => self.alive = false,
                Effect::ScoreIncrement => self.score += 1,
                Effect::None => {}
            }
        } else if let Some(sighting) = &encounter.sighting {
            let activation = 1.0 - sighting.sight_distance / self.vision_range;
            self.senses
                .observe(sighting.wedge, other_kind == self.kind, activation);
            self.sighted = true;
        }
    }

    /// Commits one tick of movement.
    ///
    /// Wall contact flips the speed sign, checking the x walls first and the
    /// y walls only otherwise; a corner therefore reflects through the single
    /// signed scalar, not per axis. The brain then consumes the sense grid to
    /// pick a turn, the displacement is rounded to the integer grid, living
    /// prey bank a survival tick, and the senses are cleared for the next
    /// tick.
    pub fn advance(&mut self, turn_increment: f32, bounds: &WorldBounds) {
        if self.pos[0] <= 0.0 || self.pos[0] >= bounds.width {
            self.speed = -self.speed;
        } else if self.pos[1] <= 0.0 || self.pos[1] >= bounds.height {
            self.speed = -self.speed;
        }

        let steering = self.brain.decide(&self.senses.to_inputs());
        self.heading += steering.heading_delta(turn_increment);

        self.pos[0] += (self.heading.cos() * self.speed).round();
        self.pos[1] += (self.heading.sin() * self.speed).round();

        if self.kind == Kind::Prey {
            self.score += 1;
        }

        self.senses.reset();
    }

    /// Read access to the steering network.
    pub fn brain(&self) -> &Brain {
        &self.brain
    }
}
