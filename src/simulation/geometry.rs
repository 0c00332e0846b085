//! Pairwise encounter geometry.
//!
//! For a viewing organism A and another organism B this module answers three
//! questions: do the bodies touch, is B inside A's sight range, and if sighted,
//! which of A's four heading-relative vision wedges does B fall into.

use geo::algorithm::Distance;
use geo::{Euclidean, Point};
use ndarray::Array1;

/// One of the four 90-degree vision sectors relative to an organism's heading.
///
/// Sector order follows successive +90-degree rotations of the heading vector:
/// `Above` starts at the heading itself, then `Left`, `Below`, `Right`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Wedge {
    /// Sector starting at the heading vector.
    Above,
    /// Sector opposite the heading.
    Below,
    /// Sector one rotation past the heading.
    Left,
    /// Sector three rotations past the heading.
    Right,
}

impl Wedge {
    /// All wedges in the fixed brain-input order.
    pub const ALL: [Wedge; 4] = [Wedge::Above, Wedge::Below, Wedge::Left, Wedge::Right];

    /// Row index of this wedge in the sense grid.
    pub fn index(self) -> usize {
        match self {
            Wedge::Above => 0,
            Wedge::Below => 1,
            Wedge::Left => 2,
            Wedge::Right => 3,
        }
    }
}

/// A sighted organism's bearing and range.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sighting {
    /// Vision sector the other organism falls into.
    pub wedge: Wedge,
    /// Distance from the viewer's center to the other body's near boundary.
    pub sight_distance: f32,
}

/// Outcome of surveying one other organism.
#[derive(Debug, Clone, PartialEq)]
pub struct Encounter {
    /// Distance between the two centers.
    pub distance: f32,
    /// Whether the bodies touch (`distance <= r_self + r_other`).
    pub collision: bool,
    /// Present when the other body is in sight range, not touching, and its
    /// nearest point classifies into exactly one wedge.
    pub sighting: Option<Sighting>,
}

/// Euclidean distance between two center points.
pub fn center_distance(a: &Array1<f32>, b: &Array1<f32>) -> f32 {
    Euclidean.distance(Point::new(a[0], a[1]), Point::new(b[0], b[1]))
}

/// Surveys organism B from organism A's point of view.
///
/// Sight range is asymmetric on purpose: B is visible when
/// `distance <= B.radius + A.vision_range`, so a large body is spotted farther
/// out than a small one, and collision does not imply sight.
pub fn survey(
    self_pos: &Array1<f32>,
    self_heading: f32,
    self_radius: f32,
    self_vision: f32,
    other_pos: &Array1<f32>,
    other_radius: f32,
) -> Encounter {
    let distance = center_distance(self_pos, other_pos);
    let collision = distance <= self_radius + other_radius;
    let in_sight = distance <= other_radius + self_vision;

    let sighting = if in_sight && !collision {
        // Nearest point on B's boundary lies on the center-to-center segment.
        let sight_distance = distance - other_radius;
        let toward = [other_pos[0] - self_pos[0], other_pos[1] - self_pos[1]];
        classify_wedge(self_heading, toward).map(|wedge| Sighting {
            wedge,
            sight_distance,
        })
    } else {
        None
    };

    Encounter {
        distance,
        collision,
        sighting,
    }
}

/// Classifies a relative offset into exactly one vision wedge, or `None` when
/// no sector claims it (degenerate offsets such as the zero vector).
///
/// Sector boundaries are inclusive on the counter-clockwise start edge and
/// exclusive on the clockwise end edge, so an offset lying exactly on a wedge
/// vector belongs to the sector that starts there and to no other.
pub fn classify_wedge(heading: f32, offset: [f32; 2]) -> Option<Wedge> {
    let mut sectors = [[heading.cos(), heading.sin()]; 4];
    for i in 1..4 {
        sectors[i] = perpendicular(sectors[i - 1]);
    }

    // Rotation order from the heading vector.
    const ROTATION: [Wedge; 4] = [Wedge::Above, Wedge::Left, Wedge::Below, Wedge::Right];

    for (i, wedge) in ROTATION.into_iter().enumerate() {
        let start = sectors[i];
        let end = sectors[(i + 1) % 4];
        if cross(start, offset) >= 0.0 && cross(end, offset) < 0.0 {
            return Some(wedge);
        }
    }
    None
}

/// Rotates a vector by +90 degrees.
fn perpendicular(v: [f32; 2]) -> [f32; 2] {
    [-v[1], v[0]]
}

/// 2D cross product (z component of the 3D cross product).
fn cross(a: [f32; 2], b: [f32; 2]) -> f32 {
    a[0] * b[1] - a[1] * b[0]
}
