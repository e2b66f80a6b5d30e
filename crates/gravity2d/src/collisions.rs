//! Proximity collision detection across all body pairs.

use crate::body::{Body, BodyId};

/// Fraction of the radius sum below which two centers count as colliding.
/// Fixed by design, not configurable.
pub const COLLISION_THRESHOLD_FACTOR: f64 = 0.045;

/// A detected collision between two bodies.
#[derive(Debug, Clone, PartialEq)]
pub struct CollisionPair {
    pub a: BodyId,
    pub b: BodyId,
    /// Center separation at detection time.
    pub separation: f64,
    /// Threshold that was undercut: `(r_a + r_b) · 0.045`.
    pub threshold: f64,
}

/// Returns the first colliding pair, enumerating unordered pairs `(i, j)`
/// with `i < j` in collection order.
///
/// A pair collides iff the raw center distance is strictly below
/// `(r_i + r_j) · 0.045`; exact equality is not a collision. The distance
/// here is unpadded; the epsilon only guards force division.
pub fn first_collision(bodies: &[Body]) -> Option<CollisionPair> {
    for i in 0..bodies.len() {
        for j in (i + 1)..bodies.len() {
            let separation = bodies[i].distance_to(&bodies[j]);
            let threshold = (bodies[i].radius + bodies[j].radius) * COLLISION_THRESHOLD_FACTOR;
            if separation < threshold {
                return Some(CollisionPair {
                    a: bodies[i].id,
                    b: bodies[j].id,
                    separation,
                    threshold,
                });
            }
        }
    }
    None
}

/// True when any pair of bodies violates the minimum separation.
pub fn has_collision(bodies: &[Body]) -> bool {
    first_collision(bodies).is_some()
}
