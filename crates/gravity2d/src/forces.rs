//! Pairwise gravitational impulse between two bodies.

use crate::body::Body;
use crate::numeric::DISTANCE_EPSILON;
use nalgebra::Vector2;

/// Computes the gravity vector exerted on `a`, pointing toward `b`.
///
/// The magnitude is `m_a · m_b / d²` where `d` is the center distance
/// padded by [`DISTANCE_EPSILON`]; the direction comes from `atan2`, so it
/// is the exact unit vector between centers. Only the magnitude denominator
/// carries the epsilon.
///
/// Velocity deltas follow as `impulse / m_a` on `a` and `-impulse / m_b`
/// on `b`, which makes `m_a · Δv_a == -m_b · Δv_b` hold exactly for a
/// single interaction.
///
/// # Examples
///
/// ```
/// use gravity2d::body::{Body, BodyId};
/// use gravity2d::forces::pairwise_impulse;
/// use nalgebra::{Point2, Vector2};
///
/// let a = Body::new(BodyId(0), Point2::new(0.0, 0.0), 1.0, "red", Vector2::zeros());
/// let b = Body::new(BodyId(1), Point2::new(2.0, 0.0), 1.0, "green", Vector2::zeros());
///
/// let g = pairwise_impulse(&a, &b);
/// assert!(g.x > 0.0); // pulls a toward b
/// assert_eq!(g.y, 0.0);
/// ```
pub fn pairwise_impulse(a: &Body, b: &Body) -> Vector2<f64> {
    let dx = b.position.x - a.position.x;
    let dy = b.position.y - a.position.y;
    let distance = (dx * dx + dy * dy).sqrt() + DISTANCE_EPSILON;
    let force = a.mass * b.mass / (distance * distance);
    let angle = dy.atan2(dx);
    Vector2::new(force * angle.cos(), force * angle.sin())
}
