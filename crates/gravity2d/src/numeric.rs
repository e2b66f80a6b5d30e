//! Shared numeric tolerances for the physics core.

use nalgebra::Vector2;

/// Added to every pairwise center distance before the force division so
/// coincident bodies never divide by zero.
pub const DISTANCE_EPSILON: f64 = 1e-6;

/// Velocity components smaller than this in magnitude are snapped to
/// exactly zero after integration, preventing numerical drift at rest.
pub const VELOCITY_EPSILON: f64 = 1e-6;

/// Applies the zero-snap to each component of a velocity.
pub fn snap_to_zero(v: &mut Vector2<f64>) {
    if v.x.abs() < VELOCITY_EPSILON {
        v.x = 0.0;
    }
    if v.y.abs() < VELOCITY_EPSILON {
        v.y = 0.0;
    }
}
