//! Discrete-tick 2D gravitational N-body core.
//!
//! Bodies are point-mass circles with mass derived from radius. Each tick
//! accumulates pairwise inverse-square impulses across all bodies,
//! integrates positions by one unit timestep, and reports proximity
//! collisions. Lifecycle, scheduling, and I/O boundaries live in the
//! `gravity2d-sim` crate.

pub mod body;
pub mod collisions;
pub mod forces;
pub mod integrator;
pub mod numeric;
pub mod state;

#[cfg(test)]
mod body_test;
#[cfg(test)]
mod collisions_test;

pub use body::{mass_for_radius, Body, BodyId};
pub use collisions::{first_collision, has_collision, CollisionPair, COLLISION_THRESHOLD_FACTOR};
pub use forces::pairwise_impulse;
pub use integrator::{Integrator, SequentialIntegrator, SnapshotIntegrator};
pub use numeric::{snap_to_zero, DISTANCE_EPSILON, VELOCITY_EPSILON};
pub use state::SystemState;
