//! Tick integration schemes.
//!
//! Both schemes advance every body by one unit timestep. For each calling
//! body they fold in the impulse from every other body *and* push the
//! equal-and-opposite impulse onto that other body, so across a full tick
//! each unordered pair is accumulated twice, once from each side. The
//! schemes differ only in *when* those impulses become visible:
//!
//! - [`SequentialIntegrator`] mutates velocities immediately, mid-pass, so
//!   later bodies in the same tick see partially updated peers. Results
//!   depend on iteration order.
//! - [`SnapshotIntegrator`] accumulates every impulse from the state frozen
//!   at tick start and applies them all at once, removing the order
//!   dependence while keeping the same per-pair totals.

use crate::body::Body;
use crate::forces::pairwise_impulse;
use crate::numeric::snap_to_zero;
use nalgebra::Vector2;

/// Advances a body collection by one tick.
pub trait Integrator: Send + Sync {
    fn step(&self, bodies: &mut [Body]);
}

/// In-place sequential scheme: each body's pass mutates shared velocity
/// state that later passes within the same tick read back.
///
/// After a body's pass its velocity components are zero-snapped and its
/// position integrated, but later passes may still nudge its velocity;
/// the next tick's snap catches that. Self-interaction is excluded by
/// index, so two bodies with identical state still attract each other.
pub struct SequentialIntegrator;

impl Integrator for SequentialIntegrator {
    fn step(&self, bodies: &mut [Body]) {
        let n = bodies.len();
        for i in 0..n {
            for j in 0..n {
                if j == i {
                    continue;
                }
                let gravity = pairwise_impulse(&bodies[i], &bodies[j]);
                let (mass_i, mass_j) = (bodies[i].mass, bodies[j].mass);
                bodies[i].velocity += gravity / mass_i;
                bodies[j].velocity -= gravity / mass_j;
            }
            snap_to_zero(&mut bodies[i].velocity);
            let velocity = bodies[i].velocity;
            bodies[i].position += velocity;
        }
    }
}

/// Frozen-snapshot scheme: all impulses are computed from tick-start
/// positions and buffered, then every velocity is updated, zero-snapped,
/// and every position integrated atomically.
///
/// Per-pair impulse totals match [`SequentialIntegrator`] evaluated at
/// equal positions; trajectories diverge only through the removed
/// mid-tick visibility.
pub struct SnapshotIntegrator;

impl Integrator for SnapshotIntegrator {
    fn step(&self, bodies: &mut [Body]) {
        let n = bodies.len();
        let mut deltas = vec![Vector2::zeros(); n];
        for i in 0..n {
            for j in 0..n {
                if j == i {
                    continue;
                }
                let gravity = pairwise_impulse(&bodies[i], &bodies[j]);
                deltas[i] += gravity / bodies[i].mass;
                deltas[j] -= gravity / bodies[j].mass;
            }
        }
        for (body, delta) in bodies.iter_mut().zip(deltas) {
            body.velocity += delta;
            snap_to_zero(&mut body.velocity);
            let velocity = body.velocity;
            body.position += velocity;
        }
    }
}
