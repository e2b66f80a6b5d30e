//! Simulation lifecycle: construction, run flag, tick, and reset.

use gravity2d::{
    first_collision, BodyId, CollisionPair, Integrator, SnapshotIntegrator, SystemState,
};
use nalgebra::{Point2, Vector2};

use crate::config::{BodyConfig, ParameterSource};
use crate::error::Result;
use crate::render::BodySnapshot;

/// What a single call to [`Simulation::tick`] did.
#[derive(Debug, Clone, PartialEq)]
pub enum TickOutcome {
    /// The simulation is stopped; nothing was touched.
    Idle,
    /// One step of integration completed without a collision.
    Advanced,
    /// The step completed and brought a pair inside the collision
    /// threshold. The run flag is now cleared.
    Halted(CollisionPair),
}

/// Owns the body collection, the integration scheme, and the run flag.
///
/// A collision clears the run flag but leaves the final state intact for
/// inspection; only [`Simulation::reset`] rewrites body values.
pub struct Simulation {
    state: SystemState,
    integrator: Box<dyn Integrator>,
    running: bool,
}

impl Default for Simulation {
    fn default() -> Self {
        Self::new(Box::new(SnapshotIntegrator))
    }
}

impl Simulation {
    /// Empty, stopped simulation with the given integration scheme.
    pub fn new(integrator: Box<dyn Integrator>) -> Self {
        Self {
            state: SystemState::new(),
            integrator,
            running: false,
        }
    }

    /// Builds a simulation with one body per color, reading each body's
    /// values from `source` under the id it will be assigned.
    pub fn from_source(source: &dyn ParameterSource, colors: &[&str]) -> Result<Self> {
        let mut sim = Self::default();
        for color in colors {
            let next = BodyId(sim.state.body_count() as u32);
            let config = source.read_body(next)?;
            sim.add_body(&config, color)?;
        }
        Ok(sim)
    }

    /// Swaps the integration scheme. Builder-style, for construction.
    pub fn with_integrator(mut self, integrator: Box<dyn Integrator>) -> Self {
        self.integrator = integrator;
        self
    }

    /// Validates `config` and appends a body built from it.
    pub fn add_body(&mut self, config: &BodyConfig, color: &str) -> Result<BodyId> {
        config.validate()?;
        Ok(self.state.add_body(
            Point2::new(config.position[0], config.position[1]),
            config.radius,
            color,
            Vector2::new(config.velocity[0], config.velocity[1]),
        ))
    }

    pub fn start(&mut self) {
        self.running = true;
    }

    pub fn stop(&mut self) {
        self.running = false;
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn state(&self) -> &SystemState {
        &self.state
    }

    /// Display-shaped copies of every body, in collection order.
    pub fn snapshot(&self) -> Vec<BodySnapshot> {
        self.state.bodies.iter().map(BodySnapshot::from).collect()
    }

    /// Advances one step if running.
    ///
    /// Integration runs first; the collision scan sees post-step
    /// positions. On a hit the run flag is cleared, so every later call
    /// returns [`TickOutcome::Idle`] until the host restarts or resets.
    pub fn tick(&mut self) -> TickOutcome {
        if !self.running {
            return TickOutcome::Idle;
        }
        self.integrator.step(&mut self.state.bodies);
        if let Some(pair) = first_collision(&self.state.bodies) {
            self.running = false;
            return TickOutcome::Halted(pair);
        }
        TickOutcome::Advanced
    }

    /// Stops the run and rewrites every body's position, radius, and
    /// velocity from `source`, recomputing mass from the new radius.
    ///
    /// The body count and colors never change. All reads are validated
    /// before anything is written, so a bad source leaves the simulation
    /// stopped but otherwise untouched.
    pub fn reset(&mut self, source: &dyn ParameterSource) -> Result<()> {
        self.running = false;

        let mut configs = Vec::with_capacity(self.state.body_count());
        for body in &self.state.bodies {
            let config = source.read_body(body.id)?;
            config.validate()?;
            configs.push(config);
        }

        for (body, config) in self.state.bodies.iter_mut().zip(configs) {
            body.position = Point2::new(config.position[0], config.position[1]);
            body.velocity = Vector2::new(config.velocity[0], config.velocity[1]);
            body.set_radius(config.radius);
        }
        Ok(())
    }
}
