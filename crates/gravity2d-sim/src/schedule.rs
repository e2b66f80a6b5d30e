//! Cooperative tick loop at the fixed simulation rate.
//!
//! The loop owns pacing and cancellation only; all semantics stay in
//! [`Simulation::tick`], so tests can drive ticks directly and skip the
//! clock entirely with [`Pacing::Unpaced`].

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

use gravity2d::{CollisionPair, SystemState};

use crate::render::{render_frame, Renderer};
use crate::sim::{Simulation, TickOutcome};

/// Fixed simulation rate. One tick is one unit timestep.
pub const TICKS_PER_SECOND: u32 = 60;

/// Wall-clock budget per tick under [`Pacing::Realtime`].
pub const TICK_INTERVAL: Duration = Duration::from_nanos(1_000_000_000 / TICKS_PER_SECOND as u64);

/// Shared flag for stopping a run from another thread.
#[derive(Debug, Clone, Default)]
pub struct CancelToken(Arc<AtomicBool>);

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}

/// Whether the loop sleeps out the remainder of each tick interval.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pacing {
    /// Sleep so ticks land roughly 1/60 s apart.
    Realtime,
    /// Run ticks back to back. For tests and batch runs.
    Unpaced,
}

/// Callbacks fired as the loop advances. All default to no-ops.
pub trait Observer {
    fn on_tick(&mut self, _state: &SystemState) {}
    fn on_collision(&mut self, _pair: &CollisionPair) {}
}

/// Observer that ignores everything.
pub struct NullObserver;

impl Observer for NullObserver {}

/// What a completed run did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    /// Ticks that advanced the state, including a halting tick.
    pub ticks: u64,
    /// True when the run ended on a collision.
    pub halted: bool,
}

/// Drives the simulation until it halts, is cancelled, stops, or reaches
/// `max_ticks`.
///
/// After each advancing tick the frame is redrawn and `on_tick` fires;
/// a halting tick additionally fires `on_collision` exactly once. The
/// simulation must already be started or the loop exits immediately.
pub fn run(
    sim: &mut Simulation,
    renderer: &mut dyn Renderer,
    observer: &mut dyn Observer,
    cancel: &CancelToken,
    pacing: Pacing,
    max_ticks: Option<u64>,
) -> RunSummary {
    let mut ticks = 0;
    let mut halted = false;

    while !cancel.is_cancelled() && max_ticks.map_or(true, |limit| ticks < limit) {
        let started = Instant::now();

        match sim.tick() {
            TickOutcome::Idle => break,
            TickOutcome::Advanced => {
                ticks += 1;
                render_frame(renderer, sim.state());
                observer.on_tick(sim.state());
            }
            TickOutcome::Halted(pair) => {
                ticks += 1;
                render_frame(renderer, sim.state());
                observer.on_tick(sim.state());
                observer.on_collision(&pair);
                halted = true;
                break;
            }
        }

        if pacing == Pacing::Realtime {
            let elapsed = started.elapsed();
            if elapsed < TICK_INTERVAL {
                thread::sleep(TICK_INTERVAL - elapsed);
            }
        }
    }

    RunSummary { ticks, halted }
}
