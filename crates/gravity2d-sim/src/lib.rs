//! Driver layer for the `gravity2d` N-body core: typed configuration,
//! lifecycle control, rendering boundary, and a paced tick loop.
//!
//! The split mirrors the physics/host seam: `gravity2d` knows nothing
//! about wall clocks, drawing, or input formats, and this crate adds
//! nothing to the physics.

pub mod config;
pub mod error;
pub mod render;
pub mod schedule;
pub mod sim;

pub use config::{BodyConfig, FixedSource, ParameterSource};
pub use error::{Error, Result};
pub use render::{render_frame, BodySnapshot, Renderer, DIRECTION_HINT_SCALE};
pub use schedule::{
    run, CancelToken, NullObserver, Observer, Pacing, RunSummary, TICKS_PER_SECOND, TICK_INTERVAL,
};
pub use sim::{Simulation, TickOutcome};
