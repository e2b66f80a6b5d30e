//! Typed body configuration and the parameter input boundary.
//!
//! Replaces ad hoc per-field lookups with one struct enumerating exactly
//! the values a body needs, validated once on the way in.

use std::collections::HashMap;

use gravity2d::BodyId;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Initial or reset values for one body.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BodyConfig {
    /// Position [x, y].
    pub position: [f64; 2],
    /// Circle radius; mass is derived from it.
    pub radius: f64,
    /// Velocity [x, y].
    pub velocity: [f64; 2],
}

impl BodyConfig {
    /// Checks the boundary invariants: every value finite, radius > 0.
    ///
    /// The core never re-validates; everything behind this gate is
    /// treated as a well-formed real.
    pub fn validate(&self) -> Result<()> {
        let all_finite = self
            .position
            .iter()
            .chain(self.velocity.iter())
            .all(|v| v.is_finite())
            && self.radius.is_finite();
        if !all_finite {
            return Err(Error::InvalidParam(
                "body parameters must be finite".to_string(),
            ));
        }
        if self.radius <= 0.0 {
            return Err(Error::InvalidParam(format!(
                "radius must be > 0, got {}",
                self.radius
            )));
        }
        Ok(())
    }
}

/// Supplies initial and reset values for named bodies.
pub trait ParameterSource {
    fn read_body(&self, id: BodyId) -> Result<BodyConfig>;
}

/// In-memory `ParameterSource` backed by a map, for tests, demos, and any
/// host that gathers its inputs up front.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FixedSource {
    bodies: HashMap<u32, BodyConfig>,
}

impl FixedSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insertion.
    pub fn with_body(mut self, id: BodyId, config: BodyConfig) -> Self {
        self.bodies.insert(id.0, config);
        self
    }

    pub fn set_body(&mut self, id: BodyId, config: BodyConfig) {
        self.bodies.insert(id.0, config);
    }
}

impl ParameterSource for FixedSource {
    fn read_body(&self, id: BodyId) -> Result<BodyConfig> {
        self.bodies
            .get(&id.0)
            .copied()
            .ok_or(Error::UnknownBody(id.0))
    }
}
