use nalgebra::{Point2, Vector2};
use std::f64::consts::PI;

/// Divisor applied to the circle area when deriving mass from radius.
pub const MASS_SCALE: f64 = 50_000.0;

/// Derives body mass from its radius: `π · r² / 50000`.
///
/// This is the only place the formula lives; `Body::new` and
/// `Body::set_radius` both go through it so mass can never drift out of
/// sync with radius.
pub fn mass_for_radius(radius: f64) -> f64 {
    PI * radius * radius / MASS_SCALE
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BodyId(pub u32);

/// A point-mass circle. Mass is always derived from radius; `color` is an
/// opaque rendering label with no physical effect.
#[derive(Debug, Clone, PartialEq)]
pub struct Body {
    pub id: BodyId,
    pub position: Point2<f64>,
    pub velocity: Vector2<f64>,
    pub radius: f64,
    pub mass: f64,
    pub color: String,
}

impl Body {
    /// Creates a body with mass computed from `radius`.
    ///
    /// The caller is responsible for `radius > 0`; the configuration
    /// boundary in `gravity2d-sim` enforces it.
    pub fn new(
        id: BodyId,
        position: Point2<f64>,
        radius: f64,
        color: impl Into<String>,
        velocity: Vector2<f64>,
    ) -> Self {
        Self {
            id,
            position,
            velocity,
            radius,
            mass: mass_for_radius(radius),
            color: color.into(),
        }
    }

    /// Replaces the radius and recomputes mass to match.
    pub fn set_radius(&mut self, radius: f64) {
        self.radius = radius;
        self.mass = mass_for_radius(radius);
    }

    pub fn momentum(&self) -> Vector2<f64> {
        self.velocity * self.mass
    }

    pub fn kinetic_energy(&self) -> f64 {
        0.5 * self.mass * self.velocity.magnitude_squared()
    }

    pub fn distance_to(&self, other: &Body) -> f64 {
        (self.position - other.position).magnitude()
    }
}
