use crate::body::{Body, BodyId};
use nalgebra::{Point2, Vector2};

/// Complete body collection of a simulation.
///
/// The state is the exclusive owner of the flat, insertion-ordered body
/// list. Bodies never reference each other; pairwise interaction always
/// goes through the full slice, which keeps ownership acyclic.
#[derive(Debug, Clone, Default)]
pub struct SystemState {
    /// Bodies in insertion order. Order has no physical meaning but fixes
    /// pair enumeration and integration order.
    pub bodies: Vec<Body>,
    /// Next available body ID.
    next_id: u32,
}

impl SystemState {
    /// Creates an empty state.
    ///
    /// # Examples
    ///
    /// ```
    /// use gravity2d::state::SystemState;
    ///
    /// let state = SystemState::new();
    /// assert_eq!(state.body_count(), 0);
    /// ```
    pub fn new() -> Self {
        Self {
            bodies: Vec::new(),
            next_id: 0,
        }
    }

    /// Appends a body and returns its ID. Mass is derived from `radius`.
    pub fn add_body(
        &mut self,
        position: Point2<f64>,
        radius: f64,
        color: impl Into<String>,
        velocity: Vector2<f64>,
    ) -> BodyId {
        let id = BodyId(self.next_id);
        self.next_id += 1;
        self.bodies
            .push(Body::new(id, position, radius, color, velocity));
        id
    }

    pub fn get_body(&self, id: BodyId) -> Option<&Body> {
        self.bodies.iter().find(|b| b.id == id)
    }

    pub fn get_body_mut(&mut self, id: BodyId) -> Option<&mut Body> {
        self.bodies.iter_mut().find(|b| b.id == id)
    }

    pub fn body_count(&self) -> usize {
        self.bodies.len()
    }

    /// Total momentum of all bodies.
    ///
    /// The snapshot scheme conserves this over a tick (up to the zero-snap
    /// threshold), which makes it a useful drift diagnostic.
    pub fn total_momentum(&self) -> Vector2<f64> {
        self.bodies
            .iter()
            .map(|b| b.momentum())
            .fold(Vector2::zeros(), |acc, p| acc + p)
    }

    /// Total kinetic energy of all bodies.
    pub fn kinetic_energy(&self) -> f64 {
        self.bodies.iter().map(|b| b.kinetic_energy()).sum()
    }
}
