//! Output boundary: per-frame snapshots and the `Renderer` trait.
//!
//! The driver never draws anything itself; it hands plain-data snapshots
//! to whatever `Renderer` the host supplies.

use gravity2d::{Body, SystemState};
use serde::{Deserialize, Serialize};

/// Ticks of travel the direction hint extrapolates ahead of a body.
pub const DIRECTION_HINT_SCALE: f64 = 20.0;

/// Read-only view of one body, shaped for display and serialization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BodySnapshot {
    pub id: u32,
    pub position: [f64; 2],
    pub velocity: [f64; 2],
    pub radius: f64,
    pub color: String,
    /// Endpoint of a short heading indicator: position + velocity · 20.
    pub direction_hint: [f64; 2],
}

impl From<&Body> for BodySnapshot {
    fn from(body: &Body) -> Self {
        let hint = body.position + body.velocity * DIRECTION_HINT_SCALE;
        Self {
            id: body.id.0,
            position: [body.position.x, body.position.y],
            velocity: [body.velocity.x, body.velocity.y],
            radius: body.radius,
            color: body.color.clone(),
            direction_hint: [hint.x, hint.y],
        }
    }
}

/// Receives one frame's worth of draw calls.
pub trait Renderer {
    /// Wipe the previous frame.
    fn clear(&mut self);

    /// Draw one body. Called once per body, in collection order.
    fn draw_body(&mut self, body: &BodySnapshot);
}

/// Clears the renderer and redraws every body in collection order.
pub fn render_frame(renderer: &mut dyn Renderer, state: &SystemState) {
    renderer.clear();
    for body in &state.bodies {
        renderer.draw_body(&BodySnapshot::from(body));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::{Point2, Vector2};

    use gravity2d::SystemState;

    /// Records the call sequence for assertion.
    #[derive(Default)]
    struct RecordingRenderer {
        calls: Vec<String>,
    }

    impl Renderer for RecordingRenderer {
        fn clear(&mut self) {
            self.calls.push("clear".to_string());
        }

        fn draw_body(&mut self, body: &BodySnapshot) {
            self.calls.push(format!("draw {}", body.color));
        }
    }

    #[test]
    fn direction_hint_extrapolates_velocity() {
        let mut state = SystemState::new();
        let id = state.add_body(Point2::new(1.0, 2.0), 1.0, "red", Vector2::new(0.5, -0.25));
        let body = state.get_body(id).unwrap();

        let snapshot = BodySnapshot::from(body);

        assert_eq!(snapshot.direction_hint, [1.0 + 0.5 * 20.0, 2.0 - 0.25 * 20.0]);
    }

    #[test]
    fn frame_clears_then_draws_in_order() {
        let mut state = SystemState::new();
        state.add_body(Point2::new(0.0, 0.0), 1.0, "red", Vector2::zeros());
        state.add_body(Point2::new(5.0, 0.0), 1.0, "green", Vector2::zeros());
        state.add_body(Point2::new(0.0, 5.0), 1.0, "blue", Vector2::zeros());

        let mut renderer = RecordingRenderer::default();
        render_frame(&mut renderer, &state);

        assert_eq!(renderer.calls, ["clear", "draw red", "draw green", "draw blue"]);
    }

    #[test]
    fn snapshot_serializes_with_camel_case_keys() {
        let mut state = SystemState::new();
        let id = state.add_body(Point2::new(3.0, 4.0), 2.0, "red", Vector2::zeros());

        let json = serde_json::to_string(&BodySnapshot::from(state.get_body(id).unwrap()))
            .expect("serializable");

        assert!(json.contains("\"directionHint\""));
        assert!(json.contains("\"position\""));
    }
}
