//! Three-body run with a tick observer
//!
//! A red/green/blue triple with unequal radii, driven until collision or
//! the tick budget, logging momentum drift along the way.
//!
//! Run with: cargo run --package gravity2d-sim --example three_body

use gravity2d::{BodyId, CollisionPair, SystemState};
use gravity2d_sim::{
    run, BodyConfig, BodySnapshot, CancelToken, FixedSource, Observer, Pacing, Renderer,
    Simulation,
};

struct SilentRenderer;

impl Renderer for SilentRenderer {
    fn clear(&mut self) {}
    fn draw_body(&mut self, _body: &BodySnapshot) {}
}

/// Logs diagnostics every few hundred ticks and the collision when it lands.
#[derive(Default)]
struct DiagnosticObserver {
    ticks: u64,
}

impl Observer for DiagnosticObserver {
    fn on_tick(&mut self, state: &SystemState) {
        self.ticks += 1;
        if self.ticks % 200 == 0 {
            let p = state.total_momentum();
            println!(
                "  tick {:>5}  KE={:.4e}  |p|={:.3e}",
                self.ticks,
                state.kinetic_energy(),
                p.magnitude()
            );
        }
    }

    fn on_collision(&mut self, pair: &CollisionPair) {
        println!(
            "\nCollision at tick {}: bodies {} and {} (separation {:.4e} < threshold {:.4e})",
            self.ticks, pair.a.0, pair.b.0, pair.separation, pair.threshold
        );
    }
}

fn main() {
    println!("Three-Body Run\n");
    println!("{}", "=".repeat(60));

    let source = FixedSource::new()
        .with_body(
            BodyId(0),
            BodyConfig {
                position: [0.0, 0.0],
                radius: 2.0,
                velocity: [0.0, 0.0],
            },
        )
        .with_body(
            BodyId(1),
            BodyConfig {
                position: [12.0, 0.0],
                radius: 1.0,
                velocity: [0.0, 0.02],
            },
        )
        .with_body(
            BodyId(2),
            BodyConfig {
                position: [6.0, 9.0],
                radius: 1.5,
                velocity: [-0.01, 0.0],
            },
        );

    let mut sim = Simulation::from_source(&source, &["red", "green", "blue"]).expect("valid source");

    println!("Initial bodies:");
    for body in sim.snapshot() {
        println!(
            "  {:<6} r={:<4} at ({:>5.1}, {:>5.1}) v=({:>6.3}, {:>6.3})",
            body.color,
            body.radius,
            body.position[0],
            body.position[1],
            body.velocity[0],
            body.velocity[1]
        );
    }
    println!();

    sim.start();
    let mut observer = DiagnosticObserver::default();
    let summary = run(
        &mut sim,
        &mut SilentRenderer,
        &mut observer,
        &CancelToken::new(),
        Pacing::Unpaced,
        Some(20_000),
    );

    println!("\n{}", "=".repeat(60));
    println!("Ticks: {}, halted: {}", summary.ticks, summary.halted);

    println!("\nFinal positions:");
    for body in sim.snapshot() {
        println!(
            "  {:<6} at ({:>9.4}, {:>9.4})",
            body.color, body.position[0], body.position[1]
        );
    }

    // Demonstrate reset: everything returns to the source values
    sim.reset(&source).expect("source still valid");
    println!("\nAfter reset:");
    for body in sim.snapshot() {
        println!(
            "  {:<6} at ({:>5.1}, {:>5.1}), running={}",
            body.color,
            body.position[0],
            body.position[1],
            sim.is_running()
        );
    }
}
