//! Two resting bodies drifting together until the proximity halt
//!
//! Demonstrates the full lifecycle: build from a `ParameterSource`,
//! start, run unpaced to completion, inspect the collision.
//!
//! Run with: cargo run --package gravity2d-sim --example two_body_collision

use gravity2d::BodyId;
use gravity2d_sim::{
    run, BodyConfig, BodySnapshot, CancelToken, FixedSource, NullObserver, Pacing, Renderer,
    Simulation,
};

/// Prints one line per body instead of drawing.
struct ConsoleRenderer {
    frame: u64,
    every: u64,
}

impl Renderer for ConsoleRenderer {
    fn clear(&mut self) {
        self.frame += 1;
    }

    fn draw_body(&mut self, body: &BodySnapshot) {
        if self.frame % self.every == 0 {
            println!(
                "  tick {:>5}  {:<6} x={:>9.5} vx={:>10.3e}",
                self.frame, body.color, body.position[0], body.velocity[0]
            );
        }
    }
}

fn main() {
    println!("Two-Body Drift and Collision\n");
    println!("{}", "=".repeat(60));

    let source = FixedSource::new()
        .with_body(
            BodyId(0),
            BodyConfig {
                position: [0.0, 0.0],
                radius: 1.0,
                velocity: [0.0, 0.0],
            },
        )
        .with_body(
            BodyId(1),
            BodyConfig {
                position: [2.0, 0.0],
                radius: 1.0,
                velocity: [0.0, 0.0],
            },
        );

    let mut sim = Simulation::from_source(&source, &["red", "green"]).expect("valid source");
    println!("Bodies: 2, radii 1.0, centers 2.0 apart, at rest");
    println!("Collision threshold: {:.3}\n", (1.0 + 1.0) * 0.045);

    sim.start();
    let mut renderer = ConsoleRenderer { frame: 0, every: 25 };
    let summary = run(
        &mut sim,
        &mut renderer,
        &mut NullObserver,
        &CancelToken::new(),
        Pacing::Unpaced,
        Some(100_000),
    );

    println!("\n{}", "=".repeat(60));
    println!("Run summary:");
    println!("  Ticks: {}", summary.ticks);
    println!("  Halted on collision: {}", summary.halted);
    println!("  Running flag: {}", sim.is_running());

    println!("\nFinal state:");
    for body in sim.snapshot() {
        println!(
            "  {:<6} x={:.6} y={:.6} |v|={:.4e}",
            body.color,
            body.position[0],
            body.position[1],
            (body.velocity[0].powi(2) + body.velocity[1].powi(2)).sqrt()
        );
    }

    if summary.halted {
        println!("\n✓ Pair drifted together and halted");
    } else {
        println!("\n✗ No collision within the tick budget");
    }
}
