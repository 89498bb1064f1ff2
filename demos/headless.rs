//! # Headless Engine
//!
//! Drives the engine without a window: fixed seed, scripted pointer, stats
//! printed every hundred ticks. Doubles as a smoke test on machines with no
//! GPU at all.
//!
//! Run with: `cargo run --example headless`

use ffpe::prelude::*;

fn main() -> Result<(), EngineError> {
    let mut engine = Simulation::ripple().with_seed(7).build(800.0, 600.0)?;

    engine.handle_pointer(PointerEvent::Moved(Vec2::new(400.0, 300.0)));
    engine.handle_pointer(PointerEvent::Clicked(Vec2::new(400.0, 300.0)));

    for _ in 0..600 {
        engine.tick();
        if engine.ticks() % 100 == 0 {
            let mean_speed = engine
                .particles()
                .iter()
                .map(|p| p.velocity.length())
                .sum::<f32>()
                / engine.particles().len() as f32;
            println!(
                "tick {:>4}  ripples {}  connections {:>3}  mean speed {:.3}",
                engine.ticks(),
                engine.ripples().len(),
                engine.connections().len(),
                mean_speed
            );
        }
    }

    Ok(())
}
