//! # Fluid Field
//!
//! The dense wrapping variant: 80 small fast particles over a bone-white
//! wash, orange-to-pink discs webbed by proximity lines. The idle pointer
//! pushes particles away; holding the left button scoops them in.
//!
//! ## Try This
//!
//! - Sweep the pointer through a cluster, then press and hold to gather it
//! - `.with_visuals(|v| v.trail_fade(0.1))` for long motion trails
//!
//! Run with: `cargo run --example fluid`

use ffpe::prelude::*;

fn main() -> Result<(), SimulationError> {
    Simulation::fluid().with_title("Fluid Field").run()
}
