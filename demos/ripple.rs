//! # Ripple Field
//!
//! The sparse reflecting variant: 25 slow blue triangles, long-reach
//! orange-red connection lines, and click-spawned rings that expand and
//! fade out over about five hundred frames.
//!
//! ## Try This
//!
//! - Click in quick succession: each ring fades on its own clock
//! - `.with_field(|f| f.ripples = Some(RippleConfig { growth: 2.0, decay: 0.004 }))`
//!   for faster, shorter-lived rings
//!
//! Run with: `cargo run --example ripple`

use ffpe::prelude::*;

fn main() -> Result<(), SimulationError> {
    Simulation::ripple().with_title("Ripple Field").run()
}
