//! # FFPE - Force Field Particle Engine
//!
//! Continuously animated, pointer-reactive 2D particle fields.
//!
//! A small pool of particles drifts across the surface, pulled by roaming
//! attractors, pushed or grabbed by the pointer, and stirred by ambient
//! drift. Nearby particles are joined by distance-faded connection lines,
//! and clicks can spawn expanding ripple rings. Two presets cover the
//! classic variants:
//!
//! - [`Simulation::fluid`]: 80 small fast particles on a wrapping surface.
//!   The idle pointer repels; holding the button scoops particles in.
//! - [`Simulation::ripple`]: 25 large slow triangles on a reflecting
//!   surface, weak attraction everywhere, clicks spawn rings.
//!
//! ## Quick Start
//!
//! ```ignore
//! use ffpe::prelude::*;
//!
//! fn main() -> Result<(), SimulationError> {
//!     Simulation::fluid()
//!         .with_title("fluid field")
//!         .with_particle_count(120)
//!         .run()
//! }
//! ```
//!
//! ## Core Concepts
//!
//! ### Engine
//!
//! [`Engine`] owns the particle, attractor and ripple pools and advances
//! them one fixed tick at a time. It knows nothing about windows or GPUs;
//! feed it [`PointerEvent`]s and read the pools back out. Headless use:
//!
//! ```ignore
//! let mut engine = Simulation::ripple().with_seed(7).build(800.0, 600.0)?;
//! engine.handle_pointer(PointerEvent::Clicked(Vec2::new(400.0, 300.0)));
//! engine.tick();
//! assert_eq!(engine.ripples().len(), 1);
//! ```
//!
//! ### Field configuration
//!
//! [`FieldConfig`] describes the forces: damping, boundary behavior, the
//! attractor pool, pointer rules, pairwise repulsion, ambient drift, ripple
//! lifecycle and the click boost. Start from a preset and adjust fields
//! directly or through [`Simulation::with_field`].
//!
//! ### Visuals
//!
//! [`VisualConfig`] describes how the field is drawn: background wash (and
//! trails, via a translucent wash), particle style, connection palette,
//! ripple gradient. Frames are described through the [`Canvas`] trait, so
//! the same drawing code feeds the wgpu window backend and plain test
//! recorders.

mod canvas;
mod config;
mod connections;
mod engine;
mod entity;
mod error;
mod forces;
mod gpu;
mod input;
mod math;
mod render;
mod simulation;
pub mod time;
mod visuals;
mod window;

pub use canvas::{Canvas, RadialGradient, Rgba};
pub use config::{
    AttractorConfig, Boundary, ClickBoost, DriftConfig, FieldConfig, PointerConfig, PointerMode,
    PointerRule, RepulsionConfig, RippleConfig,
};
pub use connections::connection_edges;
pub use engine::Engine;
pub use entity::{Attractor, ConnectionEdge, Particle, Ripple};
pub use error::{EngineError, GpuError, SimulationError};
pub use glam::Vec2;
pub use input::{PointerEvent, PointerState};
pub use render::{draw_background, draw_connections, draw_frame, draw_particles, draw_ripples};
pub use simulation::Simulation;
pub use visuals::{ConnectionStyle, ParticleStyle, RippleStyle, VisualConfig};

/// Convenient re-exports for common usage.
///
/// # Usage
///
/// ```ignore
/// use ffpe::prelude::*;
/// ```
///
/// This imports:
/// - [`Simulation`] - the simulation builder
/// - [`Engine`] and [`PointerEvent`] - headless driving
/// - [`FieldConfig`] and [`VisualConfig`] - the two configuration surfaces
/// - [`Canvas`], [`Rgba`] - the drawing seam
/// - [`Vec2`] - glam vector type used throughout
pub mod prelude {
    pub use crate::canvas::{Canvas, RadialGradient, Rgba};
    pub use crate::config::{
        AttractorConfig, Boundary, ClickBoost, DriftConfig, FieldConfig, PointerConfig,
        PointerMode, PointerRule, RepulsionConfig, RippleConfig,
    };
    pub use crate::engine::Engine;
    pub use crate::entity::{Attractor, ConnectionEdge, Particle, Ripple};
    pub use crate::error::{EngineError, GpuError, SimulationError};
    pub use crate::input::{PointerEvent, PointerState};
    pub use crate::simulation::Simulation;
    pub use crate::time::Time;
    pub use crate::visuals::{ConnectionStyle, ParticleStyle, RippleStyle, VisualConfig};
    pub use crate::Vec2;
}
