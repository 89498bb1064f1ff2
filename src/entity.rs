//! Entities managed by the engine.
//!
//! Particles and attractors live in fixed pools created at setup; ripples are
//! the only entities created and destroyed at runtime. None of these know how
//! to draw themselves; rendering reads them through [`crate::Engine`]
//! accessors each frame.

use glam::Vec2;

/// A visible particle driven by the force field.
#[derive(Debug, Clone, Copy)]
pub struct Particle {
    /// Position in surface pixels.
    pub position: Vec2,
    /// Velocity in pixels per tick.
    pub velocity: Vec2,
    /// Base radius in pixels, fixed at spawn.
    pub radius: f32,
    /// Orientation in radians, fixed at spawn. Only oriented shapes use it.
    pub rotation: f32,
}

/// An invisible roaming force source.
///
/// Attractors integrate their own velocity each tick and reflect off the
/// surface edges with a small random kick, so the pull pattern keeps
/// drifting instead of settling.
#[derive(Debug, Clone, Copy)]
pub struct Attractor {
    /// Position in surface pixels.
    pub position: Vec2,
    /// Velocity in pixels per tick.
    pub velocity: Vec2,
}

/// An expanding, fading ring spawned by a pointer click.
///
/// Purely visual: ripples exert no force. Each tick the radius grows by a
/// fixed step and the alpha drops by a fixed step; the engine discards a
/// ripple on the tick its alpha reaches zero.
#[derive(Debug, Clone, Copy)]
pub struct Ripple {
    /// Center of the ring, fixed at the click position.
    pub origin: Vec2,
    /// Current outer radius in pixels.
    pub radius: f32,
    /// Current opacity in [0, 1].
    pub alpha: f32,
}

impl Ripple {
    /// A fresh ripple at `origin`: zero radius, full opacity.
    pub fn new(origin: Vec2) -> Self {
        Self {
            origin,
            radius: 0.0,
            alpha: 1.0,
        }
    }
}

/// A proximity edge between two particles, recomputed every frame.
///
/// `a` and `b` index into the engine's particle pool. Edges are never stored
/// across frames; the renderer consumes them immediately.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConnectionEdge {
    /// Index of the first endpoint (always the lower index).
    pub a: usize,
    /// Index of the second endpoint.
    pub b: usize,
    /// Opacity in (0, 1]: 1 at zero distance, falling to 0 at the threshold.
    pub alpha: f32,
}
