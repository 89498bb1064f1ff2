//! Visual configuration for field rendering.
//!
//! This module provides rendering options that control how particles,
//! connections, and ripples appear, separate from the field config that
//! controls how they move.
//!
//! # Usage
//!
//! ```ignore
//! Simulation::fluid()
//!     .with_visuals(|v| {
//!         v.background(Rgba::from_hex(0x10101a));
//!         v.trail_fade(0.2);
//!     })
//!     .run();
//! ```

use crate::canvas::Rgba;

/// How each particle is drawn.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ParticleStyle {
    /// A filled disc colored by a radial gradient.
    ///
    /// The disc is drawn at `draw_scale` times the particle radius while the
    /// gradient ramp extends to `gradient_scale` times the radius, so the rim
    /// color is only partially reached at the edge of the disc.
    SoftDisc {
        core: Rgba,
        rim: Rgba,
        draw_scale: f32,
        gradient_scale: f32,
    },

    /// An isosceles triangle rotated to the particle's orientation.
    ///
    /// The particle radius is the triangle's half-size: apex at
    /// `(0, -radius)`, base corners at `(+-radius, radius)`.
    Oriented { fill: Rgba },
}

/// How connection lines between nearby particles are drawn.
#[derive(Debug, Clone, PartialEq)]
pub struct ConnectionStyle {
    /// Line colors, cycled by the lower endpoint's index.
    pub colors: Vec<Rgba>,
    /// Line width in pixels.
    pub width: f32,
    /// Multiplier applied to each edge's proximity alpha.
    pub alpha_scale: f32,
}

/// How expanding click ripples are drawn.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RippleStyle {
    /// Color at the inner edge of the ring; its alpha is replaced by the
    /// ripple's remaining alpha each frame.
    pub core: Rgba,
    /// Color faded to at the ring's rim, usually fully transparent.
    pub rim: Rgba,
    /// Where the solid core ends, as a fraction of the ripple radius.
    pub inner_radius_ratio: f32,
}

/// Configuration for field visuals.
///
/// Built using the closure passed to [`Simulation::with_visuals`].
#[derive(Debug, Clone, PartialEq)]
pub struct VisualConfig {
    /// Per-frame background wash. An alpha below 1.0 lets previous frames
    /// show through, leaving motion trails.
    pub background: Rgba,
    /// Particle shape and coloring.
    pub particle_style: ParticleStyle,
    /// Whether to draw connection lines at all.
    pub connections_enabled: bool,
    /// Connection line styling.
    pub connections: ConnectionStyle,
    /// Click ripple styling.
    pub ripples: RippleStyle,
}

impl Default for VisualConfig {
    fn default() -> Self {
        Self::fluid()
    }
}

impl VisualConfig {
    /// Warm palette: orange-to-pink gradient discs over a bone-white wash.
    pub fn fluid() -> Self {
        Self {
            background: Rgba::from_hex(0xdfdad3), // Bone white
            particle_style: ParticleStyle::SoftDisc {
                core: Rgba::rgb8(255, 140, 0),                  // Orange
                rim: Rgba::rgb8(255, 105, 180).with_alpha(0.8), // Hot pink
                draw_scale: 1.8,
                gradient_scale: 2.5,
            },
            connections_enabled: true,
            connections: ConnectionStyle {
                colors: vec![Rgba::rgb8(255, 140, 0), Rgba::rgb8(255, 105, 180)],
                width: 2.5,
                alpha_scale: 0.8,
            },
            ripples: Self::default_ripple_style(),
        }
    }

    /// Cool palette: translucent blue triangles over the same wash.
    pub fn ripple() -> Self {
        Self {
            background: Rgba::from_hex(0xdfdad3),
            particle_style: ParticleStyle::Oriented {
                fill: Rgba::rgb8(74, 144, 226).with_alpha(0.4), // Blue
            },
            connections_enabled: true,
            connections: ConnectionStyle {
                colors: vec![Rgba::rgb8(255, 69, 0)], // Orange-red
                width: 2.0,
                alpha_scale: 0.4,
            },
            ripples: Self::default_ripple_style(),
        }
    }

    fn default_ripple_style() -> RippleStyle {
        RippleStyle {
            core: Rgba::rgb8(255, 69, 0),
            rim: Rgba::rgb8(255, 105, 180).with_alpha(0.0),
            inner_radius_ratio: 1.0 / 3.0,
        }
    }

    /// Set the background wash color.
    pub fn background(&mut self, color: Rgba) -> &mut Self {
        self.background = color;
        self
    }

    /// Set the background wash alpha.
    ///
    /// 1.0 clears the frame completely; lower values leave motion trails,
    /// fading older frames out more slowly the closer to 0.0 this gets.
    pub fn trail_fade(&mut self, alpha: f32) -> &mut Self {
        self.background.a = alpha.clamp(0.0, 1.0);
        self
    }

    /// Set the particle style.
    pub fn particle_style(&mut self, style: ParticleStyle) -> &mut Self {
        self.particle_style = style;
        self
    }

    /// Enable or disable connection lines.
    pub fn connections_enabled(&mut self, enabled: bool) -> &mut Self {
        self.connections_enabled = enabled;
        self
    }

    /// Set the connection color cycle.
    ///
    /// A single color draws every line the same; more colors alternate by
    /// particle index.
    pub fn connection_colors(&mut self, colors: Vec<Rgba>) -> &mut Self {
        self.connections.colors = colors;
        self
    }

    /// Set the connection line width in pixels.
    pub fn connection_width(&mut self, width: f32) -> &mut Self {
        self.connections.width = width;
        self
    }

    /// Set the ripple style.
    pub fn ripple_style(&mut self, style: RippleStyle) -> &mut Self {
        self.ripples = style;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_presets_differ_in_shape_and_palette() {
        let fluid = VisualConfig::fluid();
        let ripple = VisualConfig::ripple();

        assert!(matches!(fluid.particle_style, ParticleStyle::SoftDisc { .. }));
        assert!(matches!(ripple.particle_style, ParticleStyle::Oriented { .. }));
        assert_eq!(fluid.connections.colors.len(), 2);
        assert_eq!(ripple.connections.colors.len(), 1);
        assert_eq!(fluid.background, ripple.background);
    }

    #[test]
    fn test_oriented_fill_is_translucent() {
        let ripple = VisualConfig::ripple();
        let ParticleStyle::Oriented { fill } = ripple.particle_style else {
            panic!("expected oriented style");
        };
        assert!((fill.a - 0.4).abs() < 1e-6);
    }

    #[test]
    fn test_trail_fade_clamps_and_keeps_color() {
        let mut v = VisualConfig::fluid();
        v.trail_fade(0.25);
        assert!((v.background.a - 0.25).abs() < 1e-6);
        assert!((v.background.r - 223.0 / 255.0).abs() < 1e-6);

        v.trail_fade(7.0);
        assert!((v.background.a - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_setters_chain() {
        let mut v = VisualConfig::ripple();
        v.background(Rgba::BLACK)
            .connections_enabled(false)
            .connection_width(1.0);
        assert_eq!(v.background, Rgba::BLACK);
        assert!(!v.connections_enabled);
        assert!((v.connections.width - 1.0).abs() < 1e-6);
    }
}
