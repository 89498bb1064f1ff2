//! Frame composition.
//!
//! Turns engine state into [`Canvas`] calls. Painting order is fixed:
//! background wash, then particles, then connection lines, then ripples.
//! With a translucent wash the previous frame bleeds through, which is what
//! produces motion trails.
//!
//! The helpers take plain slices so a frame can also be composed piecewise
//! from custom state.

use glam::Vec2;

use crate::canvas::{Canvas, RadialGradient};
use crate::engine::Engine;
use crate::entity::{ConnectionEdge, Particle, Ripple};
use crate::visuals::{ConnectionStyle, ParticleStyle, RippleStyle, VisualConfig};

/// Draw one complete frame of engine state.
pub fn draw_frame<C: Canvas>(canvas: &mut C, engine: &Engine, visuals: &VisualConfig) {
    draw_background(canvas, visuals);
    draw_particles(canvas, engine.particles(), &visuals.particle_style);
    if visuals.connections_enabled {
        let edges = engine.connections();
        draw_connections(canvas, engine.particles(), &edges, &visuals.connections);
    }
    draw_ripples(canvas, engine.ripples(), &visuals.ripples);
}

/// Wash the whole surface with the background color.
pub fn draw_background<C: Canvas>(canvas: &mut C, visuals: &VisualConfig) {
    let size = canvas.size();
    canvas.fill_rect(Vec2::ZERO, size, visuals.background);
}

/// Draw every particle in the given style.
pub fn draw_particles<C: Canvas>(canvas: &mut C, particles: &[Particle], style: &ParticleStyle) {
    match *style {
        ParticleStyle::SoftDisc {
            core,
            rim,
            draw_scale,
            gradient_scale,
        } => {
            for p in particles {
                let gradient = RadialGradient::new(0.0, p.radius * gradient_scale, core, rim);
                canvas.fill_gradient_circle(p.position, p.radius * draw_scale, &gradient);
            }
        }
        ParticleStyle::Oriented { fill } => {
            for p in particles {
                let h = p.radius;
                let rot = Vec2::from_angle(p.rotation);
                let points = [
                    p.position + rot.rotate(Vec2::new(0.0, -h)),
                    p.position + rot.rotate(Vec2::new(h, h)),
                    p.position + rot.rotate(Vec2::new(-h, h)),
                ];
                canvas.fill_polygon(&points, fill);
            }
        }
    }
}

/// Draw connection lines for the given edges.
///
/// Line color cycles through `style.colors` by the lower endpoint's index,
/// and the color's own alpha is scaled by the edge's proximity alpha.
pub fn draw_connections<C: Canvas>(
    canvas: &mut C,
    particles: &[Particle],
    edges: &[ConnectionEdge],
    style: &ConnectionStyle,
) {
    if style.colors.is_empty() {
        return;
    }
    for edge in edges {
        let base = style.colors[edge.a % style.colors.len()];
        let color = base.with_alpha(base.a * edge.alpha * style.alpha_scale);
        canvas.stroke_line(
            particles[edge.a].position,
            particles[edge.b].position,
            style.width,
            color,
        );
    }
}

/// Draw click ripples as expanding gradient rings.
pub fn draw_ripples<C: Canvas>(canvas: &mut C, ripples: &[Ripple], style: &RippleStyle) {
    for ripple in ripples {
        let inner = style.core.with_alpha(style.core.a * ripple.alpha);
        let gradient = RadialGradient::new(
            ripple.radius * style.inner_radius_ratio,
            ripple.radius,
            inner,
            style.rim,
        );
        canvas.fill_gradient_circle(ripple.origin, ripple.radius, &gradient);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canvas::Rgba;
    use crate::config::FieldConfig;
    use crate::input::PointerEvent;
    use std::f32::consts::FRAC_PI_2;

    #[derive(Debug, Clone, PartialEq)]
    enum Call {
        Rect {
            min: Vec2,
            size: Vec2,
            color: Rgba,
        },
        Line {
            from: Vec2,
            to: Vec2,
            width: f32,
            color: Rgba,
        },
        GradientCircle {
            center: Vec2,
            radius: f32,
            gradient: RadialGradient,
        },
        Polygon {
            points: Vec<Vec2>,
            color: Rgba,
        },
    }

    struct Recorder {
        size: Vec2,
        calls: Vec<Call>,
    }

    impl Recorder {
        fn new(width: f32, height: f32) -> Self {
            Self {
                size: Vec2::new(width, height),
                calls: Vec::new(),
            }
        }
    }

    impl Canvas for Recorder {
        fn size(&self) -> Vec2 {
            self.size
        }

        fn fill_rect(&mut self, min: Vec2, size: Vec2, color: Rgba) {
            self.calls.push(Call::Rect { min, size, color });
        }

        fn stroke_line(&mut self, from: Vec2, to: Vec2, width: f32, color: Rgba) {
            self.calls.push(Call::Line {
                from,
                to,
                width,
                color,
            });
        }

        fn fill_gradient_circle(&mut self, center: Vec2, radius: f32, gradient: &RadialGradient) {
            self.calls.push(Call::GradientCircle {
                center,
                radius,
                gradient: *gradient,
            });
        }

        fn fill_polygon(&mut self, points: &[Vec2], color: Rgba) {
            self.calls.push(Call::Polygon {
                points: points.to_vec(),
                color,
            });
        }
    }

    fn particle_at(x: f32, y: f32, radius: f32) -> Particle {
        Particle {
            position: Vec2::new(x, y),
            velocity: Vec2::ZERO,
            radius,
            rotation: 0.0,
        }
    }

    #[test]
    fn test_frame_starts_with_full_surface_wash() {
        let engine = Engine::with_seed(FieldConfig::fluid(), 640.0, 480.0, 3).unwrap();
        let visuals = VisualConfig::fluid();
        let mut canvas = Recorder::new(640.0, 480.0);

        draw_frame(&mut canvas, &engine, &visuals);

        assert_eq!(
            canvas.calls[0],
            Call::Rect {
                min: Vec2::ZERO,
                size: Vec2::new(640.0, 480.0),
                color: visuals.background,
            }
        );
    }

    #[test]
    fn test_soft_disc_scales_draw_and_gradient_radii() {
        let particles = [particle_at(100.0, 100.0, 6.0)];
        let style = ParticleStyle::SoftDisc {
            core: Rgba::rgb8(255, 140, 0),
            rim: Rgba::rgb8(255, 105, 180).with_alpha(0.8),
            draw_scale: 1.8,
            gradient_scale: 2.5,
        };
        let mut canvas = Recorder::new(200.0, 200.0);

        draw_particles(&mut canvas, &particles, &style);

        let Call::GradientCircle {
            center,
            radius,
            gradient,
        } = &canvas.calls[0]
        else {
            panic!("expected gradient circle, got {:?}", canvas.calls[0]);
        };
        assert_eq!(*center, Vec2::new(100.0, 100.0));
        assert!((radius - 6.0 * 1.8).abs() < 1e-6);
        assert!((gradient.end_radius - 6.0 * 2.5).abs() < 1e-6);
        assert_eq!(gradient.start_radius, 0.0);
    }

    #[test]
    fn test_oriented_triangle_rotates_around_particle() {
        let mut p = particle_at(50.0, 50.0, 10.0);
        let style = ParticleStyle::Oriented {
            fill: Rgba::rgb8(74, 144, 226).with_alpha(0.4),
        };

        let mut canvas = Recorder::new(100.0, 100.0);
        draw_particles(&mut canvas, &[p], &style);
        let Call::Polygon { points, .. } = &canvas.calls[0] else {
            panic!("expected polygon");
        };
        assert_eq!(points[0], Vec2::new(50.0, 40.0));
        assert_eq!(points[1], Vec2::new(60.0, 60.0));
        assert_eq!(points[2], Vec2::new(40.0, 60.0));

        // A quarter turn sends the apex from (0, -h) to (h, 0).
        p.rotation = FRAC_PI_2;
        let mut canvas = Recorder::new(100.0, 100.0);
        draw_particles(&mut canvas, &[p], &style);
        let Call::Polygon { points, .. } = &canvas.calls[0] else {
            panic!("expected polygon");
        };
        assert!((points[0] - Vec2::new(60.0, 50.0)).length() < 1e-4);
    }

    #[test]
    fn test_connection_colors_cycle_by_lower_endpoint() {
        let particles = [
            particle_at(0.0, 0.0, 5.0),
            particle_at(40.0, 0.0, 5.0),
            particle_at(80.0, 0.0, 5.0),
        ];
        let edges = [
            ConnectionEdge {
                a: 0,
                b: 1,
                alpha: 0.5,
            },
            ConnectionEdge {
                a: 1,
                b: 2,
                alpha: 0.5,
            },
        ];
        let style = ConnectionStyle {
            colors: vec![Rgba::rgb8(255, 140, 0), Rgba::rgb8(255, 105, 180)],
            width: 2.5,
            alpha_scale: 0.8,
        };
        let mut canvas = Recorder::new(100.0, 100.0);

        draw_connections(&mut canvas, &particles, &edges, &style);

        let Call::Line { width, color, .. } = canvas.calls[0] else {
            panic!("expected line");
        };
        assert!((width - 2.5).abs() < 1e-6);
        assert!((color.r - 1.0).abs() < 1e-6);
        assert!((color.g - 140.0 / 255.0).abs() < 1e-6);
        assert!((color.a - 0.5 * 0.8).abs() < 1e-6);

        let Call::Line { color, .. } = canvas.calls[1] else {
            panic!("expected line");
        };
        assert!((color.g - 105.0 / 255.0).abs() < 1e-6);
    }

    #[test]
    fn test_connections_can_be_disabled() {
        let mut config = FieldConfig::fluid();
        config.particle_count = 10;
        let engine = Engine::with_seed(config, 100.0, 100.0, 5).unwrap();
        let mut visuals = VisualConfig::fluid();
        visuals.connections_enabled(false);

        let mut canvas = Recorder::new(100.0, 100.0);
        draw_frame(&mut canvas, &engine, &visuals);

        assert!(!canvas
            .calls
            .iter()
            .any(|c| matches!(c, Call::Line { .. })));
    }

    #[test]
    fn test_ripple_ring_carries_remaining_alpha() {
        let ripples = [Ripple {
            origin: Vec2::new(30.0, 30.0),
            radius: 90.0,
            alpha: 0.25,
        }];
        let style = RippleStyle {
            core: Rgba::rgb8(255, 69, 0),
            rim: Rgba::rgb8(255, 105, 180).with_alpha(0.0),
            inner_radius_ratio: 1.0 / 3.0,
        };
        let mut canvas = Recorder::new(200.0, 200.0);

        draw_ripples(&mut canvas, &ripples, &style);

        let Call::GradientCircle {
            center,
            radius,
            gradient,
        } = &canvas.calls[0]
        else {
            panic!("expected gradient circle");
        };
        assert_eq!(*center, Vec2::new(30.0, 30.0));
        assert!((radius - 90.0).abs() < 1e-6);
        assert!((gradient.start_radius - 30.0).abs() < 1e-6);
        assert!((gradient.inner.a - 0.25).abs() < 1e-6);
        assert!((gradient.outer.a - 0.0).abs() < 1e-6);
    }

    #[test]
    fn test_frame_paints_wash_particles_lines_ripples_in_order() {
        let mut config = FieldConfig::ripple();
        config.particle_count = 2;
        let mut engine = Engine::with_seed(config, 400.0, 400.0, 9).unwrap();
        engine.handle_pointer(PointerEvent::Clicked(Vec2::new(200.0, 200.0)));
        engine.tick();
        assert_eq!(engine.ripples().len(), 1);

        let mut canvas = Recorder::new(400.0, 400.0);
        draw_frame(&mut canvas, &engine, &VisualConfig::ripple());

        let first_rect = canvas
            .calls
            .iter()
            .position(|c| matches!(c, Call::Rect { .. }));
        let first_polygon = canvas
            .calls
            .iter()
            .position(|c| matches!(c, Call::Polygon { .. }));
        let last_call = canvas.calls.len() - 1;

        assert_eq!(first_rect, Some(0));
        assert_eq!(first_polygon, Some(1));
        // The ripple ring is painted on top of everything else.
        assert!(matches!(
            canvas.calls[last_call],
            Call::GradientCircle { .. }
        ));
    }
}
