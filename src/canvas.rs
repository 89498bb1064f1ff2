//! Drawing surface abstraction.
//!
//! The renderer describes a frame as calls against the [`Canvas`] trait and
//! never touches the GPU directly. The windowed backend implements `Canvas`
//! by tessellating each call into triangles; tests implement it with a
//! recording stub to assert on draw order and colors.
//!
//! Colors are straight (non-premultiplied) RGBA with components in 0..=1.

use glam::Vec2;

/// A straight-alpha RGBA color.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgba {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Rgba {
    pub const TRANSPARENT: Rgba = Rgba::new(0.0, 0.0, 0.0, 0.0);
    pub const WHITE: Rgba = Rgba::new(1.0, 1.0, 1.0, 1.0);
    pub const BLACK: Rgba = Rgba::new(0.0, 0.0, 0.0, 1.0);

    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Opaque color from 8-bit channel values.
    pub fn rgb8(r: u8, g: u8, b: u8) -> Self {
        Self::new(
            r as f32 / 255.0,
            g as f32 / 255.0,
            b as f32 / 255.0,
            1.0,
        )
    }

    /// Opaque color from a `0xRRGGBB` literal.
    pub fn from_hex(hex: u32) -> Self {
        Self::rgb8((hex >> 16) as u8, (hex >> 8) as u8, hex as u8)
    }

    /// The same color with a different alpha.
    pub fn with_alpha(self, a: f32) -> Self {
        Self { a, ..self }
    }

    /// Componentwise linear interpolation. `t` is not clamped.
    pub fn lerp(self, other: Rgba, t: f32) -> Self {
        Self::new(
            self.r + (other.r - self.r) * t,
            self.g + (other.g - self.g) * t,
            self.b + (other.b - self.b) * t,
            self.a + (other.a - self.a) * t,
        )
    }

    pub fn to_array(self) -> [f32; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

/// A two-stop radial gradient.
///
/// Everything inside `start_radius` is the solid `inner` color, everything
/// past `end_radius` is `outer`, and the band between blends linearly. The
/// gradient radii are independent of the radius of the circle being filled,
/// so a fill can stop partway through the ramp.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RadialGradient {
    pub start_radius: f32,
    pub end_radius: f32,
    pub inner: Rgba,
    pub outer: Rgba,
}

impl RadialGradient {
    pub fn new(start_radius: f32, end_radius: f32, inner: Rgba, outer: Rgba) -> Self {
        Self {
            start_radius,
            end_radius,
            inner,
            outer,
        }
    }

    /// Color of the gradient at `dist` from its center.
    pub fn color_at(&self, dist: f32) -> Rgba {
        if dist <= self.start_radius {
            return self.inner;
        }
        if dist >= self.end_radius {
            return self.outer;
        }
        let span = self.end_radius - self.start_radius;
        if span <= f32::EPSILON {
            return self.outer;
        }
        self.inner.lerp(self.outer, (dist - self.start_radius) / span)
    }
}

/// A surface the renderer can draw a frame onto.
///
/// Calls paint in order with straight-alpha blending, matching what an
/// immediate-mode 2D context would do. Coordinates are in pixels with the
/// origin at the top left.
pub trait Canvas {
    /// Surface size in pixels.
    fn size(&self) -> Vec2;

    /// Fill an axis-aligned rectangle.
    fn fill_rect(&mut self, min: Vec2, size: Vec2, color: Rgba);

    /// Stroke a line segment of the given width.
    fn stroke_line(&mut self, from: Vec2, to: Vec2, width: f32, color: Rgba);

    /// Fill a circle, colored by a radial gradient centered on it.
    fn fill_gradient_circle(&mut self, center: Vec2, radius: f32, gradient: &RadialGradient);

    /// Fill a convex polygon given its vertices in order.
    fn fill_polygon(&mut self, points: &[Vec2], color: Rgba);

    /// Fill a solid circle. Provided in terms of the gradient fill; backends
    /// with a cheaper solid path can override it.
    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Rgba) {
        self.fill_gradient_circle(center, radius, &RadialGradient::new(0.0, radius, color, color));
    }
}
