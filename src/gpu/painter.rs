//! CPU tessellation of canvas draw calls.
//!
//! [`Painter`] implements [`Canvas`] by turning each call into triangles in
//! pixel coordinates. The window backend uploads the resulting vertex and
//! index lists once per frame; [`GEOMETRY_SHADER`] maps pixel positions to
//! clip space and passes vertex colors straight through.

use bytemuck::{Pod, Zeroable};
use glam::Vec2;
use std::f32::consts::TAU;

use crate::canvas::{Canvas, RadialGradient, Rgba};

/// Shader for tessellated geometry. Binds the surface size as a uniform to
/// map pixel coordinates (origin top left, y down) into clip space.
pub const GEOMETRY_SHADER: &str = r#"
struct Globals {
    surface_size: vec2<f32>,
    _pad: vec2<f32>,
};

@group(0) @binding(0)
var<uniform> globals: Globals;

struct VertexInput {
    @location(0) position: vec2<f32>,
    @location(1) color: vec4<f32>,
};

struct VertexOutput {
    @builtin(position) clip_position: vec4<f32>,
    @location(0) color: vec4<f32>,
};

@vertex
fn vs_main(in: VertexInput) -> VertexOutput {
    var out: VertexOutput;
    let ndc = vec2<f32>(
        in.position.x / globals.surface_size.x * 2.0 - 1.0,
        1.0 - in.position.y / globals.surface_size.y * 2.0,
    );
    out.clip_position = vec4<f32>(ndc, 0.0, 1.0);
    out.color = in.color;
    return out;
}

@fragment
fn fs_main(in: VertexOutput) -> @location(0) vec4<f32> {
    return in.color;
}
"#;

/// One tessellated vertex: pixel position plus straight-alpha color.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 2],
    pub color: [f32; 4],
}

/// Segment count for a circle of the given radius.
///
/// Grows with radius so large ripples stay round without spending triangles
/// on small discs.
fn circle_segments(radius: f32) -> u32 {
    (radius * 0.75).ceil().clamp(16.0, 96.0) as u32
}

/// Accumulates one frame of geometry.
pub struct Painter {
    size: Vec2,
    vertices: Vec<Vertex>,
    indices: Vec<u32>,
}

impl Painter {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            size: Vec2::new(width, height),
            vertices: Vec::new(),
            indices: Vec::new(),
        }
    }

    /// Drop the accumulated geometry, keeping allocations for the next frame.
    pub fn clear(&mut self) {
        self.vertices.clear();
        self.indices.clear();
    }

    pub fn set_size(&mut self, width: f32, height: f32) {
        self.size = Vec2::new(width, height);
    }

    #[inline]
    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    #[inline]
    pub fn indices(&self) -> &[u32] {
        &self.indices
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    fn push_vertex(&mut self, position: Vec2, color: Rgba) -> u32 {
        let index = self.vertices.len() as u32;
        self.vertices.push(Vertex {
            position: position.to_array(),
            color: color.to_array(),
        });
        index
    }

    fn push_ring(&mut self, center: Vec2, radius: f32, segments: u32, color: Rgba) -> u32 {
        let start = self.vertices.len() as u32;
        for s in 0..segments {
            let angle = s as f32 / segments as f32 * TAU;
            let offset = Vec2::new(angle.cos(), angle.sin()) * radius;
            self.push_vertex(center + offset, color);
        }
        start
    }
}

impl Canvas for Painter {
    fn size(&self) -> Vec2 {
        self.size
    }

    fn fill_rect(&mut self, min: Vec2, size: Vec2, color: Rgba) {
        let i = self.push_vertex(min, color);
        self.push_vertex(min + Vec2::new(size.x, 0.0), color);
        self.push_vertex(min + size, color);
        self.push_vertex(min + Vec2::new(0.0, size.y), color);
        self.indices
            .extend_from_slice(&[i, i + 1, i + 2, i, i + 2, i + 3]);
    }

    fn stroke_line(&mut self, from: Vec2, to: Vec2, width: f32, color: Rgba) {
        let delta = to - from;
        let length = delta.length();
        if length <= 0.0 || width <= 0.0 {
            return;
        }
        let dir = delta / length;
        let normal = Vec2::new(-dir.y, dir.x) * (width * 0.5);

        let i = self.push_vertex(from + normal, color);
        self.push_vertex(to + normal, color);
        self.push_vertex(to - normal, color);
        self.push_vertex(from - normal, color);
        self.indices
            .extend_from_slice(&[i, i + 1, i + 2, i, i + 2, i + 3]);
    }

    fn fill_gradient_circle(&mut self, center: Vec2, radius: f32, gradient: &RadialGradient) {
        if radius <= 0.0 {
            return;
        }
        let segments = circle_segments(radius);

        // Rings at every radius where the color ramp changes slope, clipped
        // to the disc. Between consecutive rings the color is linear in the
        // distance from the center, so flat-interpolated triangles match the
        // ramp exactly.
        let mut radii: Vec<f32> = Vec::with_capacity(3);
        for r in [
            gradient.start_radius.min(radius),
            gradient.end_radius.min(radius),
            radius,
        ] {
            if r > 0.0 && radii.last().map_or(true, |&last| r > last) {
                radii.push(r);
            }
        }

        let center_index = self.push_vertex(center, gradient.color_at(0.0));

        let mut prev_ring = 0u32;
        for (ring, &r) in radii.iter().enumerate() {
            let ring_start = self.push_ring(center, r, segments, gradient.color_at(r));
            for s in 0..segments {
                let next = (s + 1) % segments;
                if ring == 0 {
                    self.indices.extend_from_slice(&[
                        center_index,
                        ring_start + s,
                        ring_start + next,
                    ]);
                } else {
                    self.indices.extend_from_slice(&[
                        prev_ring + s,
                        ring_start + s,
                        ring_start + next,
                        prev_ring + s,
                        ring_start + next,
                        prev_ring + next,
                    ]);
                }
            }
            prev_ring = ring_start;
        }
    }

    fn fill_polygon(&mut self, points: &[Vec2], color: Rgba) {
        if points.len() < 3 {
            return;
        }
        let first = self.push_vertex(points[0], color);
        for point in &points[1..] {
            self.push_vertex(*point, color);
        }
        for k in 1..points.len() as u32 - 1 {
            self.indices
                .extend_from_slice(&[first, first + k, first + k + 1]);
        }
    }
}
