//! CPU-side vertex data for the trail and body passes.
//!
//! Everything here works in logical canvas pixels (origin top-left, y down)
//! and emits normalized device coordinates for the shaders.

use bytemuck::{Pod, Zeroable};
use glam::Vec2;

use crate::simulation::types::Body;

/// Vertices emitted per trail segment (two triangles)
pub const VERTICES_PER_SEGMENT: usize = 6;

#[repr(C)]
#[derive(Debug, Default, Copy, Clone, PartialEq, Pod, Zeroable)]
pub struct TrailVertex {
    pub position: [f32; 2], // ndc
    pub color: [f32; 4],    // linear rgba
}

impl TrailVertex {
    const ATTRIBUTES: [wgpu::VertexAttribute; 2] =
        wgpu::vertex_attr_array![0 => Float32x2, 1 => Float32x4];

    pub fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<TrailVertex>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &Self::ATTRIBUTES,
        }
    }
}

/// One filled circle, expanded to a quad in the vertex shader
#[repr(C)]
#[derive(Debug, Default, Copy, Clone, PartialEq, Pod, Zeroable)]
pub struct BodyInstance {
    pub center: [f32; 2], // ndc
    pub radius: [f32; 2], // ndc extent on each axis
    pub color: [f32; 4],  // linear rgba
}

impl BodyInstance {
    const ATTRIBUTES: [wgpu::VertexAttribute; 3] =
        wgpu::vertex_attr_array![0 => Float32x2, 1 => Float32x2, 2 => Float32x4];

    pub fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<BodyInstance>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Instance,
            attributes: &Self::ATTRIBUTES,
        }
    }
}

/// Maps logical canvas pixels to normalized device coordinates
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Canvas {
    pub width: f32,
    pub height: f32,
}

impl Canvas {
    pub fn new((width, height): (u32, u32)) -> Self {
        Self {
            width: width as f32,
            height: height as f32,
        }
    }

    pub fn to_ndc(&self, point: Vec2) -> Vec2 {
        Vec2::new(
            point.x / self.width * 2.0 - 1.0,
            1.0 - point.y / self.height * 2.0,
        )
    }

    /// Converts a pixel length into ndc extents along x and y
    pub fn extent_to_ndc(&self, length: f32) -> Vec2 {
        Vec2::new(length / self.width * 2.0, length / self.height * 2.0)
    }
}

/// Corners of a `width`-wide stroke from `from` to `to`, in pixels.
///
/// Ends are squared off by half the width, so a zero-length segment still
/// covers a `width`×`width` square.
pub fn segment_quad(from: Vec2, to: Vec2, width: f32) -> [Vec2; 4] {
    let direction = (to - from).try_normalize().unwrap_or(Vec2::X);
    let half_width = width * 0.5;
    let along = direction * half_width;
    let across = direction.perp() * half_width;

    let start = from - along;
    let end = to + along;

    [start - across, end - across, end + across, start + across]
}

/// Two triangles per body covering this frame's trail segment
pub fn trail_vertices(bodies: &[Body], canvas: &Canvas, width: f32) -> Vec<TrailVertex> {
    let mut vertices = Vec::with_capacity(bodies.len() * VERTICES_PER_SEGMENT);

    for body in bodies {
        let color = body.color.linear_rgba();
        let corners = segment_quad(
            body.previous_position.as_vec2(),
            body.position.as_vec2(),
            width,
        )
        .map(|corner| canvas.to_ndc(corner));

        for index in [0, 1, 2, 0, 2, 3] {
            vertices.push(TrailVertex {
                position: corners[index].to_array(),
                color,
            });
        }
    }

    vertices
}

/// Circle instances at each body's current position, radius in window
/// units scaled up to the canvas
pub fn body_instances(bodies: &[Body], canvas: &Canvas, scale_factor: f32) -> Vec<BodyInstance> {
    bodies
        .iter()
        .map(|body| BodyInstance {
            center: canvas.to_ndc(body.position.as_vec2()).to_array(),
            radius: canvas
                .extent_to_ndc(body.radius as f32 * scale_factor)
                .to_array(),
            color: body.color.linear_rgba(),
        })
        .collect()
}
