use wgpu::util::DeviceExt;

use crate::rendering::geometry::{BodyInstance, TrailVertex, VERTICES_PER_SEGMENT};
use crate::rendering::render_config::{CANVAS_FORMAT, RenderConfig};

// Offscreen canvas textures and per-frame geometry buffers
pub(crate) struct RenderTargets {
    pub(crate) trail_view: wgpu::TextureView, // never cleared after creation
    pub(crate) scene_view: wgpu::TextureView,
    pub(crate) trail_bind_group: wgpu::BindGroup,
    pub(crate) scene_bind_group: wgpu::BindGroup,
    pub(crate) trail_vertex_buffer: wgpu::Buffer,
    pub(crate) body_instance_buffer: wgpu::Buffer,
    body_count: u32,
}

impl RenderTargets {
    pub(crate) fn new(
        device: &wgpu::Device,
        render_config: &RenderConfig,
        (width, height): (u32, u32),
        body_count: usize,
    ) -> Self {
        let trail_view = create_canvas_texture(device, "Trail Texture", width, height);
        let scene_view = create_canvas_texture(device, "Scene Texture", width, height);

        // Linear filtering turns the 2x canvas into a box-filtered window image
        let sampler = device.create_sampler(&wgpu::SamplerDescriptor {
            label: Some("Canvas Sampler"),
            address_mode_u: wgpu::AddressMode::ClampToEdge,
            address_mode_v: wgpu::AddressMode::ClampToEdge,
            mag_filter: wgpu::FilterMode::Linear,
            min_filter: wgpu::FilterMode::Linear,
            ..Default::default()
        });

        let trail_bind_group =
            render_config.create_texture_bind_group(device, "Trail Bind Group", &trail_view, &sampler);
        let scene_bind_group =
            render_config.create_texture_bind_group(device, "Scene Bind Group", &scene_view, &sampler);

        let trail_vertex_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("Trail Vertex Buffer"),
            contents: bytemuck::cast_slice(&vec![
                TrailVertex::default();
                body_count * VERTICES_PER_SEGMENT
            ]),
            usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
        });
        let body_instance_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("Body Instance Buffer"),
            contents: bytemuck::cast_slice(&vec![BodyInstance::default(); body_count]),
            usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
        });

        Self {
            trail_view,
            scene_view,
            trail_bind_group,
            scene_bind_group,
            trail_vertex_buffer,
            body_instance_buffer,
            body_count: body_count as u32,
        }
    }

    pub(crate) fn body_count(&self) -> u32 {
        self.body_count
    }

    pub(crate) fn trail_vertex_count(&self) -> u32 {
        self.body_count * VERTICES_PER_SEGMENT as u32
    }

    pub(crate) fn update_trail(&self, queue: &wgpu::Queue, vertices: &[TrailVertex]) {
        queue.write_buffer(&self.trail_vertex_buffer, 0, bytemuck::cast_slice(vertices));
    }

    pub(crate) fn update_bodies(&self, queue: &wgpu::Queue, instances: &[BodyInstance]) {
        queue.write_buffer(&self.body_instance_buffer, 0, bytemuck::cast_slice(instances));
    }
}

fn create_canvas_texture(
    device: &wgpu::Device,
    label: &str,
    width: u32,
    height: u32,
) -> wgpu::TextureView {
    let texture = device.create_texture(&wgpu::TextureDescriptor {
        label: Some(label),
        size: wgpu::Extent3d {
            width,
            height,
            depth_or_array_layers: 1,
        },
        mip_level_count: 1,
        sample_count: 1,
        dimension: wgpu::TextureDimension::D2,
        format: CANVAS_FORMAT,
        usage: wgpu::TextureUsages::RENDER_ATTACHMENT | wgpu::TextureUsages::TEXTURE_BINDING,
        view_formats: &[],
    });
    texture.create_view(&wgpu::TextureViewDescriptor::default())
}
