use crate::rendering::geometry::{BodyInstance, TrailVertex};

/// Format of the offscreen trail and scene textures
pub(crate) const CANVAS_FORMAT: wgpu::TextureFormat = wgpu::TextureFormat::Rgba8UnormSrgb;

// Pipelines and layouts shared by every frame
pub(crate) struct RenderConfig {
    pub(crate) surface_format: wgpu::TextureFormat,
    pub(crate) trail_pipeline: wgpu::RenderPipeline,
    pub(crate) body_pipeline: wgpu::RenderPipeline,
    pub(crate) composite_pipeline: wgpu::RenderPipeline,
    pub(crate) present_pipeline: wgpu::RenderPipeline,
    pub(crate) texture_bind_group_layout: wgpu::BindGroupLayout,
}

impl RenderConfig {
    pub(crate) fn new(device: &wgpu::Device, surface_format: wgpu::TextureFormat) -> Self {
        let trail_shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("Trail Shader"),
            source: wgpu::ShaderSource::Wgsl(include_str!("../shaders/trail.wgsl").into()),
        });
        let body_shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("Body Shader"),
            source: wgpu::ShaderSource::Wgsl(include_str!("../shaders/bodies.wgsl").into()),
        });
        let blit_shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("Blit Shader"),
            source: wgpu::ShaderSource::Wgsl(include_str!("../shaders/blit.wgsl").into()),
        });

        // Texture + sampler, used by both composite and present
        let texture_bind_group_layout =
            device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
                label: Some("Texture Bind Group Layout"),
                entries: &[
                    wgpu::BindGroupLayoutEntry {
                        binding: 0,
                        visibility: wgpu::ShaderStages::FRAGMENT,
                        ty: wgpu::BindingType::Texture {
                            sample_type: wgpu::TextureSampleType::Float { filterable: true },
                            view_dimension: wgpu::TextureViewDimension::D2,
                            multisampled: false,
                        },
                        count: None,
                    },
                    wgpu::BindGroupLayoutEntry {
                        binding: 1,
                        visibility: wgpu::ShaderStages::FRAGMENT,
                        ty: wgpu::BindingType::Sampler(wgpu::SamplerBindingType::Filtering),
                        count: None,
                    },
                ],
            });

        let geometry_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("Geometry Pipeline Layout"),
            bind_group_layouts: &[],
            push_constant_ranges: &[],
        });
        let blit_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("Blit Pipeline Layout"),
            bind_group_layouts: &[&texture_bind_group_layout],
            push_constant_ranges: &[],
        });

        // Trail segments overwrite whatever the overlay already holds
        let trail_pipeline = create_pipeline(
            device,
            "Trail Render Pipeline",
            &geometry_layout,
            &trail_shader,
            &[TrailVertex::layout()],
            CANVAS_FORMAT,
            wgpu::BlendState::REPLACE,
        );
        let body_pipeline = create_pipeline(
            device,
            "Body Render Pipeline",
            &geometry_layout,
            &body_shader,
            &[BodyInstance::layout()],
            CANVAS_FORMAT,
            wgpu::BlendState::REPLACE,
        );
        // Transparent overlay pixels leave the black background untouched
        let composite_pipeline = create_pipeline(
            device,
            "Trail Composite Pipeline",
            &blit_layout,
            &blit_shader,
            &[],
            CANVAS_FORMAT,
            wgpu::BlendState::ALPHA_BLENDING,
        );
        let present_pipeline = create_pipeline(
            device,
            "Present Pipeline",
            &blit_layout,
            &blit_shader,
            &[],
            surface_format.add_srgb_suffix(),
            wgpu::BlendState::REPLACE,
        );

        Self {
            surface_format,
            trail_pipeline,
            body_pipeline,
            composite_pipeline,
            present_pipeline,
            texture_bind_group_layout,
        }
    }

    pub(crate) fn create_texture_bind_group(
        &self,
        device: &wgpu::Device,
        label: &str,
        view: &wgpu::TextureView,
        sampler: &wgpu::Sampler,
    ) -> wgpu::BindGroup {
        device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some(label),
            layout: &self.texture_bind_group_layout,
            entries: &[
                wgpu::BindGroupEntry {
                    binding: 0,
                    resource: wgpu::BindingResource::TextureView(view),
                },
                wgpu::BindGroupEntry {
                    binding: 1,
                    resource: wgpu::BindingResource::Sampler(sampler),
                },
            ],
        })
    }
}

fn create_pipeline(
    device: &wgpu::Device,
    label: &str,
    layout: &wgpu::PipelineLayout,
    shader_module: &wgpu::ShaderModule,
    buffers: &[wgpu::VertexBufferLayout<'_>],
    format: wgpu::TextureFormat,
    blend: wgpu::BlendState,
) -> wgpu::RenderPipeline {
    device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
        label: Some(label),
        layout: Some(layout),
        vertex: wgpu::VertexState {
            module: shader_module,
            entry_point: Some("vertex_main"),
            buffers,
            compilation_options: Default::default(),
        },
        fragment: Some(wgpu::FragmentState {
            module: shader_module,
            entry_point: Some("fragment_main"),
            targets: &[Some(wgpu::ColorTargetState {
                format,
                blend: Some(blend),
                write_mask: wgpu::ColorWrites::ALL,
            })],
            compilation_options: Default::default(),
        }),
        primitive: wgpu::PrimitiveState {
            topology: wgpu::PrimitiveTopology::TriangleList,
            strip_index_format: None,
            front_face: wgpu::FrontFace::Ccw,
            cull_mode: None,
            polygon_mode: wgpu::PolygonMode::Fill,
            unclipped_depth: false,
            conservative: false,
        },
        depth_stencil: None,
        multisample: wgpu::MultisampleState {
            count: 1,
            mask: !0,
            alpha_to_coverage_enabled: false,
        },
        multiview: None,
        cache: None,
    })
}
