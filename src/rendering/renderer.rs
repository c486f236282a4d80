use std::sync::Arc;
use std::time::Instant;

use anyhow::{Context, Result};
use log::{info, trace};
use winit::window::Window;

use crate::rendering::display::DisplayConfig;
use crate::rendering::frame_clock::FrameClock;
use crate::rendering::geometry::{Canvas, body_instances, trail_vertices};
use crate::rendering::render_config::RenderConfig;
use crate::rendering::render_pass::{create_background_render_pass, create_overlay_render_pass};
use crate::rendering::render_targets::RenderTargets;
use crate::simulation::Simulator;

// Main renderer struct
pub(crate) struct Renderer {
    window: Arc<Window>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    surface: wgpu::Surface<'static>,
    surface_config: wgpu::SurfaceConfiguration,

    // Pipelines and offscreen canvas
    render_config: RenderConfig,
    targets: RenderTargets,
    canvas: Canvas,
    display: DisplayConfig,

    // Simulation state
    simulator: Simulator,
    frame_clock: FrameClock,
}

impl Renderer {
    pub(crate) async fn new(
        window: Arc<Window>,
        simulator: Simulator,
        display: DisplayConfig,
    ) -> Result<Self> {
        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor::default());
        let surface = instance
            .create_surface(window.clone())
            .context("failed to create window surface")?;

        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::default(),
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .context("no compatible GPU adapter")?;
        let adapter_info = adapter.get_info();
        info!("Using adapter {} ({:?})", adapter_info.name, adapter_info.backend);

        let (device, queue) = adapter
            .request_device(&wgpu::DeviceDescriptor {
                label: None,
                required_features: wgpu::Features::empty(),
                required_limits: wgpu::Limits::default(),
                memory_hints: wgpu::MemoryHints::default(),
                trace: wgpu::Trace::Off,
            })
            .await
            .context("failed to open GPU device")?;

        let size = window.inner_size();
        let surface_caps = surface.get_capabilities(&adapter);
        let surface_format = surface_caps
            .formats
            .first()
            .copied()
            .context("surface reports no supported formats")?;

        let surface_config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format: surface_format,
            // Request compatibility with the sRGB-format texture view we're going to create later.
            view_formats: vec![surface_format.add_srgb_suffix()],
            alpha_mode: wgpu::CompositeAlphaMode::Auto,
            width: size.width.max(1),
            height: size.height.max(1),
            desired_maximum_frame_latency: 2,
            // Frame pacing comes from the frame clock, not from vsync
            present_mode: wgpu::PresentMode::AutoNoVsync,
        };
        surface.configure(&device, &surface_config);

        let render_config = RenderConfig::new(&device, surface_format);
        let canvas_size = display.canvas_size();
        let targets = RenderTargets::new(
            &device,
            &render_config,
            canvas_size,
            simulator.bodies().len(),
        );

        // Start the overlay fully transparent
        let mut encoder = device.create_command_encoder(&wgpu::CommandEncoderDescriptor {
            label: Some("Trail Clear Encoder"),
        });
        {
            let _clear_pass = create_background_render_pass(
                &mut encoder,
                "Trail Clear Pass",
                &targets.trail_view,
                wgpu::Color::TRANSPARENT,
            );
        }
        queue.submit([encoder.finish()]);

        info!(
            "Canvas {}x{} presented at {}x{}",
            canvas_size.0, canvas_size.1, size.width, size.height
        );

        let frame_clock = FrameClock::new(display.target_fps, Instant::now());

        Ok(Self {
            window,
            device,
            queue,
            surface,
            surface_config,
            render_config,
            targets,
            canvas: Canvas::new(canvas_size),
            display,
            simulator,
            frame_clock,
        })
    }

    pub(crate) fn get_window(&self) -> &Window {
        &self.window
    }

    pub(crate) fn is_frame_due(&self, now: Instant) -> bool {
        self.frame_clock.is_due(now)
    }

    pub(crate) fn next_frame_at(&self) -> Instant {
        self.frame_clock.next_frame_at()
    }

    pub(crate) fn resize(&mut self, new_size: winit::dpi::PhysicalSize<u32>) {
        if new_size.width > 0 && new_size.height > 0 {
            self.surface_config.width = new_size.width;
            self.surface_config.height = new_size.height;
            self.configure_surface();
        }
    }

    pub(crate) fn configure_surface(&self) {
        self.surface.configure(&self.device, &self.surface_config);
    }

    fn update(&mut self) {
        // Real time since the last frame, no fixed step
        let dt = self.frame_clock.tick(Instant::now());
        self.simulator.advance(dt);
        trace!("advanced {} bodies by {dt:.5}s", self.simulator.bodies().len());
    }

    pub(crate) fn render(&mut self) -> Result<(), wgpu::SurfaceError> {
        // Update simulation state
        self.update();

        let bodies = self.simulator.bodies();
        self.targets.update_trail(
            &self.queue,
            &trail_vertices(bodies, &self.canvas, self.display.trail_width),
        );
        self.targets.update_bodies(
            &self.queue,
            &body_instances(bodies, &self.canvas, self.display.scale_factor as f32),
        );

        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("Frame Command Encoder"),
            });

        // Trail pass - extend the persistent overlay with this frame's segments
        {
            let mut render_pass =
                create_overlay_render_pass(&mut encoder, "Trail Pass", &self.targets.trail_view);
            render_pass.set_pipeline(&self.render_config.trail_pipeline);
            render_pass.set_vertex_buffer(0, self.targets.trail_vertex_buffer.slice(..));
            render_pass.draw(0..self.targets.trail_vertex_count(), 0..1);
        }

        // Scene pass - black background, trails, then bodies on top
        {
            let mut render_pass = create_background_render_pass(
                &mut encoder,
                "Scene Pass",
                &self.targets.scene_view,
                wgpu::Color::BLACK,
            );
            render_pass.set_pipeline(&self.render_config.composite_pipeline);
            render_pass.set_bind_group(0, &self.targets.trail_bind_group, &[]);
            render_pass.draw(0..3, 0..1);

            render_pass.set_pipeline(&self.render_config.body_pipeline);
            render_pass.set_vertex_buffer(0, self.targets.body_instance_buffer.slice(..));
            // 6 vertices (2 triangles) per body instance
            render_pass.draw(0..6, 0..self.targets.body_count());
        }

        let surface_texture = match self.surface.get_current_texture() {
            Ok(surface_texture) => surface_texture,
            Err(error) => {
                // Keep the trail continuous even when this frame can't be shown
                self.queue.submit([encoder.finish()]);
                return Err(error);
            }
        };
        let texture_view = surface_texture
            .texture
            .create_view(&wgpu::TextureViewDescriptor {
                format: Some(self.render_config.surface_format.add_srgb_suffix()),
                ..Default::default()
            });

        // Present pass - downsample the canvas onto the window
        {
            let mut render_pass = create_background_render_pass(
                &mut encoder,
                "Present Pass",
                &texture_view,
                wgpu::Color::BLACK,
            );
            render_pass.set_pipeline(&self.render_config.present_pipeline);
            render_pass.set_bind_group(0, &self.targets.scene_bind_group, &[]);
            render_pass.draw(0..3, 0..1);
        }

        self.queue.submit([encoder.finish()]);
        self.window.pre_present_notify();
        surface_texture.present();

        Ok(())
    }
}
