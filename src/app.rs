use std::sync::Arc;
use std::time::Instant;

use anyhow::{Context, Result};
use log::{debug, error, info, warn};
use rand::SeedableRng;
use rand::rngs::StdRng;
use winit::{
    application::ApplicationHandler,
    dpi::PhysicalSize,
    event::WindowEvent,
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    window::{Window, WindowId},
};

use crate::rendering::{DisplayConfig, Renderer};
use crate::simulation::{Gravity, RandomCluster, Scenario, SimulationConfig, Simulator};

/// What the loop should do after handling an event
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum LoopSignal {
    Continue,
    Exit,
}

impl LoopSignal {
    /// Only a close request ends the loop; all other input is ignored
    pub fn from_event(event: &WindowEvent) -> Self {
        match event {
            WindowEvent::CloseRequested => LoopSignal::Exit,
            _ => LoopSignal::Continue,
        }
    }
}

#[derive(Default)]
pub struct App {
    state: Option<Renderer>,
    display: DisplayConfig,
    simulation: SimulationConfig,
    startup_error: Option<anyhow::Error>,
}

impl App {
    fn start(&self, event_loop: &ActiveEventLoop) -> Result<Renderer> {
        let (width, height) = self.display.window_size;
        let attributes = Window::default_attributes()
            .with_title(self.display.title.clone())
            .with_inner_size(PhysicalSize::new(width, height))
            .with_resizable(false);
        let window = Arc::new(
            event_loop
                .create_window(attributes)
                .context("failed to create window")?,
        );

        let scenario = RandomCluster::new(self.simulation.clone(), self.display.canvas_size());
        let bodies = scenario.initialize_bodies(&mut StdRng::from_entropy())?;
        info!("Scenario: {} - {}", scenario.name(), scenario.description());
        for (index, body) in bodies.iter().enumerate() {
            debug!(
                "body {index}: {:?} at {} moving {} mass {:e}",
                body.color,
                body.position,
                body.velocity,
                body.mass()
            );
        }

        let gravity = Gravity {
            g: self.simulation.gravitational_constant,
            min_distance: self.simulation.min_distance,
        };
        let simulator = Simulator::new(bodies, gravity);

        let renderer = pollster::block_on(Renderer::new(
            window.clone(),
            simulator,
            self.display.clone(),
        ))?;
        window.request_redraw();

        Ok(renderer)
    }

    fn redraw(&mut self) -> LoopSignal {
        let Some(state) = self.state.as_mut() else {
            return LoopSignal::Continue;
        };

        match state.render() {
            Ok(()) => LoopSignal::Continue,
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                warn!("Surface lost or outdated; reconfiguring");
                state.configure_surface();
                LoopSignal::Continue
            }
            Err(wgpu::SurfaceError::OutOfMemory) => {
                error!("Out of memory while acquiring a frame; stopping");
                LoopSignal::Exit
            }
            Err(error) => {
                warn!("Skipping frame: {error}");
                LoopSignal::Continue
            }
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.state.is_some() {
            return;
        }

        match self.start(event_loop) {
            Ok(state) => self.state = Some(state),
            Err(error) => {
                error!("Startup failed: {error:#}");
                self.startup_error = Some(error);
                event_loop.exit();
            }
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        let signal = match event {
            WindowEvent::RedrawRequested => self.redraw(),
            WindowEvent::Resized(size) => {
                // Reconfigures the size of the surface. We do not re-render
                // here as this event is always followed up by redraw request.
                if let Some(state) = self.state.as_mut() {
                    state.resize(size);
                }
                LoopSignal::Continue
            }
            other => LoopSignal::from_event(&other),
        };

        if signal == LoopSignal::Exit {
            info!("Stopping");
            event_loop.exit();
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        let Some(state) = self.state.as_ref() else {
            return;
        };

        // Sleep until the frame clock allows the next frame
        if state.is_frame_due(Instant::now()) {
            state.get_window().request_redraw();
            event_loop.set_control_flow(ControlFlow::Wait);
        } else {
            event_loop.set_control_flow(ControlFlow::WaitUntil(state.next_frame_at()));
        }
    }
}

pub fn run() -> Result<()> {
    // Initialize logger
    env_logger::init();

    // Create event loop
    let event_loop = EventLoop::new().context("failed to create event loop")?;
    event_loop.set_control_flow(ControlFlow::Wait);

    // Create app
    let mut app = App::default();
    event_loop.run_app(&mut app).context("event loop failed")?;

    match app.startup_error.take() {
        Some(error) => Err(error),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn close_request_exits() {
        assert_eq!(LoopSignal::from_event(&WindowEvent::CloseRequested), LoopSignal::Exit);
    }

    #[test]
    fn other_events_are_ignored() {
        assert_eq!(LoopSignal::from_event(&WindowEvent::Focused(true)), LoopSignal::Continue);
        assert_eq!(LoopSignal::from_event(&WindowEvent::Destroyed), LoopSignal::Continue);
    }
}
