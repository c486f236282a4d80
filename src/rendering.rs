pub mod display;
pub mod frame_clock;
pub mod geometry;
mod render_config;
mod render_pass;
mod render_targets;
mod renderer;

pub use display::DisplayConfig;
pub use frame_clock::FrameClock;
pub(crate) use renderer::Renderer;
