//! Real-time gravitational attraction between a handful of point masses,
//! drawn with persistent trails.

pub mod app;
pub mod rendering;
pub mod simulation;
