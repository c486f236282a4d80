// Window and canvas constants
pub const WINDOW_WIDTH: u32 = 1280;
pub const WINDOW_HEIGHT: u32 = 720;
pub const SCALE_FACTOR: u32 = 2;
pub const TARGET_FPS: u32 = 120;
pub const TRAIL_WIDTH: f32 = 3.0;

#[derive(Debug, Clone, PartialEq)]
pub struct DisplayConfig {
    pub title: String,
    pub window_size: (u32, u32),
    /// Logical canvas is this many times larger than the window on each axis
    pub scale_factor: u32,
    pub target_fps: u32,
    pub trail_width: f32,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            title: "Gravity Trails".to_string(),
            window_size: (WINDOW_WIDTH, WINDOW_HEIGHT),
            scale_factor: SCALE_FACTOR,
            target_fps: TARGET_FPS,
            trail_width: TRAIL_WIDTH,
        }
    }
}

impl DisplayConfig {
    /// Size of the offscreen canvas the scene is drawn into
    pub fn canvas_size(&self) -> (u32, u32) {
        (
            self.window_size.0 * self.scale_factor,
            self.window_size.1 * self.scale_factor,
        )
    }
}
