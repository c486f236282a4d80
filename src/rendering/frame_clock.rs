use std::time::{Duration, Instant};

/// Caps the loop at a target rate and reports the real time between frames
#[derive(Debug, Clone)]
pub struct FrameClock {
    frame_interval: Duration,
    last_tick: Instant,
}

impl FrameClock {
    pub fn new(target_fps: u32, now: Instant) -> Self {
        Self {
            frame_interval: Duration::from_secs(1) / target_fps.max(1),
            last_tick: now,
        }
    }

    pub fn frame_interval(&self) -> Duration {
        self.frame_interval
    }

    /// Earliest moment the next frame may start
    pub fn next_frame_at(&self) -> Instant {
        self.last_tick + self.frame_interval
    }

    pub fn is_due(&self, now: Instant) -> bool {
        now >= self.next_frame_at()
    }

    /// Seconds since the previous tick
    pub fn tick(&mut self, now: Instant) -> f64 {
        let elapsed = now.saturating_duration_since(self.last_tick);
        self.last_tick = now;
        elapsed.as_secs_f64()
    }
}
