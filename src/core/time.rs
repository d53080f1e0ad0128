//! Frame timing utilities

use std::time::{Duration, Instant};

/// Produces the wall-clock delta between simulation ticks.
///
/// The simulation is not fixed-step: whatever elapsed between two calls to
/// [`tick`](Self::tick) is handed to the next update unchanged.
#[derive(Debug, Clone)]
pub struct FrameTimer {
    last_frame: Instant,
    delta: Duration,
    elapsed: Duration,
    frame_count: u64,
    fps_timer: Instant,
    fps: f32,
    fps_frame_count: u32,
}

impl FrameTimer {
    /// Create a new frame timer starting now
    pub fn new() -> Self {
        Self::starting_at(Instant::now())
    }

    /// Create a timer whose first delta is measured from `start`
    pub fn starting_at(start: Instant) -> Self {
        Self {
            last_frame: start,
            delta: Duration::ZERO,
            elapsed: Duration::ZERO,
            frame_count: 0,
            fps_timer: start,
            fps: 0.0,
            fps_frame_count: 0,
        }
    }

    /// Call once per frame; returns the delta in seconds
    pub fn tick(&mut self) -> f32 {
        self.tick_at(Instant::now())
    }

    /// Advance the timer to an explicit instant
    pub fn tick_at(&mut self, now: Instant) -> f32 {
        self.delta = now.saturating_duration_since(self.last_frame);
        self.last_frame = now;
        self.elapsed += self.delta;
        self.frame_count += 1;
        self.fps_frame_count += 1;

        let fps_elapsed = now.saturating_duration_since(self.fps_timer);
        if fps_elapsed >= Duration::from_secs(1) {
            self.fps = self.fps_frame_count as f32 / fps_elapsed.as_secs_f32();
            self.fps_frame_count = 0;
            self.fps_timer = now;
        }

        self.delta.as_secs_f32()
    }

    /// Delta of the last tick in seconds
    pub fn delta_secs(&self) -> f32 {
        self.delta.as_secs_f32()
    }

    /// Total time accumulated over all ticks
    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    /// Get current FPS (updated every second)
    pub fn fps(&self) -> f32 {
        self.fps
    }

    /// Get total frame count
    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }
}

impl Default for FrameTimer {
    fn default() -> Self {
        Self::new()
    }
}
