//! Frame clock for hosts without one.
//!
//! The animation is driven by a frame *age* (frames since start) and a
//! nominal frames-per-second constant, not by wall time. [`FrameClock`]
//! provides both, plus a measured FPS for on-screen display.
//!
//! # Example
//!
//! ```ignore
//! use ringtoy::time::FrameClock;
//!
//! let mut clock = FrameClock::new(60.0);
//!
//! // In your frame callback:
//! let age = clock.tick();
//! scene.update(age, clock.fps());
//! println!("FPS: {:.1}", clock.measured_fps());
//! ```

use std::time::{Duration, Instant};

/// Frame counter with a nominal and a measured frame rate.
#[derive(Debug)]
pub struct FrameClock {
    /// Frames since start (or last reset).
    age: u64,
    /// Nominal frame rate the animation is tuned against.
    fps: f32,
    /// Calculated FPS (updated periodically).
    measured_fps: f32,
    /// Frame count at last FPS update.
    fps_frame_count: u64,
    /// Time of last FPS calculation.
    fps_update_time: Instant,
    /// How often to update FPS calculation.
    fps_update_interval: Duration,
}

impl FrameClock {
    /// Create a clock at age 0 with the given nominal frame rate.
    pub fn new(fps: f32) -> Self {
        Self {
            age: 0,
            fps,
            measured_fps: 0.0,
            fps_frame_count: 0,
            fps_update_time: Instant::now(),
            fps_update_interval: Duration::from_millis(500),
        }
    }

    /// Advance one frame. Returns the new age.
    pub fn tick(&mut self) -> u64 {
        self.tick_at(Instant::now())
    }

    /// Advance one frame as if it happened at `now`.
    pub fn tick_at(&mut self, now: Instant) -> u64 {
        self.age += 1;

        let fps_elapsed = now.saturating_duration_since(self.fps_update_time);
        if fps_elapsed >= self.fps_update_interval {
            let frames_since = self.age - self.fps_frame_count;
            self.measured_fps = frames_since as f32 / fps_elapsed.as_secs_f32();
            self.fps_frame_count = self.age;
            self.fps_update_time = now;
        }

        self.age
    }

    /// Frames since start.
    #[inline]
    pub fn age(&self) -> u64 {
        self.age
    }

    /// Nominal frames per second.
    #[inline]
    pub fn fps(&self) -> f32 {
        self.fps
    }

    /// Measured frames per second, `0.0` until the first measurement.
    #[inline]
    pub fn measured_fps(&self) -> f32 {
        self.measured_fps
    }

    /// Reset the clock to age 0.
    pub fn reset(&mut self) {
        self.age = 0;
        self.measured_fps = 0.0;
        self.fps_frame_count = 0;
        self.fps_update_time = Instant::now();
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new(60.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clock_new() {
        let clock = FrameClock::new(30.0);
        assert_eq!(clock.age(), 0);
        assert_eq!(clock.fps(), 30.0);
        assert_eq!(clock.measured_fps(), 0.0);
    }

    #[test]
    fn test_tick_counts_frames() {
        let mut clock = FrameClock::default();
        assert_eq!(clock.tick(), 1);
        assert_eq!(clock.tick(), 2);
        assert_eq!(clock.age(), 2);
    }

    #[test]
    fn test_measured_fps() {
        let mut clock = FrameClock::default();
        let start = clock.fps_update_time;
        for i in 1..=30 {
            clock.tick_at(start + Duration::from_millis(i * 1000 / 60));
        }
        // 30 frames over 500ms
        assert!((clock.measured_fps() - 60.0).abs() < 1.0, "{}", clock.measured_fps());
    }

    #[test]
    fn test_reset() {
        let mut clock = FrameClock::default();
        clock.tick();
        clock.reset();
        assert_eq!(clock.age(), 0);
    }
}
