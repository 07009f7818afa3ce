use std::{
    fmt,
    time::{Duration, Instant},
};

/// Frames per second, recomputed once per elapsed second.
#[derive(Debug, Clone)]
pub struct FpsCounter {
    last_update: Instant,
    frames: u32,
    fps: f32,
}

impl FpsCounter {
    const WINDOW: Duration = Duration::from_secs(1);

    pub fn new(now: Instant) -> Self {
        FpsCounter {
            last_update: now,
            frames: 0,
            fps: 0.0,
        }
    }

    /// Counts one rendered frame.
    pub fn tick(&mut self, now: Instant) {
        self.frames += 1;
        let elapsed = now.saturating_duration_since(self.last_update);
        if elapsed > Self::WINDOW {
            self.fps = self.frames as f32 / elapsed.as_secs_f32();
            self.frames = 0;
            self.last_update = now;
        }
    }

    pub fn fps(&self) -> f32 {
        self.fps
    }
}

impl fmt::Display for FpsCounter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "FPS: {:.2}", self.fps)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fps_updates_after_window() {
        let start = Instant::now();
        let mut counter = FpsCounter::new(start);
        assert_eq!(counter.to_string(), "FPS: 0.00");

        // 30 frames within the first second do not publish a value yet
        for i in 1..=30 {
            counter.tick(start + Duration::from_millis(i * 33));
        }
        assert_eq!(counter.fps(), 0.0);

        // The 31st frame lands after 1.25s
        counter.tick(start + Duration::from_millis(1250));
        assert!((counter.fps() - 31.0 / 1.25).abs() < 0.01);
        assert_eq!(counter.to_string(), "FPS: 24.80");
    }

    #[test]
    fn test_window_restarts() {
        let start = Instant::now();
        let mut counter = FpsCounter::new(start);
        counter.tick(start + Duration::from_millis(1500));
        let first = counter.fps();
        assert!((first - 1.0 / 1.5).abs() < 0.01);

        for i in 1..=10 {
            counter.tick(start + Duration::from_millis(1500 + i * 100));
        }
        // Exactly one second after the last update does not close the window
        assert_eq!(counter.fps(), first);
        counter.tick(start + Duration::from_millis(2600));
        assert!((counter.fps() - 11.0 / 1.1).abs() < 0.01);
    }
}
