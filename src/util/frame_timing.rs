use web_time::{Duration, Instant};

/// Frame pacing with a smoothed FPS estimate.
///
/// The showcase redraws continuously, so there is no frame cap here; the
/// viewer just wants a stable number for the title bar. Timestamps are
/// passed in explicitly like everywhere else in the crate.
pub struct FrameTiming {
    last_frame: Instant,
    /// Smoothed FPS using an exponential moving average.
    smoothed_fps: f32,
    /// Smoothing factor (lower = smoother, 0.0-1.0).
    smoothing: f32,
}

impl FrameTiming {
    /// Start timing from `now`.
    #[must_use]
    pub fn new(now: Instant) -> Self {
        Self {
            last_frame: now,
            smoothed_fps: 60.0,
            smoothing: 0.05,
        }
    }

    /// Record one frame boundary and return the time since the previous
    /// one. Zero-length frames leave the FPS estimate untouched.
    pub fn tick(&mut self, now: Instant) -> Duration {
        let elapsed = now.saturating_duration_since(self.last_frame);
        self.last_frame = now;

        let frame_time = elapsed.as_secs_f32();
        if frame_time > 0.0 {
            let instant_fps = 1.0 / frame_time;
            self.smoothed_fps =
                instant_fps.mul_add(self.smoothing, self.smoothed_fps * (1.0 - self.smoothing));
        }
        elapsed
    }

    /// The current smoothed FPS.
    #[must_use]
    pub fn fps(&self) -> f32 {
        self.smoothed_fps
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn steady_frames_converge_on_their_rate() {
        let start = Instant::now();
        let mut timing = FrameTiming::new(start);
        let frame = Duration::from_millis(20);

        for i in 1..=400 {
            let _ = timing.tick(start + frame * i);
        }
        // 20 ms frames are 50 fps; the EMA should be well inside 1 fps.
        assert!((timing.fps() - 50.0).abs() < 1.0, "fps {}", timing.fps());
    }

    #[test]
    fn tick_reports_the_elapsed_gap() {
        let start = Instant::now();
        let mut timing = FrameTiming::new(start);
        let gap = timing.tick(start + Duration::from_millis(33));
        assert_eq!(gap, Duration::from_millis(33));
    }

    #[test]
    fn simultaneous_ticks_do_not_poison_the_estimate() {
        let start = Instant::now();
        let mut timing = FrameTiming::new(start);
        let _ = timing.tick(start);
        assert!(timing.fps().is_finite());
    }
}
