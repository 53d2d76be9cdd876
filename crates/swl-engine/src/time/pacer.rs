use std::time::{Duration, Instant};

/// Frame timing snapshot.
#[derive(Debug, Copy, Clone)]
pub struct FrameTime {
    /// Time elapsed since the previous frame, in seconds (clamped).
    pub dt: f32,

    /// Monotonic timestamp taken at the tick.
    pub now: Instant,

    /// Monotonic frame counter.
    pub frame_index: u64,
}

/// Fixed-interval frame pacing.
///
/// Frames are scheduled `interval` apart; the runtime sleeps until
/// [`next_deadline`](Self::next_deadline) instead of spinning.
#[derive(Debug, Clone)]
pub struct FramePacer {
    interval: Duration,
    last: Instant,
    frame_index: u64,
    dt_max: Duration,
}

impl FramePacer {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            last: Instant::now(),
            frame_index: 0,
            dt_max: Duration::from_millis(250),
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Earliest instant at which the next frame should be drawn.
    pub fn next_deadline(&self) -> Instant {
        self.last + self.interval
    }

    /// `true` once the interval since the last frame has elapsed.
    pub fn is_due(&self, now: Instant) -> bool {
        now >= self.next_deadline()
    }

    /// Starts a new frame and returns its timing.
    pub fn tick(&mut self) -> FrameTime {
        let now = Instant::now();
        let dt = now.saturating_duration_since(self.last).min(self.dt_max);
        self.last = now;

        let ft = FrameTime { dt: dt.as_secs_f32(), now, frame_index: self.frame_index };
        self.frame_index = self.frame_index.wrapping_add(1);
        ft
    }
}

impl Default for FramePacer {
    fn default() -> Self {
        Self::new(Duration::from_millis(50))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deadline_is_one_interval_after_tick() {
        let mut p = FramePacer::new(Duration::from_millis(20));
        let ft = p.tick();
        assert_eq!(p.next_deadline(), ft.now + Duration::from_millis(20));
        assert!(!p.is_due(ft.now));
        assert!(p.is_due(ft.now + Duration::from_millis(20)));
    }

    #[test]
    fn frame_index_increments() {
        let mut p = FramePacer::default();
        assert_eq!(p.tick().frame_index, 0);
        assert_eq!(p.tick().frame_index, 1);
    }
}
