use std::time::{Duration, Instant};

/// Timing of one host frame, in seconds.
///
/// `now` is monotonic scene time (used by motion, which works from absolute
/// elapsed time since creation); `delta` is the time since the previous frame
/// (used by the session countdown, which accumulates per-tick deltas).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct FrameTime {
    pub now: f32,
    pub delta: f32,
}

impl FrameTime {
    #[must_use]
    pub const fn new(now: f32, delta: f32) -> Self {
        Self { now, delta }
    }

    /// The frame that follows this one after `delta` seconds.
    #[must_use]
    pub fn advance(self, delta: f32) -> Self {
        Self {
            now: self.now + delta,
            delta,
        }
    }
}

/// Wall-clock source of [`FrameTime`]s for hosts without their own clock.
///
/// `now` counts from construction, so motion started at scene time 0 lines
/// up with the first frame.
#[derive(Debug, Clone)]
pub struct Timer {
    origin: Instant,
    last_tick: Instant,
    frame: FrameTime,
    /// Number of `tick` calls so far.
    pub frame_count: u64,
}

impl Default for Timer {
    fn default() -> Self {
        Self::new()
    }
}

impl Timer {
    #[must_use]
    pub fn new() -> Self {
        let origin = Instant::now();
        Self {
            origin,
            last_tick: origin,
            frame: FrameTime::default(),
            frame_count: 0,
        }
    }

    /// Samples the clock and returns the timing of the frame that begins now.
    pub fn tick(&mut self) -> FrameTime {
        let now = Instant::now();
        let delta = now.duration_since(self.last_tick);
        self.last_tick = now;
        self.frame_count += 1;
        self.frame = FrameTime::new(
            now.duration_since(self.origin).as_secs_f32(),
            delta.as_secs_f32(),
        );
        self.frame
    }

    /// Timing of the most recent tick.
    #[must_use]
    pub fn frame(&self) -> FrameTime {
        self.frame
    }

    /// Total wall time since construction.
    #[must_use]
    pub fn elapsed(&self) -> Duration {
        self.origin.elapsed()
    }
}
