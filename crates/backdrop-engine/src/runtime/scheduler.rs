use std::thread;
use std::time::Duration;

use crate::time::FrameClock;

/// Host primitive delivering one callback per rendered frame.
pub trait FrameScheduler {
    /// Blocks until the next frame and returns its timestamp in milliseconds.
    ///
    /// Returns `None` once the host is gone (page unloaded, window closed).
    fn next_frame(&mut self) -> Option<f64>;
}

impl<S: FrameScheduler + ?Sized> FrameScheduler for &mut S {
    fn next_frame(&mut self) -> Option<f64> {
        (**self).next_frame()
    }
}

/// Wall-clock scheduler pacing frames at a fixed rate with thread sleeps.
///
/// Stand-in for a display refresh callback on hosts without one.
#[derive(Debug)]
pub struct IntervalScheduler {
    clock: FrameClock,
    interval: Duration,
    frame_limit: Option<u64>,
    produced: u64,
}

impl IntervalScheduler {
    /// `fps` is clamped to [1, 1000].
    pub fn new(fps: f64) -> Self {
        let fps = if fps.is_finite() { fps.clamp(1.0, 1000.0) } else { 60.0 };
        Self {
            clock: FrameClock::new(),
            interval: Duration::from_secs_f64(1.0 / fps),
            frame_limit: None,
            produced: 0,
        }
    }

    /// Ends the host after `frames` frames.
    pub fn with_frame_limit(mut self, frames: u64) -> Self {
        self.frame_limit = Some(frames);
        self
    }

    #[inline]
    pub fn interval(&self) -> Duration {
        self.interval
    }

    #[inline]
    pub fn frames_produced(&self) -> u64 {
        self.produced
    }
}

impl Default for IntervalScheduler {
    fn default() -> Self {
        Self::new(60.0)
    }
}

impl FrameScheduler for IntervalScheduler {
    fn next_frame(&mut self) -> Option<f64> {
        if self.frame_limit.is_some_and(|limit| self.produced >= limit) {
            return None;
        }

        // The first frame fires immediately.
        if self.produced > 0 {
            let wait = self.clock.until_next(self.interval);
            if !wait.is_zero() {
                thread::sleep(wait);
            }
        }

        let ft = self.clock.tick();
        self.produced += 1;
        Some(ft.now_ms)
    }
}

/// Replays a fixed list of timestamps, then reports the host closed.
///
/// Deterministic driver for tests and offline rendering.
#[derive(Debug, Clone, Default)]
pub struct ScriptedScheduler {
    timestamps: std::collections::VecDeque<f64>,
    requested: u64,
}

impl ScriptedScheduler {
    pub fn new(timestamps: impl IntoIterator<Item = f64>) -> Self {
        Self {
            timestamps: timestamps.into_iter().collect(),
            requested: 0,
        }
    }

    /// Evenly spaced frames: `count` timestamps `step_ms` apart, starting at 0.
    pub fn uniform(count: usize, step_ms: f64) -> Self {
        Self::new((0..count).map(|i| i as f64 * step_ms))
    }

    /// Number of `next_frame` calls made so far, including the final `None`.
    #[inline]
    pub fn requested(&self) -> u64 {
        self.requested
    }
}

impl FrameScheduler for ScriptedScheduler {
    fn next_frame(&mut self) -> Option<f64> {
        self.requested += 1;
        self.timestamps.pop_front()
    }
}
