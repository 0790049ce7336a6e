use std::time::{Duration, Instant};

/// Frame timing snapshot.
#[derive(Debug, Copy, Clone)]
pub struct FrameTime {
    /// Milliseconds since the clock's origin, the unit animation code works in.
    pub now_ms: f64,
}

/// Monotonic clock producing `FrameTime` snapshots.
///
/// Unlike a simulation clock, deltas are not clamped: animation code decides
/// itself how to treat long stalls (e.g. a backgrounded host).
#[derive(Debug, Clone)]
pub struct FrameClock {
    origin: Instant,
    last: Instant,
}

impl FrameClock {
    pub fn new() -> Self {
        let now = Instant::now();
        Self {
            origin: now,
            last: now,
        }
    }

    /// Time remaining until `last + interval`, zero if already past.
    pub fn until_next(&self, interval: Duration) -> Duration {
        (self.last + interval).saturating_duration_since(Instant::now())
    }

    /// Advances the clock and returns a new `FrameTime`.
    pub fn tick(&mut self) -> FrameTime {
        let now = Instant::now();
        self.last = now;

        FrameTime {
            now_ms: now.saturating_duration_since(self.origin).as_secs_f64() * 1000.0,
        }
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}
