/// Interpolation progress through one blend window.
///
/// Invariant:
/// - `progress` is in [0, 1) after every [`advance`](Self::advance).
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct AnimationClock {
    progress: f64,
    duration_ms: f64,
    last_timestamp_ms: f64,
}

impl AnimationClock {
    /// `duration_ms` must be positive; the animator validates it beforehand.
    pub fn new(duration_ms: f64, now_ms: f64) -> Self {
        debug_assert!(duration_ms > 0.0);
        Self {
            progress: 0.0,
            duration_ms,
            last_timestamp_ms: now_ms,
        }
    }

    #[inline]
    pub fn progress(&self) -> f64 {
        self.progress
    }

    /// Moves the baseline without touching progress.
    pub fn rebase(&mut self, now_ms: f64) {
        self.last_timestamp_ms = now_ms;
    }

    /// Sets progress directly, wrapped into [0, 1).
    pub fn set_progress(&mut self, progress: f64) {
        self.progress = wrap_unit(progress);
    }

    /// Advances to `now_ms`. Returns `true` when a window boundary was crossed.
    ///
    /// At most one boundary is reported per call. Whole windows beyond the
    /// first are dropped, so a long stall yields a single rotation.
    /// Timestamps earlier than the baseline count as zero elapsed time.
    pub fn advance(&mut self, now_ms: f64) -> bool {
        let elapsed = (now_ms - self.last_timestamp_ms).max(0.0);
        self.last_timestamp_ms = now_ms;

        self.progress += elapsed / self.duration_ms;
        if self.progress < 1.0 {
            return false;
        }

        self.progress -= 1.0;
        if self.progress >= 1.0 {
            log::trace!("dropping {} whole animation windows", self.progress.trunc());
            self.progress = wrap_unit(self.progress);
        }
        true
    }
}

#[inline]
fn wrap_unit(v: f64) -> f64 {
    if !v.is_finite() {
        return 0.0;
    }
    let w = v.rem_euclid(1.0);
    // rem_euclid may round up to exactly 1.0 for tiny negative inputs.
    if w >= 1.0 { 0.0 } else { w }
}
