use fastrand::Rng;

use crate::paint::GradientState;

use super::clock::AnimationClock;
use super::config::{AnimatorConfig, ConfigError};
use super::random::generate_random_gradient;

/// Result of one frame update.
#[derive(Debug, Clone, PartialEq)]
pub struct FrameOutput {
    /// Interpolated composition at the current progress.
    pub gradient: GradientState,
    /// True when this frame crossed a window boundary and drew a new target.
    pub rotated: bool,
}

impl FrameOutput {
    /// Style value to publish on the surfaces.
    pub fn css(&self) -> String {
        self.gradient.to_string()
    }
}

/// Blends between two random compositions, drawing a new target each window.
///
/// State machine: interpolate `current -> target` while progress runs through
/// [0, 1); on wrap, `target` becomes `current` and a fresh target is drawn.
/// There is no terminal state.
#[derive(Debug, Clone)]
pub struct GradientAnimator {
    config: AnimatorConfig,
    rng: Rng,
    current: GradientState,
    target: GradientState,
    clock: AnimationClock,
}

impl GradientAnimator {
    /// Validates `config` and draws the initial pair of compositions.
    ///
    /// `now_ms` seeds the clock baseline; hosts usually call
    /// [`rebase`](Self::rebase) again with the first real frame timestamp.
    pub fn new(config: AnimatorConfig, now_ms: f64) -> Result<Self, ConfigError> {
        config.validate()?;

        let mut rng = match config.seed {
            Some(seed) => Rng::with_seed(seed),
            None => Rng::new(),
        };
        let current = generate_random_gradient(&mut rng, &config.palette, &config.regions);
        let target = generate_random_gradient(&mut rng, &config.palette, &config.regions);
        let clock = AnimationClock::new(config.duration_ms(), now_ms);

        log::debug!(
            "gradient animator ready: {} ms window, {} palette colors",
            config.duration_ms(),
            config.palette.len()
        );

        Ok(Self {
            config,
            rng,
            current,
            target,
            clock,
        })
    }

    #[inline]
    pub fn config(&self) -> &AnimatorConfig {
        &self.config
    }

    #[inline]
    pub fn current(&self) -> &GradientState {
        &self.current
    }

    #[inline]
    pub fn target(&self) -> &GradientState {
        &self.target
    }

    #[inline]
    pub fn progress(&self) -> f64 {
        self.clock.progress()
    }

    /// Resets the timestamp baseline so the next frame measures from `now_ms`.
    pub fn rebase(&mut self, now_ms: f64) {
        self.clock.rebase(now_ms);
    }

    /// Jumps to `progress` (wrapped into [0, 1)) without rotating.
    pub fn seek(&mut self, progress: f64) {
        self.clock.set_progress(progress);
    }

    /// Draws a new composition from the configured palette and regions.
    pub fn generate_random_gradient(&mut self) -> GradientState {
        generate_random_gradient(&mut self.rng, &self.config.palette, &self.config.regions)
    }

    /// Interpolated composition at the current progress.
    pub fn sample(&self) -> GradientState {
        self.current.lerp(&self.target, self.clock.progress() as f32)
    }

    /// Advances to `now_ms`, rotating at most once, and returns the frame.
    pub fn frame(&mut self, now_ms: f64) -> FrameOutput {
        let rotated = self.clock.advance(now_ms);
        if rotated {
            self.rotate();
        }
        FrameOutput {
            gradient: self.sample(),
            rotated,
        }
    }

    fn rotate(&mut self) {
        let next = self.generate_random_gradient();
        self.current = core::mem::replace(&mut self.target, next);
        log::trace!("gradient rotated at progress {:.3}", self.clock.progress());
    }
}
