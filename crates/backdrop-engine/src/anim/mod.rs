//! Hero background animation.
//!
//! Intended usage:
//! - build an `AnimatorConfig` (defaults match the stock site)
//! - create one `GradientAnimator` per page
//! - feed it one timestamp per rendered frame via `frame()`
//!
//! Driving the animator against real surfaces is the job of
//! [`crate::runtime::BackdropLoop`].

mod animator;
mod clock;
mod config;
mod random;

pub use animator::{FrameOutput, GradientAnimator};
pub use clock::AnimationClock;
pub use config::{AnimatorConfig, ConfigError, HERO_PROPERTY, NAV_PROPERTY};
pub use random::generate_random_gradient;
