//! Frame loop.
//!
//! Connects a [`FrameScheduler`] (the host's per-frame primitive) to a
//! [`crate::anim::GradientAnimator`] and its surfaces. The loop runs on the
//! caller's thread; the only cross-thread object is [`StopHandle`].

mod backdrop_loop;
mod scheduler;

pub use backdrop_loop::{BackdropLoop, LoopExit, StopHandle, start};
pub use scheduler::{FrameScheduler, IntervalScheduler, ScriptedScheduler};
