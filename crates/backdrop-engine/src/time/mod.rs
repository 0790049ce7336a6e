//! Time subsystem.
//!
//! Provides frame timing without coupling to any particular host loop.
//! Intended usage:
//! - one `FrameClock` per scheduler
//! - call `tick()` once per produced frame to obtain `FrameTime`

mod frame_clock;

pub use frame_clock::{FrameClock, FrameTime};
