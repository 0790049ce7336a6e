//! Backdrop engine crate.
//!
//! Owns the animated hero background: paint model, the gradient animator,
//! the frame loop that drives it, and the output surfaces. Also carries the
//! persisted theme preference.

pub mod anim;
pub mod coords;
pub mod paint;
pub mod prefs;
pub mod runtime;
pub mod surface;
pub mod time;

pub mod logging;
