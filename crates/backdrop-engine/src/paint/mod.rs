//! Paint model for animated backgrounds.
//!
//! Scope:
//! - color representation (straight-alpha sRGB bytes, as emitted in style values)
//! - radial gradient compositions and their text rendering
//!
//! Geometry types remain in `coords`.

pub mod color;
pub mod gradient;
pub mod palette;

pub use color::{Color, ColorParseError};
pub use gradient::{FADE_RADIUS, GradientState, GradientStop, STOP_COUNT};
pub use palette::{DEFAULT_PALETTE, default_regions};
