//! Surface coordinates.
//!
//! Canonical space:
//! - Percent of the styled box, so values are resolution independent
//! - Origin top-left
//! - +X right, +Y down

mod position;

pub use position::{Position, Region};
