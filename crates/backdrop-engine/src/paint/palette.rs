use crate::coords::Region;

use super::{Color, STOP_COUNT};

/// Colors the hero background drifts between.
pub const DEFAULT_PALETTE: [Color; 4] = [
    Color::rgba(99, 102, 241, 0.55),
    Color::rgba(236, 72, 153, 0.45),
    Color::rgba(34, 211, 238, 0.45),
    Color::rgba(168, 85, 247, 0.5),
];

/// Per-stop placement regions: top-left, top-right, bottom-center.
///
/// Neighbouring regions overlap a little so layers can blend into each other,
/// but none reach the edges of the surface.
pub fn default_regions() -> [Region; STOP_COUNT] {
    [
        Region::new(10.0..45.0, 10.0..45.0),
        Region::new(55.0..90.0, 10.0..45.0),
        Region::new(30.0..70.0, 40.0..85.0),
    ]
}
