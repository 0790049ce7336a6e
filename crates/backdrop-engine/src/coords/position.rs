use core::ops::Range;

/// Point on a styled surface, in percent of its box (top-left origin).
///
/// `x` grows right, `y` grows down; `(50, 50)` is the center.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Position {
    pub x: f32,
    pub y: f32,
}

impl Position {
    #[inline]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Component-wise linear interpolation; `t` is not clamped.
    #[inline]
    pub fn lerp(self, other: Position, t: f32) -> Position {
        Position::new(
            self.x + (other.x - self.x) * t,
            self.y + (other.y - self.y) * t,
        )
    }
}

/// Axis-aligned percent region a random position is drawn from.
///
/// Sampling draws from `[start, end)`; float rounding may land a sample on
/// `end`, so [`contains`](Self::contains) treats both bounds as inclusive.
#[derive(Debug, Clone, PartialEq)]
pub struct Region {
    pub x: Range<f32>,
    pub y: Range<f32>,
}

impl Region {
    #[inline]
    pub const fn new(x: Range<f32>, y: Range<f32>) -> Self {
        Self { x, y }
    }

    /// True when both ranges are non-empty, finite and inside [0, 100].
    pub fn is_valid(&self) -> bool {
        let ok = |r: &Range<f32>| {
            r.start.is_finite()
                && r.end.is_finite()
                && r.start >= 0.0
                && r.end <= 100.0
                && r.start < r.end
        };
        ok(&self.x) && ok(&self.y)
    }

    #[inline]
    pub fn contains(&self, p: Position) -> bool {
        let within = |r: &Range<f32>, v: f32| v >= r.start && v <= r.end;
        within(&self.x, p.x) && within(&self.y, p.y)
    }

    /// Maps unit samples `(u, v)` in [0, 1) into the region.
    #[inline]
    pub fn sample(&self, u: f32, v: f32) -> Position {
        Position::new(
            self.x.start + (self.x.end - self.x.start) * u,
            self.y.start + (self.y.end - self.y.start) * v,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ── lerp ──────────────────────────────────────────────────────────────

    #[test]
    fn lerp_endpoints() {
        let a = Position::new(10.0, 20.0);
        let b = Position::new(30.0, 80.0);
        assert_eq!(a.lerp(b, 0.0), a);
        assert_eq!(a.lerp(b, 1.0), b);
        assert_eq!(a.lerp(b, 0.5), Position::new(20.0, 50.0));
    }

    // ── region ────────────────────────────────────────────────────────────

    #[test]
    fn sample_lower_bound_is_start() {
        let r = Region::new(10.0..40.0, 60.0..90.0);
        assert_eq!(r.sample(0.0, 0.0), Position::new(10.0, 60.0));
    }

    #[test]
    fn sample_stays_inside() {
        let r = Region::new(10.0..40.0, 60.0..90.0);
        assert!(r.contains(r.sample(0.5, 0.999)));
    }

    #[test]
    fn validity() {
        assert!(Region::new(0.0..100.0, 0.0..100.0).is_valid());
        assert!(!Region::new(40.0..10.0, 0.0..10.0).is_valid());
        assert!(!Region::new(0.0..10.0, 90.0..120.0).is_valid());
        assert!(!Region::new(5.0..5.0, 0.0..10.0).is_valid());
    }
}
