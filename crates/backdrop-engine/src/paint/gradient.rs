use core::fmt;

use crate::coords::Position;

use super::Color;

/// Number of stops in every animated gradient.
pub const STOP_COUNT: usize = 3;

/// Radius (in percent of the surface) where each stop fades to transparent.
pub const FADE_RADIUS: f32 = 60.0;

/// A single radial color anchor.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct GradientStop {
    pub color: Color,
    pub center: Position,
}

impl GradientStop {
    #[inline]
    pub const fn new(color: Color, center: Position) -> Self {
        Self { color, center }
    }

    /// Interpolates color and center independently at the same `t`.
    #[inline]
    pub fn lerp(self, other: GradientStop, t: f32) -> GradientStop {
        GradientStop {
            color: self.color.lerp(other.color, t),
            center: self.center.lerp(other.center, t),
        }
    }
}

impl fmt::Display for GradientStop {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "radial-gradient(circle at {:.2}% {:.2}%, {} 0%, transparent {}%)",
            self.center.x, self.center.y, self.color, FADE_RADIUS
        )
    }
}

/// One complete composition: exactly [`STOP_COUNT`] stacked radial layers.
///
/// `Display` renders the value written to a surface's background property,
/// layers separated by `, ` in stop order.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct GradientState {
    pub stops: [GradientStop; STOP_COUNT],
}

impl GradientState {
    #[inline]
    pub const fn new(stops: [GradientStop; STOP_COUNT]) -> Self {
        Self { stops }
    }

    pub fn lerp(&self, other: &GradientState, t: f32) -> GradientState {
        GradientState {
            stops: core::array::from_fn(|i| self.stops[i].lerp(other.stops[i], t)),
        }
    }
}

impl fmt::Display for GradientState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, stop) in self.stops.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{stop}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stop(r: u8, x: f32, y: f32) -> GradientStop {
        GradientStop::new(Color::rgba(r, 0, 0, 0.5), Position::new(x, y))
    }

    fn state(r: u8) -> GradientState {
        GradientState::new([stop(r, 10.0, 10.0), stop(r, 80.0, 20.0), stop(r, 50.0, 70.0)])
    }

    #[test]
    fn stop_renders_single_layer() {
        let s = GradientStop::new(Color::rgba(1, 2, 3, 0.4), Position::new(12.5, 40.0));
        assert_eq!(
            s.to_string(),
            "radial-gradient(circle at 12.50% 40.00%, rgba(1,2,3,0.4) 0%, transparent 60%)"
        );
    }

    #[test]
    fn state_renders_three_layers_in_order() {
        let css = GradientState::new([stop(1, 1.0, 1.0), stop(2, 2.0, 2.0), stop(3, 3.0, 3.0)])
            .to_string();
        assert_eq!(css.matches("radial-gradient(").count(), 3);
        let first = css.find("rgba(1,").unwrap();
        let second = css.find("rgba(2,").unwrap();
        let third = css.find("rgba(3,").unwrap();
        assert!(first < second && second < third);
    }

    #[test]
    fn lerp_midpoint_per_stop() {
        let mid = state(0).lerp(&state(200), 0.5);
        for s in mid.stops {
            assert_eq!(s.color.r, 100);
        }
    }

    #[test]
    fn lerp_endpoints() {
        let a = state(10);
        let b = GradientState::new([
            stop(90, 30.0, 30.0),
            stop(90, 60.0, 5.0),
            stop(90, 40.0, 90.0),
        ]);
        assert_eq!(a.lerp(&b, 0.0), a);
        assert_eq!(a.lerp(&b, 1.0), b);
    }
}
