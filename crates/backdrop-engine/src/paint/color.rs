use core::fmt;
use core::str::FromStr;

use thiserror::Error;

/// Straight-alpha sRGB color as written into style values.
///
/// Invariant:
/// - `a` lies in [0, 1]. `rgba` trusts its caller; parsing and `lerp` enforce it.
///
/// Channels are stored as bytes because the output format (`rgba(r,g,b,a)`)
/// only carries integer channels; interpolation rounds back to bytes.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f32,
}

impl Color {
    /// Palette constructor. `a` must already be in [0, 1].
    #[inline]
    pub const fn rgba(r: u8, g: u8, b: u8, a: f32) -> Self {
        Self { r, g, b, a }
    }

    #[inline]
    pub fn is_valid(self) -> bool {
        self.a.is_finite() && (0.0..=1.0).contains(&self.a)
    }

    /// Alpha rounded to two decimals, as emitted in style strings.
    #[inline]
    pub fn output_alpha(self) -> f32 {
        round2(self.a)
    }

    /// Linear interpolation between `self` and `other`.
    ///
    /// `t` is clamped to [0, 1]. Channels are rounded to the nearest integer,
    /// alpha to two decimals.
    pub fn lerp(self, other: Color, t: f32) -> Color {
        let t = if t.is_finite() { t.clamp(0.0, 1.0) } else { 0.0 };
        Color {
            r: lerp_channel(self.r, other.r, t),
            g: lerp_channel(self.g, other.g, t),
            b: lerp_channel(self.b, other.b, t),
            a: round2(self.a + (other.a - self.a) * t).clamp(0.0, 1.0),
        }
    }
}

#[inline]
fn lerp_channel(from: u8, to: u8, t: f32) -> u8 {
    let v = from as f32 + (to as f32 - from as f32) * t;
    v.round().clamp(0.0, 255.0) as u8
}

#[inline]
fn round2(v: f32) -> f32 {
    (v * 100.0).round() / 100.0
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgba({},{},{},{})", self.r, self.g, self.b, self.output_alpha())
    }
}

/// Failure to read a color from its `rgb(...)` / `rgba(...)` text form.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ColorParseError {
    #[error("expected `rgb(r,g,b)` or `rgba(r,g,b,a)`, got `{0}`")]
    Syntax(String),
    #[error("channel `{0}` is not an integer in 0..=255")]
    Channel(String),
    #[error("alpha `{0}` is not a number in [0, 1]")]
    Alpha(String),
}

impl FromStr for Color {
    type Err = ColorParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let syntax = || ColorParseError::Syntax(s.to_string());

        let (body, has_alpha) = if let Some(rest) = s.strip_prefix("rgba(") {
            (rest, true)
        } else if let Some(rest) = s.strip_prefix("rgb(") {
            (rest, false)
        } else {
            return Err(syntax());
        };
        let body = body.strip_suffix(')').ok_or_else(syntax)?;

        let parts: Vec<&str> = body.split(',').map(str::trim).collect();
        let expected = if has_alpha { 4 } else { 3 };
        if parts.len() != expected {
            return Err(syntax());
        }

        let channel = |p: &str| {
            p.parse::<u8>()
                .map_err(|_| ColorParseError::Channel(p.to_string()))
        };
        let r = channel(parts[0])?;
        let g = channel(parts[1])?;
        let b = channel(parts[2])?;

        let a = if has_alpha {
            let raw = parts[3];
            match raw.parse::<f32>() {
                Ok(a) if a.is_finite() && (0.0..=1.0).contains(&a) => a,
                _ => return Err(ColorParseError::Alpha(raw.to_string())),
            }
        } else {
            1.0
        };

        Ok(Color { r, g, b, a })
    }
}
