use std::time::Duration;

use thiserror::Error;

use crate::coords::Region;
use crate::paint::{Color, DEFAULT_PALETTE, STOP_COUNT, default_regions};

/// Style property the hero panel's background is published under.
pub const HERO_PROPERTY: &str = "--hero-bg";

/// Style property the navigation bar's background is published under.
pub const NAV_PROPERTY: &str = "--nav-bg";

/// Animator configuration.
///
/// Defaults reproduce the stock hero background: a 6 s blend between random
/// compositions drawn from [`DEFAULT_PALETTE`].
#[derive(Debug, Clone)]
pub struct AnimatorConfig {
    pub duration: Duration,
    pub palette: Vec<Color>,
    pub regions: [Region; STOP_COUNT],
    pub hero_property: String,
    pub nav_property: String,
    /// Fixed seed for reproducible sequences; `None` seeds from entropy.
    pub seed: Option<u64>,
}

impl Default for AnimatorConfig {
    fn default() -> Self {
        Self {
            duration: Duration::from_millis(6000),
            palette: DEFAULT_PALETTE.to_vec(),
            regions: default_regions(),
            hero_property: HERO_PROPERTY.to_string(),
            nav_property: NAV_PROPERTY.to_string(),
            seed: None,
        }
    }
}

impl AnimatorConfig {
    pub fn duration(mut self, duration: Duration) -> Self {
        self.duration = duration;
        self
    }

    pub fn palette(mut self, palette: impl Into<Vec<Color>>) -> Self {
        self.palette = palette.into();
        self
    }

    pub fn regions(mut self, regions: [Region; STOP_COUNT]) -> Self {
        self.regions = regions;
        self
    }

    pub fn hero_property(mut self, name: impl Into<String>) -> Self {
        self.hero_property = name.into();
        self
    }

    pub fn nav_property(mut self, name: impl Into<String>) -> Self {
        self.nav_property = name.into();
        self
    }

    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    #[inline]
    pub fn duration_ms(&self) -> f64 {
        self.duration.as_secs_f64() * 1000.0
    }

    /// Checks the static configuration. Everything downstream assumes it passed.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.duration.is_zero() {
            return Err(ConfigError::ZeroDuration);
        }
        if self.palette.is_empty() {
            return Err(ConfigError::EmptyPalette);
        }
        if let Some(index) = self.palette.iter().position(|c| !c.is_valid()) {
            return Err(ConfigError::InvalidColor { index });
        }
        if let Some(index) = self.regions.iter().position(|r| !r.is_valid()) {
            return Err(ConfigError::InvalidRegion { index });
        }
        if self.hero_property.trim().is_empty() || self.nav_property.trim().is_empty() {
            return Err(ConfigError::EmptyProperty);
        }
        Ok(())
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("animation duration must be greater than zero")]
    ZeroDuration,
    #[error("palette must contain at least one color")]
    EmptyPalette,
    #[error("palette color {index} has alpha outside [0, 1]")]
    InvalidColor { index: usize },
    #[error("region for stop {index} must be a non-empty range inside [0, 100]")]
    InvalidRegion { index: usize },
    #[error("style property names must not be empty")]
    EmptyProperty,
}
