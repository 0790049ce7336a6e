use core::fmt;
use core::str::FromStr;

use anyhow::Result;
use thiserror::Error;

use super::PreferenceStore;

/// Key the theme is persisted under.
pub const THEME_KEY: &str = "theme";

#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    #[inline]
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    #[inline]
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unknown theme `{0}` (expected `light` or `dark`)")]
pub struct UnknownTheme(pub String);

impl FromStr for Theme {
    type Err = UnknownTheme;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            _ => Err(UnknownTheme(s.to_string())),
        }
    }
}

/// The persisted light/dark choice.
pub struct ThemePreference<S: PreferenceStore> {
    store: S,
    theme: Theme,
}

impl<S: PreferenceStore> ThemePreference<S> {
    /// Reads the stored theme. Missing or unreadable values fall back to light.
    pub fn load(store: S) -> Self {
        let theme = match store.get(THEME_KEY) {
            None => Theme::default(),
            Some(raw) => raw.parse().unwrap_or_else(|e: UnknownTheme| {
                log::warn!("ignoring stored theme: {e}");
                Theme::default()
            }),
        };
        Self { store, theme }
    }

    #[inline]
    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn set(&mut self, theme: Theme) -> Result<()> {
        self.store.set(THEME_KEY, theme.as_str())?;
        self.theme = theme;
        log::debug!("theme set to {theme}");
        Ok(())
    }

    /// Flips the theme, persists it and returns the new value.
    pub fn toggle(&mut self) -> Result<Theme> {
        let next = self.theme.toggled();
        self.set(next)?;
        Ok(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prefs::MemoryStore;

    #[test]
    fn defaults_to_light() {
        let pref = ThemePreference::load(MemoryStore::new());
        assert_eq!(pref.theme(), Theme::Light);
    }

    #[test]
    fn toggle_persists() {
        let mut store = MemoryStore::new();
        let mut pref = ThemePreference::load(&mut store);
        assert_eq!(pref.toggle().unwrap(), Theme::Dark);
        drop(pref);
        assert_eq!(store.get(THEME_KEY).as_deref(), Some("dark"));

        let mut pref = ThemePreference::load(store);
        assert_eq!(pref.theme(), Theme::Dark);
        assert_eq!(pref.toggle().unwrap(), Theme::Light);
    }

    #[test]
    fn garbage_falls_back_to_light() {
        let mut store = MemoryStore::new();
        store.set(THEME_KEY, "sepia").unwrap();
        assert_eq!(ThemePreference::load(store).theme(), Theme::Light);
    }

    #[test]
    fn parse_is_case_insensitive() {
        assert_eq!(" Dark ".parse::<Theme>(), Ok(Theme::Dark));
        assert!("blue".parse::<Theme>().is_err());
    }
}
