//! Persisted user preferences.
//!
//! Currently a single one: the light/dark theme.

mod store;
mod theme;

pub use store::{FileStore, MemoryStore, PreferenceStore};
pub use theme::{THEME_KEY, Theme, ThemePreference, UnknownTheme};
