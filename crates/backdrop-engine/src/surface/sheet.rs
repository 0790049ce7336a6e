use std::collections::HashMap;

use super::Surface;

/// In-memory property map.
///
/// Keeps the latest value per property and counts every write, which makes it
/// the natural surface for hosts that batch style updates, and for tests.
#[derive(Debug, Default, Clone)]
pub struct StyleSheet {
    properties: HashMap<String, String>,
    writes: u64,
}

impl StyleSheet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.properties.get(name).map(String::as_str)
    }

    /// Total number of `set_property` calls received.
    #[inline]
    pub fn writes(&self) -> u64 {
        self.writes
    }

    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }
}

impl Surface for StyleSheet {
    fn set_property(&mut self, name: &str, value: &str) {
        self.writes += 1;
        self.properties.insert(name.to_string(), value.to_string());
    }
}
