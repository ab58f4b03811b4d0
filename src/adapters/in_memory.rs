// SPDX-License-Identifier: MIT OR Apache-2.0

//! In-memory value source adapter.
//!
//! A map-backed [`ValueSource`] for deterministic binds: tests and embedders
//! hand the binder exactly the key/value pairs they want, without touching
//! the process environment.

use crate::domain::FieldKey;
use crate::ports::ValueSource;
use std::collections::HashMap;

/// Value source adapter backed by an in-memory map.
///
/// # Examples
///
/// ```rust
/// use envbind::adapters::InMemorySource;
/// use envbind::ports::ValueSource;
///
/// let source = InMemorySource::from_pairs([
///     ("name", "Example"),
///     ("build_number", "11"),
/// ]);
/// assert_eq!(source.get_str("name").as_deref(), Some("Example"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct InMemorySource {
    values: HashMap<String, String>,
}

impl InMemorySource {
    /// Creates an empty source.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a source from an existing map.
    pub fn from_map(values: HashMap<String, String>) -> Self {
        Self { values }
    }

    /// Creates a source from key/value pairs.
    pub fn from_pairs<K, V>(pairs: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            values: pairs
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    /// Inserts one key/value pair, replacing any previous value.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.values.insert(key.into(), value.into());
    }

    /// Removes a key, if present.
    pub fn remove(&mut self, key: &str) {
        self.values.remove(key);
    }
}

impl ValueSource for InMemorySource {
    fn name(&self) -> &str {
        "in-memory"
    }

    fn get(&self, key: &FieldKey) -> Option<String> {
        self.values.get(key.as_str()).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_in_memory_name() {
        assert_eq!(InMemorySource::new().name(), "in-memory");
    }

    #[test]
    fn test_from_pairs_lookup() {
        let source = InMemorySource::from_pairs([("a", "1"), ("b", "2")]);
        assert_eq!(source.get(&FieldKey::from("a")).as_deref(), Some("1"));
        assert_eq!(source.get(&FieldKey::from("b")).as_deref(), Some("2"));
        assert!(source.get(&FieldKey::from("c")).is_none());
    }

    #[test]
    fn test_from_map_lookup() {
        let mut map = HashMap::new();
        map.insert("key".to_string(), "value".to_string());
        let source = InMemorySource::from_map(map);
        assert_eq!(source.get_str("key").as_deref(), Some("value"));
    }

    #[test]
    fn test_set_and_remove() {
        let mut source = InMemorySource::new();
        source.set("key", "value");
        assert_eq!(source.get_str("key").as_deref(), Some("value"));
        source.remove("key");
        assert!(source.get_str("key").is_none());
    }

    #[test]
    fn test_empty_value_is_present() {
        let source = InMemorySource::from_pairs([("empty", "")]);
        assert_eq!(source.get_str("empty").as_deref(), Some(""));
    }
}
