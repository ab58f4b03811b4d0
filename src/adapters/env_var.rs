// SPDX-License-Identifier: MIT OR Apache-2.0

//! Environment variable value source adapter.
//!
//! This module provides an adapter that reads raw field values from the
//! process environment.

use crate::domain::FieldKey;
use crate::ports::ValueSource;
use std::collections::HashMap;
use std::env;
use std::sync::RwLock;

/// Value source adapter for environment variables.
///
/// The adapter snapshots the environment lazily on first lookup and serves
/// all subsequent lookups from that snapshot, so a single bind sees a
/// consistent view even if the environment changes underneath it. It supports
/// optional prefix filtering (e.g. only variables starting with `"APP_"`,
/// with the prefix stripped from the key).
///
/// # Examples
///
/// ```rust
/// use envbind::adapters::EnvVarSource;
///
/// // Read any environment variable
/// let source = EnvVarSource::new();
///
/// // Read only variables with a specific prefix
/// let source = EnvVarSource::with_prefix("APP_");
/// ```
#[derive(Debug)]
pub struct EnvVarSource {
    /// Optional prefix to filter environment variables
    prefix: Option<String>,
    /// Cached environment snapshot with interior mutability for thread-safe lazy loading
    cache: RwLock<Option<HashMap<String, String>>>,
}

impl EnvVarSource {
    /// Creates a new environment variable source without prefix filtering.
    pub fn new() -> Self {
        Self {
            prefix: None,
            cache: RwLock::new(None),
        }
    }

    /// Creates a new environment variable source with prefix filtering.
    ///
    /// Only environment variables starting with the given prefix are visible,
    /// and the prefix is stripped from the key.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use envbind::adapters::EnvVarSource;
    ///
    /// let source = EnvVarSource::with_prefix("MYAPP_");
    /// ```
    pub fn with_prefix(prefix: impl Into<String>) -> Self {
        Self {
            prefix: Some(prefix.into()),
            cache: RwLock::new(None),
        }
    }

    /// Snapshots the process environment into a new map.
    fn load(&self) -> HashMap<String, String> {
        let mut cache = HashMap::new();

        for (key, value) in env::vars() {
            let key = if let Some(prefix) = &self.prefix {
                match key.strip_prefix(prefix) {
                    Some(stripped) => stripped.to_string(),
                    None => continue,
                }
            } else {
                key
            };

            cache.insert(key, value);
        }

        tracing::debug!(
            "Loaded {} environment variables (prefix={:?})",
            cache.len(),
            self.prefix
        );

        cache
    }

    /// Gets the snapshot, loading it if necessary.
    fn snapshot(&self) -> HashMap<String, String> {
        {
            let cache_guard = self.cache.read().unwrap();
            if let Some(cache) = cache_guard.as_ref() {
                return cache.clone();
            }
        }

        let new_cache = self.load();

        {
            let mut cache_guard = self.cache.write().unwrap();
            *cache_guard = Some(new_cache.clone());
        }

        new_cache
    }
}

impl Default for EnvVarSource {
    fn default() -> Self {
        Self::new()
    }
}

impl ValueSource for EnvVarSource {
    fn name(&self) -> &str {
        "env"
    }

    fn get(&self, key: &FieldKey) -> Option<String> {
        self.snapshot().get(key.as_str()).cloned()
    }
}
