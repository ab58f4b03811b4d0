// SPDX-License-Identifier: MIT OR Apache-2.0

//! Field key newtype for type-safe lookup-key handling.
//!
//! This module provides the `FieldKey` type, a newtype wrapper around `String`
//! that identifies one configuration field in the key/value source and prevents
//! accidental confusion with other string values.

use std::fmt;
use std::hash::{Hash, Hasher};

/// A type-safe wrapper for configuration field keys.
///
/// `FieldKey` is the name under which a field's raw value is looked up in a
/// [`ValueSource`](crate::ports::ValueSource). It is also the key reported in
/// field-scoped bind errors.
///
/// # Examples
///
/// ```
/// use envbind::domain::field_key::FieldKey;
///
/// let key = FieldKey::from("build_number");
/// assert_eq!(key.as_str(), "build_number");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FieldKey(String);

impl FieldKey {
    /// Creates a new `FieldKey` from a `String`.
    ///
    /// # Examples
    ///
    /// ```
    /// use envbind::domain::field_key::FieldKey;
    ///
    /// let key = FieldKey::new("export_method".to_string());
    /// assert_eq!(key.as_str(), "export_method");
    /// ```
    pub fn new(key: String) -> Self {
        FieldKey(key)
    }

    /// Returns the key as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Converts the `FieldKey` into its inner `String`.
    pub fn into_string(self) -> String {
        self.0
    }
}

impl From<String> for FieldKey {
    fn from(s: String) -> Self {
        FieldKey(s)
    }
}

impl From<&str> for FieldKey {
    fn from(s: &str) -> Self {
        FieldKey(s.to_string())
    }
}

impl From<FieldKey> for String {
    fn from(key: FieldKey) -> Self {
        key.0
    }
}

impl AsRef<str> for FieldKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for FieldKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Hash for FieldKey {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.hash(state);
    }
}
