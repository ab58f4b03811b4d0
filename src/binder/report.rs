// SPDX-License-Identifier: MIT OR Apache-2.0

//! Bind report with masked rendering.
//!
//! A successful bind returns a [`BindReport`]: the ordered key/rendered-value
//! pairs of every bound field. Values are rendered through each type's
//! [`FieldValue::render`](crate::binder::FieldValue::render), so secret
//! fields arrive here already masked, so the report (and anything derived
//! from it, logs or serialized output) can never leak a credential.

use serde::Serialize;
use std::fmt;

/// One bound field's key and rendered value.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct BindEntry {
    /// The field's lookup key
    pub key: String,
    /// The rendered (secret-masked) value
    pub value: String,
}

/// The rendered outcome of a successful bind, in field registration order.
///
/// # Examples
///
/// ```
/// use envbind::binder::BindReport;
///
/// let mut report = BindReport::default();
/// report.push("name", "Example");
/// report.push("password", "***");
///
/// assert_eq!(report.get("name"), Some("Example"));
/// assert_eq!(format!("{}", report), "name=Example\npassword=***");
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct BindReport {
    entries: Vec<BindEntry>,
}

impl BindReport {
    /// Creates an empty report.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends one rendered field.
    pub fn push(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.entries.push(BindEntry {
            key: key.into(),
            value: value.into(),
        });
    }

    /// The entries in field registration order.
    pub fn entries(&self) -> &[BindEntry] {
        &self.entries
    }

    /// Looks up the rendered value for a key.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|entry| entry.key == key)
            .map(|entry| entry.value.as_str())
    }

    /// Number of bound fields.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if no fields were bound.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl fmt::Display for BindReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, entry) in self.entries.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{}={}", entry.key, entry.value)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_and_get() {
        let mut report = BindReport::new();
        report.push("name", "Example");
        assert_eq!(report.get("name"), Some("Example"));
        assert_eq!(report.get("missing"), None);
    }

    #[test]
    fn test_entries_keep_order() {
        let mut report = BindReport::new();
        report.push("b", "2");
        report.push("a", "1");
        let keys: Vec<_> = report.entries().iter().map(|e| e.key.as_str()).collect();
        assert_eq!(keys, vec!["b", "a"]);
    }

    #[test]
    fn test_display_format() {
        let mut report = BindReport::new();
        report.push("name", "Example");
        report.push("empty", "");
        report.push("password", "***");
        assert_eq!(format!("{}", report), "name=Example\nempty=\npassword=***");
    }

    #[test]
    fn test_empty_report() {
        let report = BindReport::default();
        assert!(report.is_empty());
        assert_eq!(report.len(), 0);
        assert_eq!(format!("{}", report), "");
    }

    #[test]
    fn test_report_is_serializable() {
        fn assert_serialize<T: serde::Serialize>() {}
        assert_serialize::<BindReport>();
        assert_serialize::<BindEntry>();
    }
}
