// SPDX-License-Identifier: MIT OR Apache-2.0

//! Key/value source trait definition.
//!
//! This module defines the `ValueSource` trait, the port through which the
//! binder reads raw string values. In process-boundary deployments the
//! implementation is the operating system's environment-variable table, but
//! the binder never depends on that specifically: any string-keyed lookup
//! works, which is what makes binds deterministic to test.

use crate::domain::FieldKey;

/// A read-only string-keyed lookup supplying raw input values.
///
/// A key that is absent from the source is treated as the empty string by the
/// binder, so implementations only distinguish present from absent and never
/// fail.
///
/// # Thread Safety
///
/// Implementations must be `Send + Sync`; the binder itself never mutates a
/// source.
///
/// # Examples
///
/// ```rust
/// use envbind::ports::ValueSource;
/// use envbind::domain::FieldKey;
///
/// struct OneKey;
///
/// impl ValueSource for OneKey {
///     fn name(&self) -> &str {
///         "one-key"
///     }
///
///     fn get(&self, key: &FieldKey) -> Option<String> {
///         (key.as_str() == "name").then(|| "Example".to_string())
///     }
/// }
///
/// let source = OneKey;
/// assert_eq!(source.get(&FieldKey::from("name")).as_deref(), Some("Example"));
/// assert_eq!(source.get(&FieldKey::from("other")), None);
/// ```
pub trait ValueSource: Send + Sync {
    /// Returns the name of this source, used for logging and debugging.
    fn name(&self) -> &str;

    /// Retrieves the raw value for the given key, or `None` if absent.
    fn get(&self, key: &FieldKey) -> Option<String>;

    /// Retrieves the raw value for the given key string.
    ///
    /// Convenience wrapper equivalent to `get(&FieldKey::from(key))`.
    fn get_str(&self, key: &str) -> Option<String> {
        self.get(&FieldKey::from(key))
    }
}
