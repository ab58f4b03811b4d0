// SPDX-License-Identifier: MIT OR Apache-2.0

//! Secret value type with masked rendering.
//!
//! A [`Secret`] stores a credential verbatim so downstream consumers can read
//! it, but every textual rendering of it (`Display`, `Debug`, the bind
//! report) goes through [`mask`], so the real value never reaches a log line
//! or error message by accident. This is a presentation-layer contract, not
//! encryption: direct field access still yields the real value.

use std::fmt;

/// The fixed redaction marker substituted for non-empty secret values.
pub const MASK: &str = "***";

/// Masks a raw value for display.
///
/// Returns [`MASK`] for any non-empty input and the empty string for an empty
/// input, so renderings still distinguish "set" from "unset" without leaking
/// the value.
///
/// # Examples
///
/// ```
/// use envbind::domain::secret::mask;
///
/// assert_eq!(mask("pass1234"), "***");
/// assert_eq!(mask(""), "");
/// ```
pub fn mask(value: &str) -> &'static str {
    if value.is_empty() {
        ""
    } else {
        MASK
    }
}

/// A string value that renders masked.
///
/// # Examples
///
/// ```
/// use envbind::domain::secret::Secret;
///
/// let password = Secret::from("pass1234");
/// assert_eq!(format!("{}", password), "***");
/// assert_eq!(password.expose(), "pass1234");
/// ```
#[derive(Clone, Default, PartialEq, Eq)]
pub struct Secret(String);

impl Secret {
    /// Creates a new `Secret` from a `String`.
    pub fn new(value: String) -> Self {
        Secret(value)
    }

    /// Returns the real, unmasked value.
    ///
    /// This is the only way to read a secret's contents; the name makes the
    /// exposure visible at the call site.
    pub fn expose(&self) -> &str {
        &self.0
    }

    /// Returns true if no value is stored.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the masked rendering of this secret.
    pub fn masked(&self) -> &'static str {
        mask(&self.0)
    }
}

impl From<String> for Secret {
    fn from(s: String) -> Self {
        Secret(s)
    }
}

impl From<&str> for Secret {
    fn from(s: &str) -> Self {
        Secret(s.to_string())
    }
}

impl fmt::Display for Secret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.masked())
    }
}

// Debug is masked too, so `{:?}` on a record holding a Secret stays safe.
impl fmt::Debug for Secret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Secret({})", self.masked())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mask_non_empty() {
        assert_eq!(mask("pass1234"), "***");
        assert_eq!(mask("x"), "***");
    }

    #[test]
    fn test_mask_empty() {
        assert_eq!(mask(""), "");
    }

    #[test]
    fn test_secret_expose() {
        let secret = Secret::from("hunter2");
        assert_eq!(secret.expose(), "hunter2");
    }

    #[test]
    fn test_secret_display_is_masked() {
        let secret = Secret::from("hunter2");
        assert_eq!(format!("{}", secret), "***");
    }

    #[test]
    fn test_secret_debug_is_masked() {
        let secret = Secret::from("hunter2");
        let rendered = format!("{:?}", secret);
        assert!(!rendered.contains("hunter2"));
        assert!(rendered.contains("***"));
    }

    #[test]
    fn test_empty_secret_renders_empty() {
        let secret = Secret::default();
        assert_eq!(format!("{}", secret), "");
        assert!(secret.is_empty());
    }

    #[test]
    fn test_secret_equality() {
        assert_eq!(Secret::from("a"), Secret::from("a"));
        assert_ne!(Secret::from("a"), Secret::from("b"));
    }
}
