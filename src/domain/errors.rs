// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for the binder crate.
//!
//! Two levels of error are distinguished. [`ValueError`] describes why a single
//! raw value was rejected and carries no field identity; the primitive
//! validators in [`crate::domain::validate`] produce it. [`BindError`] is what
//! the binder returns to callers: a field-scoped wrapper naming the offending
//! key, plus the registration-time defects (`MissingRequired`, `BadMetadata`)
//! that have no validator counterpart. All errors use `thiserror`.

use std::fmt;
use thiserror::Error;

/// Which kind of filesystem entry a path validator was probing for.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PathKind {
    /// Any filesystem entry, file or directory.
    Path,
    /// Specifically a directory.
    Dir,
}

impl fmt::Display for PathKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PathKind::Path => write!(f, "path"),
            PathKind::Dir => write!(f, "dir"),
        }
    }
}

/// Why a single raw value was rejected.
///
/// Produced by the primitive validators and the coercion step. The binder
/// wraps it in [`BindError::Field`] together with the offending field's key.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ValueError {
    /// The value was empty where a non-empty value was needed.
    #[error("parameter not specified")]
    Empty,

    /// The value is not a member of the declared option set.
    #[error("invalid parameter: {value}, available: {options:?}")]
    InvalidOption {
        /// The rejected value
        value: String,
        /// The declared options, in declaration order
        options: Vec<String>,
    },

    /// The filesystem entry the value points at does not exist.
    #[error("{kind} not exist at: {path}")]
    PathNotFound {
        /// The probed path
        path: String,
        /// Whether a plain path or a directory was required
        kind: PathKind,
    },

    /// The existence probe itself failed.
    #[error("failed to check if {kind} exists at: {path}, error: {source}")]
    Io {
        /// The probed path
        path: String,
        /// Whether a plain path or a directory was required
        kind: PathKind,
        /// The underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// The value could not be coerced to the declared numeric type.
    #[error("can't convert to int, error: {source}")]
    TypeMismatch {
        /// The underlying parse error
        #[source]
        source: std::num::ParseIntError,
    },
}

/// The error type returned by a bind call.
///
/// Binding is fail-fast: the first field that fails aborts the whole bind and
/// its error names the field's key. It is marked `#[non_exhaustive]` to allow
/// future additions without breaking backwards compatibility.
///
/// # Examples
///
/// ```
/// use envbind::domain::errors::BindError;
///
/// fn check() -> Result<(), BindError> {
///     Err(BindError::MissingRequired {
///         key: "mandatory".to_string(),
///     })
/// }
/// ```
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum BindError {
    /// A field's raw value failed validation or coercion.
    #[error("invalid value for '{key}': {source}")]
    Field {
        /// The key of the offending field
        key: String,
        /// Why the value was rejected
        #[source]
        source: ValueError,
    },

    /// A field marked `required` resolved to an empty value.
    #[error("required field '{key}' is not set")]
    MissingRequired {
        /// The key of the offending field
        key: String,
    },

    /// A declarative tag string is malformed.
    ///
    /// This is an authoring defect in the record's declaration, not bad
    /// input: it is reported at registration time, before any value is read,
    /// and callers should treat it as non-recoverable.
    #[error("malformed field tag '{tag}': {reason}")]
    BadMetadata {
        /// The offending tag string
        tag: String,
        /// What was wrong with it
        reason: String,
    },
}

impl BindError {
    /// Wraps a [`ValueError`] with the key of the field it occurred on.
    pub fn field(key: impl Into<String>, source: ValueError) -> Self {
        BindError::Field {
            key: key.into(),
            source,
        }
    }
}

/// A specialized Result type for bind operations.
pub type Result<T> = std::result::Result<T, BindError>;
