// SPDX-License-Identifier: MIT OR Apache-2.0

//! Primitive value validators.
//!
//! Each validator checks one raw string against one rule and nothing else;
//! the binder composes them per field. Emptiness and required-ness are
//! deliberately decoupled: [`validate_int`] accepts the empty string (the
//! field is optional-but-typed, its value becomes zero), while the binder
//! gates required fields through [`validate_if_not_empty`] before any
//! kind-specific check runs.

use crate::domain::errors::{PathKind, ValueError};
use crate::ports::Filesystem;

/// Fails with [`ValueError::Empty`] iff the value is the empty string.
pub fn validate_if_not_empty(value: &str) -> Result<(), ValueError> {
    if value.is_empty() {
        return Err(ValueError::Empty);
    }
    Ok(())
}

/// Checks that the value is an exact member of the declared option set.
///
/// Empty values are rejected as [`ValueError::Empty`] before the membership
/// scan, even if the option set itself contains an empty string. The scan is
/// case-sensitive and order-preserving; the first match short-circuits.
pub fn validate_with_options(value: &str, options: &[String]) -> Result<(), ValueError> {
    validate_if_not_empty(value)?;
    for option in options {
        if option == value {
            return Ok(());
        }
    }
    Err(ValueError::InvalidOption {
        value: value.to_string(),
        options: options.to_vec(),
    })
}

/// Checks that the value names an existing filesystem entry.
///
/// The existence probe is delegated to the [`Filesystem`] port; a probe
/// failure surfaces as [`ValueError::Io`], an absent entry as
/// [`ValueError::PathNotFound`].
pub fn validate_if_path_exists(fs: &dyn Filesystem, value: &str) -> Result<(), ValueError> {
    validate_if_not_empty(value)?;
    match fs.path_exists(value) {
        Ok(true) => Ok(()),
        Ok(false) => Err(ValueError::PathNotFound {
            path: value.to_string(),
            kind: PathKind::Path,
        }),
        Err(source) => Err(ValueError::Io {
            path: value.to_string(),
            kind: PathKind::Path,
            source,
        }),
    }
}

/// Checks that the value names an existing directory.
pub fn validate_if_dir_exists(fs: &dyn Filesystem, value: &str) -> Result<(), ValueError> {
    validate_if_not_empty(value)?;
    match fs.dir_exists(value) {
        Ok(true) => Ok(()),
        Ok(false) => Err(ValueError::PathNotFound {
            path: value.to_string(),
            kind: PathKind::Dir,
        }),
        Err(source) => Err(ValueError::Io {
            path: value.to_string(),
            kind: PathKind::Dir,
            source,
        }),
    }
}

/// Parses the value as a base-10 signed integer.
///
/// The empty string is not an error here: it coerces to the type's zero
/// value, leaving the required-or-not decision to the binder. Generic over
/// the integer width so every integer field type shares the same rule.
pub fn validate_int<T>(value: &str) -> Result<T, ValueError>
where
    T: std::str::FromStr<Err = std::num::ParseIntError> + Default,
{
    if value.is_empty() {
        return Ok(T::default());
    }
    value
        .parse::<T>()
        .map_err(|source| ValueError::TypeMismatch { source })
}
