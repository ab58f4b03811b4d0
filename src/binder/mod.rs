// SPDX-License-Identifier: MIT OR Apache-2.0

//! Binder layer: the dispatcher that populates a configuration record.
//!
//! The [`Binder`] walks a [`FieldSet`] in registration order and, for each
//! field: looks the raw value up in the [`ValueSource`] (absent means empty),
//! applies the required gate, dispatches the rule-kind validator, coerces via
//! the field's [`FieldValue`] impl, and assigns into the caller's record.
//! Binding is all-or-nothing in the fail-fast sense: the first failing field
//! aborts the bind with a field-scoped error and no further field is touched.

pub mod field_set;
pub mod report;

// Re-export commonly used types
pub use field_set::{FieldSet, FieldValue};
pub use report::{BindEntry, BindReport};

use crate::adapters::OsFilesystem;
use crate::domain::validate::{
    validate_if_dir_exists, validate_if_not_empty, validate_if_path_exists, validate_with_options,
};
use crate::domain::{BindError, Result, RuleKind};
use crate::ports::{Filesystem, ValueSource};

static OS_FILESYSTEM: OsFilesystem = OsFilesystem;

/// Binds registered fields from a key/value source.
///
/// A binder borrows its source (and filesystem) for the duration of the call
/// and holds no state across binds; independent binds against independent
/// records are freely parallel.
///
/// # Examples
///
/// ```
/// use envbind::adapters::InMemorySource;
/// use envbind::binder::{Binder, FieldSet};
///
/// #[derive(Default)]
/// struct Config {
///     name: String,
///     is_update: bool,
/// }
///
/// # fn main() -> envbind::domain::Result<()> {
/// let source = InMemorySource::from_pairs([("name", "Example"), ("is_update", "yes")]);
///
/// let mut config = Config::default();
/// let mut fields = FieldSet::new();
/// fields
///     .add("name", &mut config.name)?
///     .add("is_update", &mut config.is_update)?;
///
/// let report = Binder::new(&source).bind(fields)?;
/// assert_eq!(config.name, "Example");
/// assert!(config.is_update);
/// assert_eq!(report.get("is_update"), Some("true"));
/// # Ok(())
/// # }
/// ```
pub struct Binder<'c> {
    source: &'c dyn ValueSource,
    fs: &'c dyn Filesystem,
}

impl<'c> Binder<'c> {
    /// Creates a binder over the given source, probing the real filesystem
    /// for file- and dir-kind rules.
    pub fn new(source: &'c dyn ValueSource) -> Self {
        Self {
            source,
            fs: &OS_FILESYSTEM,
        }
    }

    /// Creates a binder with an explicit filesystem collaborator.
    pub fn with_filesystem(source: &'c dyn ValueSource, fs: &'c dyn Filesystem) -> Self {
        Self { source, fs }
    }

    /// Binds every registered field, in registration order.
    ///
    /// On success the caller's record is fully populated and the returned
    /// [`BindReport`] holds the rendered (secret-masked) value of every
    /// field. On failure the error names the offending field's key; the
    /// record must be treated as unusable, since fields registered before the
    /// failing one may already have been assigned.
    pub fn bind(&self, mut fields: FieldSet<'_>) -> Result<BindReport> {
        let mut report = BindReport::new();

        for field in fields.fields_mut() {
            let key = field.rule.key().clone();
            let raw = self.source.get(&key).unwrap_or_default();

            if field.rule.required() && validate_if_not_empty(&raw).is_err() {
                return Err(BindError::MissingRequired {
                    key: key.into_string(),
                });
            }

            let structural = match field.rule.kind() {
                RuleKind::Plain => Ok(()),
                RuleKind::File => validate_if_path_exists(self.fs, &raw),
                RuleKind::Dir => validate_if_dir_exists(self.fs, &raw),
                RuleKind::Options(options) => validate_with_options(&raw, options),
            };
            structural.map_err(|e| BindError::field(key.as_str(), e))?;

            field
                .slot
                .assign(&raw)
                .map_err(|e| BindError::field(key.as_str(), e))?;

            let rendered = field.slot.render();
            tracing::debug!(
                "bound field '{}' from source '{}': {}",
                key,
                self.source.name(),
                rendered
            );
            report.push(key.as_str(), rendered);
        }

        Ok(report)
    }
}
