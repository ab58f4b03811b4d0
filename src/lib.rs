// SPDX-License-Identifier: MIT OR Apache-2.0

//! A declarative environment configuration binder.
//!
//! This crate populates a strongly-typed configuration record from named
//! string inputs (environment-style key/value pairs), applying per-field
//! validation and type coercion driven by lightweight declarative tag strings
//! such as `"build_number"`, `"mandatory,required"`, or
//! `"export_method,opt[dev,qa,prod]"`.
//!
//! # Architecture
//!
//! The crate follows hexagonal architecture principles:
//!
//! - **Domain Layer**: field keys and rules, the tag parser, primitive
//!   validators, the multiline splitter, secret masking, and errors
//! - **Ports**: trait definitions for the two collaborators
//!   (`ValueSource`, `Filesystem`)
//! - **Adapters**: the process environment, an in-memory map, and the
//!   operating-system filesystem probe
//! - **Binder**: the field registration table and the dispatcher that walks
//!   it
//!
//! # Binding model
//!
//! Each field of a caller-owned record is registered into a
//! [`FieldSet`](binder::FieldSet) with a tag string naming its lookup key and
//! at most one modifier (`required`, `file`, `dir`, `opt[a,b,c]`). A single
//! [`Binder::bind`](binder::Binder::bind) call then resolves, validates,
//! coerces, and assigns every field in order, failing fast on the first bad
//! field with an error naming its key. Absent keys read as empty strings;
//! secret-typed fields store their real value but render masked everywhere.
//!
//! # Quick Start
//!
//! ```rust
//! use envbind::prelude::*;
//!
//! #[derive(Default)]
//! struct Config {
//!     name: String,
//!     build_number: i64,
//!     is_update: bool,
//!     items: Vec<String>,
//!     password: Secret,
//! }
//!
//! # fn main() -> envbind::domain::Result<()> {
//! let source = InMemorySource::from_pairs([
//!     ("name", "Example"),
//!     ("build_number", "11"),
//!     ("is_update", "yes"),
//!     ("items", "item1|item2|item3"),
//!     ("password", "pass1234"),
//! ]);
//!
//! let mut config = Config::default();
//! let mut fields = FieldSet::new();
//! fields
//!     .add("name", &mut config.name)?
//!     .add("build_number", &mut config.build_number)?
//!     .add("is_update", &mut config.is_update)?
//!     .add("items", &mut config.items)?
//!     .add("password", &mut config.password)?;
//!
//! let report = Binder::new(&source).bind(fields)?;
//! assert_eq!(config.build_number, 11);
//! assert_eq!(report.get("password"), Some("***"));
//! # Ok(())
//! # }
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![warn(clippy::all)]

pub mod adapters;
pub mod binder;
pub mod domain;
pub mod ports;

/// Commonly used types and traits.
///
/// This module re-exports the most commonly used types and traits for convenient access.
pub mod prelude {
    pub use crate::adapters::{EnvVarSource, InMemorySource, OsFilesystem};
    pub use crate::binder::{BindReport, Binder, FieldSet, FieldValue};
    pub use crate::domain::{BindError, FieldKey, FieldRule, Result, RuleKind, Secret, ValueError};
    pub use crate::ports::{Filesystem, ValueSource};
}
