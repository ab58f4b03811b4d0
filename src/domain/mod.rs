// SPDX-License-Identifier: MIT OR Apache-2.0

//! Domain layer containing core binder logic and types.
//!
//! This module contains the core types and pure logic of the binder: field
//! keys and rules, the declarative tag parser, primitive validators, the
//! multiline splitter, secret masking, and the error types. It performs no
//! I/O of its own; filesystem probes go through the ports layer.

pub mod errors;
pub mod field_key;
pub mod field_rule;
pub mod multiline;
pub mod secret;
pub mod validate;

// Re-export commonly used types
pub use errors::{BindError, PathKind, Result, ValueError};
pub use field_key::FieldKey;
pub use field_rule::{FieldRule, RuleKind};
pub use multiline::parse_multiline_input;
pub use secret::{mask, Secret, MASK};
