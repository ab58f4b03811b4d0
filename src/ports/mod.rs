// SPDX-License-Identifier: MIT OR Apache-2.0

//! Ports layer containing trait definitions.
//!
//! This module contains the trait definitions (ports) for the binder's two
//! collaborators: the key/value source it reads raw values from and the
//! filesystem it probes for file- and dir-kind rules. Concrete
//! implementations live in the adapters layer.

pub mod filesystem;
pub mod source;

// Re-export commonly used types
pub use filesystem::Filesystem;
pub use source::ValueSource;
