// SPDX-License-Identifier: MIT OR Apache-2.0

//! Adapters layer containing port implementations.
//!
//! This module contains concrete implementations of the traits defined in the
//! ports layer: value sources (process environment, in-memory map) and the
//! operating-system filesystem probe.

pub mod env_var;
pub mod in_memory;
pub mod os_fs;

// Re-export adapters
pub use env_var::EnvVarSource;
pub use in_memory::InMemorySource;
pub use os_fs::OsFilesystem;
