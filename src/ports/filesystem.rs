// SPDX-License-Identifier: MIT OR Apache-2.0

//! Filesystem probe trait definition.
//!
//! File- and dir-kind field rules need to know whether a path exists. That
//! check is the binder's only I/O, and it goes through this port so tests can
//! substitute an in-memory fake instead of touching the real filesystem.

use std::io;

/// An existence probe for filesystem entries.
///
/// Both methods answer with `Ok(bool)` when the probe itself succeeded; a
/// probe failure (permissions, I/O trouble) is an `Err`, which the binder
/// reports as its own I/O error rather than "not found".
///
/// # Examples
///
/// ```rust
/// use envbind::ports::Filesystem;
///
/// struct Nothing;
///
/// impl Filesystem for Nothing {
///     fn path_exists(&self, _path: &str) -> std::io::Result<bool> {
///         Ok(false)
///     }
///
///     fn dir_exists(&self, _path: &str) -> std::io::Result<bool> {
///         Ok(false)
///     }
/// }
/// ```
pub trait Filesystem: Send + Sync {
    /// Returns whether any filesystem entry (file or directory) exists at `path`.
    fn path_exists(&self, path: &str) -> io::Result<bool>;

    /// Returns whether a directory exists at `path`.
    ///
    /// An existing entry that is not a directory counts as `Ok(false)`.
    fn dir_exists(&self, path: &str) -> io::Result<bool>;
}
