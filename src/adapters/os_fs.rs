// SPDX-License-Identifier: MIT OR Apache-2.0

//! Operating system filesystem adapter.
//!
//! Implements the [`Filesystem`] port with `std::fs`. A missing entry is
//! `Ok(false)`, not an error; only probe failures (permissions and the like)
//! surface as `Err`.

use crate::ports::Filesystem;
use std::fs;
use std::io;

/// Filesystem adapter backed by `std::fs::metadata`.
///
/// # Examples
///
/// ```rust
/// use envbind::adapters::OsFilesystem;
/// use envbind::ports::Filesystem;
///
/// let fs = OsFilesystem;
/// assert!(!fs.path_exists("/no/such/entry/anywhere").unwrap());
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct OsFilesystem;

impl Filesystem for OsFilesystem {
    fn path_exists(&self, path: &str) -> io::Result<bool> {
        match fs::metadata(path) {
            Ok(_) => Ok(true),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(false),
            Err(e) => Err(e),
        }
    }

    fn dir_exists(&self, path: &str) -> io::Result<bool> {
        match fs::metadata(path) {
            Ok(metadata) => Ok(metadata.is_dir()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(false),
            Err(e) => Err(e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::{tempdir, NamedTempFile};

    #[test]
    fn test_path_exists_for_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "content").unwrap();

        let fs = OsFilesystem;
        assert!(fs.path_exists(file.path().to_str().unwrap()).unwrap());
    }

    #[test]
    fn test_path_exists_for_dir() {
        let dir = tempdir().unwrap();
        let fs = OsFilesystem;
        assert!(fs.path_exists(dir.path().to_str().unwrap()).unwrap());
    }

    #[test]
    fn test_path_missing() {
        let fs = OsFilesystem;
        assert!(!fs.path_exists("/no/such/entry/anywhere").unwrap());
    }

    #[test]
    fn test_dir_exists_for_dir() {
        let dir = tempdir().unwrap();
        let fs = OsFilesystem;
        assert!(fs.dir_exists(dir.path().to_str().unwrap()).unwrap());
    }

    #[test]
    fn test_dir_exists_rejects_file() {
        let file = NamedTempFile::new().unwrap();
        let fs = OsFilesystem;
        assert!(!fs.dir_exists(file.path().to_str().unwrap()).unwrap());
    }

    #[test]
    fn test_dir_missing() {
        let fs = OsFilesystem;
        assert!(!fs.dir_exists("/no/such/dir/anywhere").unwrap());
    }
}
