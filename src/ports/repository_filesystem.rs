//! Working-root filesystem operations.
//!
//! This port provides generic file I/O scoped to the directory the provisioner
//! runs in. It does not know which artifacts live where; that belongs to
//! `domain::artifact`.

use std::path::PathBuf;

use crate::domain::AppError;

/// Port for low-level filesystem operations under the working root.
///
/// All `path` arguments are relative to the root.
/// Implementations must reject paths that escape the root boundary.
pub trait RepositoryFilesystemPort {
    /// Read a file as UTF-8 text.
    fn read_file(&self, path: &str) -> Result<String, AppError>;

    /// Write UTF-8 content to a file, creating parent directories as needed.
    fn write_file(&self, path: &str, content: &str) -> Result<(), AppError>;

    /// Set the executable bit on a file (Unix-only).
    fn set_executable(&self, path: &str) -> Result<(), AppError>;

    /// Check whether a regular file exists.
    fn file_exists(&self, path: &str) -> bool;

    /// Check whether a path is a directory.
    fn is_dir(&self, path: &str) -> bool;

    /// Check whether a directory is absent or has no entries.
    fn is_missing_or_empty(&self, path: &str) -> Result<bool, AppError>;

    /// Resolve a relative path to an absolute path within the root.
    fn resolve_path(&self, path: &str) -> PathBuf;
}
