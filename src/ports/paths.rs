//! Path port for system-touching path queries.
//!
//! Pure path algebra (joining, extensions, components) stays on
//! `std::path`; only the queries that consult process or filesystem state
//! go through this seam.

use std::io;
use std::path::{Path, PathBuf};

/// Provides process-level path state and resolution.
pub trait Paths: Send + Sync {
    /// Returns the current working directory.
    ///
    /// # Errors
    ///
    /// Returns the platform error if the working directory is gone or
    /// inaccessible.
    fn current_dir(&self) -> io::Result<PathBuf>;

    /// Changes the current working directory.
    ///
    /// # Errors
    ///
    /// Returns the platform error if the directory does not exist or
    /// cannot be entered.
    fn set_current_dir(&self, path: &Path) -> io::Result<()>;

    /// Returns the directory for temporary files.
    fn temp_dir(&self) -> PathBuf;

    /// Returns the current user's home directory, if known.
    fn home_dir(&self) -> Option<PathBuf>;

    /// Resolves a path to absolute form with `.`/`..` and links removed.
    ///
    /// # Errors
    ///
    /// Returns the platform error if the path cannot be resolved.
    fn canonicalize(&self, path: &Path) -> io::Result<PathBuf>;
}
