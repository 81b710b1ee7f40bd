//! Asynchronous filesystem port.
//!
//! Mirrors the core operations of [`super::filesystem::FileSystem`] for
//! async callers. Adapters return the platform future unmodified; no
//! additional cancellation or ordering contract is layered on top.

use std::io;
use std::path::Path;

use async_trait::async_trait;

use super::filesystem::{DirEntry, Metadata};

/// Provides asynchronous file and directory access.
#[async_trait]
pub trait AsyncFileSystem: Send + Sync {
    /// Reads the entire contents of a file.
    ///
    /// # Errors
    ///
    /// Returns the platform error, e.g. `NotFound` for a missing file.
    async fn read(&self, path: &Path) -> io::Result<Vec<u8>>;

    /// Reads the entire contents of a file as a UTF-8 string.
    ///
    /// # Errors
    ///
    /// Returns the platform error if the file cannot be read or is not
    /// valid UTF-8.
    async fn read_to_string(&self, path: &Path) -> io::Result<String>;

    /// Writes the given contents to a file, creating or truncating it.
    ///
    /// # Errors
    ///
    /// Returns the platform error if the write fails.
    async fn write(&self, path: &Path, contents: &[u8]) -> io::Result<()>;

    /// Creates a directory and any missing ancestors.
    ///
    /// # Errors
    ///
    /// Returns the platform error if a component cannot be created.
    async fn create_dir_all(&self, path: &Path) -> io::Result<()>;

    /// Removes a file.
    ///
    /// # Errors
    ///
    /// Returns the platform error if the file cannot be removed.
    async fn remove_file(&self, path: &Path) -> io::Result<()>;

    /// Removes a directory and everything under it.
    ///
    /// # Errors
    ///
    /// Returns the platform error if the directory cannot be removed.
    async fn remove_dir_all(&self, path: &Path) -> io::Result<()>;

    /// Copies a file, returning the number of bytes copied.
    ///
    /// # Errors
    ///
    /// Returns the platform error if the copy fails.
    async fn copy(&self, from: &Path, to: &Path) -> io::Result<u64>;

    /// Renames a file or directory.
    ///
    /// # Errors
    ///
    /// Returns the platform error if the entry cannot be moved.
    async fn rename(&self, from: &Path, to: &Path) -> io::Result<()>;

    /// Lists the entries of a directory, sorted by path.
    ///
    /// # Errors
    ///
    /// Returns the platform error if the path is not a readable directory.
    async fn read_dir(&self, path: &Path) -> io::Result<Vec<DirEntry>>;

    /// Returns a metadata snapshot for the entry at `path`.
    ///
    /// # Errors
    ///
    /// Returns the platform error if the entry does not exist.
    async fn metadata(&self, path: &Path) -> io::Result<Metadata>;

    /// Returns `true` if an entry exists at `path`.
    async fn exists(&self, path: &Path) -> bool;
}
