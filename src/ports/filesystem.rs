//! Filesystem port mirroring `std::fs` file and directory operations.

use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The kind of a filesystem entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FileKind {
    /// A regular file.
    File,
    /// A directory.
    Dir,
    /// A symbolic link.
    Symlink,
}

/// Snapshot of one entry's metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Metadata {
    /// The kind of entry this metadata describes.
    pub kind: FileKind,
    /// Size in bytes. Zero for directories.
    pub len: u64,
    /// Whether the entry refuses modification.
    pub readonly: bool,
    /// Last modification time, if the platform records one.
    pub modified: Option<DateTime<Utc>>,
    /// Last access time, if the platform records one.
    pub accessed: Option<DateTime<Utc>>,
    /// Creation time, if the platform records one.
    pub created: Option<DateTime<Utc>>,
}

impl Metadata {
    /// Returns `true` if this entry is a regular file.
    #[must_use]
    pub fn is_file(&self) -> bool {
        self.kind == FileKind::File
    }

    /// Returns `true` if this entry is a directory.
    #[must_use]
    pub fn is_dir(&self) -> bool {
        self.kind == FileKind::Dir
    }
}

impl From<std::fs::Metadata> for Metadata {
    fn from(meta: std::fs::Metadata) -> Self {
        let kind = if meta.file_type().is_symlink() {
            FileKind::Symlink
        } else if meta.is_dir() {
            FileKind::Dir
        } else {
            FileKind::File
        };
        Self {
            kind,
            len: meta.len(),
            readonly: meta.permissions().readonly(),
            modified: meta.modified().ok().map(DateTime::<Utc>::from),
            accessed: meta.accessed().ok().map(DateTime::<Utc>::from),
            created: meta.created().ok().map(DateTime::<Utc>::from),
        }
    }
}

/// A single directory entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DirEntry {
    /// Full path of the entry.
    pub path: PathBuf,
    /// The kind of the entry.
    pub kind: FileKind,
}

/// Provides file and directory access.
///
/// Every method forwards to the equivalent platform operation and
/// propagates the platform's `io::Error` unchanged. Abstracting the
/// filesystem lets tests run against an in-memory tree instead of disk.
pub trait FileSystem: Send + Sync {
    /// Reads the entire contents of a file.
    ///
    /// # Errors
    ///
    /// Returns the platform error, e.g. `NotFound` for a missing file.
    fn read(&self, path: &Path) -> io::Result<Vec<u8>>;

    /// Reads the entire contents of a file as a UTF-8 string.
    ///
    /// # Errors
    ///
    /// Returns the platform error if the file cannot be read or is not
    /// valid UTF-8.
    fn read_to_string(&self, path: &Path) -> io::Result<String>;

    /// Writes the given contents to a file, creating or truncating it.
    ///
    /// # Errors
    ///
    /// Returns the platform error if the write fails.
    fn write(&self, path: &Path, contents: &[u8]) -> io::Result<()>;

    /// Appends the given contents to a file, creating it if missing.
    ///
    /// # Errors
    ///
    /// Returns the platform error if the write fails.
    fn append(&self, path: &Path, contents: &[u8]) -> io::Result<()>;

    /// Copies a file, returning the number of bytes copied.
    ///
    /// # Errors
    ///
    /// Returns the platform error if the source cannot be read or the
    /// destination cannot be written.
    fn copy(&self, from: &Path, to: &Path) -> io::Result<u64>;

    /// Renames a file or directory, moving it between directories if needed.
    ///
    /// # Errors
    ///
    /// Returns the platform error if the entry cannot be moved.
    fn rename(&self, from: &Path, to: &Path) -> io::Result<()>;

    /// Removes a file.
    ///
    /// # Errors
    ///
    /// Returns the platform error if the file does not exist or cannot be
    /// removed.
    fn remove_file(&self, path: &Path) -> io::Result<()>;

    /// Creates a directory. The parent must already exist.
    ///
    /// # Errors
    ///
    /// Returns the platform error, e.g. `AlreadyExists`.
    fn create_dir(&self, path: &Path) -> io::Result<()>;

    /// Creates a directory and any missing ancestors.
    ///
    /// # Errors
    ///
    /// Returns the platform error if a component cannot be created.
    fn create_dir_all(&self, path: &Path) -> io::Result<()>;

    /// Removes an empty directory.
    ///
    /// # Errors
    ///
    /// Returns the platform error if the directory is missing or not empty.
    fn remove_dir(&self, path: &Path) -> io::Result<()>;

    /// Removes a directory and everything under it.
    ///
    /// # Errors
    ///
    /// Returns the platform error if the directory cannot be removed.
    fn remove_dir_all(&self, path: &Path) -> io::Result<()>;

    /// Lists the entries of a directory, sorted by path.
    ///
    /// # Errors
    ///
    /// Returns the platform error if the path is not a readable directory.
    fn read_dir(&self, path: &Path) -> io::Result<Vec<DirEntry>>;

    /// Returns a metadata snapshot for the entry at `path`.
    ///
    /// # Errors
    ///
    /// Returns the platform error if the entry does not exist.
    fn metadata(&self, path: &Path) -> io::Result<Metadata>;

    /// Returns `true` if an entry exists at `path`.
    fn exists(&self, path: &Path) -> bool;

    /// Returns `true` if `path` is an existing regular file.
    fn is_file(&self, path: &Path) -> bool;

    /// Returns `true` if `path` is an existing directory.
    fn is_dir(&self, path: &Path) -> bool;

    /// Sets or clears the read-only attribute of an entry.
    ///
    /// # Errors
    ///
    /// Returns the platform error if the entry does not exist or its
    /// permissions cannot be changed.
    fn set_readonly(&self, path: &Path, readonly: bool) -> io::Result<()>;

    /// Sets the access and modification times of an entry.
    ///
    /// # Errors
    ///
    /// Returns the platform error if the entry does not exist or its times
    /// cannot be changed.
    fn set_file_times(
        &self,
        path: &Path,
        accessed: DateTime<Utc>,
        modified: DateTime<Utc>,
    ) -> io::Result<()>;

    /// Opens a file for reading.
    ///
    /// The returned reader is the stream abstraction: callers hold a plain
    /// `std::io::Read` regardless of which adapter produced it.
    ///
    /// # Errors
    ///
    /// Returns the platform error if the file cannot be opened.
    fn open(&self, path: &Path) -> io::Result<Box<dyn Read + Send>>;

    /// Opens a file for writing, creating or truncating it.
    ///
    /// The returned writer is the stream abstraction; contents become
    /// visible no later than when the writer is flushed or dropped.
    ///
    /// # Errors
    ///
    /// Returns the platform error if the file cannot be created.
    fn create(&self, path: &Path) -> io::Result<Box<dyn Write + Send>>;
}

// Shared handles forward like the filesystem they wrap, so an `Arc`ed
// double can be handed to adapters that take ownership.
impl<T: FileSystem + ?Sized> FileSystem for std::sync::Arc<T> {
    fn read(&self, path: &Path) -> io::Result<Vec<u8>> {
        (**self).read(path)
    }

    fn read_to_string(&self, path: &Path) -> io::Result<String> {
        (**self).read_to_string(path)
    }

    fn write(&self, path: &Path, contents: &[u8]) -> io::Result<()> {
        (**self).write(path, contents)
    }

    fn append(&self, path: &Path, contents: &[u8]) -> io::Result<()> {
        (**self).append(path, contents)
    }

    fn copy(&self, from: &Path, to: &Path) -> io::Result<u64> {
        (**self).copy(from, to)
    }

    fn rename(&self, from: &Path, to: &Path) -> io::Result<()> {
        (**self).rename(from, to)
    }

    fn remove_file(&self, path: &Path) -> io::Result<()> {
        (**self).remove_file(path)
    }

    fn create_dir(&self, path: &Path) -> io::Result<()> {
        (**self).create_dir(path)
    }

    fn create_dir_all(&self, path: &Path) -> io::Result<()> {
        (**self).create_dir_all(path)
    }

    fn remove_dir(&self, path: &Path) -> io::Result<()> {
        (**self).remove_dir(path)
    }

    fn remove_dir_all(&self, path: &Path) -> io::Result<()> {
        (**self).remove_dir_all(path)
    }

    fn read_dir(&self, path: &Path) -> io::Result<Vec<DirEntry>> {
        (**self).read_dir(path)
    }

    fn metadata(&self, path: &Path) -> io::Result<Metadata> {
        (**self).metadata(path)
    }

    fn exists(&self, path: &Path) -> bool {
        (**self).exists(path)
    }

    fn is_file(&self, path: &Path) -> bool {
        (**self).is_file(path)
    }

    fn is_dir(&self, path: &Path) -> bool {
        (**self).is_dir(path)
    }

    fn set_readonly(&self, path: &Path, readonly: bool) -> io::Result<()> {
        (**self).set_readonly(path, readonly)
    }

    fn set_file_times(
        &self,
        path: &Path,
        accessed: DateTime<Utc>,
        modified: DateTime<Utc>,
    ) -> io::Result<()> {
        (**self).set_file_times(path, accessed, modified)
    }

    fn open(&self, path: &Path) -> io::Result<Box<dyn Read + Send>> {
        (**self).open(path)
    }

    fn create(&self, path: &Path) -> io::Result<Box<dyn Write + Send>> {
        (**self).create(path)
    }
}
