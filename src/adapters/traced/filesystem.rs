//! Tracing decorator for the `FileSystem` port.

use std::io::{self, Read, Write};
use std::path::Path;

use chrono::{DateTime, Utc};
use tracing::debug;

use crate::ports::filesystem::{DirEntry, FileSystem, Metadata};

/// Forwards every call to the inner filesystem and logs it.
pub struct TracedFileSystem {
    inner: Box<dyn FileSystem>,
}

impl TracedFileSystem {
    /// Wraps the given filesystem.
    #[must_use]
    pub fn new(inner: Box<dyn FileSystem>) -> Self {
        Self { inner }
    }
}

impl FileSystem for TracedFileSystem {
    fn read(&self, path: &Path) -> io::Result<Vec<u8>> {
        let result = self.inner.read(path);
        debug!(target: "sysports::fs", op = "read", path = %path.display(), ok = result.is_ok());
        result
    }

    fn read_to_string(&self, path: &Path) -> io::Result<String> {
        let result = self.inner.read_to_string(path);
        debug!(target: "sysports::fs", op = "read_to_string", path = %path.display(), ok = result.is_ok());
        result
    }

    fn write(&self, path: &Path, contents: &[u8]) -> io::Result<()> {
        let result = self.inner.write(path, contents);
        debug!(target: "sysports::fs", op = "write", path = %path.display(), len = contents.len(), ok = result.is_ok());
        result
    }

    fn append(&self, path: &Path, contents: &[u8]) -> io::Result<()> {
        let result = self.inner.append(path, contents);
        debug!(target: "sysports::fs", op = "append", path = %path.display(), len = contents.len(), ok = result.is_ok());
        result
    }

    fn copy(&self, from: &Path, to: &Path) -> io::Result<u64> {
        let result = self.inner.copy(from, to);
        debug!(target: "sysports::fs", op = "copy", from = %from.display(), to = %to.display(), ok = result.is_ok());
        result
    }

    fn rename(&self, from: &Path, to: &Path) -> io::Result<()> {
        let result = self.inner.rename(from, to);
        debug!(target: "sysports::fs", op = "rename", from = %from.display(), to = %to.display(), ok = result.is_ok());
        result
    }

    fn remove_file(&self, path: &Path) -> io::Result<()> {
        let result = self.inner.remove_file(path);
        debug!(target: "sysports::fs", op = "remove_file", path = %path.display(), ok = result.is_ok());
        result
    }

    fn create_dir(&self, path: &Path) -> io::Result<()> {
        let result = self.inner.create_dir(path);
        debug!(target: "sysports::fs", op = "create_dir", path = %path.display(), ok = result.is_ok());
        result
    }

    fn create_dir_all(&self, path: &Path) -> io::Result<()> {
        let result = self.inner.create_dir_all(path);
        debug!(target: "sysports::fs", op = "create_dir_all", path = %path.display(), ok = result.is_ok());
        result
    }

    fn remove_dir(&self, path: &Path) -> io::Result<()> {
        let result = self.inner.remove_dir(path);
        debug!(target: "sysports::fs", op = "remove_dir", path = %path.display(), ok = result.is_ok());
        result
    }

    fn remove_dir_all(&self, path: &Path) -> io::Result<()> {
        let result = self.inner.remove_dir_all(path);
        debug!(target: "sysports::fs", op = "remove_dir_all", path = %path.display(), ok = result.is_ok());
        result
    }

    fn read_dir(&self, path: &Path) -> io::Result<Vec<DirEntry>> {
        let result = self.inner.read_dir(path);
        debug!(target: "sysports::fs", op = "read_dir", path = %path.display(), ok = result.is_ok());
        result
    }

    fn metadata(&self, path: &Path) -> io::Result<Metadata> {
        let result = self.inner.metadata(path);
        debug!(target: "sysports::fs", op = "metadata", path = %path.display(), ok = result.is_ok());
        result
    }

    fn exists(&self, path: &Path) -> bool {
        let result = self.inner.exists(path);
        debug!(target: "sysports::fs", op = "exists", path = %path.display(), result);
        result
    }

    fn is_file(&self, path: &Path) -> bool {
        let result = self.inner.is_file(path);
        debug!(target: "sysports::fs", op = "is_file", path = %path.display(), result);
        result
    }

    fn is_dir(&self, path: &Path) -> bool {
        let result = self.inner.is_dir(path);
        debug!(target: "sysports::fs", op = "is_dir", path = %path.display(), result);
        result
    }

    fn set_readonly(&self, path: &Path, readonly: bool) -> io::Result<()> {
        let result = self.inner.set_readonly(path, readonly);
        debug!(target: "sysports::fs", op = "set_readonly", path = %path.display(), readonly, ok = result.is_ok());
        result
    }

    fn set_file_times(
        &self,
        path: &Path,
        accessed: DateTime<Utc>,
        modified: DateTime<Utc>,
    ) -> io::Result<()> {
        let result = self.inner.set_file_times(path, accessed, modified);
        debug!(target: "sysports::fs", op = "set_file_times", path = %path.display(), ok = result.is_ok());
        result
    }

    fn open(&self, path: &Path) -> io::Result<Box<dyn Read + Send>> {
        let result = self.inner.open(path);
        debug!(target: "sysports::fs", op = "open", path = %path.display(), ok = result.is_ok());
        result
    }

    fn create(&self, path: &Path) -> io::Result<Box<dyn Write + Send>> {
        let result = self.inner.create(path);
        debug!(target: "sysports::fs", op = "create", path = %path.display(), ok = result.is_ok());
        result
    }
}
