//! Recording decorator for the `FileSystem` port.

use std::io::{self, Read, Write};
use std::path::Path;

use chrono::{DateTime, Utc};
use serde_json::json;

use super::journal::{outcome, Journal};
use crate::ports::filesystem::{DirEntry, FileSystem, Metadata};

/// Forwards every call to the inner filesystem and journals it.
pub struct RecordingFileSystem {
    inner: Box<dyn FileSystem>,
    journal: Journal,
}

impl RecordingFileSystem {
    /// Wraps the given filesystem, appending interactions to `journal`.
    #[must_use]
    pub fn new(inner: Box<dyn FileSystem>, journal: Journal) -> Self {
        Self { inner, journal }
    }
}

impl FileSystem for RecordingFileSystem {
    fn read(&self, path: &Path) -> io::Result<Vec<u8>> {
        let result = self.inner.read(path);
        self.journal.record(
            "fs",
            "read",
            json!({"path": path.display().to_string()}),
            outcome(&result),
        );
        result
    }

    fn read_to_string(&self, path: &Path) -> io::Result<String> {
        let result = self.inner.read_to_string(path);
        self.journal.record(
            "fs",
            "read_to_string",
            json!({"path": path.display().to_string()}),
            outcome(&result),
        );
        result
    }

    fn write(&self, path: &Path, contents: &[u8]) -> io::Result<()> {
        let result = self.inner.write(path, contents);
        self.journal.record(
            "fs",
            "write",
            json!({"path": path.display().to_string(), "len": contents.len()}),
            outcome(&result),
        );
        result
    }

    fn append(&self, path: &Path, contents: &[u8]) -> io::Result<()> {
        let result = self.inner.append(path, contents);
        self.journal.record(
            "fs",
            "append",
            json!({"path": path.display().to_string(), "len": contents.len()}),
            outcome(&result),
        );
        result
    }

    fn copy(&self, from: &Path, to: &Path) -> io::Result<u64> {
        let result = self.inner.copy(from, to);
        self.journal.record(
            "fs",
            "copy",
            json!({"from": from.display().to_string(), "to": to.display().to_string()}),
            outcome(&result),
        );
        result
    }

    fn rename(&self, from: &Path, to: &Path) -> io::Result<()> {
        let result = self.inner.rename(from, to);
        self.journal.record(
            "fs",
            "rename",
            json!({"from": from.display().to_string(), "to": to.display().to_string()}),
            outcome(&result),
        );
        result
    }

    fn remove_file(&self, path: &Path) -> io::Result<()> {
        let result = self.inner.remove_file(path);
        self.journal.record(
            "fs",
            "remove_file",
            json!({"path": path.display().to_string()}),
            outcome(&result),
        );
        result
    }

    fn create_dir(&self, path: &Path) -> io::Result<()> {
        let result = self.inner.create_dir(path);
        self.journal.record(
            "fs",
            "create_dir",
            json!({"path": path.display().to_string()}),
            outcome(&result),
        );
        result
    }

    fn create_dir_all(&self, path: &Path) -> io::Result<()> {
        let result = self.inner.create_dir_all(path);
        self.journal.record(
            "fs",
            "create_dir_all",
            json!({"path": path.display().to_string()}),
            outcome(&result),
        );
        result
    }

    fn remove_dir(&self, path: &Path) -> io::Result<()> {
        let result = self.inner.remove_dir(path);
        self.journal.record(
            "fs",
            "remove_dir",
            json!({"path": path.display().to_string()}),
            outcome(&result),
        );
        result
    }

    fn remove_dir_all(&self, path: &Path) -> io::Result<()> {
        let result = self.inner.remove_dir_all(path);
        self.journal.record(
            "fs",
            "remove_dir_all",
            json!({"path": path.display().to_string()}),
            outcome(&result),
        );
        result
    }

    fn read_dir(&self, path: &Path) -> io::Result<Vec<DirEntry>> {
        let result = self.inner.read_dir(path);
        self.journal.record(
            "fs",
            "read_dir",
            json!({"path": path.display().to_string()}),
            outcome(&result),
        );
        result
    }

    fn metadata(&self, path: &Path) -> io::Result<Metadata> {
        let result = self.inner.metadata(path);
        self.journal.record(
            "fs",
            "metadata",
            json!({"path": path.display().to_string()}),
            outcome(&result),
        );
        result
    }

    fn exists(&self, path: &Path) -> bool {
        let result = self.inner.exists(path);
        self.journal.record(
            "fs",
            "exists",
            json!({"path": path.display().to_string()}),
            json!(result),
        );
        result
    }

    fn is_file(&self, path: &Path) -> bool {
        let result = self.inner.is_file(path);
        self.journal.record(
            "fs",
            "is_file",
            json!({"path": path.display().to_string()}),
            json!(result),
        );
        result
    }

    fn is_dir(&self, path: &Path) -> bool {
        let result = self.inner.is_dir(path);
        self.journal.record(
            "fs",
            "is_dir",
            json!({"path": path.display().to_string()}),
            json!(result),
        );
        result
    }

    fn set_readonly(&self, path: &Path, readonly: bool) -> io::Result<()> {
        let result = self.inner.set_readonly(path, readonly);
        self.journal.record(
            "fs",
            "set_readonly",
            json!({"path": path.display().to_string(), "readonly": readonly}),
            outcome(&result),
        );
        result
    }

    fn set_file_times(
        &self,
        path: &Path,
        accessed: DateTime<Utc>,
        modified: DateTime<Utc>,
    ) -> io::Result<()> {
        let result = self.inner.set_file_times(path, accessed, modified);
        self.journal.record(
            "fs",
            "set_file_times",
            json!({
                "path": path.display().to_string(),
                "accessed": accessed.to_rfc3339(),
                "modified": modified.to_rfc3339(),
            }),
            outcome(&result),
        );
        result
    }

    fn open(&self, path: &Path) -> io::Result<Box<dyn Read + Send>> {
        let result = self.inner.open(path);
        self.journal.record(
            "fs",
            "open",
            json!({"path": path.display().to_string()}),
            outcome(&result),
        );
        result
    }

    fn create(&self, path: &Path) -> io::Result<Box<dyn Write + Send>> {
        let result = self.inner.create(path);
        self.journal.record(
            "fs",
            "create",
            json!({"path": path.display().to_string()}),
            outcome(&result),
        );
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::mem::MemFileSystem;

    #[test]
    fn journals_calls_with_outcomes() {
        let journal = Journal::new();
        let fs = RecordingFileSystem::new(Box::new(MemFileSystem::new()), journal.clone());

        fs.write(Path::new("/data"), b"abc").unwrap();
        let _ = fs.exists(Path::new("/data"));
        let _ = fs.read(Path::new("/missing"));

        assert_eq!(journal.methods("fs"), ["write", "exists", "read"]);

        let entries = journal.entries();
        assert_eq!(entries[0].input["len"], 3);
        assert_eq!(entries[0].output["ok"], true);
        assert_eq!(entries[1].output, serde_json::json!(true));
        assert!(entries[2].output["err"].as_str().unwrap().contains("/missing"));
    }
}
