//! In-memory path double with a virtual working directory.

use std::io;
use std::path::{Component, Path, PathBuf};
use std::sync::Mutex;

use crate::ports::paths::Paths;

/// In-memory path adapter over a virtual process layout.
///
/// The working directory starts at `/`, the temp directory is `/tmp`, and
/// the home directory is `/home/user`. `canonicalize` resolves `.` and
/// `..` lexically against the virtual working directory; it does not
/// consult any filesystem.
pub struct MemPaths {
    cwd: Mutex<PathBuf>,
}

/// Lexically resolves `path` against `base`, folding `.` and `..`.
fn resolve(base: &Path, path: &Path) -> PathBuf {
    let mut out = if path.is_absolute() { PathBuf::from("/") } else { base.to_path_buf() };
    for component in path.components() {
        match component {
            Component::RootDir | Component::Prefix(_) | Component::CurDir => {}
            Component::ParentDir => {
                out.pop();
            }
            Component::Normal(part) => out.push(part),
        }
    }
    out
}

impl MemPaths {
    /// Creates the default virtual layout rooted at `/`.
    #[must_use]
    pub fn new() -> Self {
        Self { cwd: Mutex::new(PathBuf::from("/")) }
    }
}

impl Default for MemPaths {
    fn default() -> Self {
        Self::new()
    }
}

impl Paths for MemPaths {
    fn current_dir(&self) -> io::Result<PathBuf> {
        Ok(self.cwd.lock().expect("cwd lock poisoned").clone())
    }

    fn set_current_dir(&self, path: &Path) -> io::Result<()> {
        let mut cwd = self.cwd.lock().expect("cwd lock poisoned");
        let next = resolve(&cwd, path);
        *cwd = next;
        Ok(())
    }

    fn temp_dir(&self) -> PathBuf {
        PathBuf::from("/tmp")
    }

    fn home_dir(&self) -> Option<PathBuf> {
        Some(PathBuf::from("/home/user"))
    }

    fn canonicalize(&self, path: &Path) -> io::Result<PathBuf> {
        let cwd = self.cwd.lock().expect("cwd lock poisoned");
        Ok(resolve(&cwd, path))
    }
}
