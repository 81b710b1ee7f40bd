//! Live path adapter using `std::env` and `std::fs`.

use std::io;
use std::path::{Path, PathBuf};

use crate::ports::paths::Paths;

/// Live path adapter backed by real process and filesystem state.
pub struct LivePaths;

impl Paths for LivePaths {
    fn current_dir(&self) -> io::Result<PathBuf> {
        std::env::current_dir()
    }

    fn set_current_dir(&self, path: &Path) -> io::Result<()> {
        std::env::set_current_dir(path)
    }

    fn temp_dir(&self) -> PathBuf {
        std::env::temp_dir()
    }

    fn home_dir(&self) -> Option<PathBuf> {
        dirs::home_dir()
    }

    fn canonicalize(&self, path: &Path) -> io::Result<PathBuf> {
        std::fs::canonicalize(path)
    }
}
