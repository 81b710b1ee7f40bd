//! System context bundling all port trait objects.

use std::sync::Arc;

use crate::adapters::live::{
    LiveClock, LiveConsole, LiveFileSystem, LiveMonotonicClock, LivePaths, LiveWatcher,
};
use crate::adapters::mem::{
    MemClock, MemConsole, MemFileSystem, MemMonotonicClock, MemPaths, MemWatcher,
};
use crate::ports::clock::Clock;
use crate::ports::console::Console;
use crate::ports::filesystem::FileSystem;
use crate::ports::monotonic::MonotonicClock;
use crate::ports::paths::Paths;
use crate::ports::watcher::FsWatcher;

/// Bundles all port trait objects into a single context.
///
/// Each field provides access to one host facility. Constructors wire up
/// either the live adapters or the in-memory doubles.
pub struct SystemContext {
    /// Console for terminal input and output.
    pub console: Arc<dyn Console>,
    /// Filesystem for file and directory access.
    pub fs: Arc<dyn FileSystem>,
    /// Process-level path state and resolution.
    pub paths: Arc<dyn Paths>,
    /// Wall clock.
    pub clock: Arc<dyn Clock>,
    /// Monotonic clock for elapsed-time measurement.
    pub monotonic: Arc<dyn MonotonicClock>,
    /// Filesystem change watcher.
    pub watcher: Arc<dyn FsWatcher>,
}

/// Direct handles to the doubles inside an in-memory context.
///
/// The context exposes each double only as a trait object; these handles
/// let the test script input, advance clocks, emit watcher events, and
/// inspect captured state.
pub struct MemHandles {
    /// The console double behind `SystemContext::console`.
    pub console: Arc<MemConsole>,
    /// The filesystem double behind `SystemContext::fs`.
    pub fs: Arc<MemFileSystem>,
    /// The path double behind `SystemContext::paths`.
    pub paths: Arc<MemPaths>,
    /// The wall-clock double behind `SystemContext::clock`.
    pub clock: Arc<MemClock>,
    /// The monotonic-clock double behind `SystemContext::monotonic`.
    pub monotonic: Arc<MemMonotonicClock>,
    /// The watcher double behind `SystemContext::watcher`.
    pub watcher: Arc<MemWatcher>,
}

impl SystemContext {
    /// Creates a context with live adapters for every port.
    #[must_use]
    pub fn live() -> Self {
        Self {
            console: Arc::new(LiveConsole),
            fs: Arc::new(LiveFileSystem),
            paths: Arc::new(LivePaths),
            clock: Arc::new(LiveClock),
            monotonic: Arc::new(LiveMonotonicClock::new()),
            watcher: Arc::new(LiveWatcher::new()),
        }
    }

    /// Creates a context backed entirely by in-memory doubles.
    ///
    /// The filesystem double shares the returned wall clock, so advancing
    /// it moves entry timestamps too.
    #[must_use]
    pub fn in_memory() -> (Self, MemHandles) {
        let clock = Arc::new(MemClock::new());
        let console = Arc::new(MemConsole::new());
        let fs = Arc::new(MemFileSystem::with_clock(Arc::clone(&clock) as Arc<dyn Clock>));
        let paths = Arc::new(MemPaths::new());
        let monotonic = Arc::new(MemMonotonicClock::new());
        let watcher = Arc::new(MemWatcher::new());

        let context = Self {
            console: Arc::clone(&console) as Arc<dyn Console>,
            fs: Arc::clone(&fs) as Arc<dyn FileSystem>,
            paths: Arc::clone(&paths) as Arc<dyn Paths>,
            clock: Arc::clone(&clock) as Arc<dyn Clock>,
            monotonic: Arc::clone(&monotonic) as Arc<dyn MonotonicClock>,
            watcher: Arc::clone(&watcher) as Arc<dyn FsWatcher>,
        };
        let handles = MemHandles { console, fs, paths, clock, monotonic, watcher };
        (context, handles)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn live_context_reaches_the_real_filesystem() {
        let ctx = SystemContext::live();
        let temp = ctx.paths.temp_dir();
        assert!(ctx.fs.is_dir(&temp));
    }

    #[test]
    fn in_memory_context_shares_state_with_handles() {
        let (ctx, handles) = SystemContext::in_memory();

        ctx.fs.write(Path::new("/seen"), b"x").unwrap();
        assert!(handles.fs.exists(Path::new("/seen")));

        handles.console.push_input("scripted");
        assert_eq!(ctx.console.read_line().unwrap().as_deref(), Some("scripted"));
    }
}
