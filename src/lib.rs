//! Port traits and adapters around host-system facilities.
//!
//! Application code depends on the traits in [`ports`] (console,
//! filesystem, paths, clocks, watcher). Production wiring uses the live
//! adapters; tests substitute the in-memory doubles, script their inputs,
//! and inspect what the code under test did to the system.

pub mod adapters;
pub mod context;
pub mod ports;
pub mod stopwatch;

pub use context::{MemHandles, SystemContext};
pub use ports::{
    AsyncFileSystem, Clock, Console, DirEntry, FileKind, FileSystem, FsEvent, FsEventKind,
    FsWatcher, Metadata, MonotonicClock, Paths, WatchHandle,
};
pub use stopwatch::Stopwatch;
