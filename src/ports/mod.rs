//! Port traits defining the seams around host-system facilities.
//!
//! Each trait mirrors one platform facility (console, filesystem, paths,
//! clocks, watcher) so calling code can depend on the trait instead of the
//! concrete system type. Implementations live in `src/adapters/`.

pub mod async_fs;
pub mod clock;
pub mod console;
pub mod filesystem;
pub mod monotonic;
pub mod paths;
pub mod watcher;

pub use async_fs::AsyncFileSystem;
pub use clock::Clock;
pub use console::Console;
pub use filesystem::{DirEntry, FileKind, FileSystem, Metadata};
pub use monotonic::MonotonicClock;
pub use paths::Paths;
pub use watcher::{FsEvent, FsEventKind, FsWatcher, WatchHandle};
