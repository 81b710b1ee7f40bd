//! Live adapters forwarding to the real platform.

pub mod async_fs;
pub mod clock;
pub mod console;
pub mod filesystem;
pub mod monotonic;
pub mod paths;
pub mod watcher;

pub use async_fs::TokioFileSystem;
pub use clock::LiveClock;
pub use console::LiveConsole;
pub use filesystem::LiveFileSystem;
pub use monotonic::LiveMonotonicClock;
pub use paths::LivePaths;
pub use watcher::LiveWatcher;
