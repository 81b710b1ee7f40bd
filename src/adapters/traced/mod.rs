//! Tracing decorators that log every call forwarded to an inner adapter.
//!
//! The decorators emit `tracing` events and change nothing else; wrap a
//! live adapter in production wiring or a mem double in tests. Picking a
//! subscriber is left to the binary.

pub mod console;
pub mod filesystem;

pub use console::TracedConsole;
pub use filesystem::TracedFileSystem;
