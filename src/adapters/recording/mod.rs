//! Recording decorators that journal every call forwarded to an inner
//! adapter.
//!
//! A test wires a [`Journal`] through the recording adapters, runs its
//! subject, and then asserts exactly which system calls were made and in
//! what order.

pub mod console;
pub mod filesystem;
pub mod journal;

pub use console::RecordingConsole;
pub use filesystem::RecordingFileSystem;
pub use journal::{Interaction, Journal};
