//! Filesystem watcher port for change notification.

use std::io;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::Receiver;
use std::sync::Arc;
use std::thread::JoinHandle;
use std::time::Duration;

use serde::{Deserialize, Serialize};

/// The kind of change a watcher observed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FsEventKind {
    /// An entry appeared under the watched root.
    Created,
    /// An existing entry's contents or metadata changed.
    Modified,
    /// An entry disappeared from under the watched root.
    Removed,
    /// An entry moved to a new path. Not every backend can detect this;
    /// a rename may surface as `Removed` plus `Created` instead.
    Renamed,
}

/// A single observed filesystem change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FsEvent {
    /// What happened.
    pub kind: FsEventKind,
    /// The entry the change applies to.
    pub path: PathBuf,
}

/// Watches directories for changes.
///
/// Abstracting the watcher lets tests emit scripted events instead of
/// mutating a real directory and waiting.
pub trait FsWatcher: Send + Sync {
    /// Starts watching the directory at `path`.
    ///
    /// With `recursive` set, changes anywhere under the root are reported;
    /// otherwise only direct children are.
    ///
    /// # Errors
    ///
    /// Returns the platform error if the root cannot be watched.
    fn watch(&self, path: &Path, recursive: bool) -> io::Result<WatchHandle>;
}

/// An active watch subscription.
///
/// Dropping the handle cancels the subscription and stops any background
/// work the adapter started for it.
#[derive(Debug)]
pub struct WatchHandle {
    receiver: Receiver<FsEvent>,
    stop: Option<Arc<AtomicBool>>,
    thread: Option<JoinHandle<()>>,
}

impl WatchHandle {
    /// Wraps a plain event channel with no background work attached.
    #[must_use]
    pub fn from_receiver(receiver: Receiver<FsEvent>) -> Self {
        Self { receiver, stop: None, thread: None }
    }

    /// Wraps an event channel fed by a background thread; the thread is
    /// signalled and joined when the handle drops.
    #[must_use]
    pub fn with_thread(
        receiver: Receiver<FsEvent>,
        stop: Arc<AtomicBool>,
        thread: JoinHandle<()>,
    ) -> Self {
        Self { receiver, stop: Some(stop), thread: Some(thread) }
    }

    /// Returns the next pending event without blocking.
    #[must_use]
    pub fn poll(&self) -> Option<FsEvent> {
        self.receiver.try_recv().ok()
    }

    /// Waits up to `timeout` for the next event.
    #[must_use]
    pub fn wait(&self, timeout: Duration) -> Option<FsEvent> {
        self.receiver.recv_timeout(timeout).ok()
    }
}

impl Drop for WatchHandle {
    fn drop(&mut self) {
        if let Some(stop) = &self.stop {
            stop.store(true, Ordering::Relaxed);
        }
        if let Some(thread) = self.thread.take() {
            let _ = thread.join();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::mpsc;

    #[test]
    fn poll_returns_none_when_empty() {
        let (_tx, rx) = mpsc::channel();
        let handle = WatchHandle::from_receiver(rx);
        assert!(handle.poll().is_none());
    }

    #[test]
    fn poll_drains_in_order() {
        let (tx, rx) = mpsc::channel();
        let handle = WatchHandle::from_receiver(rx);
        tx.send(FsEvent { kind: FsEventKind::Created, path: "/a".into() }).unwrap();
        tx.send(FsEvent { kind: FsEventKind::Removed, path: "/a".into() }).unwrap();

        assert_eq!(handle.poll().unwrap().kind, FsEventKind::Created);
        assert_eq!(handle.poll().unwrap().kind, FsEventKind::Removed);
        assert!(handle.poll().is_none());
    }

    #[test]
    fn wait_times_out_without_events() {
        let (_tx, rx) = mpsc::channel();
        let handle = WatchHandle::from_receiver(rx);
        assert!(handle.wait(Duration::from_millis(10)).is_none());
    }
}
