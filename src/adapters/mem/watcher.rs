//! In-memory watcher whose events are emitted by the test.

use std::io;
use std::path::{Path, PathBuf};
use std::sync::mpsc::{self, Sender};
use std::sync::Mutex;

use crate::ports::watcher::{FsEvent, FsWatcher, WatchHandle};

struct Subscription {
    root: PathBuf,
    recursive: bool,
    sender: Sender<FsEvent>,
}

impl Subscription {
    fn covers(&self, path: &Path) -> bool {
        if self.recursive {
            path.starts_with(&self.root)
        } else {
            path.parent() == Some(self.root.as_path())
        }
    }
}

/// In-memory watcher: the test scripts events with [`MemWatcher::emit`]
/// and they are delivered to every subscription whose root covers them.
#[derive(Default)]
pub struct MemWatcher {
    subscriptions: Mutex<Vec<Subscription>>,
}

impl MemWatcher {
    /// Creates a watcher with no subscriptions.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Delivers an event to every matching subscription.
    pub fn emit(&self, event: &FsEvent) {
        let mut subscriptions = self.subscriptions.lock().expect("watcher lock poisoned");
        // Subscriptions whose handle was dropped fail to send and fall out.
        subscriptions.retain(|subscription| {
            if !subscription.covers(&event.path) {
                return true;
            }
            subscription.sender.send(event.clone()).is_ok()
        });
    }
}

impl FsWatcher for MemWatcher {
    fn watch(&self, path: &Path, recursive: bool) -> io::Result<WatchHandle> {
        let (sender, receiver) = mpsc::channel();
        self.subscriptions.lock().expect("watcher lock poisoned").push(Subscription {
            root: path.to_path_buf(),
            recursive,
            sender,
        });
        Ok(WatchHandle::from_receiver(receiver))
    }
}
