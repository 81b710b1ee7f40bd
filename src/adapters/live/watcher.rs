//! Live filesystem watcher diffing periodic metadata snapshots.

use std::collections::BTreeMap;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{mpsc, Arc};
use std::time::{Duration, SystemTime};

use crate::ports::watcher::{FsEvent, FsEventKind, FsWatcher, WatchHandle};

const DEFAULT_POLL_INTERVAL: Duration = Duration::from_millis(50);

/// Live watcher that polls the watched root and diffs snapshots.
///
/// New and vanished entries are reported as `Created`/`Removed`; a size or
/// mtime change is reported as `Modified`. A rename surfaces as a removal
/// plus a creation, since snapshot diffing cannot link the two paths.
pub struct LiveWatcher {
    interval: Duration,
}

impl LiveWatcher {
    /// Creates a watcher with the default poll interval.
    #[must_use]
    pub fn new() -> Self {
        Self { interval: DEFAULT_POLL_INTERVAL }
    }

    /// Creates a watcher polling at the given interval.
    #[must_use]
    pub fn with_interval(interval: Duration) -> Self {
        Self { interval }
    }
}

impl Default for LiveWatcher {
    fn default() -> Self {
        Self::new()
    }
}

/// Entry state used for diffing: size and mtime for files, `None` for
/// directories.
type Snapshot = BTreeMap<PathBuf, Option<(u64, Option<SystemTime>)>>;

fn scan_into(root: &Path, recursive: bool, snapshot: &mut Snapshot) {
    let Ok(entries) = std::fs::read_dir(root) else { return };
    for entry in entries.flatten() {
        let path = entry.path();
        let Ok(meta) = entry.metadata() else { continue };
        if meta.is_dir() {
            snapshot.insert(path.clone(), None);
            if recursive {
                scan_into(&path, recursive, snapshot);
            }
        } else {
            snapshot.insert(path, Some((meta.len(), meta.modified().ok())));
        }
    }
}

fn diff(previous: &Snapshot, current: &Snapshot, events: &mut Vec<FsEvent>) {
    for (path, state) in current {
        match previous.get(path) {
            None => events.push(FsEvent { kind: FsEventKind::Created, path: path.clone() }),
            Some(old) if old != state => {
                events.push(FsEvent { kind: FsEventKind::Modified, path: path.clone() });
            }
            Some(_) => {}
        }
    }
    for path in previous.keys() {
        if !current.contains_key(path) {
            events.push(FsEvent { kind: FsEventKind::Removed, path: path.clone() });
        }
    }
}

impl FsWatcher for LiveWatcher {
    fn watch(&self, path: &Path, recursive: bool) -> io::Result<WatchHandle> {
        if !path.is_dir() {
            return Err(io::Error::new(
                io::ErrorKind::NotFound,
                format!("watch root is not a directory: {}", path.display()),
            ));
        }

        let (sender, receiver) = mpsc::channel();
        let stop = Arc::new(AtomicBool::new(false));
        let thread_stop = Arc::clone(&stop);
        let root = path.to_path_buf();
        let interval = self.interval;

        // Baseline before returning: everything present now is old news,
        // everything after this call is reported.
        let mut previous = Snapshot::new();
        scan_into(&root, recursive, &mut previous);

        let thread = std::thread::spawn(move || {
            let mut previous = previous;
            while !thread_stop.load(Ordering::Relaxed) {
                std::thread::sleep(interval);
                let mut current = Snapshot::new();
                scan_into(&root, recursive, &mut current);
                let mut events = Vec::new();
                diff(&previous, &current, &mut events);
                for event in events {
                    if sender.send(event).is_err() {
                        // Receiver dropped without dropping the handle first.
                        return;
                    }
                }
                previous = current;
            }
        });

        Ok(WatchHandle::with_thread(receiver, stop, thread))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn diff_reports_create_modify_remove() {
        let mut previous = Snapshot::new();
        previous.insert("/w/kept".into(), Some((1, None)));
        previous.insert("/w/gone".into(), Some((1, None)));
        previous.insert("/w/touched".into(), Some((1, None)));

        let mut current = Snapshot::new();
        current.insert("/w/kept".into(), Some((1, None)));
        current.insert("/w/touched".into(), Some((2, None)));
        current.insert("/w/fresh".into(), Some((1, None)));

        let mut events = Vec::new();
        diff(&previous, &current, &mut events);

        let find = |kind| {
            events
                .iter()
                .filter(|event| event.kind == kind)
                .map(|event| event.path.clone())
                .collect::<Vec<_>>()
        };
        assert_eq!(find(FsEventKind::Created), [PathBuf::from("/w/fresh")]);
        assert_eq!(find(FsEventKind::Modified), [PathBuf::from("/w/touched")]);
        assert_eq!(find(FsEventKind::Removed), [PathBuf::from("/w/gone")]);
    }

    #[test]
    fn watching_a_missing_root_fails() {
        let watcher = LiveWatcher::new();
        let err = watcher.watch(Path::new("/sysports/missing/root"), false).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
    }
}
