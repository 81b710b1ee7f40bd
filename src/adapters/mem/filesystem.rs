//! In-memory filesystem double backed by a path-keyed node tree.

use std::collections::BTreeMap;
use std::io::{self, Cursor, Read, Write};
use std::path::{Component, Path, PathBuf};
use std::sync::{Arc, Mutex};

use chrono::{DateTime, Utc};

use crate::adapters::mem::clock::MemClock;
use crate::ports::clock::Clock;
use crate::ports::filesystem::{DirEntry, FileKind, FileSystem, Metadata};

#[derive(Clone)]
enum NodeKind {
    File(Vec<u8>),
    Dir,
}

#[derive(Clone)]
struct Node {
    kind: NodeKind,
    readonly: bool,
    modified: DateTime<Utc>,
    accessed: DateTime<Utc>,
    created: DateTime<Utc>,
}

impl Node {
    fn new(kind: NodeKind, now: DateTime<Utc>) -> Self {
        Self { kind, readonly: false, modified: now, accessed: now, created: now }
    }

    fn is_dir(&self) -> bool {
        matches!(self.kind, NodeKind::Dir)
    }
}

type Nodes = BTreeMap<PathBuf, Node>;

/// In-memory filesystem holding a tree of files and directories.
///
/// Paths are normalized to absolute form; relative paths resolve against
/// the root. The root directory `/` always exists. Entry timestamps are
/// stamped from the injected [`Clock`], so tests that advance a
/// [`MemClock`] observe deterministic times.
pub struct MemFileSystem {
    nodes: Arc<Mutex<Nodes>>,
    clock: Arc<dyn Clock>,
}

fn normalize(path: &Path) -> PathBuf {
    let mut out = PathBuf::from("/");
    for component in path.components() {
        match component {
            Component::RootDir | Component::Prefix(_) | Component::CurDir => {}
            Component::ParentDir => {
                out.pop();
            }
            Component::Normal(part) => out.push(part),
        }
    }
    out
}

fn not_found(path: &Path) -> io::Error {
    io::Error::new(io::ErrorKind::NotFound, format!("no such entry: {}", path.display()))
}

fn already_exists(path: &Path) -> io::Error {
    io::Error::new(io::ErrorKind::AlreadyExists, format!("entry exists: {}", path.display()))
}

fn permission_denied(path: &Path) -> io::Error {
    io::Error::new(io::ErrorKind::PermissionDenied, format!("read-only: {}", path.display()))
}

fn is_a_directory(path: &Path) -> io::Error {
    io::Error::new(io::ErrorKind::Other, format!("is a directory: {}", path.display()))
}

fn not_a_directory(path: &Path) -> io::Error {
    io::Error::new(io::ErrorKind::Other, format!("not a directory: {}", path.display()))
}

/// The parent of `path` must exist and be a directory.
fn check_parent(nodes: &Nodes, path: &Path) -> io::Result<()> {
    let Some(parent) = path.parent() else { return Ok(()) };
    match nodes.get(parent) {
        Some(node) if node.is_dir() => Ok(()),
        Some(_) => Err(not_a_directory(parent)),
        None => Err(not_found(parent)),
    }
}

fn direct_children(nodes: &Nodes, path: &Path) -> Vec<PathBuf> {
    nodes.keys().filter(|key| key.parent() == Some(path)).cloned().collect()
}

impl MemFileSystem {
    /// Creates an empty tree with timestamps from a fresh [`MemClock`].
    #[must_use]
    pub fn new() -> Self {
        Self::with_clock(Arc::new(MemClock::new()))
    }

    /// Creates an empty tree stamping times from the given clock.
    #[must_use]
    pub fn with_clock(clock: Arc<dyn Clock>) -> Self {
        let mut nodes = Nodes::new();
        nodes.insert(PathBuf::from("/"), Node::new(NodeKind::Dir, clock.now()));
        Self { nodes: Arc::new(Mutex::new(nodes)), clock }
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Nodes> {
        self.nodes.lock().expect("filesystem lock poisoned")
    }
}

impl Default for MemFileSystem {
    fn default() -> Self {
        Self::new()
    }
}

impl FileSystem for MemFileSystem {
    fn read(&self, path: &Path) -> io::Result<Vec<u8>> {
        let path = normalize(path);
        let now = self.clock.now();
        let mut nodes = self.lock();
        let node = nodes.get_mut(&path).ok_or_else(|| not_found(&path))?;
        match &node.kind {
            NodeKind::Dir => Err(is_a_directory(&path)),
            NodeKind::File(data) => {
                let data = data.clone();
                node.accessed = now;
                Ok(data)
            }
        }
    }

    fn read_to_string(&self, path: &Path) -> io::Result<String> {
        let bytes = self.read(path)?;
        String::from_utf8(bytes)
            .map_err(|err| io::Error::new(io::ErrorKind::InvalidData, err))
    }

    fn write(&self, path: &Path, contents: &[u8]) -> io::Result<()> {
        let path = normalize(path);
        let now = self.clock.now();
        let mut nodes = self.lock();
        match nodes.get_mut(&path) {
            Some(node) if node.is_dir() => Err(is_a_directory(&path)),
            Some(node) if node.readonly => Err(permission_denied(&path)),
            Some(node) => {
                node.kind = NodeKind::File(contents.to_vec());
                node.modified = now;
                node.accessed = now;
                Ok(())
            }
            None => {
                check_parent(&nodes, &path)?;
                nodes.insert(path, Node::new(NodeKind::File(contents.to_vec()), now));
                Ok(())
            }
        }
    }

    fn append(&self, path: &Path, contents: &[u8]) -> io::Result<()> {
        let path = normalize(path);
        let now = self.clock.now();
        let mut nodes = self.lock();
        match nodes.get_mut(&path) {
            Some(node) if node.is_dir() => Err(is_a_directory(&path)),
            Some(node) if node.readonly => Err(permission_denied(&path)),
            Some(node) => {
                if let NodeKind::File(data) = &mut node.kind {
                    data.extend_from_slice(contents);
                }
                node.modified = now;
                node.accessed = now;
                Ok(())
            }
            None => {
                check_parent(&nodes, &path)?;
                nodes.insert(path, Node::new(NodeKind::File(contents.to_vec()), now));
                Ok(())
            }
        }
    }

    fn copy(&self, from: &Path, to: &Path) -> io::Result<u64> {
        let from = normalize(from);
        let to = normalize(to);
        let now = self.clock.now();
        let mut nodes = self.lock();

        let source = nodes.get(&from).ok_or_else(|| not_found(&from))?;
        let NodeKind::File(data) = source.kind.clone() else {
            return Err(is_a_directory(&from));
        };
        let readonly = source.readonly;

        match nodes.get(&to) {
            Some(node) if node.is_dir() => return Err(is_a_directory(&to)),
            Some(node) if node.readonly => return Err(permission_denied(&to)),
            _ => {}
        }
        check_parent(&nodes, &to)?;

        let len = data.len() as u64;
        let mut node = Node::new(NodeKind::File(data), now);
        node.readonly = readonly;
        nodes.insert(to, node);
        Ok(len)
    }

    fn rename(&self, from: &Path, to: &Path) -> io::Result<()> {
        let from = normalize(from);
        let to = normalize(to);
        let mut nodes = self.lock();

        if !nodes.contains_key(&from) {
            return Err(not_found(&from));
        }
        check_parent(&nodes, &to)?;
        match nodes.get(&to) {
            Some(node) if node.is_dir() => return Err(is_a_directory(&to)),
            _ => {}
        }

        // Rekey the entry and, for directories, its whole subtree.
        // `starts_with` also matches the moved path itself.
        let moved: Vec<PathBuf> =
            nodes.keys().filter(|key| key.starts_with(&from)).cloned().collect();
        for old_key in moved {
            let node = nodes.remove(&old_key).expect("key collected from map");
            let suffix = old_key.strip_prefix(&from).expect("key under moved prefix");
            let new_key = if suffix.as_os_str().is_empty() { to.clone() } else { to.join(suffix) };
            nodes.insert(new_key, node);
        }
        Ok(())
    }

    fn remove_file(&self, path: &Path) -> io::Result<()> {
        let path = normalize(path);
        let mut nodes = self.lock();
        let node = nodes.get(&path).ok_or_else(|| not_found(&path))?;
        if node.is_dir() {
            return Err(is_a_directory(&path));
        }
        if node.readonly {
            return Err(permission_denied(&path));
        }
        nodes.remove(&path);
        Ok(())
    }

    fn create_dir(&self, path: &Path) -> io::Result<()> {
        let path = normalize(path);
        let now = self.clock.now();
        let mut nodes = self.lock();
        if nodes.contains_key(&path) {
            return Err(already_exists(&path));
        }
        check_parent(&nodes, &path)?;
        nodes.insert(path, Node::new(NodeKind::Dir, now));
        Ok(())
    }

    fn create_dir_all(&self, path: &Path) -> io::Result<()> {
        let path = normalize(path);
        let now = self.clock.now();
        let mut nodes = self.lock();
        let mut prefix = PathBuf::from("/");
        for component in path.components() {
            if let Component::Normal(part) = component {
                prefix.push(part);
                match nodes.get(&prefix) {
                    Some(node) if node.is_dir() => {}
                    Some(_) => return Err(not_a_directory(&prefix)),
                    None => {
                        nodes.insert(prefix.clone(), Node::new(NodeKind::Dir, now));
                    }
                }
            }
        }
        Ok(())
    }

    fn remove_dir(&self, path: &Path) -> io::Result<()> {
        let path = normalize(path);
        let mut nodes = self.lock();
        let node = nodes.get(&path).ok_or_else(|| not_found(&path))?;
        if !node.is_dir() {
            return Err(not_a_directory(&path));
        }
        if path == Path::new("/") {
            return Err(permission_denied(&path));
        }
        if !direct_children(&nodes, &path).is_empty() {
            return Err(io::Error::new(
                io::ErrorKind::Other,
                format!("directory not empty: {}", path.display()),
            ));
        }
        nodes.remove(&path);
        Ok(())
    }

    fn remove_dir_all(&self, path: &Path) -> io::Result<()> {
        let path = normalize(path);
        let mut nodes = self.lock();
        let node = nodes.get(&path).ok_or_else(|| not_found(&path))?;
        if !node.is_dir() {
            return Err(not_a_directory(&path));
        }
        nodes.retain(|key, _| !key.starts_with(&path));
        if path == Path::new("/") {
            // The root itself survives, only its contents go.
            nodes.insert(path, Node::new(NodeKind::Dir, self.clock.now()));
        }
        Ok(())
    }

    fn read_dir(&self, path: &Path) -> io::Result<Vec<DirEntry>> {
        let path = normalize(path);
        let nodes = self.lock();
        let node = nodes.get(&path).ok_or_else(|| not_found(&path))?;
        if !node.is_dir() {
            return Err(not_a_directory(&path));
        }
        // BTreeMap iteration keeps entries sorted by path.
        let entries = nodes
            .iter()
            .filter(|(key, _)| key.parent() == Some(path.as_path()))
            .map(|(key, node)| DirEntry {
                path: key.clone(),
                kind: if node.is_dir() { FileKind::Dir } else { FileKind::File },
            })
            .collect();
        Ok(entries)
    }

    fn metadata(&self, path: &Path) -> io::Result<Metadata> {
        let path = normalize(path);
        let nodes = self.lock();
        let node = nodes.get(&path).ok_or_else(|| not_found(&path))?;
        let (kind, len) = match &node.kind {
            NodeKind::Dir => (FileKind::Dir, 0),
            NodeKind::File(data) => (FileKind::File, data.len() as u64),
        };
        Ok(Metadata {
            kind,
            len,
            readonly: node.readonly,
            modified: Some(node.modified),
            accessed: Some(node.accessed),
            created: Some(node.created),
        })
    }

    fn exists(&self, path: &Path) -> bool {
        self.lock().contains_key(&normalize(path))
    }

    fn is_file(&self, path: &Path) -> bool {
        self.lock().get(&normalize(path)).is_some_and(|node| !node.is_dir())
    }

    fn is_dir(&self, path: &Path) -> bool {
        self.lock().get(&normalize(path)).is_some_and(Node::is_dir)
    }

    fn set_readonly(&self, path: &Path, readonly: bool) -> io::Result<()> {
        let path = normalize(path);
        let mut nodes = self.lock();
        let node = nodes.get_mut(&path).ok_or_else(|| not_found(&path))?;
        node.readonly = readonly;
        Ok(())
    }

    fn set_file_times(
        &self,
        path: &Path,
        accessed: DateTime<Utc>,
        modified: DateTime<Utc>,
    ) -> io::Result<()> {
        let path = normalize(path);
        let mut nodes = self.lock();
        let node = nodes.get_mut(&path).ok_or_else(|| not_found(&path))?;
        node.accessed = accessed;
        node.modified = modified;
        Ok(())
    }

    fn open(&self, path: &Path) -> io::Result<Box<dyn Read + Send>> {
        Ok(Box::new(Cursor::new(self.read(path)?)))
    }

    fn create(&self, path: &Path) -> io::Result<Box<dyn Write + Send>> {
        // Creating truncates immediately, like `File::create`.
        self.write(path, b"")?;
        Ok(Box::new(MemWriter {
            path: normalize(path),
            buffer: Vec::new(),
            nodes: Arc::clone(&self.nodes),
            clock: Arc::clone(&self.clock),
        }))
    }
}

// The async port is served straight from the sync tree; nothing suspends.
#[async_trait::async_trait]
impl crate::ports::async_fs::AsyncFileSystem for MemFileSystem {
    async fn read(&self, path: &Path) -> io::Result<Vec<u8>> {
        FileSystem::read(self, path)
    }

    async fn read_to_string(&self, path: &Path) -> io::Result<String> {
        FileSystem::read_to_string(self, path)
    }

    async fn write(&self, path: &Path, contents: &[u8]) -> io::Result<()> {
        FileSystem::write(self, path, contents)
    }

    async fn create_dir_all(&self, path: &Path) -> io::Result<()> {
        FileSystem::create_dir_all(self, path)
    }

    async fn remove_file(&self, path: &Path) -> io::Result<()> {
        FileSystem::remove_file(self, path)
    }

    async fn remove_dir_all(&self, path: &Path) -> io::Result<()> {
        FileSystem::remove_dir_all(self, path)
    }

    async fn copy(&self, from: &Path, to: &Path) -> io::Result<u64> {
        FileSystem::copy(self, from, to)
    }

    async fn rename(&self, from: &Path, to: &Path) -> io::Result<()> {
        FileSystem::rename(self, from, to)
    }

    async fn read_dir(&self, path: &Path) -> io::Result<Vec<DirEntry>> {
        FileSystem::read_dir(self, path)
    }

    async fn metadata(&self, path: &Path) -> io::Result<Metadata> {
        FileSystem::metadata(self, path)
    }

    async fn exists(&self, path: &Path) -> bool {
        FileSystem::exists(self, path)
    }
}

/// Writer returned by [`MemFileSystem::create`]; contents land in the
/// tree on flush and again on drop.
struct MemWriter {
    path: PathBuf,
    buffer: Vec<u8>,
    nodes: Arc<Mutex<Nodes>>,
    clock: Arc<dyn Clock>,
}

impl MemWriter {
    fn commit(&self) {
        let now = self.clock.now();
        let mut nodes = self.nodes.lock().expect("filesystem lock poisoned");
        let entry = nodes
            .entry(self.path.clone())
            .or_insert_with(|| Node::new(NodeKind::File(Vec::new()), now));
        entry.kind = NodeKind::File(self.buffer.clone());
        entry.modified = now;
    }
}

impl Write for MemWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.buffer.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        self.commit();
        Ok(())
    }
}

impl Drop for MemWriter {
    fn drop(&mut self) {
        self.commit();
    }
}
