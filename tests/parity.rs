//! Adapter-vs-platform parity suite.
//!
//! The live adapters claim to be pure forwards. For each member, invoke
//! the adapter and the underlying platform call with identical inputs and
//! assert identical observable outcomes: return values, error kinds, and
//! on-disk effects.

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use chrono::{DateTime, Utc};
use sysports::adapters::live::{LiveFileSystem, LiveMonotonicClock, LivePaths};
use sysports::ports::{FileSystem, MonotonicClock, Paths};

fn seed(dir: &Path) {
    fs::write(dir.join("alpha.txt"), b"alpha contents").unwrap();
    fs::write(dir.join("beta.bin"), [0u8, 1, 2, 3]).unwrap();
    fs::create_dir(dir.join("nested")).unwrap();
    fs::write(dir.join("nested/gamma.txt"), b"gamma").unwrap();
}

#[test]
fn read_matches_direct_read() {
    let scratch = tempfile::tempdir().unwrap();
    seed(scratch.path());
    let target = scratch.path().join("alpha.txt");

    let via_port = LiveFileSystem.read(&target).unwrap();
    let direct = fs::read(&target).unwrap();
    assert_eq!(via_port, direct);

    let via_port = LiveFileSystem.read_to_string(&target).unwrap();
    let direct = fs::read_to_string(&target).unwrap();
    assert_eq!(via_port, direct);
}

#[test]
fn read_error_kind_matches_direct() {
    let scratch = tempfile::tempdir().unwrap();
    let missing = scratch.path().join("missing.txt");

    let via_port = LiveFileSystem.read(&missing).unwrap_err();
    let direct = fs::read(&missing).unwrap_err();
    assert_eq!(via_port.kind(), direct.kind());
}

#[test]
fn write_effect_matches_direct_write() {
    let scratch = tempfile::tempdir().unwrap();
    let via_port_path = scratch.path().join("via_port.txt");
    let direct_path = scratch.path().join("direct.txt");

    LiveFileSystem.write(&via_port_path, b"same payload").unwrap();
    fs::write(&direct_path, b"same payload").unwrap();

    assert_eq!(fs::read(&via_port_path).unwrap(), fs::read(&direct_path).unwrap());
}

#[test]
fn append_effect_matches_direct_append() {
    use std::io::Write;

    let scratch = tempfile::tempdir().unwrap();
    let via_port_path = scratch.path().join("via_port.log");
    let direct_path = scratch.path().join("direct.log");

    for chunk in [&b"one "[..], &b"two"[..]] {
        LiveFileSystem.append(&via_port_path, chunk).unwrap();
        let mut file = fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&direct_path)
            .unwrap();
        file.write_all(chunk).unwrap();
    }

    assert_eq!(fs::read(&via_port_path).unwrap(), fs::read(&direct_path).unwrap());
}

#[test]
fn copy_matches_direct_copy() {
    let scratch = tempfile::tempdir().unwrap();
    seed(scratch.path());
    let source = scratch.path().join("beta.bin");

    let via_port_len =
        LiveFileSystem.copy(&source, &scratch.path().join("via_port.bin")).unwrap();
    let direct_len = fs::copy(&source, scratch.path().join("direct.bin")).unwrap();

    assert_eq!(via_port_len, direct_len);
    assert_eq!(
        fs::read(scratch.path().join("via_port.bin")).unwrap(),
        fs::read(scratch.path().join("direct.bin")).unwrap()
    );
}

#[test]
fn rename_effect_matches_direct_rename() {
    let scratch = tempfile::tempdir().unwrap();
    fs::write(scratch.path().join("a"), b"x").unwrap();
    fs::write(scratch.path().join("b"), b"x").unwrap();

    LiveFileSystem.rename(&scratch.path().join("a"), &scratch.path().join("a2")).unwrap();
    fs::rename(scratch.path().join("b"), scratch.path().join("b2")).unwrap();

    assert!(!scratch.path().join("a").exists() && scratch.path().join("a2").exists());
    assert!(!scratch.path().join("b").exists() && scratch.path().join("b2").exists());
}

#[test]
fn create_dir_error_kind_matches_direct() {
    let scratch = tempfile::tempdir().unwrap();
    let target = scratch.path().join("dup");

    LiveFileSystem.create_dir(&target).unwrap();
    let via_port = LiveFileSystem.create_dir(&target).unwrap_err();
    let direct = fs::create_dir(&target).unwrap_err();

    assert_eq!(via_port.kind(), direct.kind());
    assert_eq!(via_port.kind(), ErrorKind::AlreadyExists);
}

#[test]
fn remove_dir_on_non_empty_matches_direct() {
    let scratch = tempfile::tempdir().unwrap();
    seed(scratch.path());
    let target = scratch.path().join("nested");

    let via_port = LiveFileSystem.remove_dir(&target).unwrap_err();
    let direct = fs::remove_dir(&target).unwrap_err();
    assert_eq!(via_port.kind(), direct.kind());
}

#[test]
fn remove_file_and_remove_dir_all_effects_match() {
    let scratch = tempfile::tempdir().unwrap();
    seed(scratch.path());

    LiveFileSystem.remove_file(&scratch.path().join("alpha.txt")).unwrap();
    assert!(!scratch.path().join("alpha.txt").exists());

    LiveFileSystem.remove_dir_all(&scratch.path().join("nested")).unwrap();
    assert!(!scratch.path().join("nested").exists());
}

#[test]
fn read_dir_lists_the_same_entries() {
    let scratch = tempfile::tempdir().unwrap();
    seed(scratch.path());

    let via_port: Vec<_> = LiveFileSystem
        .read_dir(scratch.path())
        .unwrap()
        .into_iter()
        .map(|entry| entry.path)
        .collect();
    let mut direct: Vec<_> = fs::read_dir(scratch.path())
        .unwrap()
        .map(|entry| entry.unwrap().path())
        .collect();
    direct.sort();

    assert_eq!(via_port, direct);
}

#[test]
fn metadata_matches_direct_metadata() {
    let scratch = tempfile::tempdir().unwrap();
    seed(scratch.path());
    let target = scratch.path().join("alpha.txt");

    let via_port = LiveFileSystem.metadata(&target).unwrap();
    let direct = fs::metadata(&target).unwrap();

    assert_eq!(via_port.len, direct.len());
    assert_eq!(via_port.is_file(), direct.is_file());
    assert_eq!(via_port.readonly, direct.permissions().readonly());
    assert_eq!(via_port.modified, direct.modified().ok().map(DateTime::<Utc>::from));
}

#[test]
fn existence_queries_match_direct_queries() {
    let scratch = tempfile::tempdir().unwrap();
    seed(scratch.path());
    let fs_port = LiveFileSystem;

    for name in ["alpha.txt", "nested", "absent"] {
        let path = scratch.path().join(name);
        assert_eq!(fs_port.exists(&path), path.exists(), "exists({name})");
        assert_eq!(fs_port.is_file(&path), path.is_file(), "is_file({name})");
        assert_eq!(fs_port.is_dir(&path), path.is_dir(), "is_dir({name})");
    }
}

#[test]
fn set_readonly_effect_matches_direct() {
    let scratch = tempfile::tempdir().unwrap();
    seed(scratch.path());
    let target = scratch.path().join("alpha.txt");

    LiveFileSystem.set_readonly(&target, true).unwrap();
    assert!(fs::metadata(&target).unwrap().permissions().readonly());

    LiveFileSystem.set_readonly(&target, false).unwrap();
    assert!(!fs::metadata(&target).unwrap().permissions().readonly());
}

#[test]
fn canonicalize_matches_direct_canonicalize() {
    let scratch = tempfile::tempdir().unwrap();
    seed(scratch.path());
    let dotted = scratch.path().join("nested").join("..").join("alpha.txt");

    let via_port = LivePaths.canonicalize(&dotted).unwrap();
    let direct = fs::canonicalize(&dotted).unwrap();
    assert_eq!(via_port, direct);
}

#[test]
fn process_path_queries_match_std() {
    assert_eq!(LivePaths.current_dir().unwrap(), std::env::current_dir().unwrap());
    assert_eq!(LivePaths.temp_dir(), std::env::temp_dir());
}

#[test]
fn monotonic_elapsed_brackets_a_direct_instant() {
    let direct = std::time::Instant::now();
    let clock = LiveMonotonicClock::new();

    std::thread::sleep(std::time::Duration::from_millis(5));

    let via_port = clock.elapsed();
    let upper = direct.elapsed();
    assert!(via_port <= upper);
    assert!(via_port >= std::time::Duration::from_millis(5));
}
