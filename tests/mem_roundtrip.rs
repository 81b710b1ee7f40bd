//! End-to-end run against the in-memory context.
//!
//! Drives a small interactive "application" through every port of
//! `SystemContext::in_memory()`, then asserts on the state the doubles
//! captured. Runs the same scenario twice to check determinism.

use std::path::Path;
use std::time::Duration;

use sysports::ports::{Console, FileSystem, FsEvent, FsEventKind, FsWatcher, Paths};
use sysports::{MemHandles, Stopwatch, SystemContext};

/// Reads a name from the console, writes a greeting file, and reports the
/// file's timestamp. Everything goes through the context's ports.
fn run_greeter(ctx: &SystemContext) -> (String, String) {
    let name = ctx.console.read_line().unwrap().unwrap_or_else(|| "stranger".to_string());

    ctx.fs.create_dir_all(Path::new("/greetings")).unwrap();
    ctx.fs
        .write(Path::new("/greetings/latest.txt"), format!("hello, {name}").as_bytes())
        .unwrap();

    let stamped = ctx.fs.metadata(Path::new("/greetings/latest.txt")).unwrap();
    ctx.console
        .write_line(&format!("greeted {name} at {}", stamped.modified.unwrap().to_rfc3339()))
        .unwrap();

    let contents = ctx.fs.read_to_string(Path::new("/greetings/latest.txt")).unwrap();
    (name, contents)
}

fn scripted_run() -> (String, String, String) {
    let (ctx, handles) = SystemContext::in_memory();
    handles.console.push_input("ada");
    handles.clock.advance(chrono::Duration::seconds(42));

    let (name, contents) = run_greeter(&ctx);
    (name, contents, handles.console.output())
}

#[test]
fn greeter_round_trips_through_the_doubles() {
    let (name, contents, output) = scripted_run();

    assert_eq!(name, "ada");
    assert_eq!(contents, "hello, ada");
    assert_eq!(output, "greeted ada at 1970-01-01T00:00:42+00:00\n");
}

#[test]
fn scripted_runs_are_deterministic() {
    assert_eq!(scripted_run(), scripted_run());
}

#[test]
fn watcher_events_reach_the_context_subscription() {
    let (ctx, handles) = SystemContext::in_memory();
    let handle = ctx.watcher.watch(Path::new("/greetings"), false).unwrap();

    handles
        .watcher
        .emit(&FsEvent { kind: FsEventKind::Created, path: "/greetings/latest.txt".into() });

    let event = handle.wait(Duration::from_millis(100)).unwrap();
    assert_eq!(event.kind, FsEventKind::Created);
    assert_eq!(event.path, Path::new("/greetings/latest.txt"));
}

#[test]
fn stopwatch_reads_through_the_context_clock() {
    let (ctx, handles): (SystemContext, MemHandles) = SystemContext::in_memory();

    let mut watch = Stopwatch::start_new(ctx.monotonic);
    handles.monotonic.advance(Duration::from_millis(750));
    watch.stop();

    assert_eq!(watch.elapsed(), Duration::from_millis(750));
}

#[test]
fn virtual_paths_stay_inside_the_sandbox() {
    let (ctx, _handles) = SystemContext::in_memory();

    ctx.paths.set_current_dir(Path::new("/projects/app")).unwrap();
    let resolved = ctx.paths.canonicalize(Path::new("../shared")).unwrap();
    assert_eq!(resolved, Path::new("/projects/shared"));

    assert_eq!(ctx.paths.temp_dir(), Path::new("/tmp"));
    assert_eq!(ctx.paths.home_dir().unwrap(), Path::new("/home/user"));
}
