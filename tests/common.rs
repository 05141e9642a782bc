#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn rts() -> Command {
    cargo_bin_cmd!("rtimesheet")
}

/// Create a unique event store path inside the system temp dir and remove any existing file
pub fn setup_test_store(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_rtimesheet_events.json", name));
    let store_path = path.to_string_lossy().to_string();
    fs::remove_file(&store_path).ok();
    store_path
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_rtimesheet_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Add one event through the CLI.
pub fn add_event(store: &str, title: &str, start: &str, end: &str) {
    rts()
        .args(["--store", store, "add", title, "--start", start, "--end", end])
        .assert()
        .success();
}

/// Initialize the store and add a regular day plus a night shift
pub fn init_store_with_data(store: &str) {
    rts()
        .args(["--store", store, "--test", "init"])
        .assert()
        .success();

    add_event(store, "N", "2024-01-01T08:00", "2024-01-01T16:00");
    add_event(store, "D", "2024-01-01T22:00", "2024-01-02T06:00");
}
