#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn czf() -> Command {
    cargo_bin_cmd!("czfilter")
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_czfilter.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Initialize the store without touching the user's config file
pub fn init_db(db_path: &str) {
    czf()
        .args(["--db", db_path, "--test", "init"])
        .assert()
        .success();
}

/// Initialize the store and save two filters: a named preset and a custom range
pub fn init_db_with_filters(db_path: &str) {
    init_db(db_path);

    czf()
        .args(["--db", db_path, "save", "--preset", "last-7-days", "--name", "weekly"])
        .assert()
        .success();

    czf()
        .args([
            "--db",
            db_path,
            "--today",
            "2025-03-15",
            "save",
            "--name",
            "Q1",
            "2025-01-01 to 2025-03-31",
            "--granularity",
            "monthly",
        ])
        .assert()
        .success();
}
