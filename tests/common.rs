#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use chrono::NaiveDate;
use std::env;
use std::fs;
use std::path::PathBuf;

/// The binary under test, with HOME/APPDATA pointed at a scratch directory
/// so a real user configuration is never read or written.
pub fn hl() -> Command {
    let home = env::temp_dir().join("habitlog_test_home");
    let mut cmd = cargo_bin_cmd!("habitlog");
    cmd.env("HOME", &home).env("APPDATA", &home);
    cmd
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_habitlog.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_habitlog_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Initialize a fresh DB through the CLI.
pub fn init_db(db_path: &str) {
    hl().args(["--db", db_path, "--test", "init"])
        .assert()
        .success();
}

/// Initialize a DB and add two habits for `alice` (ids 1 and 2).
pub fn init_db_with_habits(db_path: &str) {
    init_db(db_path);

    hl().args(["--db", db_path, "--user", "alice", "add", "Drink", "water", "8", "cups"])
        .assert()
        .success();

    hl().args(["--db", db_path, "--user", "alice", "add", "Stretch"])
        .assert()
        .success();
}

pub fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
}
