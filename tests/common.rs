#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use chrono::{DateTime, TimeDelta, Utc};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use timeledger::models::work_session::{BreakInterval, WorkSession};

pub fn tl() -> Command {
    cargo_bin_cmd!("timeledger")
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_timeledger.sqlite", name));
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

/// Initialize a test DB through the CLI (test mode: no config file is written)
pub fn init_db(db_path: &str) {
    tl().args(["--db", db_path, "--test", "init"])
        .assert()
        .success();
}

/// Run a CLI command against `db_path` as `owner`, in Europe/London
pub fn tl_as(db_path: &str, owner: &str) -> Command {
    let mut cmd = tl();
    cmd.args(["--db", db_path, "--owner", owner, "--tz", "Europe/London"]);
    cmd
}

pub fn ts(s: &str) -> DateTime<Utc> {
    DateTime::parse_from_rfc3339(s)
        .expect("valid RFC 3339 test timestamp")
        .with_timezone(&Utc)
}

/// Fixed reference instant used across the ledger tests (a winter Monday).
pub fn t0() -> DateTime<Utc> {
    ts("2025-01-13T09:00:00Z")
}

pub fn secs(n: i64) -> TimeDelta {
    TimeDelta::seconds(n)
}

pub fn session(
    clock_in: Option<DateTime<Utc>>,
    clock_out: Option<DateTime<Utc>>,
    breaks: Vec<BreakInterval>,
) -> WorkSession {
    WorkSession {
        id: "s-1".to_string(),
        owner_id: "alice".to_string(),
        clock_in,
        clock_out,
        breaks,
    }
}

pub fn brk(start: DateTime<Utc>, end: Option<DateTime<Utc>>) -> BreakInterval {
    BreakInterval::new(start, end)
}

/// Fresh fake home directory, so commands that write the config file stay
/// out of the real one. Returns (home, config file path).
pub fn temp_home(name: &str) -> (PathBuf, PathBuf) {
    let mut home: PathBuf = env::temp_dir();
    home.push(format!("{}_timeledger_home", name));
    fs::remove_dir_all(&home).ok();
    fs::create_dir_all(&home).expect("create temp home");

    let conf = if cfg!(target_os = "windows") {
        home.join("timeledger").join("timeledger.conf")
    } else {
        home.join(".timeledger").join("timeledger.conf")
    };
    (home, conf)
}

/// CLI command whose config lives under `home`.
pub fn tl_home(home: &Path) -> Command {
    let mut cmd = tl();
    cmd.env("HOME", home).env("APPDATA", home);
    cmd
}
