//! Common test utilities for arc integration tests.
//!
//! Provides `TestEnv`, an isolated environment with a fake `osascript`,
//! a private temporary directory and an optional history fixture, so tests
//! never touch a real browser or the user's profile.

#![allow(dead_code)]

use assert_cmd::Command;
use rusqlite::Connection;
use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};
pub use tempfile::TempDir;

/// Seconds between 1601-01-01 and 1970-01-01.
const WEBKIT_EPOCH_OFFSET: i64 = 11_644_473_600;

/// Stand-in for `osascript`: records its arguments, then either prints the
/// canned stdout or fails with the canned stderr.
const FAKE_OSASCRIPT: &str = r#"#!/bin/sh
dir="$(dirname "$0")"
for arg in "$@"; do
  printf '%s\n' "$arg" >> "$dir/calls.log"
done
echo '---' >> "$dir/calls.log"
if [ -f "$dir/stderr.txt" ]; then
  cat "$dir/stderr.txt" >&2
  exit 1
fi
if [ -f "$dir/stdout.txt" ]; then
  cat "$dir/stdout.txt"
fi
"#;

/// A test environment with an isolated automation bridge and temp dir.
///
/// - `bin/osascript`: the fake automation tool (via `ARC_OSASCRIPT`)
/// - `tmp/`: the process temporary directory (via `TMPDIR`), where history
///   snapshots are created
/// - `History`: the history database (via `ARC_HISTORY_PATH`)
pub struct TestEnv {
    pub root: TempDir,
}

impl TestEnv {
    /// Create a new test environment.
    pub fn new() -> Self {
        let root = TempDir::new().unwrap();
        fs::create_dir(root.path().join("bin")).unwrap();
        fs::create_dir(root.path().join("tmp")).unwrap();

        let script = root.path().join("bin").join("osascript");
        fs::write(&script, FAKE_OSASCRIPT).unwrap();
        fs::set_permissions(&script, fs::Permissions::from_mode(0o755)).unwrap();

        Self { root }
    }

    /// Get a Command for the arc binary wired to this environment.
    pub fn arc(&self) -> Command {
        let mut cmd = Command::new(env!("CARGO_BIN_EXE_arc"));
        cmd.current_dir(self.root.path());
        cmd.env("ARC_OSASCRIPT", self.osascript_path());
        cmd.env("ARC_CONFIG", self.config_path());
        cmd.env("ARC_HISTORY_PATH", self.history_path());
        cmd.env("TMPDIR", self.tmp_path());
        cmd.env_remove("ARC_OUTPUT_FORMAT");
        cmd.env_remove("ARC_LOG");
        cmd.env_remove("RUST_LOG");
        cmd
    }

    /// Make every bridge call print `stdout`.
    pub fn respond(&self, stdout: &str) {
        fs::write(self.bin_path().join("stdout.txt"), stdout).unwrap();
    }

    /// Make every bridge call fail with `stderr`.
    pub fn fail(&self, stderr: &str) {
        fs::write(self.bin_path().join("stderr.txt"), stderr).unwrap();
    }

    /// Arguments of every bridge call so far, one argument per line and
    /// calls separated by `---` lines.
    pub fn calls(&self) -> String {
        fs::read_to_string(self.bin_path().join("calls.log")).unwrap_or_default()
    }

    /// Number of bridge calls so far.
    pub fn call_count(&self) -> usize {
        self.calls().lines().filter(|line| *line == "---").count()
    }

    /// Write a config.kdl picked up through `ARC_CONFIG`.
    pub fn write_config(&self, kdl: &str) {
        fs::write(self.config_path(), kdl).unwrap();
    }

    /// Create the history database with `(id, url, title, unix_seconds)` rows.
    pub fn write_history(&self, rows: &[(i64, &str, &str, i64)]) {
        let conn = Connection::open(self.history_path()).unwrap();
        conn.execute_batch(
            "CREATE TABLE urls (
                id INTEGER PRIMARY KEY,
                url LONGVARCHAR,
                title LONGVARCHAR,
                visit_count INTEGER DEFAULT 0 NOT NULL,
                typed_count INTEGER DEFAULT 0 NOT NULL,
                last_visit_time INTEGER NOT NULL,
                hidden INTEGER DEFAULT 0 NOT NULL
            );",
        )
        .unwrap();
        for (id, url, title, unix) in rows {
            conn.execute(
                "INSERT INTO urls (id, url, title, last_visit_time) VALUES (?1, ?2, ?3, ?4)",
                rusqlite::params![id, url, title, webkit_time(*unix)],
            )
            .unwrap();
        }
    }

    /// Put the history database in write-ahead-log mode.
    pub fn enable_wal(&self) {
        let conn = Connection::open(self.history_path()).unwrap();
        let mode: String = conn
            .query_row("PRAGMA journal_mode=WAL", [], |row| row.get(0))
            .unwrap();
        assert_eq!(mode, "wal");
    }

    /// Files left behind in the private temporary directory.
    pub fn tmp_entries(&self) -> Vec<PathBuf> {
        fs::read_dir(self.tmp_path())
            .unwrap()
            .map(|entry| entry.unwrap().path())
            .collect()
    }

    pub fn bin_path(&self) -> PathBuf {
        self.root.path().join("bin")
    }

    pub fn osascript_path(&self) -> PathBuf {
        self.bin_path().join("osascript")
    }

    pub fn tmp_path(&self) -> PathBuf {
        self.root.path().join("tmp")
    }

    pub fn history_path(&self) -> PathBuf {
        self.root.path().join("History")
    }

    pub fn config_path(&self) -> PathBuf {
        self.root.path().join("config.kdl")
    }

    pub fn path(&self) -> &Path {
        self.root.path()
    }
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new()
    }
}

/// Chromium timestamp (microseconds since 1601-01-01) for a Unix time.
pub fn webkit_time(unix_seconds: i64) -> i64 {
    (unix_seconds + WEBKIT_EPOCH_OFFSET) * 1_000_000
}

/// The local-time string the history query reports for a Unix time.
pub fn local_time(unix_seconds: i64) -> String {
    chrono::DateTime::from_timestamp(unix_seconds, 0)
        .unwrap()
        .with_timezone(&chrono::Local)
        .format("%Y-%m-%d %H:%M:%S")
        .to_string()
}
