//! Integration tests for `arc history`.
//!
//! These tests verify that:
//! - entries come back most recent first, one per address
//! - `-q` matches URL or title, `-l` caps the result
//! - the snapshot copy never outlives the invocation, even on failure
//! - the live database is left untouched

#![cfg(unix)]

mod common;

use common::{TestEnv, local_time};
use predicates::prelude::*;
use std::fs;

const DAY: i64 = 86_400;
const BASE: i64 = 1_700_000_000;

fn seeded() -> TestEnv {
    let env = TestEnv::new();
    env.write_history(&[
        (1, "https://news.example.com/", "Daily News", BASE),
        (2, "https://docs.rs/serde", "serde - Rust", BASE + DAY),
        (3, "https://example.com/blog", "Tech newsletter", BASE + 2 * DAY),
        (4, "https://docs.rs/serde", "serde - Rust", BASE + 3 * DAY),
        (5, "https://example.com/100%", "Percent", BASE + 4 * DAY),
    ]);
    env
}

fn urls(stdout: &[u8]) -> Vec<String> {
    String::from_utf8_lossy(stdout)
        .lines()
        .map(|line| line.split('\t').next().unwrap_or_default().to_string())
        .collect()
}

#[test]
fn test_history_most_recent_first_and_grouped() {
    let env = seeded();

    let output = env.arc().arg("history").output().unwrap();
    assert!(output.status.success());
    assert_eq!(
        urls(&output.stdout),
        vec![
            "https://example.com/100%",
            "https://docs.rs/serde",
            "https://example.com/blog",
            "https://news.example.com/",
        ]
    );

    let stdout = String::from_utf8_lossy(&output.stdout);
    let expected = format!("https://docs.rs/serde\tserde - Rust\t{}", local_time(BASE + 3 * DAY));
    assert!(stdout.contains(&expected));
}

#[test]
fn test_history_query_matches_url_or_title() {
    let env = seeded();

    let output = env.arc().args(["history", "-q", "news"]).output().unwrap();
    assert!(output.status.success());
    assert_eq!(
        urls(&output.stdout),
        vec!["https://example.com/blog", "https://news.example.com/"]
    );
}

#[test]
fn test_history_query_is_literal() {
    let env = seeded();

    let output = env.arc().args(["history", "--query", "%"]).output().unwrap();
    assert!(output.status.success());
    assert_eq!(urls(&output.stdout), vec!["https://example.com/100%"]);
}

#[test]
fn test_history_limit() {
    let env = seeded();

    let output = env.arc().args(["history", "-l", "2"]).output().unwrap();
    assert!(output.status.success());
    assert_eq!(urls(&output.stdout).len(), 2);

    let output = env.arc().args(["history", "-l", "0"]).output().unwrap();
    assert!(output.status.success());
    assert_eq!(urls(&output.stdout).len(), 4);
}

#[test]
fn test_history_json() {
    let env = seeded();

    let output = env
        .arc()
        .args(["history", "-q", "serde", "--json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let entries: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let entries = entries.as_array().unwrap();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0]["url"], "https://docs.rs/serde");
    assert_eq!(entries[0]["title"], "serde - Rust");
    assert_eq!(entries[0]["lastVisitedAt"], local_time(BASE + 3 * DAY));
}

#[test]
fn test_history_leaves_no_snapshot_behind() {
    let env = seeded();
    let before = fs::read(env.history_path()).unwrap();

    env.arc().arg("history").assert().success();

    assert!(env.tmp_entries().is_empty());
    assert_eq!(fs::read(env.history_path()).unwrap(), before);
}

#[test]
fn test_history_wal_database_leaves_no_journal_behind() {
    let env = seeded();
    env.enable_wal();

    let output = env.arc().arg("history").output().unwrap();
    assert!(output.status.success());
    assert_eq!(urls(&output.stdout).len(), 4);
    assert_eq!(env.tmp_entries(), Vec::<std::path::PathBuf>::new());
}

#[test]
fn test_history_path_flag_overrides_env() {
    let env = seeded();
    let other = env.path().join("Other");
    fs::copy(env.history_path(), &other).unwrap();
    fs::remove_file(env.history_path()).unwrap();

    env.arc()
        .args(["history", "--history-path"])
        .arg(&other)
        .assert()
        .success()
        .stdout(predicate::str::contains("https://docs.rs/serde"));
}

#[test]
fn test_history_missing_database() {
    let env = TestEnv::new();

    env.arc()
        .arg("history")
        .assert()
        .failure()
        .stdout("")
        .stderr(predicate::str::contains("failed to open history file"));
    assert!(env.tmp_entries().is_empty());
}

#[test]
fn test_history_corrupt_database_cleans_up() {
    let env = TestEnv::new();
    fs::write(env.history_path(), b"this is not a sqlite database").unwrap();

    env.arc()
        .arg("history")
        .assert()
        .failure()
        .stdout("")
        .stderr(predicate::str::contains("Error:"));
    assert!(env.tmp_entries().is_empty());
}

#[test]
fn test_history_does_not_call_bridge() {
    let env = seeded();
    env.arc().arg("history").assert().success();
    assert_eq!(env.call_count(), 0);
}
