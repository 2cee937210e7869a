//! Build script to inject build-time information into `arc --version`.
//!
//! This sets environment variables that can be read at compile time:
//! - `ARC_BUILD_TIMESTAMP`: ISO 8601 timestamp when the binary was built
//! - `ARC_GIT_COMMIT`: Short git commit hash, or "unknown"
//!
//! Release tarballs carry no `.git`, so packagers can set `ARC_GIT_COMMIT`
//! in the build environment to stamp the commit they built from.

use std::env;
use std::process::Command;

const COMMIT_ENV: &str = "ARC_GIT_COMMIT";

fn main() {
    // Rerun if git HEAD changes (new commit)
    println!("cargo:rerun-if-changed=.git/HEAD");
    println!("cargo:rerun-if-changed=.git/index");
    println!("cargo:rerun-if-env-changed={}", COMMIT_ENV);

    let timestamp = chrono::Utc::now().format("%Y-%m-%dT%H:%M:%SZ").to_string();
    println!("cargo:rustc-env=ARC_BUILD_TIMESTAMP={}", timestamp);

    let commit = env::var(COMMIT_ENV)
        .ok()
        .map(|c| c.trim().to_string())
        .filter(|c| !c.is_empty())
        .or_else(git_commit)
        .unwrap_or_else(|| "unknown".to_string());
    println!("cargo:rustc-env={}={}", COMMIT_ENV, commit);
}

/// Short hash of HEAD, if this is a git checkout with git available.
fn git_commit() -> Option<String> {
    let output = Command::new("git")
        .args(["rev-parse", "--short", "HEAD"])
        .output()
        .ok()?;
    if !output.status.success() {
        return None;
    }
    let hash = String::from_utf8(output.stdout).ok()?;
    Some(hash.trim().to_string())
}
