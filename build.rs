//! Build script for the calculator service
//!
//! Exposes build metadata (timestamp, git revision) to `BuildInfo`.

use std::process::Command;

fn main() {
    let build_time = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or_default();
    println!("cargo:rustc-env=CALCULATOR_BUILD_TIME={}", build_time);

    let git_hash = git_revision().unwrap_or_else(|| "unknown".to_string());
    println!("cargo:rustc-env=CALCULATOR_GIT_HASH={}", git_hash);

    println!("cargo:rerun-if-changed=.git/HEAD");
    println!("cargo:rerun-if-changed=Cargo.toml");
}

/// Short hash of the checked-out commit, if git is available
fn git_revision() -> Option<String> {
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
