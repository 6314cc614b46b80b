// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

// Allow unused items: test helpers are shared across multiple test binaries,
// and not every test file uses every helper.
#![allow(dead_code)]
#![allow(unused_imports)]

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;

pub use predicates::prelude::*;
pub use tempfile::TempDir;

/// The `stix` binary with a clean environment: no user override, no color.
pub fn stix() -> Command {
    let mut cmd = cargo_bin_cmd!("stix");
    cmd.env_remove("STIX_USER")
        .env_remove("STIX_LOG")
        .env_remove("RUST_LOG")
        .env_remove("COLOR")
        .env("NO_COLOR", "1");
    cmd
}

/// `stix` running inside `temp`.
pub fn stix_in(temp: &TempDir) -> Command {
    let mut cmd = stix();
    cmd.current_dir(temp.path());
    cmd
}

/// `stix` running inside `temp` as `user`.
pub fn stix_as(temp: &TempDir, user: &str) -> Command {
    let mut cmd = stix_in(temp);
    cmd.env("STIX_USER", user);
    cmd
}

/// Helper to create an initialized temp directory
pub fn init_temp() -> TempDir {
    let temp = TempDir::new().unwrap();
    stix_in(&temp)
        .args(["init", "--prefix", "test", "--name", "Campus Desk"])
        .assert()
        .success();
    temp
}

/// Helper to create a profile
pub fn add_user(temp: &TempDir, id: &str, name: &str) {
    stix_in(temp)
        .args(["profile", "set", id, "--name", name])
        .assert()
        .success();
}

/// Helper to create a profile holding the admin role
pub fn add_admin(temp: &TempDir, id: &str, name: &str) {
    add_user(temp, id, name);
    stix_in(temp)
        .args(["role", "grant", id, "admin"])
        .assert()
        .success();
}

/// Initialized tracker with student `alice` and admin `root`.
pub fn campus() -> TempDir {
    let temp = init_temp();
    add_user(&temp, "alice", "Alice Doe");
    add_admin(&temp, "root", "Staff Admin");
    temp
}

/// Helper to raise an issue as `user` and return its ID
pub fn create_issue(temp: &TempDir, user: &str, category: &str, title: &str) -> String {
    let output = stix_as(temp, user)
        .args(["new", category, title])
        .output()
        .unwrap();
    assert!(output.status.success(), "stix new failed: {output:?}");

    String::from_utf8_lossy(&output.stdout)
        .split_whitespace()
        .find(|s| s.starts_with("test-"))
        .unwrap()
        .trim_end_matches(':')
        .to_string()
}
