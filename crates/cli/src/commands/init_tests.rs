// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

use super::*;
use crate::config::find_work_dir_from;
use crate::error::Error;
use tempfile::TempDir;

#[test]
fn test_init_creates_config_database_and_gitignore() {
    let temp = TempDir::new().unwrap();
    let work_dir = run_impl(temp.path(), Some("camp".into()), Some("Campus Desk".into())).unwrap();

    assert_eq!(work_dir, temp.path().join(".stix"));
    assert!(work_dir.join("issues.db").exists());
    assert!(work_dir.join(".gitignore").exists());

    let config = Config::load(&work_dir).unwrap();
    assert_eq!(config.prefix, "camp");
    assert_eq!(config.organization, "Campus Desk");
}

#[test]
fn test_init_defaults_organization() {
    let temp = TempDir::new().unwrap();
    let work_dir = run_impl(temp.path(), Some("camp".into()), None).unwrap();
    let config = Config::load(&work_dir).unwrap();
    assert_eq!(config.organization, DEFAULT_ORGANIZATION);
}

#[test]
fn test_init_derives_prefix_from_directory() {
    let temp = TempDir::new().unwrap();
    let project = temp.path().join("Campus-42");
    std::fs::create_dir(&project).unwrap();

    let work_dir = run_impl(&project, None, None).unwrap();
    assert_eq!(Config::load(&work_dir).unwrap().prefix, "campus42");
}

#[test]
fn test_init_rejects_invalid_prefix() {
    let temp = TempDir::new().unwrap();
    let result = run_impl(temp.path(), Some("Bad-Prefix".into()), None);
    assert!(matches!(result, Err(Error::InvalidPrefix)));
    assert!(!temp.path().join(".stix").exists());
}

#[test]
fn test_init_twice_fails() {
    let temp = TempDir::new().unwrap();
    run_impl(temp.path(), Some("camp".into()), None).unwrap();
    let result = run_impl(temp.path(), Some("camp".into()), None);
    assert!(matches!(result, Err(Error::AlreadyInitialized(_))));
}

#[test]
fn test_init_is_discoverable_from_subdirectory() {
    let temp = TempDir::new().unwrap();
    run_impl(temp.path(), Some("camp".into()), None).unwrap();
    let nested = temp.path().join("a").join("b");
    std::fs::create_dir_all(&nested).unwrap();

    assert_eq!(
        find_work_dir_from(&nested).unwrap(),
        temp.path().join(".stix")
    );
}
