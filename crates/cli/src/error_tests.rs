// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

use super::*;
use yare::parameterized;

#[test]
fn test_error_not_initialized_display() {
    let err = Error::NotInitialized;
    assert!(err.to_string().contains("not initialized"));
    assert!(err.to_string().contains("stix init"));
}

#[test]
fn test_error_not_logged_in_display() {
    let err = Error::NotLoggedIn;
    assert_eq!(
        err.to_string(),
        "not logged in: run 'stix login <user>' first"
    );
}

#[test]
fn test_error_already_initialized_display() {
    let err = Error::AlreadyInitialized("/path/to/.stix".to_string());
    assert!(err.to_string().contains("already initialized"));
    assert!(err.to_string().contains("/path/to/.stix"));
}

#[test]
fn test_error_permission_denied_display() {
    let err = Error::PermissionDenied {
        action: "changing status",
        user: "alice".to_string(),
    };
    let msg = err.to_string();
    assert!(msg.contains("permission denied"));
    assert!(msg.contains("changing status"));
    assert!(msg.contains("stix role grant alice admin"));
}

#[test]
fn test_error_field_too_long_display() {
    let err = Error::FieldTooLong {
        field: "Title",
        actual: 250,
        max: 200,
    };
    assert_eq!(err.to_string(), "Title too long (250 chars, max 200)");
}

#[test]
fn test_error_field_empty_display() {
    let err = Error::FieldEmpty { field: "Comment" };
    assert_eq!(err.to_string(), "Comment cannot be empty");
}

#[parameterized(
    issue = { stix_core::Error::IssueNotFound("stix-1".into()), "issue not found: stix-1" },
    profile = { stix_core::Error::ProfileNotFound("bob".into()), "profile not found: bob" },
    category = { stix_core::Error::InvalidCategory("food".into()), "valid categories" },
    priority = { stix_core::Error::InvalidPriority("urgent".into()), "valid priorities" },
    status = { stix_core::Error::InvalidStatus("done".into()), "valid statuses" },
    role = { stix_core::Error::InvalidRole("owner".into()), "valid roles" },
    tab = { stix_core::Error::InvalidTab("closed".into()), "valid tabs" },
    corrupted = { stix_core::Error::InvalidAction("deleted".into()), "invalid action: deleted" },
)]
fn test_from_core_error(core: stix_core::Error, expected: &str) {
    let err: Error = core.into();
    assert!(
        err.to_string().contains(expected),
        "'{}' should contain '{}'",
        err,
        expected
    );
}

#[test]
fn test_from_core_database_error() {
    let core = stix_core::Error::Database(rusqlite::Error::QueryReturnedNoRows);
    assert!(matches!(Error::from(core), Error::Database(_)));
}

#[test]
fn test_from_io_error() {
    let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
    let err: Error = io.into();
    assert!(err.to_string().contains("io error"));
}
