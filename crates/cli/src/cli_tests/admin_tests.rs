// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]
#![allow(clippy::panic)]

use super::*;

#[test]
fn test_admin_filters() {
    let cli = parse(&["stix", "admin", "-s", "pending", "-c", "hr", "-p", "high"]).unwrap();
    match cli.command {
        Some(Command::Admin {
            status, filter, ..
        }) => {
            assert_eq!(status.as_deref(), Some("pending"));
            assert_eq!(filter.category.as_deref(), Some("hr"));
            assert_eq!(filter.priority.as_deref(), Some("high"));
        }
        _ => panic!("Expected Admin command"),
    }
}

#[test]
fn test_status_command() {
    let cli = parse(&["stix", "status", "camp-1234", "resolved"]).unwrap();
    match cli.command {
        Some(Command::Status { id, status }) => {
            assert_eq!(id, "camp-1234");
            assert_eq!(status, "resolved");
        }
        _ => panic!("Expected Status command"),
    }
}

#[test]
fn test_status_requires_value() {
    assert!(parse(&["stix", "status", "camp-1234"]).is_err());
}

#[test]
fn test_log_default_limit() {
    let cli = parse(&["stix", "log"]).unwrap();
    match cli.command {
        Some(Command::Log { id, limits }) => {
            assert!(id.is_none());
            assert_eq!(limits.limit, 20);
        }
        _ => panic!("Expected Log command"),
    }
}

#[test]
fn test_log_rejects_zero_limit() {
    assert!(parse(&["stix", "log", "-n", "0"]).is_err());
}

#[test]
fn test_log_for_issue_with_limit() {
    let cli = parse(&["stix", "log", "camp-1234", "-n", "5"]).unwrap();
    match cli.command {
        Some(Command::Log { id, limits }) => {
            assert_eq!(id.as_deref(), Some("camp-1234"));
            assert_eq!(limits.limit, 5);
        }
        _ => panic!("Expected Log command"),
    }
}
