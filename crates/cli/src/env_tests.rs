// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

use super::*;

#[test]
fn test_vars_constants() {
    assert_eq!(vars::NO_COLOR, "NO_COLOR");
    assert_eq!(vars::COLOR, "COLOR");
    assert_eq!(vars::STIX_USER, "STIX_USER");
    assert_eq!(vars::STIX_LOG, "STIX_LOG");
    assert_eq!(vars::RUST_LOG, "RUST_LOG");
}

#[test]
fn test_no_color_unset() {
    std::env::remove_var("NO_COLOR");
    assert!(!no_color());
}

#[test]
fn test_no_color_set_to_one() {
    std::env::set_var("NO_COLOR", "1");
    assert!(no_color());
    std::env::remove_var("NO_COLOR");
}

#[test]
fn test_no_color_other_value() {
    std::env::set_var("NO_COLOR", "0");
    assert!(!no_color());
    std::env::remove_var("NO_COLOR");
}

#[test]
fn test_force_color_unset() {
    std::env::remove_var("COLOR");
    assert!(!force_color());
}

#[test]
fn test_user_override() {
    std::env::set_var("STIX_USER", "  alice ");
    assert_eq!(user_override().as_deref(), Some("alice"));

    std::env::set_var("STIX_USER", "   ");
    assert!(user_override().is_none());

    std::env::remove_var("STIX_USER");
    assert!(user_override().is_none());
}

#[test]
fn test_log_filter_prefers_stix_log() {
    std::env::set_var("STIX_LOG", "debug");
    std::env::set_var("RUST_LOG", "trace");
    assert_eq!(log_filter().as_deref(), Some("debug"));

    std::env::remove_var("STIX_LOG");
    assert_eq!(log_filter().as_deref(), Some("trace"));

    std::env::remove_var("RUST_LOG");
    assert!(log_filter().is_none());
}
