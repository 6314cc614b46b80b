// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

use super::*;
use similar_asserts::assert_eq;

#[test]
fn test_logged_out_landing() {
    let landing = Landing::LoggedOut {
        organization: "Campus Desk".into(),
    };
    assert_eq!(
        render(&landing, false),
        "\
Campus Desk
Student Problem Management System

A centralized platform for students to raise issues and track resolutions efficiently

  Easy Issue Tracking: Raise and track your issues with real-time status updates
  Multiple Categories: Technical, Hostel, HR, Placement, and more
  Admin Dashboard: Powerful tools for administrators to manage and resolve issues

Get started: stix login <user>"
    );
}

#[test]
fn test_uninitialized_landing_points_at_init() {
    let page = render(&Landing::Uninitialized, false);
    assert!(page.starts_with(DEFAULT_ORGANIZATION));
    assert!(page.ends_with("Get started: stix init"));
}

#[test]
fn test_colorized_landing_keeps_text() {
    let page = render(&Landing::Uninitialized, true);
    assert!(page.contains("\x1b["));
    assert!(page.contains(SUBTITLE));
    assert!(page.contains("Multiple Categories\x1b[0m: Technical, Hostel, HR, Placement, and more"));
}
