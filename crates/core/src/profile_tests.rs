// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

use super::*;
use yare::parameterized;

#[parameterized(
    student = { "student", Role::Student },
    admin = { "admin", Role::Admin },
    admin_upper = { "ADMIN", Role::Admin },
    padded = { " admin ", Role::Admin },
)]
fn role_from_str_valid(input: &str, expected: Role) {
    assert_eq!(input.parse::<Role>().unwrap(), expected);
}

#[parameterized(
    unknown = { "root" },
    empty = { "" },
)]
fn role_from_str_invalid(input: &str) {
    assert!(matches!(input.parse::<Role>(), Err(Error::InvalidRole(_))));
}

#[test]
fn role_labels() {
    assert_eq!(Role::Student.label(), "Student");
    assert_eq!(Role::Admin.label(), "Admin");
    assert!(Role::Admin.is_admin());
    assert!(!Role::Student.is_admin());
}

#[test]
fn profile_with_academics() {
    let profile = Profile::new("alice".into(), "Alice Doe".into(), Utc::now())
        .with_academics(Some("BCE-42".into()), None);
    assert_eq!(profile.batch.as_deref(), Some("BCE-42"));
    assert!(profile.domain.is_none());
}

#[test]
fn profile_json_omits_missing_academics() {
    let profile = Profile::new("alice".into(), "Alice Doe".into(), Utc::now());
    let json = serde_json::to_string(&profile).unwrap();
    assert!(json.contains("\"full_name\":\"Alice Doe\""));
    assert!(!json.contains("batch"));
    assert!(!json.contains("domain"));
}
