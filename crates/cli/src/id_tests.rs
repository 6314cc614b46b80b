// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

use super::*;
use std::collections::HashSet;
use std::path::PathBuf;
use yare::parameterized;

fn fixed_time() -> DateTime<Utc> {
    "2025-03-01T09:30:00Z".parse().unwrap()
}

#[test]
fn generated_id_has_prefix_and_eight_hex_chars() {
    let id = generate_id("camp", "Wifi down in block C", &fixed_time());
    let (prefix, hash) = id.split_once('-').unwrap();
    assert_eq!(prefix, "camp");
    assert_eq!(hash.len(), 8);
    assert!(hash.chars().all(|c| c.is_ascii_hexdigit()));
}

#[test]
fn generated_id_is_deterministic() {
    let a = generate_id("camp", "Title", &fixed_time());
    let b = generate_id("camp", "Title", &fixed_time());
    assert_eq!(a, b);
}

#[test]
fn different_titles_give_different_ids() {
    let a = generate_id("camp", "Title A", &fixed_time());
    let b = generate_id("camp", "Title B", &fixed_time());
    assert_ne!(a, b);
}

#[test]
fn unique_id_without_collision() {
    let id = generate_unique_id("camp", "Title", &fixed_time(), |_| Ok(false)).unwrap();
    assert_eq!(id, generate_id("camp", "Title", &fixed_time()));
}

#[test]
fn unique_id_appends_suffix_on_collision() {
    let base = generate_id("camp", "Title", &fixed_time());
    let taken: HashSet<String> = [base.clone(), format!("{base}-2")].into_iter().collect();

    let id = generate_unique_id("camp", "Title", &fixed_time(), |candidate| {
        Ok(taken.contains(candidate))
    })
    .unwrap();
    assert_eq!(id, format!("{base}-3"));
}

#[test]
fn unique_id_propagates_lookup_errors() {
    let result = generate_unique_id("camp", "Title", &fixed_time(), |_| {
        Err(Error::NotLoggedIn)
    });
    assert!(result.is_err());
}

#[parameterized(
    simple = { "camp", true },
    with_digit = { "c2", true },
    too_short = { "c", false },
    uppercase = { "Camp", false },
    digits_only = { "42", false },
    dash = { "my-camp", false },
)]
fn prefix_validation(prefix: &str, valid: bool) {
    assert_eq!(validate_prefix(prefix), valid);
}

#[parameterized(
    plain = { "/home/me/campus", "campus" },
    mixed = { "/srv/My-Campus_2025", "mycampus2025" },
)]
fn derive_prefix_from_directory(path: &str, expected: &str) {
    assert_eq!(derive_prefix(&PathBuf::from(path)).unwrap(), expected);
}

#[test]
fn derive_prefix_rejects_unusable_names() {
    assert!(matches!(
        derive_prefix(&PathBuf::from("/tmp/42")),
        Err(Error::CannotDerivePrefix(_))
    ));
}
