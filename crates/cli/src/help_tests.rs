// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

use super::*;

fn strip_ansi(s: &str) -> String {
    let mut result = String::new();
    let mut chars = s.chars();
    while let Some(c) = chars.next() {
        if c == '\x1b' {
            for next in chars.by_ref() {
                if next == 'm' {
                    break;
                }
            }
        } else {
            result.push(c);
        }
    }
    result
}

#[test]
fn commands_lists_every_subcommand() {
    let text = strip_ansi(&commands());
    for name in [
        "new",
        "dashboard",
        "show",
        "comment",
        "admin",
        "status",
        "log",
        "login",
        "logout",
        "whoami",
        "init",
        "profile",
        "role",
        "completion",
    ] {
        assert!(
            text.lines()
                .any(|l| l.split_whitespace().next() == Some(name)),
            "missing {name} in help"
        );
    }
}

#[test]
fn template_keeps_clap_placeholders() {
    let t = strip_ansi(&template());
    assert!(t.contains("{usage}"));
    assert!(t.contains("{options}"));
    assert!(t.contains("Options:"));
}

#[test]
fn quickstart_mentions_login() {
    assert!(strip_ansi(&quickstart()).contains("stix login alice"));
}
