// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

use super::*;
use stix_core::{Category, Priority, Status};
use yare::parameterized;

#[test]
fn fg256_produces_correct_escape_sequence() {
    assert_eq!(fg256(0), "\x1b[38;5;0m");
    assert_eq!(fg256(74), "\x1b[38;5;74m");
    assert_eq!(fg256(255), "\x1b[38;5;255m");
}

#[test]
fn header_wraps_text_in_color_and_reset() {
    assert_eq!(header("Issues:"), "\x1b[38;5;74mIssues:\x1b[0m");
}

#[parameterized(
    neutral = { Tone::Neutral, codes::LITERAL },
    info = { Tone::Info, codes::INFO },
    warning = { Tone::Warning, codes::WARNING },
    danger = { Tone::Danger, codes::DANGER },
    success = { Tone::Success, codes::SUCCESS },
    muted = { Tone::Muted, codes::CONTEXT },
)]
fn tone_codes(tone: Tone, expected: u8) {
    assert_eq!(tone_code(tone), expected);
}

#[test]
fn status_tones_have_distinct_colors() {
    let mut seen: Vec<u8> = Status::ALL.iter().map(|s| tone_code(s.tone())).collect();
    seen.sort_unstable();
    seen.dedup();
    assert_eq!(seen.len(), Status::ALL.len());
}

#[test]
fn badge_without_color_is_plain_text() {
    assert_eq!(badge_with(&Priority::High, false), "! High");
    assert_eq!(badge_with(&Category::Hr, false), "☺ HR");
}

#[test]
fn badge_with_color_uses_tone() {
    let painted = badge_with(&Status::Resolved, true);
    assert!(painted.starts_with(&fg256(codes::SUCCESS)));
    assert!(painted.contains("Resolved"));
    assert!(painted.ends_with(RESET));
}
