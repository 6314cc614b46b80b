// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use yare::parameterized;

#[parameterized(
    technical = { Category::Technical, "Technical" },
    hostel = { Category::Hostel, "Hostel" },
    hr = { Category::Hr, "HR" },
    placement = { Category::Placement, "Placement" },
    other = { Category::Other, "Other" },
)]
fn category_labels(category: Category, expected: &str) {
    assert_eq!(category.label(), expected);
    assert_eq!(category.tone(), Tone::Neutral);
}

#[parameterized(
    low = { Priority::Low, "Low", Tone::Info },
    medium = { Priority::Medium, "Medium", Tone::Warning },
    high = { Priority::High, "High", Tone::Danger },
)]
fn priority_badges(priority: Priority, label: &str, tone: Tone) {
    assert_eq!(priority.label(), label);
    assert_eq!(priority.tone(), tone);
}

#[parameterized(
    pending = { Status::Pending, "Pending" },
    under_review = { Status::UnderReview, "Under Review" },
    in_progress = { Status::InProgress, "In Progress" },
    resolved = { Status::Resolved, "Resolved" },
    closed = { Status::Closed, "Closed" },
)]
fn status_labels(status: Status, expected: &str) {
    assert_eq!(status.label(), expected);
    assert!(status.icon().is_none());
}

#[test]
fn status_tones_are_distinct() {
    let tones: Vec<Tone> = Status::ALL.iter().map(|s| s.tone()).collect();
    for (i, a) in tones.iter().enumerate() {
        for b in &tones[i + 1..] {
            assert_ne!(a, b);
        }
    }
}

#[test]
fn badge_text_includes_icon_when_present() {
    assert_eq!(badge_text(&Priority::High), "! High");
    assert_eq!(badge_text(&Status::UnderReview), "Under Review");
}
