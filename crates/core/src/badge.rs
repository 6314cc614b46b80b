// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Label, icon and tone for enumerated issue fields.
//!
//! Renderers decide how a [`Tone`] looks (terminal color, CSS class); this
//! module only fixes which tone and label each value gets.

use serde::Serialize;

use crate::issue::{Category, Priority, Status};

/// Semantic color of a badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Tone {
    /// Outline badge with no fill.
    Neutral,
    Info,
    Warning,
    Danger,
    Pending,
    Review,
    Progress,
    Success,
    Muted,
}

/// Presentational mapping of a value to a badge.
pub trait Badge {
    /// Human-readable label.
    fn label(&self) -> &'static str;

    /// Single-glyph icon shown before the label, if any.
    fn icon(&self) -> Option<&'static str>;

    fn tone(&self) -> Tone;
}

impl Badge for Category {
    fn label(&self) -> &'static str {
        match self {
            Category::Technical => "Technical",
            Category::Hostel => "Hostel",
            Category::Hr => "HR",
            Category::Placement => "Placement",
            Category::Other => "Other",
        }
    }

    fn icon(&self) -> Option<&'static str> {
        Some(match self {
            Category::Technical => "</>",
            Category::Hostel => "⌂",
            Category::Hr => "☺",
            Category::Placement => "▣",
            Category::Other => "…",
        })
    }

    fn tone(&self) -> Tone {
        Tone::Neutral
    }
}

impl Badge for Priority {
    fn label(&self) -> &'static str {
        match self {
            Priority::Low => "Low",
            Priority::Medium => "Medium",
            Priority::High => "High",
        }
    }

    fn icon(&self) -> Option<&'static str> {
        Some(match self {
            Priority::Low => "i",
            Priority::Medium => "▲",
            Priority::High => "!",
        })
    }

    fn tone(&self) -> Tone {
        match self {
            Priority::Low => Tone::Info,
            Priority::Medium => Tone::Warning,
            Priority::High => Tone::Danger,
        }
    }
}

impl Badge for Status {
    fn label(&self) -> &'static str {
        match self {
            Status::Pending => "Pending",
            Status::UnderReview => "Under Review",
            Status::InProgress => "In Progress",
            Status::Resolved => "Resolved",
            Status::Closed => "Closed",
        }
    }

    fn icon(&self) -> Option<&'static str> {
        None
    }

    fn tone(&self) -> Tone {
        match self {
            Status::Pending => Tone::Pending,
            Status::UnderReview => Tone::Review,
            Status::InProgress => Tone::Progress,
            Status::Resolved => Tone::Success,
            Status::Closed => Tone::Muted,
        }
    }
}

/// Badge text with the icon prepended when there is one.
pub fn badge_text<B: Badge + ?Sized>(badge: &B) -> String {
    match badge.icon() {
        Some(icon) => format!("{} {}", icon, badge.label()),
        None => badge.label().to_string(),
    }
}

#[cfg(test)]
#[path = "badge_tests.rs"]
mod tests;
