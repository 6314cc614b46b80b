// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Client-side filtering and dashboard counters.
//!
//! Filters are plain equality checks on already-fetched rows. Counters come
//! in two flavours: student tab counts (over the filtered list) and admin
//! stats (over the unfiltered list).

use chrono::{DateTime, TimeZone};
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};
use crate::issue::{Category, IssueSummary, Priority, Status};

/// A filter selection: everything, or exactly one value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Choice<T> {
    All,
    Only(T),
}

impl<T> Default for Choice<T> {
    fn default() -> Self {
        Choice::All
    }
}

impl<T: PartialEq> Choice<T> {
    /// True if `value` passes this selection.
    pub fn accepts(&self, value: &T) -> bool {
        match self {
            Choice::All => true,
            Choice::Only(wanted) => wanted == value,
        }
    }

    pub fn is_all(&self) -> bool {
        matches!(self, Choice::All)
    }
}

impl<T: FromStr<Err = Error>> FromStr for Choice<T> {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        if s.trim().eq_ignore_ascii_case("all") {
            Ok(Choice::All)
        } else {
            s.parse().map(Choice::Only)
        }
    }
}

impl<T: fmt::Display> fmt::Display for Choice<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Choice::All => write!(f, "all"),
            Choice::Only(v) => write!(f, "{v}"),
        }
    }
}

/// Equality filter over category, priority and status.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IssueFilter {
    pub category: Choice<Category>,
    pub priority: Choice<Priority>,
    pub status: Choice<Status>,
}

impl IssueFilter {
    /// True if the issue passes every non-`All` selection.
    pub fn matches(&self, summary: &IssueSummary) -> bool {
        let issue = &summary.issue;
        self.category.accepts(&issue.category)
            && self.priority.accepts(&issue.priority)
            && self.status.accepts(&issue.status)
    }

    /// Keep matching issues, preserving order.
    pub fn apply(&self, issues: &[IssueSummary]) -> Vec<IssueSummary> {
        issues.iter().filter(|i| self.matches(i)).cloned().collect()
    }

    /// Human-readable description of active selections, e.g. `category=hostel`.
    pub fn describe(&self) -> Vec<String> {
        let mut applied = Vec::new();
        if !self.category.is_all() {
            applied.push(format!("category={}", self.category));
        }
        if !self.priority.is_all() {
            applied.push(format!("priority={}", self.priority));
        }
        if !self.status.is_all() {
            applied.push(format!("status={}", self.status));
        }
        applied
    }
}

/// Status tabs on the student dashboard.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StudentTab {
    #[default]
    All,
    Pending,
    InProgress,
    Resolved,
}

impl StudentTab {
    pub const ALL: [StudentTab; 4] = [
        StudentTab::All,
        StudentTab::Pending,
        StudentTab::InProgress,
        StudentTab::Resolved,
    ];

    /// The status this tab shows, or `None` for the all tab.
    pub fn status(&self) -> Option<Status> {
        match self {
            StudentTab::All => None,
            StudentTab::Pending => Some(Status::Pending),
            StudentTab::InProgress => Some(Status::InProgress),
            StudentTab::Resolved => Some(Status::Resolved),
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            StudentTab::All => "All",
            StudentTab::Pending => "Pending",
            StudentTab::InProgress => "In Progress",
            StudentTab::Resolved => "Resolved",
        }
    }

    /// Issues from an already-filtered list that belong on this tab.
    pub fn select<'a>(&self, issues: &'a [IssueSummary]) -> Vec<&'a IssueSummary> {
        match self.status() {
            None => issues.iter().collect(),
            Some(status) => issues.iter().filter(|i| i.issue.status == status).collect(),
        }
    }
}

impl FromStr for StudentTab {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().replace('-', "_").as_str() {
            "all" => Ok(StudentTab::All),
            "pending" => Ok(StudentTab::Pending),
            "in_progress" => Ok(StudentTab::InProgress),
            "resolved" => Ok(StudentTab::Resolved),
            _ => Err(Error::InvalidTab(s.to_string())),
        }
    }
}

/// Per-tab counts shown in the student dashboard tab bar.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct TabCounts {
    pub all: usize,
    pub pending: usize,
    pub in_progress: usize,
    pub resolved: usize,
}

impl TabCounts {
    /// Count a filtered list.
    pub fn compute(filtered: &[IssueSummary]) -> Self {
        let count = |status: Status| filtered.iter().filter(|i| i.issue.status == status).count();
        TabCounts {
            all: filtered.len(),
            pending: count(Status::Pending),
            in_progress: count(Status::InProgress),
            resolved: count(Status::Resolved),
        }
    }

    pub fn get(&self, tab: StudentTab) -> usize {
        match tab {
            StudentTab::All => self.all,
            StudentTab::Pending => self.pending,
            StudentTab::InProgress => self.in_progress,
            StudentTab::Resolved => self.resolved,
        }
    }
}

/// Headline counters on the admin dashboard.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct DashboardStats {
    pub total: usize,
    pub pending: usize,
    pub in_progress: usize,
    /// Resolved issues last updated on the same calendar day as `now`.
    pub resolved_today: usize,
}

impl DashboardStats {
    /// Count the unfiltered issue list; "today" is judged in `now`'s time zone.
    pub fn compute<Tz: TimeZone>(issues: &[IssueSummary], now: &DateTime<Tz>) -> Self {
        let tz = now.timezone();
        let today = now.date_naive();
        let mut stats = DashboardStats {
            total: issues.len(),
            ..Default::default()
        };
        for summary in issues {
            let issue = &summary.issue;
            match issue.status {
                Status::Pending => stats.pending += 1,
                Status::InProgress => stats.in_progress += 1,
                Status::Resolved => {
                    if issue.updated_at.with_timezone(&tz).date_naive() == today {
                        stats.resolved_today += 1;
                    }
                }
                Status::UnderReview | Status::Closed => {}
            }
        }
        stats
    }
}

#[cfg(test)]
#[path = "filter_tests.rs"]
mod tests;
