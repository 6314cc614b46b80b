// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Core issue types for the stix issue tracker.
//!
//! This module contains the fundamental data types: Issue, Category,
//! Priority, Status, Action, and Event.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};
use crate::profile::Profile;

/// Area of campus life an issue belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    /// Laptops, network, lab equipment, course platforms.
    Technical,
    /// Rooms, food, maintenance.
    Hostel,
    /// Staff and conduct concerns.
    Hr,
    /// Interviews, offers, placement drives.
    Placement,
    /// Anything else.
    Other,
}

impl Category {
    /// Every category, in display order.
    pub const ALL: [Category; 5] = [
        Category::Technical,
        Category::Hostel,
        Category::Hr,
        Category::Placement,
        Category::Other,
    ];

    /// Returns the string representation used in storage and display.
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Technical => "technical",
            Category::Hostel => "hostel",
            Category::Hr => "hr",
            Category::Placement => "placement",
            Category::Other => "other",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Category {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "technical" => Ok(Category::Technical),
            "hostel" => Ok(Category::Hostel),
            "hr" => Ok(Category::Hr),
            "placement" => Ok(Category::Placement),
            "other" => Ok(Category::Other),
            _ => Err(Error::InvalidCategory(s.to_string())),
        }
    }
}

/// How urgently an issue needs attention.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    Low,
    #[default]
    Medium,
    High,
}

impl Priority {
    /// Every priority, lowest first.
    pub const ALL: [Priority; 3] = [Priority::Low, Priority::Medium, Priority::High];

    /// Returns the string representation used in storage and display.
    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::Low => "low",
            Priority::Medium => "medium",
            Priority::High => "high",
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Priority {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "low" => Ok(Priority::Low),
            "medium" | "med" => Ok(Priority::Medium),
            "high" => Ok(Priority::High),
            _ => Err(Error::InvalidPriority(s.to_string())),
        }
    }
}

/// Triage status of an issue.
///
/// The usual lifecycle is pending → under_review → in_progress →
/// resolved or closed, but administrators may set any status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Status {
    /// Submitted, not yet looked at. Initial state for new issues.
    Pending,
    /// An administrator is assessing the issue.
    UnderReview,
    /// Work on a fix has started.
    InProgress,
    /// The problem was fixed.
    Resolved,
    /// Closed without a fix (duplicate, out of scope, withdrawn).
    Closed,
}

impl Status {
    /// Every status, in lifecycle order.
    pub const ALL: [Status; 5] = [
        Status::Pending,
        Status::UnderReview,
        Status::InProgress,
        Status::Resolved,
        Status::Closed,
    ];

    /// Returns the string representation used in storage and display.
    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Pending => "pending",
            Status::UnderReview => "under_review",
            Status::InProgress => "in_progress",
            Status::Resolved => "resolved",
            Status::Closed => "closed",
        }
    }

    /// Returns true if this is a terminal state (resolved or closed).
    pub fn is_terminal(&self) -> bool {
        matches!(self, Status::Resolved | Status::Closed)
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Status {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().replace('-', "_").as_str() {
            "pending" => Ok(Status::Pending),
            "under_review" => Ok(Status::UnderReview),
            "in_progress" => Ok(Status::InProgress),
            "resolved" => Ok(Status::Resolved),
            "closed" => Ok(Status::Closed),
            _ => Err(Error::InvalidStatus(s.to_string())),
        }
    }
}

/// A problem raised by a student.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Issue {
    /// Unique identifier (format: `{prefix}-{hash}`).
    pub id: String,
    /// Profile ID of the student who raised the issue.
    pub student_id: String,
    /// Short summary.
    pub title: String,
    /// Free-text account of the problem.
    pub description: String,
    pub category: Category,
    pub priority: Priority,
    /// Current triage state.
    pub status: Status,
    /// When the issue was raised.
    pub created_at: DateTime<Utc>,
    /// When the issue was last modified.
    pub updated_at: DateTime<Utc>,
}

impl Issue {
    /// Creates a new pending issue.
    pub fn new(
        id: String,
        student_id: String,
        title: String,
        description: String,
        category: Category,
        priority: Priority,
        created_at: DateTime<Utc>,
    ) -> Self {
        Issue {
            id,
            student_id,
            title,
            description,
            category,
            priority,
            status: Status::Pending,
            created_at,
            updated_at: created_at,
        }
    }
}

/// An issue as shown in dashboard lists: the row plus embedded relations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IssueSummary {
    #[serde(flatten)]
    pub issue: Issue,
    /// Number of comments on the issue.
    pub comment_count: usize,
    /// Reporter profile, embedded only in the admin listing.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub student: Option<Profile>,
}

impl IssueSummary {
    /// Wraps a bare issue with no comments and no embedded profile.
    pub fn from_issue(issue: Issue) -> Self {
        IssueSummary {
            issue,
            comment_count: 0,
            student: None,
        }
    }
}

/// Types of actions that can be recorded in the event log.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    /// Issue was raised.
    Created,
    /// Status was changed by an administrator.
    StatusChanged,
    /// A comment was posted.
    Commented,
}

impl Action {
    /// Returns the string representation used in storage and display.
    pub fn as_str(&self) -> &'static str {
        match self {
            Action::Created => "created",
            Action::StatusChanged => "status_changed",
            Action::Commented => "commented",
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Action {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "created" => Ok(Action::Created),
            "status_changed" => Ok(Action::StatusChanged),
            "commented" => Ok(Action::Commented),
            _ => Err(Error::InvalidAction(s.to_string())),
        }
    }
}

/// An audit log entry recording a change to an issue.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    /// Database-assigned identifier.
    pub id: i64,
    /// The issue this event belongs to.
    pub issue_id: String,
    /// Profile ID of the user who made the change.
    pub actor_id: String,
    /// What type of change occurred.
    pub action: Action,
    /// Previous value (for status changes).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub old_value: Option<String>,
    /// New value (for status changes and comments).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub new_value: Option<String>,
    /// When the event occurred.
    pub created_at: DateTime<Utc>,
}

impl Event {
    /// Creates a new event with the current timestamp.
    pub fn new(issue_id: String, actor_id: String, action: Action) -> Self {
        Event {
            id: 0, // Will be set by database
            issue_id,
            actor_id,
            action,
            old_value: None,
            new_value: None,
            created_at: Utc::now(),
        }
    }

    /// Sets the old and new values for this event (builder pattern).
    pub fn with_values(mut self, old: Option<String>, new: Option<String>) -> Self {
        self.old_value = old;
        self.new_value = new;
        self
    }

    /// Sets a specific timestamp for this event.
    pub fn with_timestamp(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = created_at;
        self
    }
}

#[cfg(test)]
#[path = "issue_tests.rs"]
mod tests;
