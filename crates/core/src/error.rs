// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Error types for stix-core operations.

use thiserror::Error;

/// All possible errors that can occur in stix-core operations.
#[derive(Debug, Error)]
pub enum Error {
    #[error("issue not found: {0}")]
    IssueNotFound(String),

    #[error("profile not found: {0}\n  hint: create it with 'stix profile set {0} --name <full name>'")]
    ProfileNotFound(String),

    #[error("invalid category: '{0}'\n  hint: valid categories are: technical, hostel, hr, placement, other")]
    InvalidCategory(String),

    #[error("invalid priority: '{0}'\n  hint: valid priorities are: low, medium, high")]
    InvalidPriority(String),

    #[error("invalid status: '{0}'\n  hint: valid statuses are: pending, under_review, in_progress, resolved, closed")]
    InvalidStatus(String),

    #[error("invalid role: '{0}'\n  hint: valid roles are: student, admin")]
    InvalidRole(String),

    #[error("invalid action: '{0}'")]
    InvalidAction(String),

    #[error("invalid tab: '{0}'\n  hint: valid tabs are: all, pending, in_progress, resolved")]
    InvalidTab(String),

    #[error("database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("corrupted data: {0}")]
    CorruptedData(String),
}

/// A specialized Result type for stix-core operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
