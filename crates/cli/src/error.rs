// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use thiserror::Error;

/// All possible errors that can occur in the stixrs library.
///
/// Errors provide user-friendly messages with hints for common issues.
#[derive(Debug, Error)]
pub enum Error {
    #[error("not initialized: run 'stix init' first")]
    NotInitialized,

    #[error("already initialized at {0}")]
    AlreadyInitialized(String),

    #[error("not logged in: run 'stix login <user>' first")]
    NotLoggedIn,

    #[error("issue not found: {0}")]
    IssueNotFound(String),

    #[error("profile not found: {0}\n  hint: create it with 'stix profile set {0} --name <full name>'")]
    ProfileNotFound(String),

    #[error("permission denied: {action} requires the admin role\n  hint: an admin can run 'stix role grant {user} admin'")]
    PermissionDenied { action: &'static str, user: String },

    #[error("invalid category: '{0}'\n  hint: valid categories are: technical, hostel, hr, placement, other")]
    InvalidCategory(String),

    #[error("invalid priority: '{0}'\n  hint: valid priorities are: low, medium, high")]
    InvalidPriority(String),

    #[error("invalid status: '{0}'\n  hint: valid statuses are: pending, under_review, in_progress, resolved, closed")]
    InvalidStatus(String),

    #[error("invalid role: '{0}'\n  hint: valid roles are: student, admin")]
    InvalidRole(String),

    #[error("invalid tab: '{0}'\n  hint: valid tabs are: all, pending, in_progress, resolved")]
    InvalidTab(String),

    #[error("invalid prefix: must be 2+ lowercase alphanumeric with at least one letter")]
    InvalidPrefix,

    #[error("cannot derive prefix from '{0}'\n  hint: pass one explicitly with --prefix")]
    CannotDerivePrefix(String),

    #[error("invalid user id '{0}': must not contain whitespace")]
    InvalidUserId(String),

    #[error("{field} too long ({actual} chars, max {max})")]
    FieldTooLong {
        field: &'static str,
        actual: usize,
        max: usize,
    },

    #[error("{field} cannot be empty")]
    FieldEmpty { field: &'static str },

    #[error("database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("config error: {0}")]
    Config(String),

    #[error("corrupted data in database: {0}")]
    CorruptedData(String),
}

/// A specialized Result type for stixrs operations.
pub type Result<T> = std::result::Result<T, Error>;

impl From<stix_core::Error> for Error {
    fn from(e: stix_core::Error) -> Self {
        match e {
            stix_core::Error::IssueNotFound(id) => Error::IssueNotFound(id),
            stix_core::Error::ProfileNotFound(id) => Error::ProfileNotFound(id),
            stix_core::Error::InvalidCategory(s) => Error::InvalidCategory(s),
            stix_core::Error::InvalidPriority(s) => Error::InvalidPriority(s),
            stix_core::Error::InvalidStatus(s) => Error::InvalidStatus(s),
            stix_core::Error::InvalidRole(s) => Error::InvalidRole(s),
            stix_core::Error::InvalidTab(s) => Error::InvalidTab(s),
            stix_core::Error::InvalidAction(s) => {
                Error::CorruptedData(format!("invalid action: {s}"))
            }
            stix_core::Error::Database(e) => Error::Database(e),
            stix_core::Error::Io(e) => Error::Io(e),
            stix_core::Error::Json(e) => Error::Json(e),
            stix_core::Error::CorruptedData(s) => Error::CorruptedData(s),
        }
    }
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
