// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use crate::error::{Error, Result};

// Input length limits
pub const MAX_TITLE_LENGTH: usize = 200;
pub const MAX_DESCRIPTION_LENGTH: usize = 10_000;
pub const MAX_COMMENT_LENGTH: usize = 10_000;
pub const MAX_FULL_NAME_LENGTH: usize = 100;
pub const MAX_ACADEMIC_LENGTH: usize = 50;
pub const MAX_USER_ID_LENGTH: usize = 64;

/// Trim a field and check it is non-empty and within `max` characters.
fn trimmed_within(value: &str, field: &'static str, max: usize) -> Result<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(Error::FieldEmpty { field });
    }
    let actual = trimmed.chars().count();
    if actual > max {
        return Err(Error::FieldTooLong { field, actual, max });
    }
    Ok(trimmed.to_string())
}

/// Validate and trim an issue title.
pub fn validate_title(title: &str) -> Result<String> {
    trimmed_within(title, "Title", MAX_TITLE_LENGTH)
}

/// Validate and trim an issue description.
pub fn validate_description(description: &str) -> Result<String> {
    trimmed_within(description, "Description", MAX_DESCRIPTION_LENGTH)
}

/// Validate and trim a comment. Whitespace-only comments are rejected.
pub fn validate_comment(content: &str) -> Result<String> {
    trimmed_within(content, "Comment", MAX_COMMENT_LENGTH)
}

/// Validate and trim a profile's full name.
pub fn validate_full_name(name: &str) -> Result<String> {
    trimmed_within(name, "Full name", MAX_FULL_NAME_LENGTH)
}

/// Validate an optional batch or domain; blank values clear the field.
pub fn validate_academic(value: Option<&str>, field: &'static str) -> Result<Option<String>> {
    match value.map(str::trim) {
        None | Some("") => Ok(None),
        Some(v) => trimmed_within(v, field, MAX_ACADEMIC_LENGTH).map(Some),
    }
}

/// Validate a user identifier: non-empty, bounded, no whitespace.
pub fn validate_user_id(user_id: &str) -> Result<String> {
    let trimmed = trimmed_within(user_id, "User id", MAX_USER_ID_LENGTH)?;
    if trimmed.chars().any(char::is_whitespace) {
        return Err(Error::InvalidUserId(trimmed));
    }
    Ok(trimmed)
}

#[cfg(test)]
#[path = "validate_tests.rs"]
mod tests;
