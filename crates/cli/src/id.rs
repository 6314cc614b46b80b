// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use chrono::{DateTime, Utc};
use sha2::{Digest, Sha256};
use std::path::Path;

use crate::error::{Error, Result};

/// Generate an issue ID from prefix, title, and timestamp.
/// Format: {prefix}-{hash} where hash is first 8 hex chars of SHA256(title + timestamp)
pub fn generate_id(prefix: &str, title: &str, created_at: &DateTime<Utc>) -> String {
    let input = format!("{}{}", title, stix_core::format_timestamp(created_at));
    let hash = Sha256::digest(input.as_bytes());
    let short_hash = hex::encode(&hash[..4]);
    format!("{}-{}", prefix, short_hash)
}

/// Generate an ID not yet taken, appending `-2`, `-3`, ... on collision.
///
/// `exists` is consulted for each candidate and may fail (e.g. a database lookup).
pub fn generate_unique_id<F>(
    prefix: &str,
    title: &str,
    created_at: &DateTime<Utc>,
    mut exists: F,
) -> Result<String>
where
    F: FnMut(&str) -> Result<bool>,
{
    let base_id = generate_id(prefix, title, created_at);
    if !exists(&base_id)? {
        return Ok(base_id);
    }

    let mut suffix = 2;
    loop {
        let id = format!("{}-{}", base_id, suffix);
        if !exists(&id)? {
            return Ok(id);
        }
        suffix += 1;
    }
}

/// Validate that a prefix is valid (2+ lowercase alphanumeric with at least one letter)
pub fn validate_prefix(prefix: &str) -> bool {
    prefix.len() >= 2
        && prefix
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit())
        && prefix.chars().any(|c| c.is_ascii_lowercase())
}

/// Derive a prefix from a directory name: lowercase letters and digits only.
pub fn derive_prefix(path: &Path) -> Result<String> {
    let dir_name = path
        .file_name()
        .and_then(|n| n.to_str())
        .ok_or_else(|| Error::CannotDerivePrefix(path.display().to_string()))?;

    let prefix: String = dir_name
        .chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .map(|c| c.to_ascii_lowercase())
        .collect();

    if !validate_prefix(&prefix) {
        return Err(Error::CannotDerivePrefix(dir_name.to_string()));
    }
    Ok(prefix)
}

#[cfg(test)]
#[path = "id_tests.rs"]
mod tests;
