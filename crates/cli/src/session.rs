// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! The locally remembered logged-in user.
//!
//! Stored in `.stix/session.toml`. `STIX_USER` takes precedence over the
//! file so scripts can act as another user without logging in.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::env;
use crate::error::{Error, Result};

const SESSION_FILE_NAME: &str = "session.toml";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub user_id: String,
}

impl Session {
    pub fn new(user_id: String) -> Self {
        Session { user_id }
    }

    /// Load the stored session, if any.
    pub fn load(work_dir: &Path) -> Result<Option<Self>> {
        let path = work_dir.join(SESSION_FILE_NAME);
        if !path.exists() {
            return Ok(None);
        }
        let content = fs::read_to_string(&path)?;
        let session: Session = toml::from_str(&content)
            .map_err(|e| Error::Config(format!("failed to parse session: {}", e)))?;
        Ok(Some(session))
    }

    pub fn save(&self, work_dir: &Path) -> Result<()> {
        let content = toml::to_string(self)
            .map_err(|e| Error::Config(format!("failed to serialize session: {}", e)))?;
        fs::write(work_dir.join(SESSION_FILE_NAME), content)?;
        Ok(())
    }

    /// Remove the stored session. Returns whether one existed.
    pub fn clear(work_dir: &Path) -> Result<bool> {
        let path = work_dir.join(SESSION_FILE_NAME);
        if !path.exists() {
            return Ok(false);
        }
        fs::remove_file(path)?;
        Ok(true)
    }
}

/// The acting user: `STIX_USER` if set, otherwise the stored session.
pub fn current_user(work_dir: &Path) -> Result<Option<String>> {
    if let Some(user) = env::user_override() {
        return Ok(Some(user));
    }
    Ok(Session::load(work_dir)?.map(|s| s.user_id))
}

#[cfg(test)]
#[path = "session_tests.rs"]
mod tests;
