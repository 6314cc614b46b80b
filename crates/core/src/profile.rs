// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! User display metadata and roles.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};

/// Display metadata for a user account.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    /// User identifier (the login handle).
    pub id: String,
    /// Name shown in headers, issue details and comment threads.
    pub full_name: String,
    /// Academic batch, e.g. "BCE-42".
    #[serde(skip_serializing_if = "Option::is_none")]
    pub batch: Option<String>,
    /// Study domain, e.g. "MERN".
    #[serde(skip_serializing_if = "Option::is_none")]
    pub domain: Option<String>,
    /// When the profile was first created.
    pub created_at: DateTime<Utc>,
}

impl Profile {
    /// Creates a profile with no academic metadata.
    pub fn new(id: String, full_name: String, created_at: DateTime<Utc>) -> Self {
        Profile {
            id,
            full_name,
            batch: None,
            domain: None,
            created_at,
        }
    }

    /// Sets batch and domain (builder pattern).
    pub fn with_academics(mut self, batch: Option<String>, domain: Option<String>) -> Self {
        self.batch = batch;
        self.domain = domain;
        self
    }
}

/// What a user may do.
///
/// Everyone is a student unless granted the admin role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    /// Raises issues and comments on their own issues.
    Student,
    /// Sees every issue, changes status, comments with an admin tag.
    Admin,
}

impl Role {
    /// Returns the string representation used in storage.
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Student => "student",
            Role::Admin => "admin",
        }
    }

    /// Returns the label shown in the header badge.
    pub fn label(&self) -> &'static str {
        match self {
            Role::Student => "Student",
            Role::Admin => "Admin",
        }
    }

    pub fn is_admin(&self) -> bool {
        matches!(self, Role::Admin)
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Role {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "student" => Ok(Role::Student),
            "admin" => Ok(Role::Admin),
            _ => Err(Error::InvalidRole(s.to_string())),
        }
    }
}

#[cfg(test)]
#[path = "profile_tests.rs"]
mod tests;
