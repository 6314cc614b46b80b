// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

//! Test infrastructure for command testing without filesystem setup.
//!
//! This module provides a `TestContext` that wraps an in-memory database
//! and a default config, enabling commands to be tested without requiring
//! actual `.stix/` directory setup.
//!
//! # Usage
//!
//! ```rust,ignore
//! use crate::commands::testing::TestContext;
//!
//! #[test]
//! fn test_some_command() {
//!     let mut ctx = TestContext::new();
//!     ctx.add_student("alice", "Alice Doe")
//!         .create_issue("test-1", "alice", "Fan broken");
//!
//!     // Test command logic using ctx.db, ctx.config and ctx.actor("alice")
//! }
//! ```

use super::{actor_for, Actor};
use crate::config::Config;
use chrono::{DateTime, Utc};
use std::path::PathBuf;
use stix_core::{Action, Category, Database, Event, Issue, Priority, Profile, Role, Status};
use tempfile::TempDir;

/// Test context providing in-memory database and default config for testing.
pub struct TestContext {
    pub db: Database,
    pub config: Config,
    pub work_dir: PathBuf,
    _temp_dir: TempDir, // Keep alive for duration of test
}

impl Default for TestContext {
    fn default() -> Self {
        Self::new()
    }
}

impl TestContext {
    /// Create a new test context with in-memory database and default config.
    pub fn new() -> Self {
        let db = Database::open_in_memory().expect("Failed to create in-memory database");
        let config = Config::new("test".to_string(), "Campus Desk".to_string())
            .expect("Failed to create config");
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let work_dir = temp_dir.path().to_path_buf();
        TestContext {
            db,
            config,
            work_dir,
            _temp_dir: temp_dir,
        }
    }

    /// Create a student profile.
    pub fn add_student(&mut self, id: &str, name: &str) -> &mut Self {
        self.db
            .upsert_profile(&Profile::new(id.to_string(), name.to_string(), Utc::now()))
            .expect("Failed to create profile");
        self
    }

    /// Create a profile holding the admin role.
    pub fn add_admin(&mut self, id: &str, name: &str) -> &mut Self {
        self.add_student(id, name);
        self.db
            .grant_role(id, Role::Admin)
            .expect("Failed to grant role");
        self
    }

    /// Resolve a user as a command actor.
    pub fn actor(&self, id: &str) -> Actor {
        actor_for(&self.db, id).expect("Failed to resolve actor")
    }

    /// Create a hostel issue with medium priority.
    pub fn create_issue(&mut self, id: &str, student: &str, title: &str) -> &mut Self {
        self.create_issue_with(id, student, title, Category::Hostel, Priority::Medium)
    }

    /// Create an issue with a specific category and priority.
    pub fn create_issue_with(
        &mut self,
        id: &str,
        student: &str,
        title: &str,
        category: Category,
        priority: Priority,
    ) -> &mut Self {
        self.create_issue_at(id, student, title, category, priority, Utc::now())
    }

    /// Create an issue with an explicit creation time.
    pub fn create_issue_at(
        &mut self,
        id: &str,
        student: &str,
        title: &str,
        category: Category,
        priority: Priority,
        created_at: DateTime<Utc>,
    ) -> &mut Self {
        let issue = Issue::new(
            id.to_string(),
            student.to_string(),
            title.to_string(),
            format!("Details about {}", title.to_lowercase()),
            category,
            priority,
            created_at,
        );
        self.db
            .create_issue(&issue)
            .expect("Failed to create issue");

        let event = Event::new(id.to_string(), student.to_string(), Action::Created);
        self.db.log_event(&event).expect("Failed to log event");

        self
    }

    /// Update an issue's status.
    pub fn set_status(&mut self, id: &str, status: Status) -> &mut Self {
        let issue = self.db.get_issue(id).expect("Issue not found");
        self.db
            .update_issue_status(id, status)
            .expect("Failed to update status");

        let event = Event::new(id.to_string(), "root".to_string(), Action::StatusChanged)
            .with_values(Some(issue.status.to_string()), Some(status.to_string()));
        self.db.log_event(&event).expect("Failed to log event");

        self
    }

    /// Add a comment as the given user.
    pub fn comment(&mut self, id: &str, user: &str, content: &str) -> &mut Self {
        let is_admin = self.db.is_admin(user).expect("Failed to read role");
        self.db
            .add_comment(id, user, content, is_admin)
            .expect("Failed to add comment");
        self
    }
}
