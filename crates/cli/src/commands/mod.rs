// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

pub mod admin;
pub mod comment;
pub mod dashboard;
pub mod init;
pub mod landing;
pub mod log;
pub mod new;
pub mod profile;
pub mod role;
pub mod session;
pub mod show;
pub mod status;
#[cfg(test)]
#[path = "mod_tests.rs"]
pub mod testing;

use std::path::{Path, PathBuf};

use stix_core::{Category, Choice, Event, IssueFilter, Priority, Profile, Role, Status};

use crate::cli::FilterArgs;
use crate::config::{find_work_dir, get_db_path, Config};
use crate::error::{Error, Result};
use crate::session::current_user;
use stix_core::Database;

/// Helper to open the database from the current context.
pub fn open_db() -> Result<(Database, Config, PathBuf)> {
    let work_dir = find_work_dir()?;
    let config = Config::load(&work_dir)?;
    let db_path = get_db_path(&work_dir, &config);
    tracing::debug!(path = %db_path.display(), "opening database");
    let db = Database::open(&db_path)?;
    Ok((db, config, work_dir))
}

/// The logged-in user with their resolved role.
#[derive(Debug, Clone)]
pub struct Actor {
    pub profile: Profile,
    pub role: Role,
}

impl Actor {
    pub fn id(&self) -> &str {
        &self.profile.id
    }

    pub fn is_admin(&self) -> bool {
        self.role.is_admin()
    }
}

/// Resolve the acting user from the session and look up their role.
pub fn current_actor(db: &Database, work_dir: &Path) -> Result<Actor> {
    let user_id = current_user(work_dir)?.ok_or(Error::NotLoggedIn)?;
    actor_for(db, &user_id)
}

/// Look up a user's profile and role.
pub fn actor_for(db: &Database, user_id: &str) -> Result<Actor> {
    let profile = db
        .find_profile(user_id)?
        .ok_or_else(|| Error::ProfileNotFound(user_id.to_string()))?;
    let role = db.role_of(&profile.id)?;
    Ok(Actor { profile, role })
}

/// Open the database and resolve the logged-in user in one step.
pub fn open_as_actor() -> Result<(Database, Config, Actor)> {
    let (db, config, work_dir) = open_db()?;
    let actor = current_actor(&db, &work_dir)?;
    Ok((db, config, actor))
}

/// Build a filter from the shared `-c`/`-p` flags and an optional status.
pub fn build_filter(args: &FilterArgs, status: Option<&str>) -> Result<IssueFilter> {
    let category = args
        .category
        .as_deref()
        .map(str::parse::<Choice<Category>>)
        .transpose()?
        .unwrap_or_default();
    let priority = args
        .priority
        .as_deref()
        .map(str::parse::<Choice<Priority>>)
        .transpose()?
        .unwrap_or_default();
    let status = status
        .map(str::parse::<Choice<Status>>)
        .transpose()?
        .unwrap_or_default();
    Ok(IssueFilter {
        category,
        priority,
        status,
    })
}

/// Record a mutation in the event log.
///
/// Every issue mutation goes through here so the audit trail stays complete.
pub fn apply_mutation(db: &Database, event: Event) -> Result<()> {
    let id = db.log_event(&event)?;
    tracing::debug!(
        event_id = id,
        issue = %event.issue_id,
        actor = %event.actor_id,
        action = %event.action,
        "logged event"
    );
    Ok(())
}
