// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use stix_core::Database;

use crate::display::{format_event, format_event_with_id};
use crate::error::{Error, Result};

use super::{open_as_actor, Actor};

pub fn run(id: Option<String>, limit: usize) -> Result<()> {
    let (db, _, actor) = open_as_actor()?;
    println!("{}", run_impl(&db, &actor, id, limit)?);
    Ok(())
}

/// Event log for one issue (oldest first) or the whole tracker (newest first).
///
/// Students may read the log of their own issues; the global log and other
/// students' issues need the admin role.
pub(crate) fn run_impl(
    db: &Database,
    actor: &Actor,
    id: Option<String>,
    limit: usize,
) -> Result<String> {
    match id {
        Some(issue_id) => {
            let issue = db.get_issue(&issue_id)?;
            if !actor.is_admin() && issue.student_id != actor.id() {
                return Err(Error::PermissionDenied {
                    action: "viewing another student's log",
                    user: actor.id().to_string(),
                });
            }

            let events = db.get_events(&issue_id)?;
            let shown = &events[events.len().saturating_sub(limit)..];
            if shown.is_empty() {
                return Ok(format!("No events for {}", issue_id));
            }
            Ok(shown
                .iter()
                .map(format_event)
                .collect::<Vec<_>>()
                .join("\n"))
        }
        None => {
            if !actor.is_admin() {
                return Err(Error::PermissionDenied {
                    action: "viewing the full log",
                    user: actor.id().to_string(),
                });
            }

            let events = db.get_recent_events(limit)?;
            if events.is_empty() {
                return Ok("No events".to_string());
            }
            Ok(events
                .iter()
                .map(format_event_with_id)
                .collect::<Vec<_>>()
                .join("\n"))
        }
    }
}

#[cfg(test)]
#[path = "log_tests.rs"]
mod tests;
