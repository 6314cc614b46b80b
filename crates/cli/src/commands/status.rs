// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use stix_core::{Action, Database, Event, Status};

use crate::error::{Error, Result};

use super::{apply_mutation, open_as_actor, Actor};

pub(crate) const UPDATED_MESSAGE: &str = "Issue status updated successfully";

pub fn run(id: &str, status: &str) -> Result<()> {
    let (db, _, actor) = open_as_actor()?;
    run_impl(&db, &actor, id, status)?;
    println!("{UPDATED_MESSAGE}");
    Ok(())
}

/// Move an issue to `status`. Admins only; any transition is allowed.
///
/// Returns whether the status actually changed. Setting the current status
/// again succeeds without logging an event.
pub(crate) fn run_impl(db: &Database, actor: &Actor, id: &str, status: &str) -> Result<bool> {
    if !actor.is_admin() {
        return Err(Error::PermissionDenied {
            action: "changing status",
            user: actor.id().to_string(),
        });
    }
    let new_status: Status = status.parse()?;
    let issue = db.get_issue(id)?;

    if issue.status == new_status {
        tracing::debug!(id, status = %new_status, "status unchanged");
        return Ok(false);
    }

    db.update_issue_status(id, new_status)?;
    apply_mutation(
        db,
        Event::new(id.to_string(), actor.id().to_string(), Action::StatusChanged)
            .with_values(Some(issue.status.to_string()), Some(new_status.to_string())),
    )?;
    Ok(true)
}

#[cfg(test)]
#[path = "status_tests.rs"]
mod tests;
