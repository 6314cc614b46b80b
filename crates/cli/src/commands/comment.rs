// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use stix_core::{Action, CommentWithAuthor, Database, Event};

use crate::error::Result;
use crate::validate::validate_comment;

use super::{apply_mutation, open_as_actor, Actor};

pub(crate) const ADDED_MESSAGE: &str = "Comment added successfully";

pub fn run(id: &str, content: &str) -> Result<()> {
    let (db, _, actor) = open_as_actor()?;
    run_impl(&db, &actor, id, content)?;
    println!("{ADDED_MESSAGE}");
    Ok(())
}

/// Append a comment; the admin tag follows the author's current role.
pub(crate) fn run_impl(
    db: &Database,
    actor: &Actor,
    id: &str,
    content: &str,
) -> Result<CommentWithAuthor> {
    let content = validate_comment(content)?;
    let posted = db.add_comment(id, actor.id(), &content, actor.is_admin())?;

    apply_mutation(
        db,
        Event::new(id.to_string(), actor.id().to_string(), Action::Commented)
            .with_values(None, Some(content))
            .with_timestamp(posted.comment.created_at),
    )?;

    Ok(posted)
}

#[cfg(test)]
#[path = "comment_tests.rs"]
mod tests;
