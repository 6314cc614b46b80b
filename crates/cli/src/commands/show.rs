// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use serde::Serialize;
use stix_core::{CommentWithAuthor, Database, Issue, Profile};

use crate::cli::OutputFormat;
use crate::config::Config;
use crate::display::{format_header, format_issue_details, Render};
use crate::error::Result;

use super::{open_as_actor, Actor};

pub(crate) const NOT_FOUND: &str = "Issue not found";

#[derive(Serialize)]
pub(crate) struct IssueDetails {
    #[serde(flatten)]
    pub issue: Issue,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub student: Option<Profile>,
    pub comments: Vec<CommentWithAuthor>,
}

pub fn run(id: &str, output: OutputFormat) -> Result<()> {
    let (db, config, actor) = open_as_actor()?;
    let details = load(&db, id)?;
    match output {
        OutputFormat::Text => println!(
            "{}",
            render(&config, &actor, details.as_ref(), &Render::terminal())
        ),
        // A missing issue is `null`
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&details)?),
    }
    Ok(())
}

/// The issue with its reporter and comment thread, or `None` if it does not exist.
pub(crate) fn load(db: &Database, id: &str) -> Result<Option<IssueDetails>> {
    let Some(issue) = db.find_issue(id)? else {
        tracing::debug!(id, "issue not found");
        return Ok(None);
    };
    let student = db.find_profile(&issue.student_id)?;
    let comments = db.get_comments(&issue.id)?;
    Ok(Some(IssueDetails {
        issue,
        student,
        comments,
    }))
}

pub(crate) fn render(
    config: &Config,
    actor: &Actor,
    details: Option<&IssueDetails>,
    r: &Render,
) -> String {
    let body = match details {
        Some(d) => format_issue_details(&d.issue, d.student.as_ref(), &d.comments, r),
        None => NOT_FOUND.to_string(),
    };
    format!(
        "{}\n\n{}",
        format_header(&config.organization, actor.role, &actor.profile.full_name),
        body
    )
}

#[cfg(test)]
#[path = "show_tests.rs"]
mod tests;
