// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use chrono::Utc;
use stix_core::{Action, Category, Database, Event, Issue, Priority};

use crate::cli::OutputFormat;
use crate::config::Config;
use crate::error::Result;
use crate::id::generate_unique_id;
use crate::validate::{validate_description, validate_title};

use super::{apply_mutation, open_as_actor, Actor};

pub fn run(
    category: String,
    title: String,
    priority: String,
    description: Option<String>,
    output: OutputFormat,
) -> Result<()> {
    let (db, config, actor) = open_as_actor()?;
    let issue = run_impl(
        &db,
        &config,
        &actor,
        &category,
        &title,
        &priority,
        description.as_deref(),
    )?;

    match output {
        OutputFormat::Text => {
            println!(
                "Created [{}] ({}) {}: {}",
                issue.category.as_str(),
                issue.priority,
                issue.id,
                issue.title
            );
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&issue)?);
        }
    }
    Ok(())
}

/// Raise a pending issue owned by `actor`.
///
/// Without a description the title stands in for it.
pub(crate) fn run_impl(
    db: &Database,
    config: &Config,
    actor: &Actor,
    category: &str,
    title: &str,
    priority: &str,
    description: Option<&str>,
) -> Result<Issue> {
    let category: Category = category.parse()?;
    let priority: Priority = priority.parse()?;
    let title = validate_title(title)?;
    let description = match description {
        Some(d) => validate_description(d)?,
        None => title.clone(),
    };

    let created_at = Utc::now();
    let id = generate_unique_id(&config.prefix, &title, &created_at, |candidate| {
        Ok(db.issue_exists(candidate)?)
    })?;

    let issue = Issue::new(
        id,
        actor.id().to_string(),
        title,
        description,
        category,
        priority,
        created_at,
    );
    db.create_issue(&issue)?;

    apply_mutation(
        db,
        Event::new(issue.id.clone(), actor.id().to_string(), Action::Created)
            .with_timestamp(created_at),
    )?;

    Ok(issue)
}

#[cfg(test)]
#[path = "new_tests.rs"]
mod tests;
