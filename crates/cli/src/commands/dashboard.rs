// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! The student dashboard: "My Issues".

use serde::Serialize;
use stix_core::{Database, IssueFilter, IssueSummary, StudentTab, TabCounts};

use crate::cli::{FilterArgs, OutputFormat};
use crate::config::Config;
use crate::display::{format_header, format_issue_cards, format_tab_bar, Render};
use crate::error::Result;

use super::{build_filter, open_as_actor, Actor};

pub(crate) const EMPTY_MESSAGE: &str = "No issues found. Start by raising a new issue!";

#[derive(Serialize)]
struct DashboardJson<'a> {
    tab: StudentTab,
    counts: TabCounts,
    issues: Vec<&'a IssueSummary>,
}

/// The actor's issues after filtering, with per-tab counts.
pub(crate) struct StudentView {
    pub filter: IssueFilter,
    pub tab: StudentTab,
    pub issues: Vec<IssueSummary>,
    pub counts: TabCounts,
}

impl StudentView {
    /// Issues on the selected tab.
    pub fn visible(&self) -> Vec<&IssueSummary> {
        self.tab.select(&self.issues)
    }
}

pub fn run(filter: FilterArgs, tab: String, output: OutputFormat) -> Result<()> {
    let (db, config, actor) = open_as_actor()?;
    let view = load(&db, &actor, &filter, &tab)?;
    match output {
        OutputFormat::Text => println!("{}", render(&config, &actor, &view, &Render::terminal())),
        OutputFormat::Json => {
            let json = DashboardJson {
                tab: view.tab,
                counts: view.counts,
                issues: view.visible(),
            };
            println!("{}", serde_json::to_string_pretty(&json)?);
        }
    }
    Ok(())
}

/// Fetch the actor's own issues and apply the category/priority filter.
pub(crate) fn load(
    db: &Database,
    actor: &Actor,
    args: &FilterArgs,
    tab: &str,
) -> Result<StudentView> {
    let filter = build_filter(args, None)?;
    let tab: StudentTab = tab.parse()?;
    let issues = filter.apply(&db.list_issues_for_student(actor.id())?);
    let counts = TabCounts::compute(&issues);
    tracing::debug!(user = actor.id(), shown = issues.len(), "student dashboard");
    Ok(StudentView {
        filter,
        tab,
        issues,
        counts,
    })
}

/// Render the dashboard page.
pub(crate) fn render(config: &Config, actor: &Actor, view: &StudentView, r: &Render) -> String {
    let mut out = vec![
        format_header(&config.organization, actor.role, &actor.profile.full_name),
        String::new(),
        r.heading("My Issues"),
        "Manage and track your reported problems".to_string(),
    ];
    let applied = view.filter.describe();
    if !applied.is_empty() {
        out.push(format!("Filters: {}", applied.join(", ")));
    }
    out.push(String::new());
    out.push(format_tab_bar(&view.counts, view.tab));

    let visible = view.visible();
    if !visible.is_empty() {
        out.push(String::new());
        out.push(format_issue_cards(visible, r));
    } else if view.tab == StudentTab::All {
        out.push(String::new());
        out.push(EMPTY_MESSAGE.to_string());
    }
    out.join("\n")
}

#[cfg(test)]
#[path = "dashboard_tests.rs"]
mod tests;
