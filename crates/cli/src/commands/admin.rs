// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! The admin dashboard: every issue, headline stats, and filters.

use chrono::{DateTime, Local, TimeZone};
use serde::Serialize;
use stix_core::{DashboardStats, Database, IssueFilter, IssueSummary};

use crate::cli::{FilterArgs, OutputFormat};
use crate::config::Config;
use crate::display::{format_header, format_issue_cards, format_stats, Render};
use crate::error::Result;

use super::{build_filter, dashboard, open_as_actor, Actor};

pub(crate) const EMPTY_MESSAGE: &str = "No issues found with the selected filters.";

pub(crate) const REDIRECT_NOTICE: &str =
    "notice: the admin dashboard requires the admin role; showing your issues instead";

#[derive(Serialize)]
struct AdminJson<'a> {
    stats: DashboardStats,
    issues: &'a [IssueSummary],
}

/// All issues after filtering, with stats over the unfiltered list.
pub(crate) struct AdminView {
    pub filter: IssueFilter,
    pub stats: DashboardStats,
    pub issues: Vec<IssueSummary>,
}

pub fn run(status: Option<String>, filter: FilterArgs, output: OutputFormat) -> Result<()> {
    let (db, config, actor) = open_as_actor()?;

    if !actor.is_admin() {
        tracing::info!(user = actor.id(), "non-admin redirected to student dashboard");
        eprintln!("{REDIRECT_NOTICE}");
        return dashboard::run(filter, "all".to_string(), output);
    }

    let view = load(&db, &filter, status.as_deref(), &Local::now())?;
    match output {
        OutputFormat::Text => println!("{}", render(&config, &actor, &view, &Render::terminal())),
        OutputFormat::Json => {
            let json = AdminJson {
                stats: view.stats,
                issues: &view.issues,
            };
            println!("{}", serde_json::to_string_pretty(&json)?);
        }
    }
    Ok(())
}

/// Fetch every issue, count stats, then filter by status/category/priority.
///
/// "Resolved today" is judged in `now`'s time zone.
pub(crate) fn load<Tz: TimeZone>(
    db: &Database,
    args: &FilterArgs,
    status: Option<&str>,
    now: &DateTime<Tz>,
) -> Result<AdminView> {
    let filter = build_filter(args, status)?;
    let all = db.list_all_issues()?;
    let stats = DashboardStats::compute(&all, now);
    let issues = filter.apply(&all);
    tracing::debug!(total = all.len(), shown = issues.len(), "admin dashboard");
    Ok(AdminView {
        filter,
        stats,
        issues,
    })
}

/// Render the admin page.
pub(crate) fn render(config: &Config, actor: &Actor, view: &AdminView, r: &Render) -> String {
    let mut out = vec![
        format_header(&config.organization, actor.role, &actor.profile.full_name),
        String::new(),
        r.heading("Admin Dashboard"),
        "Monitor and manage all student issues".to_string(),
        String::new(),
        format_stats(&view.stats),
    ];
    let applied = view.filter.describe();
    if !applied.is_empty() {
        out.push(format!("Filters: {}", applied.join(", ")));
    }
    out.push(String::new());
    if view.issues.is_empty() {
        out.push(EMPTY_MESSAGE.to_string());
    } else {
        out.push(format_issue_cards(&view.issues, r));
    }
    out.join("\n")
}

#[cfg(test)]
#[path = "admin_tests.rs"]
mod tests;
