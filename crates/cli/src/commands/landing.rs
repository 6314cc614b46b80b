// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! What `stix` prints with no subcommand.

use crate::cli::{FilterArgs, OutputFormat};
use crate::colors;
use crate::config::{find_work_dir, Config, DEFAULT_ORGANIZATION};
use crate::error::Result;
use crate::session::current_user;

use super::dashboard;

const SUBTITLE: &str = "Student Problem Management System";
const BLURB: &str =
    "A centralized platform for students to raise issues and track resolutions efficiently";

/// Feature highlights listed under the blurb.
const FEATURES: [(&str, &str); 3] = [
    (
        "Easy Issue Tracking",
        "Raise and track your issues with real-time status updates",
    ),
    (
        "Multiple Categories",
        "Technical, Hostel, HR, Placement, and more",
    ),
    (
        "Admin Dashboard",
        "Powerful tools for administrators to manage and resolve issues",
    ),
];

/// Where the landing page sends the user next.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Landing {
    /// No tracker here yet.
    Uninitialized,
    /// Tracker exists but nobody is logged in.
    LoggedOut { organization: String },
    /// Someone is logged in: show their dashboard.
    Dashboard,
}

pub fn run() -> Result<()> {
    match resolve()? {
        Landing::Dashboard => {
            dashboard::run(FilterArgs::default(), "all".to_string(), OutputFormat::Text)
        }
        landing => {
            println!("{}", render(&landing, colors::should_colorize()));
            Ok(())
        }
    }
}

pub(crate) fn resolve() -> Result<Landing> {
    let Ok(work_dir) = find_work_dir() else {
        return Ok(Landing::Uninitialized);
    };
    let config = Config::load(&work_dir)?;
    if current_user(&work_dir)?.is_some() {
        return Ok(Landing::Dashboard);
    }
    Ok(Landing::LoggedOut {
        organization: config.organization,
    })
}

pub(crate) fn render(landing: &Landing, colorize: bool) -> String {
    let (organization, hint) = match landing {
        Landing::LoggedOut { organization } => (organization.as_str(), "stix login <user>"),
        _ => (DEFAULT_ORGANIZATION, "stix init"),
    };
    let (title, hint) = if colorize {
        (colors::header(organization), colors::literal(hint))
    } else {
        (organization.to_string(), hint.to_string())
    };
    let features = FEATURES
        .iter()
        .map(|(name, text)| {
            let name = if colorize {
                colors::header(name)
            } else {
                name.to_string()
            };
            format!("  {name}: {text}")
        })
        .collect::<Vec<_>>()
        .join("\n");
    format!("{title}\n{SUBTITLE}\n\n{BLURB}\n\n{features}\n\nGet started: {hint}")
}

#[cfg(test)]
#[path = "landing_tests.rs"]
mod tests;
