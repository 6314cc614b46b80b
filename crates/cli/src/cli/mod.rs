// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

mod args;

use crate::colors;
use crate::help;
use clap::{Parser, Subcommand, ValueEnum};
use clap_complete::Shell;

pub use args::{FilterArgs, LimitArgs};

/// Parse a string that must not be empty or whitespace-only.
fn non_empty_string(s: &str) -> Result<String, String> {
    if s.trim().is_empty() {
        Err("cannot be empty".to_string())
    } else {
        Ok(s.to_string())
    }
}

/// Output format for commands supporting structured output.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Parser)]
#[command(name = "stix")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(disable_version_flag = true)]
#[command(about = "Raise, triage and discuss student issues")]
#[command(
    long_about = "Raise, triage and discuss student issues.\n\n\
    Students raise issues and follow them on their dashboard; administrators \
    see every issue, change status, and reply in the comment thread."
)]
#[command(help_template = help::template())]
#[command(before_help = help::commands())]
#[command(after_help = help::quickstart())]
#[command(styles = help::styles())]
// Allow the unit type field pattern which is required for clap's ArgAction::Version/Help
#[allow(clippy::manual_non_exhaustive)]
pub struct Cli {
    /// Run as if stix was started in <path>
    #[arg(short = 'C', long = "directory", global = true, value_name = "path")]
    pub directory: Option<String>,

    /// Print version
    #[arg(short = 'v', short_alias = 'V', long = "version", action = clap::ArgAction::Version)]
    version: (),

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand)]
pub enum Command {
    // ─────────────────────────────────────────────────────────────────────────
    // Students
    // ─────────────────────────────────────────────────────────────────────────
    /// Raise a new issue
    #[command(after_help = colors::examples("\
Examples:
  stix new hostel \"Fan broken\"                      Medium priority, title as description
  stix new technical \"Wifi down\" -p high            High priority issue
  stix new placement \"Offer letter\" -d \"Not sent\"   With a description"))]
    New {
        /// Category (technical, hostel, hr, placement, other)
        category: String,

        /// Short summary of the problem
        #[arg(value_parser = non_empty_string)]
        title: String,

        /// Priority (low, medium, high)
        #[arg(long, short = 'p', default_value = "medium")]
        priority: String,

        /// Full account of the problem (defaults to the title)
        #[arg(long, short = 'd')]
        description: Option<String>,

        /// Output format (text, json)
        #[arg(long = "output", short = 'o', value_enum, default_value = "text")]
        output: OutputFormat,
    },

    /// Show your issues
    #[command(after_help = colors::examples("\
Examples:
  stix dashboard                     All of your issues
  stix dashboard --tab pending       Only the Pending tab
  stix dashboard -c hostel -p high   Filter by category and priority"))]
    Dashboard {
        #[command(flatten)]
        filter: FilterArgs,

        /// Tab to show (all, pending, in_progress, resolved)
        #[arg(long, short = 't', default_value = "all")]
        tab: String,

        /// Output format (text, json)
        #[arg(long = "output", short = 'o', value_enum, default_value = "text")]
        output: OutputFormat,
    },

    /// Show issue details and comments
    #[command(arg_required_else_help = true)]
    Show {
        /// Issue ID
        id: String,

        /// Output format (text, json)
        #[arg(long = "output", short = 'o', value_enum, default_value = "text")]
        output: OutputFormat,
    },

    /// Comment on an issue
    #[command(
        arg_required_else_help = true,
        after_help = colors::examples("\
Examples:
  stix comment camp-1a2b3c4d \"Still broken\"   Add a comment")
    )]
    Comment {
        /// Issue ID
        id: String,

        /// Comment text
        content: String,
    },

    // ─────────────────────────────────────────────────────────────────────────
    // Administrators
    // ─────────────────────────────────────────────────────────────────────────
    /// Show every issue with stats (admins only)
    #[command(after_help = colors::examples("\
Examples:
  stix admin                      All issues with stats
  stix admin -s pending           Only pending issues
  stix admin -c hr -p high        Filter by category and priority"))]
    Admin {
        /// Only show this status (pending, under_review, in_progress, resolved, closed, or all)
        #[arg(long, short = 's', value_name = "STATUS")]
        status: Option<String>,

        #[command(flatten)]
        filter: FilterArgs,

        /// Output format (text, json)
        #[arg(long = "output", short = 'o', value_enum, default_value = "text")]
        output: OutputFormat,
    },

    /// Change an issue's status (admins only)
    #[command(
        arg_required_else_help = true,
        after_help = colors::examples("\
Examples:
  stix status camp-1a2b3c4d in_progress   Start work
  stix status camp-1a2b3c4d resolved      Mark fixed")
    )]
    Status {
        /// Issue ID
        id: String,

        /// New status (pending, under_review, in_progress, resolved, closed)
        status: String,
    },

    /// View event log
    Log {
        /// Issue ID (optional, shows all if omitted)
        id: Option<String>,

        #[command(flatten)]
        limits: LimitArgs,
    },

    // ─────────────────────────────────────────────────────────────────────────
    // Account
    // ─────────────────────────────────────────────────────────────────────────
    /// Log in as an existing profile
    #[command(arg_required_else_help = true)]
    Login {
        /// User id
        user: String,
    },

    /// Forget the logged-in user
    Logout,

    /// Show the logged-in user
    Whoami,

    // ─────────────────────────────────────────────────────────────────────────
    // Setup
    // ─────────────────────────────────────────────────────────────────────────
    /// Initialize issue tracker in current directory (or specified path)
    #[command(after_help = colors::examples("\
Examples:
  stix init                                Prefix from directory name
  stix init --prefix camp --name \"Campus\"  Custom prefix and organization"))]
    Init {
        /// ID prefix for issues (2+ lowercase alphanumeric, defaults to directory name)
        #[arg(long)]
        prefix: Option<String>,

        /// Organization name shown in the header
        #[arg(long)]
        name: Option<String>,

        /// Path to initialize (defaults to current directory)
        #[arg(long)]
        path: Option<String>,
    },

    /// Manage user profiles
    #[command(subcommand)]
    Profile(ProfileCommand),

    /// Grant or revoke roles
    #[command(subcommand)]
    Role(RoleCommand),

    /// Generate shell completions
    #[command(
        arg_required_else_help = true,
        after_help = colors::examples("\
Examples:
  stix completion bash > ~/.local/share/bash-completion/completions/stix
  stix completion zsh > ~/.zfunc/_stix")
    )]
    Completion {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Profile management commands.
#[derive(Subcommand)]
pub enum ProfileCommand {
    /// Create or update a profile
    #[command(after_help = colors::examples("\
Examples:
  stix profile set alice --name \"Alice Doe\"                       Create a profile
  stix profile set alice --name \"Alice\" --batch BCE-42 --domain MERN   With academics"))]
    Set {
        /// User id
        user: String,

        /// Full name shown in headers and comments
        #[arg(long)]
        name: String,

        /// Academic batch (omit to keep, empty to clear)
        #[arg(long)]
        batch: Option<String>,

        /// Study domain (omit to keep, empty to clear)
        #[arg(long)]
        domain: Option<String>,
    },

    /// Show a profile (defaults to the logged-in user)
    Show {
        /// User id
        user: Option<String>,
    },

    /// List all profiles
    List,
}

/// Role management commands.
#[derive(Subcommand)]
pub enum RoleCommand {
    /// Grant a role
    #[command(arg_required_else_help = true)]
    Grant {
        /// User id
        user: String,

        /// Role (student, admin)
        role: String,
    },

    /// Revoke a role
    #[command(arg_required_else_help = true)]
    Revoke {
        /// User id
        user: String,

        /// Role (student, admin)
        role: String,
    },
}

#[cfg(test)]
#[path = "../cli_tests/mod.rs"]
mod tests;
