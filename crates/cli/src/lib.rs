// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! stixrs - A student issue tracker library.
//!
//! This crate provides the functionality for the `stix` CLI tool: students
//! raise issues, administrators triage them, and both comment in a thread.
//! Data lives in a SQLite database inside a `.stix/` directory.
//!
//! # Main Components
//!
//! - [`Database`] - SQLite-backed storage for profiles, roles, issues, comments and events
//! - [`Config`] - Project configuration (prefix, organization, workspace location)
//! - [`Error`] - Error types for all operations
//!
//! # Initialization
//!
//! Use [`init_work_dir`] to create a new `.stix/` directory, then open the database:
//!
//! ```rust,ignore
//! use stixrs::{init_work_dir, find_work_dir, get_db_path, Config, Database};
//!
//! // Initialize a new project
//! let config = Config::new("camp".into(), "Campus Desk".into())?;
//! let work_dir = init_work_dir(Path::new("."), &config)?;
//!
//! // Later, find and open an existing project
//! let work_dir = find_work_dir()?;
//! let config = Config::load(&work_dir)?;
//! let db = Database::open(&get_db_path(&work_dir, &config))?;
//! ```

mod cli;
pub mod colors;
mod commands;
mod display;
pub mod env;
pub mod help;
pub mod session;
mod validate;

pub mod config;
pub mod error;
pub mod id;

pub use cli::{Cli, Command, FilterArgs, LimitArgs, OutputFormat, ProfileCommand, RoleCommand};
pub use config::{find_work_dir, get_db_path, init_work_dir, Config};
pub use error::{Error, Result};
pub use stix_core::Database;

use clap::CommandFactory;
use clap_complete::generate;

/// Execute a CLI command. This is the main entry point for library users
/// and provides a testable way to run commands without process execution.
///
/// `None` shows the landing page.
pub fn run(command: Option<Command>) -> Result<()> {
    let Some(command) = command else {
        return commands::landing::run();
    };
    match command {
        Command::New {
            category,
            title,
            priority,
            description,
            output,
        } => commands::new::run(category, title, priority, description, output),
        Command::Dashboard {
            filter,
            tab,
            output,
        } => commands::dashboard::run(filter, tab, output),
        Command::Show { id, output } => commands::show::run(&id, output),
        Command::Comment { id, content } => commands::comment::run(&id, &content),
        Command::Admin {
            status,
            filter,
            output,
        } => commands::admin::run(status, filter, output),
        Command::Status { id, status } => commands::status::run(&id, &status),
        Command::Log { id, limits } => commands::log::run(id, limits.limit),
        Command::Login { user } => commands::session::login(&user),
        Command::Logout => commands::session::logout(),
        Command::Whoami => commands::session::whoami(),
        Command::Init { prefix, name, path } => commands::init::run(prefix, name, path),
        Command::Profile(cmd) => match cmd {
            ProfileCommand::Set {
                user,
                name,
                batch,
                domain,
            } => commands::profile::set(&user, &name, batch.as_deref(), domain.as_deref()),
            ProfileCommand::Show { user } => commands::profile::show(user),
            ProfileCommand::List => commands::profile::list(),
        },
        Command::Role(cmd) => match cmd {
            RoleCommand::Grant { user, role } => commands::role::grant(&user, &role),
            RoleCommand::Revoke { user, role } => commands::role::revoke(&user, &role),
        },
        Command::Completion { shell } => {
            let mut cmd = Cli::command();
            generate(shell, &mut cmd, "stix", &mut std::io::stdout());
            Ok(())
        }
    }
}

#[cfg(test)]
#[path = "lib_tests.rs"]
mod tests;
