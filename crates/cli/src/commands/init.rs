// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::path::{Path, PathBuf};

use stix_core::Database;

use crate::config::{get_db_path, init_work_dir, write_gitignore, Config, DEFAULT_ORGANIZATION};
use crate::error::Result;
use crate::id::derive_prefix;

pub fn run(prefix: Option<String>, name: Option<String>, path: Option<String>) -> Result<()> {
    let target_path = match path {
        Some(p) => PathBuf::from(p),
        None => std::env::current_dir()?,
    };

    let work_dir = run_impl(&target_path, prefix, name)?;
    let config = Config::load(&work_dir)?;

    println!("Initialized issue tracker at {}", work_dir.display());
    println!("Organization: {}", config.organization);
    println!("Prefix: {}", config.prefix);
    Ok(())
}

/// Create `.stix/` under `target_path` with config, database and `.gitignore`.
pub(crate) fn run_impl(
    target_path: &Path,
    prefix: Option<String>,
    name: Option<String>,
) -> Result<PathBuf> {
    let prefix = match prefix {
        Some(p) => p,
        None => derive_prefix(target_path)?,
    };
    let organization = name.unwrap_or_else(|| DEFAULT_ORGANIZATION.to_string());
    let config = Config::new(prefix, organization)?;

    let work_dir = init_work_dir(target_path, &config)?;

    // Create the schema
    Database::open(&get_db_path(&work_dir, &config))?;

    write_gitignore(&work_dir)?;
    tracing::info!(path = %work_dir.display(), prefix = %config.prefix, "initialized");

    Ok(work_dir)
}

#[cfg(test)]
#[path = "init_tests.rs"]
mod tests;
