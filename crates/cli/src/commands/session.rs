// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! `login`, `logout` and `whoami`.

use std::path::Path;

use stix_core::Database;

use crate::config::Config;
use crate::display::format_header;
use crate::error::Result;
use crate::session::Session;
use crate::validate::validate_user_id;

use super::{actor_for, current_actor, open_db};

pub fn login(user: &str) -> Result<()> {
    let (db, config, work_dir) = open_db()?;
    println!("{}", login_impl(&db, &config, &work_dir, user)?);
    Ok(())
}

/// Remember `user` as the logged-in user. The profile must exist.
pub(crate) fn login_impl(
    db: &Database,
    config: &Config,
    work_dir: &Path,
    user: &str,
) -> Result<String> {
    let user = validate_user_id(user)?;
    let actor = actor_for(db, &user)?;
    Session::new(user).save(work_dir)?;
    tracing::info!(user = actor.id(), "logged in");
    Ok(format!(
        "Logged in as {}",
        format_header(&config.organization, actor.role, &actor.profile.full_name)
    ))
}

pub fn logout() -> Result<()> {
    let (_, _, work_dir) = open_db()?;
    if logout_impl(&work_dir)? {
        println!("Logged out");
    } else {
        println!("Not logged in");
    }
    Ok(())
}

pub(crate) fn logout_impl(work_dir: &Path) -> Result<bool> {
    Session::clear(work_dir)
}

pub fn whoami() -> Result<()> {
    let (db, config, work_dir) = open_db()?;
    println!("{}", whoami_impl(&db, &config, &work_dir)?);
    Ok(())
}

/// The layout header for the logged-in user.
pub(crate) fn whoami_impl(db: &Database, config: &Config, work_dir: &Path) -> Result<String> {
    let actor = current_actor(db, work_dir)?;
    Ok(format_header(
        &config.organization,
        actor.role,
        &actor.profile.full_name,
    ))
}

#[cfg(test)]
#[path = "session_tests.rs"]
mod tests;
