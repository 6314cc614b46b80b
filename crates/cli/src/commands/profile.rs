// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::path::Path;

use chrono::Utc;
use stix_core::{Database, Profile};

use crate::error::{Error, Result};
use crate::session::current_user;
use crate::validate::{validate_academic, validate_full_name, validate_user_id};

use super::open_db;

pub fn set(user: &str, name: &str, batch: Option<&str>, domain: Option<&str>) -> Result<()> {
    let (db, _, _) = open_db()?;
    let profile = set_impl(&db, user, name, batch, domain)?;
    println!("Saved profile {} ({})", profile.id, profile.full_name);
    Ok(())
}

/// Create or update a profile; `created_at` of an existing profile is kept.
///
/// An omitted batch or domain keeps the stored value; a blank one clears it.
pub(crate) fn set_impl(
    db: &Database,
    user: &str,
    name: &str,
    batch: Option<&str>,
    domain: Option<&str>,
) -> Result<Profile> {
    let user = validate_user_id(user)?;
    let full_name = validate_full_name(name)?;
    let existing = db.find_profile(&user)?;
    let batch = match batch {
        Some(b) => validate_academic(Some(b), "Batch")?,
        None => existing.as_ref().and_then(|p| p.batch.clone()),
    };
    let domain = match domain {
        Some(d) => validate_academic(Some(d), "Domain")?,
        None => existing.and_then(|p| p.domain),
    };

    let profile = Profile::new(user, full_name, Utc::now()).with_academics(batch, domain);
    db.upsert_profile(&profile)?;
    db.get_profile(&profile.id).map_err(Error::from)
}

pub fn show(user: Option<String>) -> Result<()> {
    let (db, _, work_dir) = open_db()?;
    println!("{}", show_impl(&db, &work_dir, user)?);
    Ok(())
}

/// Describe a profile; without a user, the logged-in one.
pub(crate) fn show_impl(db: &Database, work_dir: &Path, user: Option<String>) -> Result<String> {
    let user = match user {
        Some(u) => u,
        None => current_user(work_dir)?.ok_or(Error::NotLoggedIn)?,
    };
    let profile = db.get_profile(&user)?;
    let role = db.role_of(&profile.id)?;

    let mut lines = vec![
        format!("User: {}", profile.id),
        format!("Name: {}", profile.full_name),
        format!("Role: {}", role.label()),
    ];
    if let Some(batch) = &profile.batch {
        lines.push(format!("Batch: {batch}"));
    }
    if let Some(domain) = &profile.domain {
        lines.push(format!("Domain: {domain}"));
    }
    Ok(lines.join("\n"))
}

pub fn list() -> Result<()> {
    let (db, _, _) = open_db()?;
    let output = list_impl(&db)?;
    if output.is_empty() {
        println!("No profiles");
    } else {
        println!("{output}");
    }
    Ok(())
}

/// One line per profile: id, role tag for admins, full name.
pub(crate) fn list_impl(db: &Database) -> Result<String> {
    let lines = db
        .list_profiles()?
        .into_iter()
        .map(|p| {
            let tag = if db.is_admin(&p.id)? { " [Admin]" } else { "" };
            Ok(format!("{}{}  {}", p.id, tag, p.full_name))
        })
        .collect::<Result<Vec<_>>>()?;
    Ok(lines.join("\n"))
}

#[cfg(test)]
#[path = "profile_tests.rs"]
mod tests;
