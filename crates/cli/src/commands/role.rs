// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use stix_core::{Database, Role};

use crate::error::Result;

use super::open_db;

pub fn grant(user: &str, role: &str) -> Result<()> {
    let (db, _, _) = open_db()?;
    let role = grant_impl(&db, user, role)?;
    println!("Granted {} to {}", role, user);
    Ok(())
}

/// Grant a role to an existing profile.
pub(crate) fn grant_impl(db: &Database, user: &str, role: &str) -> Result<Role> {
    let role: Role = role.parse()?;
    db.grant_role(user, role)?;
    tracing::info!(user, role = %role, "granted role");
    Ok(role)
}

pub fn revoke(user: &str, role: &str) -> Result<()> {
    let (db, _, _) = open_db()?;
    let (role, removed) = revoke_impl(&db, user, role)?;
    if removed {
        println!("Revoked {} from {}", role, user);
    } else {
        println!("{} does not have the {} role", user, role);
    }
    Ok(())
}

pub(crate) fn revoke_impl(db: &Database, user: &str, role: &str) -> Result<(Role, bool)> {
    let role: Role = role.parse()?;
    db.get_profile(user)?;
    let removed = db.revoke_role(user, role)?;
    if removed {
        tracing::info!(user, role = %role, "revoked role");
    }
    Ok((role, removed))
}

#[cfg(test)]
#[path = "role_tests.rs"]
mod tests;
