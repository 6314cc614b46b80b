// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! SQLite-backed database for issue storage.
//!
//! The [`Database`] struct provides all data access operations for profiles,
//! roles, issues, comments, and events.

use chrono::{DateTime, SecondsFormat, Utc};
use rusqlite::{params, Connection, OptionalExtension, Row};
use std::path::Path;

use crate::comment::{Comment, CommentWithAuthor};
use crate::error::{Error, Result};
use crate::issue::{Event, Issue, IssueSummary, Status};
use crate::profile::{Profile, Role};

/// SQL schema for the issue tracker database.
pub const SCHEMA: &str = r#"
-- Display metadata per user
CREATE TABLE IF NOT EXISTS profiles (
    id TEXT PRIMARY KEY,
    full_name TEXT NOT NULL,
    batch TEXT,
    domain TEXT,
    created_at TEXT NOT NULL
);

-- Role grants; absence of 'admin' means student
CREATE TABLE IF NOT EXISTS user_roles (
    user_id TEXT NOT NULL,
    role TEXT NOT NULL,
    PRIMARY KEY (user_id, role),
    FOREIGN KEY (user_id) REFERENCES profiles(id)
);

-- Student-raised issues
CREATE TABLE IF NOT EXISTS issues (
    id TEXT PRIMARY KEY,
    student_id TEXT NOT NULL,
    title TEXT NOT NULL,
    description TEXT NOT NULL,
    category TEXT NOT NULL,
    priority TEXT NOT NULL DEFAULT 'medium',
    status TEXT NOT NULL DEFAULT 'pending',
    created_at TEXT NOT NULL,
    updated_at TEXT NOT NULL,
    FOREIGN KEY (student_id) REFERENCES profiles(id)
);

-- Threaded replies
CREATE TABLE IF NOT EXISTS comments (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    issue_id TEXT NOT NULL,
    user_id TEXT NOT NULL,
    content TEXT NOT NULL,
    is_admin INTEGER NOT NULL DEFAULT 0,
    created_at TEXT NOT NULL,
    FOREIGN KEY (issue_id) REFERENCES issues(id),
    FOREIGN KEY (user_id) REFERENCES profiles(id)
);

-- Event log (audit trail)
CREATE TABLE IF NOT EXISTS events (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    issue_id TEXT NOT NULL,
    actor_id TEXT NOT NULL,
    action TEXT NOT NULL,
    old_value TEXT,
    new_value TEXT,
    created_at TEXT NOT NULL,
    FOREIGN KEY (issue_id) REFERENCES issues(id)
);

-- Indexes
CREATE INDEX IF NOT EXISTS idx_issues_student ON issues(student_id);
CREATE INDEX IF NOT EXISTS idx_issues_created ON issues(created_at);
CREATE INDEX IF NOT EXISTS idx_comments_issue ON comments(issue_id);
CREATE INDEX IF NOT EXISTS idx_events_issue ON events(issue_id);
"#;

const ISSUE_COLUMNS: &str = "i.id, i.student_id, i.title, i.description, i.category, i.priority,
     i.status, i.created_at, i.updated_at";

/// Format a timestamp for storage.
///
/// Fixed-width UTC form so that lexical order in SQL is chronological.
pub fn format_timestamp(dt: &DateTime<Utc>) -> String {
    dt.to_rfc3339_opts(SecondsFormat::Nanos, true)
}

/// Parse a string value from the database, returning a rusqlite error on parse failure.
fn parse_db<T: std::str::FromStr>(
    value: &str,
    column: &str,
) -> std::result::Result<T, rusqlite::Error> {
    value.parse().map_err(|_| {
        rusqlite::Error::FromSqlConversionFailure(
            0,
            rusqlite::types::Type::Text,
            Box::new(Error::CorruptedData(format!(
                "invalid value '{value}' in column '{column}'"
            ))),
        )
    })
}

/// Parse an RFC3339 timestamp from the database.
fn parse_timestamp(
    value: &str,
    column: &str,
) -> std::result::Result<DateTime<Utc>, rusqlite::Error> {
    DateTime::parse_from_rfc3339(value)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|_| {
            rusqlite::Error::FromSqlConversionFailure(
                0,
                rusqlite::types::Type::Text,
                Box::new(Error::CorruptedData(format!(
                    "invalid timestamp '{value}' in column '{column}'"
                ))),
            )
        })
}

/// Map the leading [`ISSUE_COLUMNS`] of a row to an [`Issue`].
fn issue_from_row(row: &Row<'_>) -> std::result::Result<Issue, rusqlite::Error> {
    let category_str: String = row.get(4)?;
    let priority_str: String = row.get(5)?;
    let status_str: String = row.get(6)?;
    let created_str: String = row.get(7)?;
    let updated_str: String = row.get(8)?;

    Ok(Issue {
        id: row.get(0)?,
        student_id: row.get(1)?,
        title: row.get(2)?,
        description: row.get(3)?,
        category: parse_db(&category_str, "category")?,
        priority: parse_db(&priority_str, "priority")?,
        status: parse_db(&status_str, "status")?,
        created_at: parse_timestamp(&created_str, "created_at")?,
        updated_at: parse_timestamp(&updated_str, "updated_at")?,
    })
}

/// Map profile columns starting at `offset`; `None` when the id column is NULL.
fn profile_from_row(
    row: &Row<'_>,
    offset: usize,
) -> std::result::Result<Option<Profile>, rusqlite::Error> {
    let id: Option<String> = row.get(offset)?;
    let Some(id) = id else {
        return Ok(None);
    };
    let created_str: String = row.get(offset + 4)?;
    Ok(Some(Profile {
        id,
        full_name: row.get(offset + 1)?,
        batch: row.get(offset + 2)?,
        domain: row.get(offset + 3)?,
        created_at: parse_timestamp(&created_str, "created_at")?,
    }))
}

fn comment_from_row(row: &Row<'_>) -> std::result::Result<CommentWithAuthor, rusqlite::Error> {
    let created_str: String = row.get(5)?;
    Ok(CommentWithAuthor {
        comment: Comment {
            id: row.get(0)?,
            issue_id: row.get(1)?,
            user_id: row.get(2)?,
            content: row.get(3)?,
            is_admin: row.get(4)?,
            created_at: parse_timestamp(&created_str, "created_at")?,
        },
        author_name: row.get(6)?,
    })
}

fn event_from_row(row: &Row<'_>) -> std::result::Result<Event, rusqlite::Error> {
    let action_str: String = row.get(3)?;
    let created_str: String = row.get(6)?;
    Ok(Event {
        id: row.get(0)?,
        issue_id: row.get(1)?,
        actor_id: row.get(2)?,
        action: parse_db(&action_str, "action")?,
        old_value: row.get(4)?,
        new_value: row.get(5)?,
        created_at: parse_timestamp(&created_str, "created_at")?,
    })
}

fn count_to_usize(count: i64) -> usize {
    usize::try_from(count).unwrap_or(0)
}

/// Run schema creation on a database connection.
pub fn run_migrations(conn: &Connection) -> Result<()> {
    conn.execute_batch(SCHEMA)?;
    Ok(())
}

/// SQLite database connection with issue tracker operations.
pub struct Database {
    /// The underlying SQLite connection.
    pub conn: Connection,
}

impl Database {
    /// Open a database connection at the given path, creating and migrating if needed.
    pub fn open(path: &Path) -> Result<Self> {
        // Ensure parent directory exists
        if let Some(parent) = path.parent() {
            if !parent.exists() {
                std::fs::create_dir_all(parent)?;
            }
        }

        tracing::debug!("opening database at {}", path.display());
        let conn = Connection::open(path)?;

        conn.execute_batch(
            "PRAGMA foreign_keys = ON;
             PRAGMA journal_mode = WAL;
             PRAGMA busy_timeout = 5000;",
        )?;

        let db = Database { conn };
        run_migrations(&db.conn)?;
        Ok(db)
    }

    /// Open an in-memory database (for testing).
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        conn.execute_batch("PRAGMA foreign_keys = ON;")?;
        let db = Database { conn };
        run_migrations(&db.conn)?;
        Ok(db)
    }

    // ─────────────────────────────────────────────────────────────────────
    // Profiles and roles
    // ─────────────────────────────────────────────────────────────────────

    /// Create a profile, or update name/batch/domain if it already exists.
    ///
    /// The original `created_at` is kept on update.
    pub fn upsert_profile(&self, profile: &Profile) -> Result<()> {
        self.conn.execute(
            "INSERT INTO profiles (id, full_name, batch, domain, created_at)
             VALUES (?1, ?2, ?3, ?4, ?5)
             ON CONFLICT(id) DO UPDATE SET
                 full_name = excluded.full_name,
                 batch = excluded.batch,
                 domain = excluded.domain",
            params![
                profile.id,
                profile.full_name,
                profile.batch,
                profile.domain,
                format_timestamp(&profile.created_at),
            ],
        )?;
        Ok(())
    }

    /// Look up a profile, returning `None` if absent.
    pub fn find_profile(&self, id: &str) -> Result<Option<Profile>> {
        let profile = self
            .conn
            .query_row(
                "SELECT id, full_name, batch, domain, created_at FROM profiles WHERE id = ?1",
                params![id],
                |row| profile_from_row(row, 0),
            )
            .optional()?;
        Ok(profile.flatten())
    }

    /// Get a profile by ID.
    pub fn get_profile(&self, id: &str) -> Result<Profile> {
        self.find_profile(id)?
            .ok_or_else(|| Error::ProfileNotFound(id.to_string()))
    }

    /// All profiles, ordered by ID.
    pub fn list_profiles(&self) -> Result<Vec<Profile>> {
        let mut stmt = self.conn.prepare(
            "SELECT id, full_name, batch, domain, created_at FROM profiles ORDER BY id",
        )?;
        let rows = stmt
            .query_map([], |row| profile_from_row(row, 0))?
            .collect::<std::result::Result<Vec<_>, _>>()?;
        Ok(rows.into_iter().flatten().collect())
    }

    /// Grant a role. Granting twice is a no-op.
    pub fn grant_role(&self, user_id: &str, role: Role) -> Result<()> {
        if self.find_profile(user_id)?.is_none() {
            return Err(Error::ProfileNotFound(user_id.to_string()));
        }
        self.conn.execute(
            "INSERT OR IGNORE INTO user_roles (user_id, role) VALUES (?1, ?2)",
            params![user_id, role.as_str()],
        )?;
        Ok(())
    }

    /// Revoke a role, returning whether it was held.
    pub fn revoke_role(&self, user_id: &str, role: Role) -> Result<bool> {
        let affected = self.conn.execute(
            "DELETE FROM user_roles WHERE user_id = ?1 AND role = ?2",
            params![user_id, role.as_str()],
        )?;
        Ok(affected > 0)
    }

    /// True if the user holds the admin role.
    pub fn is_admin(&self, user_id: &str) -> Result<bool> {
        let count: i64 = self.conn.query_row(
            "SELECT COUNT(*) FROM user_roles WHERE user_id = ?1 AND role = 'admin'",
            params![user_id],
            |row| row.get(0),
        )?;
        Ok(count > 0)
    }

    /// Effective role of a user: admin if granted, otherwise student.
    pub fn role_of(&self, user_id: &str) -> Result<Role> {
        if self.is_admin(user_id)? {
            Ok(Role::Admin)
        } else {
            Ok(Role::Student)
        }
    }

    // ─────────────────────────────────────────────────────────────────────
    // Issues
    // ─────────────────────────────────────────────────────────────────────

    /// Create a new issue.
    pub fn create_issue(&self, issue: &Issue) -> Result<()> {
        self.conn.execute(
            "INSERT INTO issues (id, student_id, title, description, category, priority,
             status, created_at, updated_at)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)",
            params![
                issue.id,
                issue.student_id,
                issue.title,
                issue.description,
                issue.category.as_str(),
                issue.priority.as_str(),
                issue.status.as_str(),
                format_timestamp(&issue.created_at),
                format_timestamp(&issue.updated_at),
            ],
        )?;
        Ok(())
    }

    /// Look up an issue, returning `None` if absent.
    pub fn find_issue(&self, id: &str) -> Result<Option<Issue>> {
        let sql = format!("SELECT {ISSUE_COLUMNS} FROM issues i WHERE i.id = ?1");
        let issue = self
            .conn
            .query_row(&sql, params![id], issue_from_row)
            .optional()?;
        Ok(issue)
    }

    /// Get an issue by ID.
    pub fn get_issue(&self, id: &str) -> Result<Issue> {
        self.find_issue(id)?
            .ok_or_else(|| Error::IssueNotFound(id.to_string()))
    }

    /// Check if an issue exists.
    pub fn issue_exists(&self, id: &str) -> Result<bool> {
        let count: i64 = self.conn.query_row(
            "SELECT COUNT(*) FROM issues WHERE id = ?1",
            params![id],
            |row| row.get(0),
        )?;
        Ok(count > 0)
    }

    /// Issues raised by one student, newest first, with comment counts.
    pub fn list_issues_for_student(&self, student_id: &str) -> Result<Vec<IssueSummary>> {
        let sql = format!(
            "SELECT {ISSUE_COLUMNS},
                    (SELECT COUNT(*) FROM comments c WHERE c.issue_id = i.id)
             FROM issues i
             WHERE i.student_id = ?1
             ORDER BY i.created_at DESC, i.rowid DESC"
        );
        let mut stmt = self.conn.prepare(&sql)?;
        let issues = stmt
            .query_map(params![student_id], |row| {
                let count: i64 = row.get(9)?;
                Ok(IssueSummary {
                    comment_count: count_to_usize(count),
                    ..IssueSummary::from_issue(issue_from_row(row)?)
                })
            })?
            .collect::<std::result::Result<Vec<_>, _>>()?;
        Ok(issues)
    }

    /// Every issue, newest first, with reporter profile and comment counts.
    pub fn list_all_issues(&self) -> Result<Vec<IssueSummary>> {
        let sql = format!(
            "SELECT {ISSUE_COLUMNS},
                    (SELECT COUNT(*) FROM comments c WHERE c.issue_id = i.id),
                    p.id, p.full_name, p.batch, p.domain, p.created_at
             FROM issues i
             LEFT JOIN profiles p ON p.id = i.student_id
             ORDER BY i.created_at DESC, i.rowid DESC"
        );
        let mut stmt = self.conn.prepare(&sql)?;
        let issues = stmt
            .query_map([], |row| {
                let count: i64 = row.get(9)?;
                Ok(IssueSummary {
                    issue: issue_from_row(row)?,
                    comment_count: count_to_usize(count),
                    student: profile_from_row(row, 10)?,
                })
            })?
            .collect::<std::result::Result<Vec<_>, _>>()?;
        Ok(issues)
    }

    /// Update issue status and bump `updated_at`.
    pub fn update_issue_status(&self, id: &str, status: Status) -> Result<()> {
        let affected = self.conn.execute(
            "UPDATE issues SET status = ?1, updated_at = ?2 WHERE id = ?3",
            params![status.as_str(), format_timestamp(&Utc::now()), id],
        )?;

        if affected == 0 {
            return Err(Error::IssueNotFound(id.to_string()));
        }
        Ok(())
    }

    // ─────────────────────────────────────────────────────────────────────
    // Comments
    // ─────────────────────────────────────────────────────────────────────

    /// Post a comment and return the stored row joined with its author name.
    pub fn add_comment(
        &self,
        issue_id: &str,
        user_id: &str,
        content: &str,
        is_admin: bool,
    ) -> Result<CommentWithAuthor> {
        if !self.issue_exists(issue_id)? {
            return Err(Error::IssueNotFound(issue_id.to_string()));
        }
        self.conn.execute(
            "INSERT INTO comments (issue_id, user_id, content, is_admin, created_at)
             VALUES (?1, ?2, ?3, ?4, ?5)",
            params![
                issue_id,
                user_id,
                content,
                is_admin,
                format_timestamp(&Utc::now())
            ],
        )?;
        let id = self.conn.last_insert_rowid();
        let comment = self.conn.query_row(
            "SELECT c.id, c.issue_id, c.user_id, c.content, c.is_admin, c.created_at, p.full_name
             FROM comments c LEFT JOIN profiles p ON p.id = c.user_id
             WHERE c.id = ?1",
            params![id],
            comment_from_row,
        )?;
        Ok(comment)
    }

    /// All comments on an issue, oldest first.
    pub fn get_comments(&self, issue_id: &str) -> Result<Vec<CommentWithAuthor>> {
        let mut stmt = self.conn.prepare(
            "SELECT c.id, c.issue_id, c.user_id, c.content, c.is_admin, c.created_at, p.full_name
             FROM comments c LEFT JOIN profiles p ON p.id = c.user_id
             WHERE c.issue_id = ?1
             ORDER BY c.created_at ASC, c.id ASC",
        )?;
        let comments = stmt
            .query_map(params![issue_id], comment_from_row)?
            .collect::<std::result::Result<Vec<_>, _>>()?;
        Ok(comments)
    }

    // ─────────────────────────────────────────────────────────────────────
    // Events
    // ─────────────────────────────────────────────────────────────────────

    /// Log an event.
    pub fn log_event(&self, event: &Event) -> Result<i64> {
        self.conn.execute(
            "INSERT INTO events (issue_id, actor_id, action, old_value, new_value, created_at)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
            params![
                event.issue_id,
                event.actor_id,
                event.action.as_str(),
                event.old_value,
                event.new_value,
                format_timestamp(&event.created_at),
            ],
        )?;
        Ok(self.conn.last_insert_rowid())
    }

    /// Get all events for an issue, ordered by creation time.
    pub fn get_events(&self, issue_id: &str) -> Result<Vec<Event>> {
        let mut stmt = self.conn.prepare(
            "SELECT id, issue_id, actor_id, action, old_value, new_value, created_at
             FROM events WHERE issue_id = ?1 ORDER BY created_at, id",
        )?;

        let events = stmt
            .query_map(params![issue_id], event_from_row)?
            .collect::<std::result::Result<Vec<_>, _>>()?;

        Ok(events)
    }

    /// Get recent events across all issues, newest first.
    pub fn get_recent_events(&self, limit: usize) -> Result<Vec<Event>> {
        let mut stmt = self.conn.prepare(
            "SELECT id, issue_id, actor_id, action, old_value, new_value, created_at
             FROM events ORDER BY created_at DESC, id DESC LIMIT ?1",
        )?;

        let limit_i64 = i64::try_from(limit).unwrap_or(i64::MAX);
        let events = stmt
            .query_map(params![limit_i64], event_from_row)?
            .collect::<std::result::Result<Vec<_>, _>>()?;

        Ok(events)
    }
}

#[cfg(test)]
#[path = "db_tests.rs"]
mod tests;
