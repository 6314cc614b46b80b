// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Threaded replies on issues.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A reply attached to an issue.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Comment {
    /// Database-assigned identifier.
    pub id: i64,
    /// The issue this comment belongs to.
    pub issue_id: String,
    /// Profile ID of the author.
    pub user_id: String,
    /// The comment text.
    pub content: String,
    /// Whether the author was an administrator when posting.
    pub is_admin: bool,
    /// When the comment was posted.
    pub created_at: DateTime<Utc>,
}

/// A comment joined with its author's display name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CommentWithAuthor {
    #[serde(flatten)]
    pub comment: Comment,
    /// Author's full name, absent if the author has no profile.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author_name: Option<String>,
}

impl CommentWithAuthor {
    /// Name to display for the author, falling back to the user ID.
    pub fn display_name(&self) -> &str {
        self.author_name
            .as_deref()
            .unwrap_or(self.comment.user_id.as_str())
    }
}
