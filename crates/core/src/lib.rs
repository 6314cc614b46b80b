// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! stix-core: Shared library for the stix student issue tracker
//!
//! This crate provides the core data structures, database operations, and
//! dashboard filtering used by the stix CLI.

pub mod badge;
pub mod comment;
pub mod db;
pub mod error;
pub mod filter;
pub mod issue;
pub mod profile;

pub use badge::{badge_text, Badge, Tone};
pub use comment::{Comment, CommentWithAuthor};
pub use db::{format_timestamp, Database};
pub use error::{Error, Result};
pub use filter::{Choice, DashboardStats, IssueFilter, StudentTab, TabCounts};
pub use issue::{Action, Category, Event, Issue, IssueSummary, Priority, Status};
pub use profile::{Profile, Role};
