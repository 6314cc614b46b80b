// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Shared argument structs for CLI commands.
//!
//! These structs are used with `#[command(flatten)]` to reduce duplication
//! across the dashboards, which share the same filter flags.

use clap::Args;

/// Category and priority filters (each `all` or one value).
#[derive(Args, Clone, Debug, Default)]
pub struct FilterArgs {
    /// Only show this category (technical, hostel, hr, placement, other, or all)
    #[arg(long, short = 'c', value_name = "CATEGORY")]
    pub category: Option<String>,

    /// Only show this priority (low, medium, high, or all)
    #[arg(long, short = 'p', value_name = "PRIORITY")]
    pub priority: Option<String>,
}

/// Limit arguments for the event log.
#[derive(Args, Clone, Debug, Default)]
pub struct LimitArgs {
    /// Maximum number of results
    #[arg(
        short = 'n',
        long,
        default_value_t = 20,
        value_parser = clap::builder::RangedU64ValueParser::<usize>::new().range(1..)
    )]
    pub limit: usize,
}
