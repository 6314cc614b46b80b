// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Help text generation with colorization support.

use crate::colors;
use clap::builder::styling::Styles;

/// Generate clap Styles for help output.
pub fn styles() -> Styles {
    if !colors::should_colorize() {
        return Styles::plain();
    }

    use anstyle::{Ansi256Color, Color, Style};

    let header = Style::new().fg_color(Some(Color::Ansi256(Ansi256Color(colors::codes::HEADER))));
    let literal = Style::new().fg_color(Some(Color::Ansi256(Ansi256Color(colors::codes::LITERAL))));
    let context = Style::new().fg_color(Some(Color::Ansi256(Ansi256Color(colors::codes::CONTEXT))));

    Styles::styled()
        .header(header)
        .usage(header)
        .literal(literal)
        .placeholder(context)
        .valid(context)
}

/// Main help template with colorized Options header.
pub fn template() -> String {
    format!(
        "{{about-with-newline}}
{{usage-heading}} {{usage}}

{{before-help}}{}
{{options}}{{after-help}}",
        colors::header("Options:")
    )
}

/// Commands list shown before options in main help, grouped by who uses them.
pub fn commands() -> String {
    format!(
        "\
{header_students}
  {new}         Raise a new issue
  {dashboard}   Show your issues with filters and tabs
  {show}        Show issue details and comments
  {comment}     Comment on an issue

{header_admins}
  {admin}       Show every issue with stats and filters
  {status}      Change an issue's status
  {log}         View event log

{header_account}
  {login}       Remember who you are
  {logout}      Forget the logged-in user
  {whoami}      Show the logged-in user

{header_setup}
  {init}        Initialize issue tracker
  {profile}     Manage user profiles
  {role}        Grant or revoke roles
  {completion}  Generate shell completions
",
        header_students = colors::header("Students:"),
        header_admins = colors::header("Administrators:"),
        header_account = colors::header("Account:"),
        header_setup = colors::header("Setup:"),
        new = colors::literal("new"),
        dashboard = colors::literal("dashboard"),
        show = colors::literal("show"),
        comment = colors::literal("comment"),
        admin = colors::literal("admin"),
        status = colors::literal("status"),
        log = colors::literal("log"),
        login = colors::literal("login"),
        logout = colors::literal("logout"),
        whoami = colors::literal("whoami"),
        init = colors::literal("init"),
        profile = colors::literal("profile"),
        role = colors::literal("role"),
        completion = colors::literal("completion"),
    )
}

/// Quickstart help shown after options in main help.
pub fn quickstart() -> String {
    colors::examples(
        "\
Get started:
  stix init --name \"Campus\"                 Initialize tracker
  stix profile set alice --name \"Alice\"     Create a profile
  stix login alice                          Log in as alice
  stix new hostel \"Fan broken\"              Raise an issue
  stix dashboard                            List your issues",
    )
}

#[cfg(test)]
#[path = "help_tests.rs"]
mod tests;
