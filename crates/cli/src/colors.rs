// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Terminal color utilities for help output and badges.
//!
//! Respects environment variables:
//! - `NO_COLOR=1`: Disables colors
//! - `COLOR=1`: Forces colors even without TTY

use std::io::IsTerminal;

use stix_core::{badge_text, Badge, Tone};

use crate::env;

/// ANSI 256-color codes.
pub mod codes {
    /// Section headers: pastel cyan/steel blue
    pub const HEADER: u8 = 74;
    /// Commands/literals: light grey
    pub const LITERAL: u8 = 250;
    /// Default values/context: medium grey
    pub const CONTEXT: u8 = 245;

    pub const INFO: u8 = 75;
    pub const WARNING: u8 = 214;
    pub const DANGER: u8 = 203;
    pub const PENDING: u8 = 221;
    pub const REVIEW: u8 = 141;
    pub const PROGRESS: u8 = 39;
    pub const SUCCESS: u8 = 78;
}

/// Check if colors should be enabled based on TTY and environment variables.
pub fn should_colorize() -> bool {
    if env::no_color() {
        return false;
    }
    if env::force_color() {
        return true;
    }
    std::io::stdout().is_terminal()
}

/// Format a 256-color ANSI escape sequence for foreground color.
fn fg256(code: u8) -> String {
    format!("\x1b[38;5;{code}m")
}

/// ANSI reset sequence.
const RESET: &str = "\x1b[0m";

fn paint(text: &str, code: u8) -> String {
    format!("{}{}{}", fg256(code), text, RESET)
}

/// Apply header color (section titles) to text.
pub fn header(text: &str) -> String {
    paint(text, codes::HEADER)
}

/// Apply literal color (commands, options) to text.
pub fn literal(text: &str) -> String {
    paint(text, codes::LITERAL)
}

/// Color code for a badge tone.
pub fn tone_code(tone: Tone) -> u8 {
    match tone {
        Tone::Neutral => codes::LITERAL,
        Tone::Info => codes::INFO,
        Tone::Warning => codes::WARNING,
        Tone::Danger => codes::DANGER,
        Tone::Pending => codes::PENDING,
        Tone::Review => codes::REVIEW,
        Tone::Progress => codes::PROGRESS,
        Tone::Success => codes::SUCCESS,
        Tone::Muted => codes::CONTEXT,
    }
}

/// Badge text, colored by tone when `colorize` is set.
pub fn badge_with<B: Badge + ?Sized>(badge: &B, colorize: bool) -> String {
    let text = badge_text(badge);
    if colorize {
        paint(&text, tone_code(badge.tone()))
    } else {
        text
    }
}

/// Colorize an examples help block.
///
/// Lines ending in `:` become headers; on example lines the command (text
/// before the first run of two spaces) becomes a literal.
pub fn examples(text: &str) -> String {
    if !should_colorize() {
        return text.to_string();
    }

    let mut lines = Vec::new();
    for line in text.lines() {
        let trimmed = line.trim_start();
        let indent = &line[..line.len() - trimmed.len()];

        if trimmed.ends_with(':') && !trimmed.contains("  ") {
            lines.push(format!("{indent}{}", header(trimmed)));
        } else if let Some(cmd_end) = trimmed.find("  ") {
            let (cmd, desc) = trimmed.split_at(cmd_end);
            lines.push(format!("{indent}{}{desc}", literal(cmd)));
        } else {
            lines.push(line.to_string());
        }
    }
    lines.join("\n")
}

#[cfg(test)]
#[path = "colors_tests.rs"]
mod tests;
