// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use chrono::{DateTime, Datelike, Timelike, Utc};

use stix_core::{
    Action, Badge, CommentWithAuthor, DashboardStats, Event, Issue, IssueSummary, Profile, Role,
    StudentTab, TabCounts,
};

use crate::colors;

/// Maximum line width for wrapped text content (excluding indent).
const WRAP_WIDTH: usize = 96;

/// Lines of description shown on an issue card.
const CARD_DESCRIPTION_LINES: usize = 2;

/// Rendering context: the reference time for relative dates and whether to color badges.
#[derive(Debug, Clone, Copy)]
pub struct Render {
    pub now: DateTime<Utc>,
    pub colorize: bool,
}

impl Render {
    /// Render for the terminal at the current time.
    pub fn terminal() -> Self {
        Render {
            colorize: colors::should_colorize(),
            ..Render::plain(Utc::now())
        }
    }

    /// Render without color at a fixed time.
    pub fn plain(now: DateTime<Utc>) -> Self {
        Render {
            now,
            colorize: false,
        }
    }

    fn badge<B: Badge + ?Sized>(&self, badge: &B) -> String {
        colors::badge_with(badge, self.colorize)
    }

    fn ago(&self, then: &DateTime<Utc>) -> String {
        relative_time(then, &self.now)
    }

    /// A page title, in the header color when colorizing.
    pub fn heading(&self, text: &str) -> String {
        if self.colorize {
            colors::header(text)
        } else {
            text.to_string()
        }
    }
}

/// Wrap text at word boundaries if it's a single line.
///
/// - If content contains newlines: return as-is (preserve user formatting)
/// - If content is single line >width: wrap at word boundaries
/// - If content is single line <=width: return as-is
pub fn wrap_text(content: &str, width: usize) -> String {
    if content.contains('\n') {
        return content.to_string();
    }
    if content.chars().count() <= width {
        return content.to_string();
    }

    let mut lines: Vec<String> = Vec::new();
    let mut current = String::new();
    for word in content.split_whitespace() {
        if current.is_empty() {
            current = word.to_string();
        } else if current.chars().count() + 1 + word.chars().count() <= width {
            current.push(' ');
            current.push_str(word);
        } else {
            lines.push(std::mem::take(&mut current));
            current = word.to_string();
        }
    }
    if !current.is_empty() {
        lines.push(current);
    }
    lines.join("\n")
}

/// Collapse whitespace and keep at most `max_lines` wrapped lines, marking truncation with `…`.
pub fn clamp_lines(content: &str, width: usize, max_lines: usize) -> Vec<String> {
    let flat = content.split_whitespace().collect::<Vec<_>>().join(" ");
    let wrapped = wrap_text(&flat, width);
    let mut lines: Vec<String> = wrapped.lines().map(str::to_string).collect();
    if lines.len() > max_lines {
        lines.truncate(max_lines);
        if let Some(last) = lines.last_mut() {
            last.push('…');
        }
    }
    lines
}

/// Whole calendar months from `earlier` to `later`.
///
/// A `later` date on or after February 28th completes its month.
fn calendar_months(earlier: &DateTime<Utc>, later: &DateTime<Utc>) -> i64 {
    let mut months = i64::from(later.year() - earlier.year()) * 12
        + i64::from(later.month()) - i64::from(earlier.month());
    let end_of_february = later.month() == 2 && later.day() > 27;
    let later_key = (later.day(), later.num_seconds_from_midnight());
    let earlier_key = (earlier.day(), earlier.num_seconds_from_midnight());
    if months > 0 && !end_of_february && later_key < earlier_key {
        months -= 1;
    }
    months
}

fn plural(n: i64, unit: &str) -> String {
    if n == 1 {
        format!("1 {unit}")
    } else {
        format!("{n} {unit}s")
    }
}

/// Distance between two instants in words, without suffix.
///
/// Thresholds: under 30s "less than a minute"; under 45 minutes in minutes;
/// under 24 hours "about N hours"; under 42 hours "1 day"; under 30 days in
/// days; under 60 days "about N months"; under a year in months; then years
/// qualified as "about", "over" or "almost".
pub fn distance_in_words(a: &DateTime<Utc>, b: &DateTime<Utc>) -> String {
    let (earlier, later) = if a <= b { (a, b) } else { (b, a) };
    let seconds = (*later - *earlier).num_seconds();
    let minutes = (seconds + 30) / 60;

    const DAY: i64 = 1440;
    const MONTH: i64 = 43_200;

    if minutes < 1 {
        "less than a minute".to_string()
    } else if minutes < 45 {
        plural(minutes, "minute")
    } else if minutes < 90 {
        "about 1 hour".to_string()
    } else if minutes < DAY {
        format!("about {}", plural((minutes + 30) / 60, "hour"))
    } else if minutes < 2520 {
        "1 day".to_string()
    } else if minutes < MONTH {
        plural((minutes + DAY / 2) / DAY, "day")
    } else if minutes < 2 * MONTH {
        format!("about {}", plural((minutes + MONTH / 2) / MONTH, "month"))
    } else {
        let months = calendar_months(earlier, later);
        if months < 12 {
            plural(((minutes + MONTH / 2) / MONTH).max(1), "month")
        } else {
            let years = months / 12;
            match months % 12 {
                0..=2 => format!("about {}", plural(years, "year")),
                3..=8 => format!("over {}", plural(years, "year")),
                _ => format!("almost {}", plural(years + 1, "year")),
            }
        }
    }
}

/// Distance from `then` to `now` with an "ago" / "in" suffix.
pub fn relative_time(then: &DateTime<Utc>, now: &DateTime<Utc>) -> String {
    let words = distance_in_words(then, now);
    if then <= now {
        format!("{words} ago")
    } else {
        format!("in {words}")
    }
}

/// Layout header: organization, role badge, display name.
pub fn format_header(organization: &str, role: Role, full_name: &str) -> String {
    format!("{organization}  [{}] {full_name}", role.label())
}

/// Format one issue card.
///
/// ```text
/// [Pending] camp-1a2b3c4d: Fan broken
///   ⌂ Hostel · ▲ Medium · 3 hours ago · 2 comments
///   The ceiling fan in room 204 stopped working
/// ```
pub fn format_issue_card(summary: &IssueSummary, render: &Render) -> Vec<String> {
    let issue = &summary.issue;
    let mut lines = vec![format!(
        "[{}] {}: {}",
        render.badge(&issue.status),
        issue.id,
        issue.title
    )];

    let mut meta = vec![
        render.badge(&issue.category),
        render.badge(&issue.priority),
        render.ago(&issue.created_at),
    ];
    if summary.comment_count > 0 {
        meta.push(plural(
            i64::try_from(summary.comment_count).unwrap_or(i64::MAX),
            "comment",
        ));
    }
    lines.push(format!("  {}", meta.join(" · ")));

    for line in clamp_lines(&issue.description, WRAP_WIDTH, CARD_DESCRIPTION_LINES) {
        lines.push(format!("  {line}"));
    }
    lines
}

/// Format a list of cards separated by blank lines.
pub fn format_issue_cards<'a, I>(issues: I, render: &Render) -> String
where
    I: IntoIterator<Item = &'a IssueSummary>,
{
    issues
        .into_iter()
        .map(|s| format_issue_card(s, render).join("\n"))
        .collect::<Vec<_>>()
        .join("\n\n")
}

/// Student dashboard tab bar; the selected tab is bracketed.
pub fn format_tab_bar(counts: &TabCounts, selected: StudentTab) -> String {
    StudentTab::ALL
        .iter()
        .map(|&tab| {
            let text = format!("{} ({})", tab.label(), counts.get(tab));
            if tab == selected {
                format!("[{text}]")
            } else {
                text
            }
        })
        .collect::<Vec<_>>()
        .join("  ")
}

/// Admin dashboard headline counters.
pub fn format_stats(stats: &DashboardStats) -> String {
    [
        ("Total Issues", stats.total),
        ("Pending", stats.pending),
        ("In Progress", stats.in_progress),
        ("Resolved Today", stats.resolved_today),
    ]
    .iter()
    .map(|(label, n)| format!("{label}: {n}"))
    .collect::<Vec<_>>()
    .join("  ")
}

/// Format a comment with author line and indented content.
///
/// ```text
///   Staff Admin [Admin] · 2 hours ago
///     Technician assigned.
/// ```
pub fn format_comment(comment: &CommentWithAuthor, render: &Render) -> Vec<String> {
    let tag = if comment.comment.is_admin {
        " [Admin]"
    } else {
        ""
    };
    let mut lines = vec![format!(
        "  {}{} · {}",
        comment.display_name(),
        tag,
        render.ago(&comment.comment.created_at)
    )];
    let wrapped = wrap_text(&comment.comment.content, WRAP_WIDTH);
    for line in wrapped.lines() {
        lines.push(format!("    {line}"));
    }
    lines
}

/// Format the issue detail page.
pub fn format_issue_details(
    issue: &Issue,
    student: Option<&Profile>,
    comments: &[CommentWithAuthor],
    render: &Render,
) -> String {
    let mut output = vec![
        format!("{}: {}", issue.id, issue.title),
        format!(
            "{}  {}  {}",
            render.badge(&issue.category),
            render.badge(&issue.priority),
            render.badge(&issue.status)
        ),
    ];

    let reporter = student
        .map(|p| p.full_name.as_str())
        .unwrap_or(issue.student_id.as_str());
    output.push(format!("Reported by: {reporter}"));
    if let Some(batch) = student.and_then(|p| p.batch.as_deref()) {
        output.push(format!("Batch: {batch}"));
    }
    if let Some(domain) = student.and_then(|p| p.domain.as_deref()) {
        output.push(format!("Domain: {domain}"));
    }
    output.push(format!("Created {}", render.ago(&issue.created_at)));

    output.push(String::new());
    output.push("Description:".to_string());
    for line in wrap_text(&issue.description, WRAP_WIDTH).lines() {
        output.push(format!("    {line}"));
    }

    output.push(String::new());
    output.push(format!("Comments ({}):", comments.len()));
    for (i, comment) in comments.iter().enumerate() {
        if i > 0 {
            output.push(String::new());
        }
        output.extend(format_comment(comment, render));
    }

    output.join("\n")
}

fn describe_event(event: &Event) -> String {
    match event.action {
        Action::Created => "created".to_string(),
        Action::StatusChanged => format!(
            "status {} -> {}",
            event.old_value.as_deref().unwrap_or("?"),
            event.new_value.as_deref().unwrap_or("?")
        ),
        Action::Commented => match &event.new_value {
            Some(val) => {
                let display = if val.chars().count() > 50 {
                    format!("{}...", val.chars().take(47).collect::<String>())
                } else {
                    val.clone()
                };
                format!("commented \"{display}\"")
            }
            None => "commented".to_string(),
        },
    }
}

/// Format a single event for an issue's log.
pub fn format_event(event: &Event) -> String {
    let timestamp = event.created_at.format("%Y-%m-%d %H:%M");
    format!("  {}  {} {}", timestamp, event.actor_id, describe_event(event))
}

/// Format event with issue ID (for global log).
pub fn format_event_with_id(event: &Event) -> String {
    let timestamp = event.created_at.format("%Y-%m-%d %H:%M");
    format!(
        "  {}  {} {} {}",
        timestamp,
        event.issue_id,
        event.actor_id,
        describe_event(event)
    )
}

#[cfg(test)]
#[path = "display_tests.rs"]
mod tests;
