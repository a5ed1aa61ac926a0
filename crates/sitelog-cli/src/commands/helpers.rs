//! Shared helpers for CLI commands.

use anyhow::Result;
use chrono::NaiveDate;
use sitelog_core::{Report, ReportStore};

/// Truncate string to max characters with ellipsis
pub fn truncate(s: &str, max_chars: usize) -> String {
    let chars: Vec<char> = s.chars().collect();
    if chars.len() <= max_chars {
        s.to_string()
    } else {
        let truncated: String = chars[..max_chars - 3].iter().collect();
        format!("{}...", truncated)
    }
}

/// Parse a date argument supporting `today` and `yesterday` shorthands
pub fn parse_date(s: &str) -> Result<NaiveDate> {
    if s == "today" {
        return Ok(chrono::Local::now().date_naive());
    }
    if s == "yesterday" {
        return Ok(chrono::Local::now().date_naive() - chrono::Duration::days(1));
    }

    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .map_err(|_| anyhow::anyhow!("Invalid date format: {}. Use YYYY-MM-DD", s))
}

/// Find a report by full id or unique short-id prefix (case-insensitive)
pub fn resolve_report(store: &ReportStore, id: &str) -> Result<Report> {
    let reports = store.list()?;
    let needle = id.to_lowercase();

    if let Some(exact) = reports.iter().find(|r| r.id.to_lowercase() == needle) {
        return Ok(exact.clone());
    }

    let mut matches = reports.iter().filter(|r| r.id.to_lowercase().starts_with(&needle));
    match (matches.next(), matches.next()) {
        (Some(report), None) => Ok(report.clone()),
        (Some(_), Some(_)) => Err(anyhow::anyhow!("Report id prefix is ambiguous: {}", id)),
        (None, _) => Err(anyhow::anyhow!("Report not found: {}", id)),
    }
}
