//! Locale-aware year formatting for work history date ranges.

use chrono::{Datelike, NaiveDate};

use crate::language::Language;

/// Format one end of a work date range as a display year.
///
/// - `None` means an ongoing role: `"Present"` (en) / `"Actual"` (es).
/// - A parseable date yields its four-digit year.
/// - An unparseable string is returned verbatim; bad data stays visible
///   and rendering of sibling entries is never aborted.
pub fn format_year(date: Option<&str>, language: Language) -> String {
    let Some(raw) = date else {
        return match language {
            Language::En => "Present".to_string(),
            Language::Es => "Actual".to_string(),
        };
    };

    match parse_year(raw) {
        Some(year) => year.to_string(),
        None => raw.to_string(),
    }
}

/// The `"{start} - {end}"` display string for a work entry.
pub fn format_range(start: &str, end: Option<&str>, language: Language) -> String {
    format!(
        "{} - {}",
        format_year(Some(start), language),
        format_year(end, language)
    )
}

/// Extract the year from an ISO-ish date string.
///
/// Accepts full `YYYY-MM-DD` dates and bare `YYYY` prefixes (some data
/// files carry year-only entries).
fn parse_year(raw: &str) -> Option<i32> {
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Some(date.year());
    }

    let head = raw.split('-').next()?;
    if head.len() == 4 && head.chars().all(|c| c.is_ascii_digit()) {
        return head.parse().ok();
    }

    None
}
