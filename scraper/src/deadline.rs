//! Deadline text → ISO timestamp.
//!
//! The page renders the deadline as display text ("Dec 30, 2024",
//! "December 30, 2024 11:59 PM", ...). Dates without a time are taken as
//! midnight UTC.

use chrono::{DateTime, NaiveDate, NaiveDateTime, SecondsFormat, Utc};
use regex::Regex;
use std::sync::LazyLock;

static LABEL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^\s*(?:application\s+)?deadline\s*:?\s*").expect("static regex")
});

const DATE_TIME_FORMATS: [&str; 3] = [
    "%b %d, %Y %I:%M %p",
    "%B %d, %Y %I:%M %p",
    "%m/%d/%Y %I:%M %p",
];
const DATE_FORMATS: [&str; 4] = ["%b %d, %Y", "%B %d, %Y", "%m/%d/%Y", "%Y-%m-%d"];

/// Parses deadline display text. Returns `None` for anything unrecognised.
pub fn parse_deadline(text: &str) -> Option<DateTime<Utc>> {
    let text = LABEL.replace(text.trim(), "");
    let text = text.trim();
    if text.is_empty() {
        return None;
    }

    if let Ok(parsed) = DateTime::parse_from_rfc3339(text) {
        return Some(parsed.with_timezone(&Utc));
    }

    for format in DATE_TIME_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(text, format) {
            return Some(naive.and_utc());
        }
    }

    DATE_FORMATS
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(text, format).ok())
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

/// Renders a deadline the way the popup and Notion expect it,
/// e.g. `2024-12-30T05:00:00.000Z`.
pub fn format_deadline(deadline: DateTime<Utc>) -> String {
    deadline.to_rfc3339_opts(SecondsFormat::Millis, true)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn iso(text: &str) -> Option<String> {
        parse_deadline(text).map(format_deadline)
    }

    #[test]
    fn test_short_month_date() {
        assert_eq!(iso("Dec 30, 2024"), Some("2024-12-30T00:00:00.000Z".into()));
    }

    #[test]
    fn test_long_month_with_time() {
        assert_eq!(
            iso("December 30, 2024 11:59 PM"),
            Some("2024-12-30T23:59:00.000Z".into())
        );
    }

    #[test]
    fn test_label_prefix_is_ignored() {
        assert_eq!(
            iso("Deadline: 12/30/2024"),
            Some("2024-12-30T00:00:00.000Z".into())
        );
    }

    #[test]
    fn test_plain_iso_date() {
        assert_eq!(iso("2024-12-30"), Some("2024-12-30T00:00:00.000Z".into()));
    }

    #[test]
    fn test_numeric_date_with_time() {
        assert_eq!(
            iso("12/30/2024 09:30 AM"),
            Some("2024-12-30T09:30:00.000Z".into())
        );
    }

    #[test]
    fn test_rfc3339_keeps_instant() {
        assert_eq!(
            iso("2024-12-30T00:00:00-05:00"),
            Some("2024-12-30T05:00:00.000Z".into())
        );
    }

    #[test]
    fn test_garbage_is_none() {
        assert_eq!(iso("Rolling basis"), None);
        assert_eq!(iso("   "), None);
    }
}
