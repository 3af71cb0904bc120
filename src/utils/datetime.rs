//! Date formatting helpers
//!
//! The list header shows its date as a long weekday/month string
//! ("Monday, June 9") by default. The pattern is a chrono strftime string
//! and can be overridden in the `[display]` config section.

use chrono::format::{Item, StrftimeItems};
use chrono::NaiveDate;

/// Default pattern for the list header date
pub const LIST_DATE_FORMAT: &str = "%A, %B %-d";

/// Check that a strftime pattern contains no invalid specifiers
#[must_use]
pub fn is_valid_format(pattern: &str) -> bool {
    !StrftimeItems::new(pattern).any(|item| matches!(item, Item::Error))
}

/// Format a date for the list header
///
/// Callers validate `pattern` beforehand; an invalid pattern falls back to
/// [`LIST_DATE_FORMAT`] instead of panicking inside `Display`.
pub fn format_list_date(date: NaiveDate, pattern: &str) -> String {
    let pattern = if is_valid_format(pattern) {
        pattern
    } else {
        LIST_DATE_FORMAT
    };
    date.format(pattern).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn june_9() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, 9).unwrap()
    }

    #[test]
    fn test_default_format() {
        assert_eq!(format_list_date(june_9(), LIST_DATE_FORMAT), "Monday, June 9");
    }

    #[test]
    fn test_custom_format() {
        assert_eq!(format_list_date(june_9(), "%Y-%m-%d"), "2025-06-09");
    }

    #[test]
    fn test_invalid_format_falls_back() {
        assert!(!is_valid_format("%Q"));
        assert_eq!(format_list_date(june_9(), "%Q"), "Monday, June 9");
    }
}
