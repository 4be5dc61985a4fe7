//! Human-readable date formatting for trip dates.

use chrono::NaiveDate;

/// Format an ISO `YYYY-MM-DD` date as e.g. `Aug 1, 2025`.
///
/// Empty or blank input yields an empty string. Text that is not a valid
/// ISO date is returned trimmed but otherwise untouched, so a hand-typed
/// "next Tuesday" still reads sensibly in the reply.
pub fn format_date(iso: &str) -> String {
    let trimmed = iso.trim();
    if trimmed.is_empty() {
        return String::new();
    }

    match parse_iso_date(trimmed) {
        Some(date) => date.format("%b %-d, %Y").to_string(),
        None => trimmed.to_string(),
    }
}

/// Parse a `YYYY-MM-DD` date, ignoring surrounding whitespace.
pub fn parse_iso_date(iso: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(iso.trim(), "%Y-%m-%d").ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_valid_date() {
        assert_eq!(format_date("2025-07-04"), "Jul 4, 2025");
    }

    #[test]
    fn empty_input_is_empty() {
        assert_eq!(format_date(""), "");
        assert_eq!(format_date("   "), "");
    }

    #[test]
    fn single_digit_days_have_no_padding() {
        assert_eq!(format_date("2025-01-03"), "Jan 3, 2025");
        assert_eq!(format_date("2025-08-01"), "Aug 1, 2025");
    }

    #[test]
    fn end_of_year() {
        assert_eq!(format_date("2025-12-31"), "Dec 31, 2025");
    }

    #[test]
    fn parse_iso_date_accepts_only_calendar_dates() {
        assert!(parse_iso_date(" 2025-08-01 ").is_some());
        assert!(parse_iso_date("2025-02-30").is_none());
        assert!(parse_iso_date("08/01/2025").is_none());
        assert!(parse_iso_date("").is_none());
    }

    #[test]
    fn unparseable_input_passes_through() {
        assert_eq!(format_date(" next Tuesday "), "next Tuesday");
        assert_eq!(format_date("2025-02-30"), "2025-02-30");
    }
}
