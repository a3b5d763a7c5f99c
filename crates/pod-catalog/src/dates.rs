//! Update-date formatting.

use chrono::{DateTime, NaiveDate};

/// Format an ISO-8601 date string as `"Updated <Month> <Day>, <Year>"` with
/// English month names. Unparseable input yields the empty string.
pub fn format_updated(raw: &str) -> String {
    match parse_iso_date(raw) {
        Some(date) => format!("Updated {}", date.format("%B %-d, %Y")),
        None => String::new(),
    }
}

/// Accepts a full RFC 3339 timestamp (the catalog's native form) or a bare
/// `YYYY-MM-DD` date.
fn parse_iso_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.date_naive());
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_bare_date() {
        assert_eq!(format_updated("2025-09-20"), "Updated September 20, 2025");
    }

    #[test]
    fn formats_full_timestamp() {
        assert_eq!(
            format_updated("2022-11-03T07:00:00.000Z"),
            "Updated November 3, 2022"
        );
    }

    #[test]
    fn day_is_not_zero_padded() {
        assert_eq!(format_updated("2024-01-05"), "Updated January 5, 2024");
    }

    #[test]
    fn unparseable_input_yields_empty_label() {
        assert_eq!(format_updated("not-a-date"), "");
        assert_eq!(format_updated(""), "");
        assert_eq!(format_updated("2025-13-40"), "");
    }
}
