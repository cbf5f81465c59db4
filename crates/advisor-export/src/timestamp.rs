//! Timestamp normalization for display

use chrono::{DateTime, NaiveDate, NaiveDateTime};

/// Parse an ISO-8601-ish timestamp into `YYYY-MM-DD HH:MM:SS` form
///
/// Accepts an optional trailing `Z`, fractional seconds, and bare dates
/// (rendered at midnight). Malformed input is passed through unmodified
/// rather than failing the export.
pub fn parse_timestamp(raw: &str) -> String {
    let trimmed = raw.trim();
    let normalized = trimmed.replace('Z', "+00:00");

    if let Ok(dt) = DateTime::parse_from_rfc3339(&normalized) {
        return dt.format("%Y-%m-%d %H:%M:%S").to_string();
    }
    for format in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(trimmed, format) {
            return naive.format("%Y-%m-%d %H:%M:%S").to_string();
        }
    }
    if let Ok(date) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
        return format!("{} 00:00:00", date.format("%Y-%m-%d"));
    }
    raw.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_zulu_timestamp() {
        assert_eq!(
            parse_timestamp("2025-01-20T14:30:05Z"),
            "2025-01-20 14:30:05"
        );
    }

    #[test]
    fn test_parse_offset_timestamp() {
        assert_eq!(
            parse_timestamp("2025-01-20T14:30:05.123456+00:00"),
            "2025-01-20 14:30:05"
        );
    }

    #[test]
    fn test_parse_naive_timestamp() {
        assert_eq!(
            parse_timestamp("2025-01-20T14:30:05"),
            "2025-01-20 14:30:05"
        );
    }

    #[test]
    fn test_parse_bare_date_renders_midnight() {
        assert_eq!(parse_timestamp("2025-01-20"), "2025-01-20 00:00:00");
    }

    #[test]
    fn test_malformed_timestamp_passes_through() {
        assert_eq!(parse_timestamp("not a timestamp"), "not a timestamp");
        assert_eq!(parse_timestamp(""), "");
        assert_eq!(parse_timestamp("N/A"), "N/A");
    }
}
