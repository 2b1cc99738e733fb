/// Utilities for date formatting
///
/// The CMS emits RFC 3339 timestamps; articles display them the French
/// long way.
use chrono::{DateTime, Datelike};

const MONTHS_FR: [&str; 12] = [
    "janvier",
    "février",
    "mars",
    "avril",
    "mai",
    "juin",
    "juillet",
    "août",
    "septembre",
    "octobre",
    "novembre",
    "décembre",
];

/// Format an RFC 3339 timestamp as "15 mars 2024".
/// Unparseable input is returned as-is rather than dropped.
pub fn format_publish_date(raw: &str) -> String {
    match DateTime::parse_from_rfc3339(raw) {
        Ok(date) => format!(
            "{} {} {}",
            date.day(),
            MONTHS_FR[date.month0() as usize],
            date.year()
        ),
        Err(_) => raw.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_cms_timestamps() {
        assert_eq!(
            format_publish_date("2024-03-15T14:02:26.123Z"),
            "15 mars 2024"
        );
        assert_eq!(
            format_publish_date("2025-12-31T23:59:59Z"),
            "31 décembre 2025"
        );
    }

    #[test]
    fn keeps_unparseable_input() {
        assert_eq!(format_publish_date("hier"), "hier");
        assert_eq!(format_publish_date(""), "");
    }
}
