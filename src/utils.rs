// src/utils.rs
use chrono::{DateTime, TimeZone};

pub const RECORD_PREFIX: &str = "location_filtered_analysis";
pub const TIMESTAMP_FORMAT: &str = "%Y%m%d_%H%M%S";

/// Collapses runs of whitespace and trims.
pub fn clean_text(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Rounds to one decimal place; exact halves go to the even digit.
pub fn round1(value: f64) -> f64 {
    (value * 10.0).round_ties_even() / 10.0
}

/// `part` as a percentage of `whole`, one decimal; a zero `whole` counts as 1.
pub fn percentage(part: usize, whole: usize) -> f64 {
    round1(part as f64 / whole.max(1) as f64 * 100.0)
}

pub fn run_timestamp<Tz: TimeZone>(at: &DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    at.format(TIMESTAMP_FORMAT).to_string()
}

pub fn analysis_record_name(timestamp: &str) -> String {
    format!("{}_{}", RECORD_PREFIX, timestamp)
}

/// Record names double as file names; only `[A-Za-z0-9_-]` is accepted.
pub fn is_valid_record_name(name: &str) -> bool {
    !name.is_empty()
        && name
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[test]
    fn test_clean_text() {
        assert_eq!(clean_text("  Senior \n\t AI   Engineer "), "Senior AI Engineer");
        assert_eq!(clean_text("   "), "");
    }

    #[test]
    fn test_percentage() {
        assert_eq!(percentage(3, 5), 60.0);
        assert_eq!(percentage(1, 3), 33.3);
        assert_eq!(percentage(2, 3), 66.7);
        assert_eq!(percentage(0, 0), 0.0);
    }

    #[test]
    fn test_round1_sends_halves_to_even() {
        assert_eq!(percentage(1, 16), 6.2);
        assert_eq!(percentage(3, 16), 18.8);
        assert_eq!(round1(2.25), 2.2);
        assert_eq!(round1(2.35), 2.4);
    }

    #[test]
    fn test_record_name_from_timestamp() {
        let at = Utc.with_ymd_and_hms(2025, 3, 7, 9, 5, 1).unwrap();
        let timestamp = run_timestamp(&at);
        assert_eq!(timestamp, "20250307_090501");
        assert_eq!(
            analysis_record_name(&timestamp),
            "location_filtered_analysis_20250307_090501"
        );
    }

    #[test]
    fn test_is_valid_record_name() {
        assert!(is_valid_record_name("location_filtered_analysis_20250307_090501"));
        assert!(!is_valid_record_name("../secrets"));
        assert!(!is_valid_record_name("a.json"));
        assert!(!is_valid_record_name(""));
    }
}
