//! Date parsing and arithmetic
//!
//! Clinic extracts mix date formats; values that match none of the configured
//! formats are treated as missing rather than failing the load.

use chrono::NaiveDate;

/// Configuration for date format handling
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateFormatConfig {
    /// Date format strings tried in order
    pub date_formats: Vec<String>,
    /// Enable heuristic format detection after the list is exhausted
    pub enable_format_detection: bool,
}

impl Default for DateFormatConfig {
    fn default() -> Self {
        Self {
            date_formats: vec![
                "%Y-%m-%d".to_string(), // ISO format: 2023-01-15
                "%m/%d/%Y".to_string(), // US: 01/15/2023
                "%d.%m.%Y".to_string(), // 15.01.2023
                "%Y%m%d".to_string(),   // Compact: 20230115
                "%d %b %Y".to_string(), // 15 Jan 2023
                "%d %B %Y".to_string(), // 15 January 2023
            ],
            enable_format_detection: true,
        }
    }
}

/// Parse a date string with multiple format attempts
///
/// A trailing time component (`2024-01-15 00:00:00` or `2024-01-15T08:30`)
/// is ignored.
#[must_use]
pub fn parse_date_string(s: &str, config: &DateFormatConfig) -> Option<NaiveDate> {
    let s = s.trim();
    if s.is_empty() {
        return None;
    }
    let s = strip_time(s);

    for format in &config.date_formats {
        if let Ok(date) = NaiveDate::parse_from_str(s, format) {
            return Some(date);
        }
    }

    if config.enable_format_detection {
        if let Some(detected_format) = detect_date_format(s) {
            if let Ok(date) = NaiveDate::parse_from_str(s, detected_format) {
                return Some(date);
            }
        }
    }

    None
}

fn strip_time(s: &str) -> &str {
    if s.len() > 10 && s.is_char_boundary(10) {
        let (date, rest) = s.split_at(10);
        let bytes = date.as_bytes();
        let iso_like = matches!(bytes[4], b'-' | b'/') && bytes[4] == bytes[7];
        if iso_like && (rest.starts_with(' ') || rest.starts_with('T')) {
            return date;
        }
    }
    s
}

/// Try to detect the date format based on string patterns
#[must_use]
pub fn detect_date_format(s: &str) -> Option<&'static str> {
    if s.len() == 10 && s.chars().nth(4) == Some('/') && s.chars().nth(7) == Some('/') {
        return Some("%Y/%m/%d");
    }

    if s.contains('-') {
        let parts: Vec<&str> = s.split('-').collect();
        if parts.len() == 3 && parts[2].len() == 4 {
            return Some("%m-%d-%Y");
        }
    }

    if s.contains('/') {
        let parts: Vec<&str> = s.split('/').collect();
        if parts.len() == 3 && parts[2].len() == 4 {
            // Only unambiguous when the first part cannot be a month
            if parts[0].parse::<u8>().is_ok_and(|first| first > 12) {
                return Some("%d/%m/%Y");
            }
        }
    }

    None
}

/// Signed number of days from `from` to `to`
#[must_use]
pub fn days_between(from: NaiveDate, to: NaiveDate) -> i64 {
    (to - from).num_days()
}
