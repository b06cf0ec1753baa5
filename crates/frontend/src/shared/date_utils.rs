//! Utilities for date and time formatting
//!
//! Dates are shown the Indonesian way, e.g. "20 Februari 2025".

use chrono::{Datelike, NaiveDate, NaiveDateTime};

const MONTHS_LONG: [&str; 12] = [
    "Januari", "Februari", "Maret", "April", "Mei", "Juni", "Juli", "Agustus", "September",
    "Oktober", "November", "Desember",
];

const MONTHS_SHORT: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "Mei", "Jun", "Jul", "Agu", "Sep", "Okt", "Nov", "Des",
];

/// Format of `<input type="datetime-local">` values.
pub const DATETIME_LOCAL_FORMAT: &str = "%Y-%m-%dT%H:%M";

/// Two-digit day, full month name, year.
/// Example: 2025-02-05 -> "05 Februari 2025"
pub fn format_long_date(date: NaiveDate) -> String {
    format!(
        "{:02} {} {}",
        date.day(),
        MONTHS_LONG[date.month0() as usize],
        date.year()
    )
}

/// Publication schedule from a `datetime-local` value.
/// Example: "2025-03-01T08:00" -> "1 Mar 2025, 08.00"
///
/// Returns `None` for empty or unparsable input.
pub fn format_schedule(value: &str) -> Option<String> {
    let dt = NaiveDateTime::parse_from_str(value.trim(), DATETIME_LOCAL_FORMAT).ok()?;
    Some(format!(
        "{} {} {}, {}",
        dt.day(),
        MONTHS_SHORT[dt.month0() as usize],
        dt.year(),
        dt.format("%H.%M")
    ))
}

/// Earliest value accepted by the schedule picker.
pub fn datetime_local_min(now: NaiveDateTime) -> String {
    now.format(DATETIME_LOCAL_FORMAT).to_string()
}

pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

pub fn current_year() -> i32 {
    chrono::Local::now().year()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_long_date() {
        let d = NaiveDate::from_ymd_opt(2025, 2, 20).unwrap();
        assert_eq!(format_long_date(d), "20 Februari 2025");
        let d = NaiveDate::from_ymd_opt(2025, 8, 5).unwrap();
        assert_eq!(format_long_date(d), "05 Agustus 2025");
    }

    #[test]
    fn test_format_schedule() {
        assert_eq!(
            format_schedule("2025-03-01T08:00"),
            Some("1 Mar 2025, 08.00".to_string())
        );
        assert_eq!(
            format_schedule("2025-12-31T23:45"),
            Some("31 Des 2025, 23.45".to_string())
        );
    }

    #[test]
    fn test_invalid_schedule() {
        assert_eq!(format_schedule(""), None);
        assert_eq!(format_schedule("besok pagi"), None);
    }

    #[test]
    fn test_datetime_local_min() {
        let now = NaiveDate::from_ymd_opt(2025, 2, 20)
            .unwrap()
            .and_hms_opt(9, 5, 42)
            .unwrap();
        assert_eq!(datetime_local_min(now), "2025-02-20T09:05");
    }
}
