//! Typed decoding of raw form text.
//!
//! Form inputs are always text. Numeric and date fields are decoded here,
//! before a payload is built, so malformed input fails with a message that
//! names the field instead of reaching the backend as a string.

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use std::str::FromStr;

const DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
];

/// A raw value that could not be decoded into its field's type.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DecodeError {
    #[error("{0} is required")]
    Missing(String),

    #[error("{0} must be a whole number")]
    NotAnInteger(String),

    #[error("{0} must be a valid date")]
    NotADate(String),

    #[error("{label} must be one of: {allowed}")]
    NotAChoice { label: String, allowed: String },
}

/// Parses a whole number, rejecting fractions, exponents, and blank input.
pub fn parse_integer<T>(raw: &str, label: &str) -> Result<T, DecodeError>
where
    T: FromStr,
{
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(DecodeError::Missing(label.to_string()));
    }
    trimmed
        .parse::<T>()
        .map_err(|_| DecodeError::NotAnInteger(label.to_string()))
}

/// Parses a date or date-time as typed into a form.
///
/// A bare date is taken as midnight of that day.
pub fn parse_datetime(raw: &str, label: &str) -> Result<NaiveDateTime, DecodeError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(DecodeError::Missing(label.to_string()));
    }
    parse_naive_datetime(trimmed).ok_or_else(|| DecodeError::NotADate(label.to_string()))
}

/// Accepts the formats the backend and HTML date inputs produce.
pub fn parse_naive_datetime(value: &str) -> Option<NaiveDateTime> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(dt.naive_utc());
    }
    for format in DATETIME_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(value, format) {
            return Some(dt);
        }
    }
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, Timelike};

    #[test]
    fn test_parse_integer_accepts_surrounding_whitespace() {
        assert_eq!(parse_integer::<i32>(" 12 ", "Grade level"), Ok(12));
    }

    #[test]
    fn test_parse_integer_rejects_fractions() {
        assert_eq!(
            parse_integer::<i32>("2.5", "Credits"),
            Err(DecodeError::NotAnInteger("Credits".into()))
        );
        assert_eq!(
            parse_integer::<i32>("1e3", "Max points").unwrap_err().to_string(),
            "Max points must be a whole number"
        );
    }

    #[test]
    fn test_parse_integer_blank_is_missing() {
        assert_eq!(
            parse_integer::<i64>("   ", "Teacher"),
            Err(DecodeError::Missing("Teacher".into()))
        );
    }

    #[test]
    fn test_parse_datetime_local_input() {
        let dt = parse_datetime("2025-03-14T09:30", "Due date").unwrap();
        assert_eq!((dt.year(), dt.month(), dt.day()), (2025, 3, 14));
        assert_eq!((dt.hour(), dt.minute()), (9, 30));
    }

    #[test]
    fn test_parse_datetime_backend_format() {
        let dt = parse_naive_datetime("2025-03-14 09:30:00").unwrap();
        assert_eq!(dt.hour(), 9);
    }

    #[test]
    fn test_parse_datetime_bare_date_is_midnight() {
        let dt = parse_datetime("2025-03-14", "Due date").unwrap();
        assert_eq!((dt.hour(), dt.minute(), dt.second()), (0, 0, 0));
    }

    #[test]
    fn test_parse_datetime_rejects_garbage() {
        assert_eq!(
            parse_datetime("next tuesday", "Due date").unwrap_err().to_string(),
            "Due date must be a valid date"
        );
    }
}
