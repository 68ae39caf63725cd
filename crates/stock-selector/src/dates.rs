//! Strict `YYYY-MM-DD` date handling

use crate::error::{Result, SelectorError};
use chrono::NaiveDate;
use regex::Regex;
use std::sync::LazyLock;

/// Format accepted for user-entered dates
pub const DATE_FORMAT: &str = "%Y-%m-%d";

// chrono alone accepts unpadded fields and signed years
static DATE_SHAPE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[0-9]{4}-[0-9]{2}-[0-9]{2}$").expect("date pattern is a valid regex")
});

/// Parse a `YYYY-MM-DD` calendar date
pub fn parse_date(s: &str) -> Result<NaiveDate> {
    if !DATE_SHAPE_RE.is_match(s) {
        return Err(SelectorError::InvalidDate(s.to_string()));
    }
    NaiveDate::parse_from_str(s, DATE_FORMAT).map_err(|_| SelectorError::InvalidDate(s.to_string()))
}

/// Whether `s` is exactly a real `YYYY-MM-DD` date
pub fn validate_date(s: &str) -> bool {
    parse_date(s).is_ok()
}

/// Require `start` to be strictly before `end`
///
/// The end bound is exclusive, so an equal or earlier end can never hold data.
pub fn validate_range(start: NaiveDate, end: NaiveDate) -> Result<()> {
    if start < end {
        Ok(())
    } else {
        Err(SelectorError::InvalidDateRange {
            start: start.format(DATE_FORMAT).to_string(),
            end: end.format(DATE_FORMAT).to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_date() {
        assert!(validate_date("2024-02-29"));
        assert!(validate_date("2023-12-31"));
        assert!(validate_date("2000-02-29"));

        assert!(!validate_date("2024-02-30"));
        assert!(!validate_date("2023-02-29"));
        assert!(!validate_date("1900-02-29"));
        assert!(!validate_date("2024-13-01"));
        assert!(!validate_date("2024-00-10"));
        assert!(!validate_date("2024-04-31"));
    }

    #[test]
    fn test_rejects_alternate_shapes() {
        for input in [
            "2024-2-3",
            "24-02-03",
            "2024/02/03",
            "02-03-2024",
            "+2024-02-03",
            " 2024-02-03",
            "2024-02-03 ",
            "2024-02-03T00:00",
            "",
        ] {
            assert!(!validate_date(input), "{input:?} should be rejected");
        }
    }

    #[test]
    fn test_parse_date() {
        let date = parse_date("2024-01-15").unwrap();
        assert_eq!(date, NaiveDate::from_ymd_opt(2024, 1, 15).unwrap());

        let err = parse_date("2024-02-30").unwrap_err();
        assert!(matches!(err, SelectorError::InvalidDate(ref s) if s == "2024-02-30"));
    }

    #[test]
    fn test_validate_range() {
        let jan = parse_date("2024-01-01").unwrap();
        let feb = parse_date("2024-02-01").unwrap();

        assert!(validate_range(jan, feb).is_ok());
        assert!(matches!(
            validate_range(feb, jan),
            Err(SelectorError::InvalidDateRange { .. })
        ));
        assert!(validate_range(jan, jan).is_err());
    }
}
