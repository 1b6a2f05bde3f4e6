//! Month keys
//!
//! Budgets are keyed by a plain "YYYY-MM" string, which is also what the
//! ledger file stores. These helpers check and produce that format.

use chrono::{Datelike, Local, NaiveDate};
use std::fmt;

/// Validation errors for month keys
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MonthValidationError {
    Empty,
    InvalidFormat(String),
}

impl fmt::Display for MonthValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "Month cannot be empty"),
            Self::InvalidFormat(s) => {
                write!(f, "Invalid month '{}': expected YYYY-MM", s)
            }
        }
    }
}

impl std::error::Error for MonthValidationError {}

/// Check that `month` is a real calendar month written as "YYYY-MM"
pub fn validate_month(month: &str) -> Result<(), MonthValidationError> {
    if month.trim().is_empty() {
        return Err(MonthValidationError::Empty);
    }

    let bytes = month.as_bytes();
    let shape_ok = bytes.len() == 7
        && bytes[4] == b'-'
        && bytes
            .iter()
            .enumerate()
            .all(|(i, b)| i == 4 || b.is_ascii_digit());

    if !shape_ok {
        return Err(MonthValidationError::InvalidFormat(month.to_string()));
    }

    NaiveDate::parse_from_str(&format!("{}-01", month), "%Y-%m-%d")
        .map(|_| ())
        .map_err(|_| MonthValidationError::InvalidFormat(month.to_string()))
}

/// Format a year and month as a month key
pub fn month_key(year: i32, month: u32) -> String {
    format!("{:04}-{:02}", year, month)
}

/// The month key for today in local time
pub fn current_month() -> String {
    let today = Local::now().date_naive();
    month_key(today.year(), today.month())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_months() {
        assert!(validate_month("2024-01").is_ok());
        assert!(validate_month("2024-12").is_ok());
        assert!(validate_month("1999-07").is_ok());
    }

    #[test]
    fn test_empty_month() {
        assert_eq!(validate_month(""), Err(MonthValidationError::Empty));
        assert_eq!(validate_month("  "), Err(MonthValidationError::Empty));
    }

    #[test]
    fn test_invalid_months() {
        let rejected = [
            "2024-13",
            "2024-00",
            "2024-1",
            "24-01",
            "2024/01",
            "January",
            "2024-01-15",
        ];
        for bad in rejected {
            let err = validate_month(bad).unwrap_err();
            assert!(
                matches!(err, MonthValidationError::InvalidFormat(_)),
                "expected {} to be rejected",
                bad
            );
        }
    }

    #[test]
    fn test_month_key() {
        assert_eq!(month_key(2024, 1), "2024-01");
        assert_eq!(month_key(2025, 11), "2025-11");
    }

    #[test]
    fn test_current_month_is_valid() {
        assert!(validate_month(&current_month()).is_ok());
    }

    #[test]
    fn test_error_display() {
        assert_eq!(
            MonthValidationError::InvalidFormat("2024/01".into()).to_string(),
            "Invalid month '2024/01': expected YYYY-MM"
        );
    }
}
