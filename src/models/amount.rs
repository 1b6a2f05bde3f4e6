//! Amount type for representing monetary values
//!
//! A thin wrapper over `f64`. The ledger file stores plain JSON numbers, so
//! the wrapper is serialized transparently and carries no currency.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, Sub};

/// A monetary amount, stored as a floating-point number of currency units
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Amount(f64);

impl Amount {
    /// Create an amount from a raw value
    ///
    /// # Examples
    /// ```
    /// use zerobudget::models::Amount;
    /// let amount = Amount::new(10.5);
    /// assert_eq!(amount.to_string(), "10.50");
    /// ```
    pub const fn new(value: f64) -> Self {
        Self(value)
    }

    /// Create a zero amount
    pub const fn zero() -> Self {
        Self(0.0)
    }

    /// Get the raw value
    pub const fn value(&self) -> f64 {
        self.0
    }

    /// Check if the amount is zero
    pub fn is_zero(&self) -> bool {
        self.0 == 0.0
    }

    /// Check if the amount is negative
    pub fn is_negative(&self) -> bool {
        self.0 < 0.0
    }

    /// Parse an amount from user input
    ///
    /// Accepts anything `f64` parses ("3000", "12.5", "-4", "1e3") except
    /// empty input and non-finite values, which the ledger file cannot hold.
    pub fn parse(s: &str) -> Result<Self, AmountParseError> {
        let s = s.trim();
        if s.is_empty() {
            return Err(AmountParseError::Empty);
        }

        let value: f64 = s
            .parse()
            .map_err(|_| AmountParseError::InvalidFormat(s.to_string()))?;

        if !value.is_finite() {
            return Err(AmountParseError::InvalidFormat(s.to_string()));
        }

        Ok(Self(value))
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Respect width/alignment flags so tables can right-align amounts.
        f.pad(&format!("{:.2}", self.0))
    }
}

impl Add for Amount {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self(self.0 + other.0)
    }
}

impl Sub for Amount {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self(self.0 - other.0)
    }
}

impl std::iter::Sum for Amount {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Amount::zero(), |acc, a| acc + a)
    }
}

/// Error type for amount parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AmountParseError {
    Empty,
    InvalidFormat(String),
}

impl fmt::Display for AmountParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AmountParseError::Empty => write!(f, "Amount cannot be empty"),
            AmountParseError::InvalidFormat(s) => write!(f, "Invalid amount: {}", s),
        }
    }
}

impl std::error::Error for AmountParseError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(Amount::new(3000.0).to_string(), "3000.00");
        assert_eq!(Amount::new(12.5).to_string(), "12.50");
        assert_eq!(Amount::new(-1250.0).to_string(), "-1250.00");
        assert_eq!(Amount::zero().to_string(), "0.00");
    }

    #[test]
    fn test_display_padding() {
        assert_eq!(format!("{:>8}", Amount::new(1.5)), "    1.50");
    }

    #[test]
    fn test_arithmetic() {
        let a = Amount::new(3000.0);
        let b = Amount::new(1250.0);

        assert_eq!((a - b).value(), 1750.0);
        assert_eq!((a + b).value(), 4250.0);
        assert!((b - a).is_negative());
    }

    #[test]
    fn test_sum() {
        let amounts = vec![Amount::new(100.0), Amount::new(200.0), Amount::new(300.0)];
        let total: Amount = amounts.into_iter().sum();
        assert_eq!(total.value(), 600.0);

        let empty: Vec<Amount> = Vec::new();
        assert!(empty.into_iter().sum::<Amount>().is_zero());
    }

    #[test]
    fn test_parse() {
        assert_eq!(Amount::parse("3000").unwrap().value(), 3000.0);
        assert_eq!(Amount::parse(" 12.75 ").unwrap().value(), 12.75);
        assert_eq!(Amount::parse("-4").unwrap().value(), -4.0);
        assert!(Amount::parse("-4").unwrap().is_negative());
    }

    #[test]
    fn test_parse_rejects_bad_input() {
        assert_eq!(Amount::parse(""), Err(AmountParseError::Empty));
        assert_eq!(Amount::parse("   "), Err(AmountParseError::Empty));
        assert!(matches!(
            Amount::parse("abc"),
            Err(AmountParseError::InvalidFormat(_))
        ));
        assert!(Amount::parse("NaN").is_err());
        assert!(Amount::parse("inf").is_err());
    }

    #[test]
    fn test_serializes_as_plain_number() {
        let json = serde_json::to_string(&Amount::new(1200.0)).unwrap();
        assert_eq!(json, "1200.0");

        let parsed: Amount = serde_json::from_str("1250").unwrap();
        assert_eq!(parsed.value(), 1250.0);
    }
}
