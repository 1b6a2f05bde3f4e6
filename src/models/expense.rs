//! Expense line item
//!
//! Tracks what was planned for a spending category against what was
//! actually spent. Only the actual amount feeds the month's balance.

use serde::{Deserialize, Serialize};

use super::amount::Amount;

/// An expense entry within a monthly budget
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    /// Spending category (e.g., "Rent")
    pub category: String,

    /// Amount planned for this category
    #[serde(rename = "budgeted_amount")]
    pub budgeted: Amount,

    /// Amount actually spent
    #[serde(rename = "actual_amount")]
    pub actual: Amount,
}

impl Expense {
    /// Create a new expense entry
    pub fn new(category: impl Into<String>, budgeted: Amount, actual: Amount) -> Self {
        Self {
            category: category.into(),
            budgeted,
            actual,
        }
    }

    /// Budgeted minus actual. Negative means overspent.
    pub fn variance(&self) -> Amount {
        self.budgeted - self.actual
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_variance() {
        let rent = Expense::new("Rent", Amount::new(1200.0), Amount::new(1250.0));
        assert_eq!(rent.variance().value(), -50.0);
        assert!(rent.variance().is_negative());

        let food = Expense::new("Food", Amount::new(400.0), Amount::new(380.0));
        assert_eq!(food.variance().value(), 20.0);
        assert!(!food.variance().is_negative());
    }

    #[test]
    fn test_serialization_field_names() {
        let rent = Expense::new("Rent", Amount::new(1200.0), Amount::new(1250.0));
        let value = serde_json::to_value(&rent).unwrap();

        assert_eq!(value["category"], "Rent");
        assert_eq!(value["budgeted_amount"], 1200.0);
        assert_eq!(value["actual_amount"], 1250.0);
        assert!(value.get("budgeted").is_none());
    }

    #[test]
    fn test_deserialize_from_file_format() {
        let json = r#"{"category": "Rent", "budgeted_amount": 1200, "actual_amount": 1250.5}"#;
        let rent: Expense = serde_json::from_str(json).unwrap();

        assert_eq!(rent.category, "Rent");
        assert_eq!(rent.budgeted.value(), 1200.0);
        assert_eq!(rent.actual.value(), 1250.5);
    }
}
