//! Income line item
//!
//! One source of money coming in during a month. Owned by its `Budget`.

use serde::{Deserialize, Serialize};

use super::amount::Amount;

/// An income entry within a monthly budget
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Income {
    /// Where the money came from (e.g., "Salary")
    pub source: String,

    /// How much came in
    pub amount: Amount,
}

impl Income {
    /// Create a new income entry
    pub fn new(source: impl Into<String>, amount: Amount) -> Self {
        Self {
            source: source.into(),
            amount,
        }
    }
}
