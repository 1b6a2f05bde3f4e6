//! Custom error types for zerobudget
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

/// The main error type for zerobudget operations
#[derive(Error, Debug)]
pub enum BudgetError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// Validation errors for user input
    #[error("Validation error: {0}")]
    Validation(String),

    /// Entity not found errors
    #[error("{entity_type} not found: {identifier}")]
    NotFound {
        entity_type: &'static str,
        identifier: String,
    },

    /// Ledger file errors
    #[error("Storage error: {0}")]
    Storage(String),
}

impl BudgetError {
    /// Create a "not found" error for a month's budget
    pub fn budget_not_found(month: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Budget",
            identifier: month.into(),
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}

/// Result type alias for zerobudget operations
pub type BudgetResult<T> = Result<T, BudgetError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = BudgetError::Validation("Month cannot be empty".into());
        assert_eq!(err.to_string(), "Validation error: Month cannot be empty");
        assert!(err.is_validation());
    }

    #[test]
    fn test_not_found_error() {
        let err = BudgetError::budget_not_found("2024-01");
        assert_eq!(err.to_string(), "Budget not found: 2024-01");
        assert!(err.is_not_found());
        assert!(!err.is_validation());
    }
}
