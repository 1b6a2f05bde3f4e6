//! Core data models for zerobudget
//!
//! This module contains the data structures that represent the budgeting
//! domain: amounts, income and expense line items, monthly budgets, and the
//! ledger that holds them.

pub mod amount;
pub mod budget;
pub mod expense;
pub mod income;
pub mod ledger;
pub mod month;

pub use amount::{Amount, AmountParseError};
pub use budget::Budget;
pub use expense::Expense;
pub use income::Income;
pub use ledger::Ledger;
pub use month::{current_month, validate_month, MonthValidationError};
