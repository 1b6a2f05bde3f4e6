//! Display formatting for terminal output
//!
//! Provides utilities for rendering budgets and the ledger as text for the
//! terminal or any other presentation layer.

pub mod budget;

pub use budget::{format_budget_details, format_expense_breakdown, format_ledger_summary};
