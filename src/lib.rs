//! zerobudget - monthly zero-based budgeting tracker
//!
//! This library records monthly income, expense and savings entries in a
//! ledger, keeps each month's balance derivable from its entries, and
//! persists the whole ledger as a JSON file.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Core data models (amounts, incomes, expenses, budgets, ledger)
//! - `storage`: JSON file storage layer
//! - `services`: Input validation and persistence around the ledger
//! - `display`: Text rendering of budgets and the ledger
//! - `cli`: Command-line subcommands
//! - `logging`: `tracing` subscriber setup
//!
//! # Example
//!
//! ```rust
//! use zerobudget::models::{Amount, Ledger};
//!
//! let mut ledger = Ledger::new();
//! ledger.add_budget("2024-01");
//! ledger.append_income("2024-01", "Salary", Amount::new(3000.0))?;
//! ledger.append_expense("2024-01", "Rent", Amount::new(1200.0), Amount::new(1250.0))?;
//!
//! assert_eq!(ledger.get("2024-01").unwrap().balance.value(), 1750.0);
//! # Ok::<(), zerobudget::BudgetError>(())
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod logging;
pub mod models;
pub mod services;
pub mod storage;

pub use error::{BudgetError, BudgetResult};
