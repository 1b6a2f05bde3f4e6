//! Business logic layer
//!
//! Services sit between the presentation layer and the ledger: they turn
//! raw input into validated operations and keep the file in sync.

pub mod ledger;

pub use ledger::LedgerService;
