//! Ledger repository
//!
//! Handles persistence of the ledger to a single JSON file holding an array
//! of monthly budgets.

use std::path::{Path, PathBuf};

use crate::error::BudgetError;
use crate::models::Ledger;

use super::file_io::{read_json, write_json_atomic};

/// Repository for the ledger file
#[derive(Debug, Clone)]
pub struct LedgerRepository {
    path: PathBuf,
}

impl LedgerRepository {
    /// Create a new repository backed by `path`
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Path of the ledger file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the ledger from disk. A missing file yields an empty ledger.
    pub fn load(&self) -> Result<Ledger, BudgetError> {
        let ledger: Ledger = read_json(&self.path)?;
        tracing::debug!(
            path = %self.path.display(),
            budgets = ledger.len(),
            "loaded ledger"
        );
        Ok(ledger)
    }

    /// Save the full ledger, replacing the file
    pub fn save(&self, ledger: &Ledger) -> Result<(), BudgetError> {
        write_json_atomic(&self.path, ledger)?;
        tracing::debug!(
            path = %self.path.display(),
            budgets = ledger.len(),
            "saved ledger"
        );
        Ok(())
    }
}
