//! Path management for zerobudget
//!
//! ## Path Resolution Order
//!
//! 1. `ZEROBUDGET_DATA_DIR` environment variable (if set)
//! 2. The platform config directory (`~/.config/zerobudget` on Linux,
//!    `~/Library/Application Support/zerobudget` on macOS,
//!    `%APPDATA%\zerobudget\config` on Windows)

use std::path::PathBuf;

use directories::ProjectDirs;

use crate::error::BudgetError;

/// Environment variable that overrides the base directory
pub const DATA_DIR_ENV: &str = "ZEROBUDGET_DATA_DIR";

/// Manages all paths used by zerobudget
#[derive(Debug, Clone)]
pub struct BudgetPaths {
    /// Base directory for all zerobudget data
    base_dir: PathBuf,

    /// Explicit ledger file location, if overridden
    ledger_file: Option<PathBuf>,
}

impl BudgetPaths {
    /// Create a new BudgetPaths instance
    ///
    /// # Errors
    ///
    /// Returns an error if no home directory can be determined.
    pub fn new() -> Result<Self, BudgetError> {
        let base_dir = match std::env::var_os(DATA_DIR_ENV) {
            Some(custom) => PathBuf::from(custom),
            None => resolve_default_path()?,
        };

        Ok(Self::with_base_dir(base_dir))
    }

    /// Create BudgetPaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self {
            base_dir,
            ledger_file: None,
        }
    }

    /// Use `path` for the ledger instead of the default location
    pub fn with_ledger_file(mut self, path: PathBuf) -> Self {
        self.ledger_file = Some(path);
        self
    }

    /// Get the base directory
    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the data directory (<base>/data/)
    pub fn data_dir(&self) -> PathBuf {
        self.base_dir.join("data")
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Get the path to the ledger file (<base>/data/budget.json unless overridden)
    pub fn ledger_file(&self) -> PathBuf {
        self.ledger_file
            .clone()
            .unwrap_or_else(|| self.data_dir().join("budget.json"))
    }

    /// Ensure the base and data directories exist
    pub fn ensure_directories(&self) -> Result<(), BudgetError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| BudgetError::Io(format!("Failed to create base directory: {}", e)))?;

        std::fs::create_dir_all(self.data_dir())
            .map_err(|e| BudgetError::Io(format!("Failed to create data directory: {}", e)))?;

        Ok(())
    }
}

fn resolve_default_path() -> Result<PathBuf, BudgetError> {
    ProjectDirs::from("", "", "zerobudget")
        .map(|dirs| dirs.config_dir().to_path_buf())
        .ok_or_else(|| BudgetError::Config("Could not determine home directory".into()))
}
