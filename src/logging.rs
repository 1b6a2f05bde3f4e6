//! Logging setup
//!
//! Installs a `tracing` subscriber writing to stderr, so stdout stays free
//! for status messages and reports.

use tracing_subscriber::EnvFilter;

use crate::error::{BudgetError, BudgetResult};

const LEVELS: [&str; 5] = ["error", "warn", "info", "debug", "trace"];

/// Raise `base` by `verbosity` steps, saturating at "trace".
///
/// Unknown base levels are treated as "warn".
pub fn effective_level(base: &str, verbosity: u8) -> &'static str {
    let start = LEVELS
        .iter()
        .position(|l| l.eq_ignore_ascii_case(base.trim()))
        .unwrap_or(1);
    let index = (start + verbosity as usize).min(LEVELS.len() - 1);
    LEVELS[index]
}

/// Initialise the global subscriber.
///
/// `RUST_LOG` wins when set; otherwise the crate logs at `level` raised by
/// `verbosity`.
pub fn init(level: &str, verbosity: u8) -> BudgetResult<()> {
    let filter = match std::env::var("RUST_LOG") {
        Ok(directives) if !directives.is_empty() => EnvFilter::new(directives),
        _ => EnvFilter::new(format!("zerobudget={}", effective_level(level, verbosity))),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .map_err(|e| BudgetError::Config(format!("Failed to initialise logging: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_effective_level() {
        assert_eq!(effective_level("warn", 0), "warn");
        assert_eq!(effective_level("warn", 1), "info");
        assert_eq!(effective_level("warn", 2), "debug");
        assert_eq!(effective_level("INFO", 1), "debug");
    }

    #[test]
    fn test_effective_level_saturates() {
        assert_eq!(effective_level("debug", 9), "trace");
        assert_eq!(effective_level("trace", 1), "trace");
    }

    #[test]
    fn test_unknown_level_defaults_to_warn() {
        assert_eq!(effective_level("loud", 0), "warn");
        assert_eq!(effective_level("", 1), "info");
    }
}
