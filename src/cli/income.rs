//! Income CLI commands

use clap::Subcommand;

use crate::error::BudgetResult;
use crate::models::{current_month, Ledger};
use crate::services::LedgerService;
use crate::storage::Storage;

/// Income subcommands
#[derive(Subcommand)]
pub enum IncomeCommands {
    /// Record income for a month
    Add {
        /// Where the money came from (e.g., "Salary")
        source: String,

        /// Amount received (e.g., "3000" or "3000.00")
        #[arg(allow_hyphen_values = true)]
        amount: String,

        /// Month as YYYY-MM (defaults to the current month)
        #[arg(short, long)]
        month: Option<String>,
    },
}

/// Handle an income command
pub fn handle_income_command(
    storage: &Storage,
    ledger: &mut Ledger,
    cmd: IncomeCommands,
) -> BudgetResult<()> {
    let mut service = LedgerService::new(storage, ledger);

    match cmd {
        IncomeCommands::Add {
            source,
            amount,
            month,
        } => {
            let month = month.unwrap_or_else(current_month);
            println!("{}", service.add_income(&month, &source, &amount)?);
        }
    }

    Ok(())
}
