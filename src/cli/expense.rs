//! Expense CLI commands

use clap::Subcommand;

use crate::error::BudgetResult;
use crate::models::{current_month, Ledger};
use crate::services::LedgerService;
use crate::storage::Storage;

/// Expense subcommands
#[derive(Subcommand)]
pub enum ExpenseCommands {
    /// Record an expense for a month
    Add {
        /// Spending category (e.g., "Rent")
        category: String,

        /// Amount planned for the category
        #[arg(allow_hyphen_values = true)]
        budgeted: String,

        /// Amount actually spent
        #[arg(allow_hyphen_values = true)]
        actual: String,

        /// Month as YYYY-MM (defaults to the current month)
        #[arg(short, long)]
        month: Option<String>,
    },
}

/// Handle an expense command
pub fn handle_expense_command(
    storage: &Storage,
    ledger: &mut Ledger,
    cmd: ExpenseCommands,
) -> BudgetResult<()> {
    let mut service = LedgerService::new(storage, ledger);

    match cmd {
        ExpenseCommands::Add {
            category,
            budgeted,
            actual,
            month,
        } => {
            let month = month.unwrap_or_else(current_month);
            println!(
                "{}",
                service.add_expense(&month, &category, &budgeted, &actual)?
            );
        }
    }

    Ok(())
}
