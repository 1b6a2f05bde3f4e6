//! Budget CLI commands
//!
//! Creating months, viewing them, setting savings and recomputing balances.

use clap::Subcommand;

use crate::error::BudgetResult;
use crate::models::{current_month, Ledger};
use crate::services::LedgerService;
use crate::storage::Storage;

/// Budget subcommands
#[derive(Subcommand)]
pub enum BudgetCommands {
    /// Create an empty budget for a month (no-op if it exists)
    Add {
        /// Month as YYYY-MM (defaults to the current month)
        month: Option<String>,
    },

    /// Show a month's incomes, expenses, savings and balance
    Show {
        /// Month as YYYY-MM (defaults to the current month)
        month: Option<String>,

        /// Also show budgeted vs actual per expense category
        #[arg(short, long)]
        breakdown: bool,
    },

    /// List all months with totals
    #[command(alias = "ls")]
    List,

    /// Set the amount saved in a month
    Savings {
        /// Savings amount (e.g., "250" or "250.00")
        #[arg(allow_hyphen_values = true)]
        amount: String,

        /// Month as YYYY-MM (defaults to the current month)
        #[arg(short, long)]
        month: Option<String>,
    },

    /// Recompute a month's balance from its entries
    Recalc {
        /// Month as YYYY-MM (defaults to the current month)
        month: Option<String>,
    },
}

/// Handle a budget command
pub fn handle_budget_command(
    storage: &Storage,
    ledger: &mut Ledger,
    cmd: BudgetCommands,
) -> BudgetResult<()> {
    let mut service = LedgerService::new(storage, ledger);

    match cmd {
        BudgetCommands::Add { month } => {
            let month = month.unwrap_or_else(current_month);
            println!("{}", service.add_budget(&month)?);
        }

        BudgetCommands::Show { month, breakdown } => {
            let month = month.unwrap_or_else(current_month);
            let details = service.describe(&month)?;
            let breakdown = if breakdown {
                Some(service.expense_breakdown(&month)?)
            } else {
                None
            };

            println!("Budget for {}", month);
            println!("{}", "=".repeat(40));
            print!("{}", details);

            if let Some(breakdown) = breakdown {
                println!();
                println!("{}", breakdown);
            }
        }

        BudgetCommands::List => {
            println!("{}", service.summary());
        }

        BudgetCommands::Savings { amount, month } => {
            let month = month.unwrap_or_else(current_month);
            println!("{}", service.set_savings(&month, &amount)?);
        }

        BudgetCommands::Recalc { month } => {
            let month = month.unwrap_or_else(current_month);
            println!("{}", service.recalculate(&month)?);
        }
    }

    Ok(())
}
