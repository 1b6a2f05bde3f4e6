use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use zerobudget::cli::{
    handle_budget_command, handle_expense_command, handle_income_command, BudgetCommands,
    ExpenseCommands, IncomeCommands,
};
use zerobudget::config::{paths::BudgetPaths, settings::Settings};
use zerobudget::storage::Storage;

#[derive(Parser)]
#[command(
    name = "zerobudget",
    author = "Kaylee Beyene",
    version,
    about = "Monthly zero-based budgeting tracker",
    long_about = "zerobudget records monthly income, expenses and savings, \
                  keeps each month's balance (income - actual expenses - savings) \
                  and stores everything in a single JSON file."
)]
struct Cli {
    /// Ledger file to use instead of the configured one
    #[arg(short, long, global = true, env = "ZEROBUDGET_FILE")]
    file: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Monthly budget commands
    #[command(subcommand)]
    Budget(BudgetCommands),

    /// Income commands
    #[command(subcommand)]
    Income(IncomeCommands),

    /// Expense commands
    #[command(subcommand)]
    Expense(ExpenseCommands),

    /// Write default settings and an empty ledger if none exist
    Init,

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let paths = BudgetPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;
    zerobudget::logging::init(&settings.log_level, cli.verbose)?;

    let paths = match cli.file.clone().or_else(|| settings.ledger_file.clone()) {
        Some(file) => paths.with_ledger_file(file),
        None => paths,
    };

    let storage = Storage::new(paths.clone())?;
    let mut ledger = storage.ledger.load()?;

    match cli.command {
        Some(Commands::Budget(cmd)) => handle_budget_command(&storage, &mut ledger, cmd)?,
        Some(Commands::Income(cmd)) => handle_income_command(&storage, &mut ledger, cmd)?,
        Some(Commands::Expense(cmd)) => handle_expense_command(&storage, &mut ledger, cmd)?,
        Some(Commands::Init) => {
            println!("Initializing zerobudget at: {}", paths.base_dir().display());
            settings.save(&paths)?;
            if !storage.ledger.path().exists() {
                storage.ledger.save(&ledger)?;
            }
            println!("Initialization complete!");
            println!("Ledger file: {}", storage.ledger.path().display());
        }
        Some(Commands::Config) => {
            println!("zerobudget Configuration");
            println!("========================");
            println!("Base directory: {}", paths.base_dir().display());
            println!("Settings file:  {}", paths.settings_file().display());
            println!("Ledger file:    {}", storage.ledger.path().display());
            println!();
            println!("Settings:");
            println!("  Log level: {}", settings.log_level);
            println!("  Budgets:   {}", ledger.len());
        }
        None => {
            println!("zerobudget - monthly zero-based budgeting");
            println!();
            println!("Run 'zerobudget --help' for usage information.");
            println!("Run 'zerobudget budget add' to start this month's budget.");
        }
    }

    Ok(())
}
