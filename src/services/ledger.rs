//! Ledger service
//!
//! Takes raw user input, validates it, applies it to the ledger and persists
//! the result. Each mutating call returns a short status message for the
//! presentation layer. Validation failures leave the ledger untouched.

use crate::display::{format_budget_details, format_expense_breakdown, format_ledger_summary};
use crate::error::{BudgetError, BudgetResult};
use crate::models::{validate_month, Amount, Budget, Ledger};
use crate::storage::Storage;

/// Service for ledger management
pub struct LedgerService<'a> {
    storage: &'a Storage,
    ledger: &'a mut Ledger,
}

impl<'a> LedgerService<'a> {
    /// Create a new ledger service over an already loaded ledger
    pub fn new(storage: &'a Storage, ledger: &'a mut Ledger) -> Self {
        Self { storage, ledger }
    }

    /// Read access to the ledger
    pub fn ledger(&self) -> &Ledger {
        &*self.ledger
    }

    /// Create an empty budget for a month (no-op if it already exists)
    pub fn add_budget(&mut self, month: &str) -> BudgetResult<String> {
        let month = month.trim();
        validate_month(month).map_err(|e| invalid(e.to_string()))?;

        if self.ledger.add_budget(month) {
            tracing::info!(month, "budget added");
        } else {
            tracing::debug!(month, "budget already exists");
        }
        self.persist()?;

        Ok(format!("Budget added for {}", month))
    }

    /// Append an income entry to an existing month
    pub fn add_income(&mut self, month: &str, source: &str, amount: &str) -> BudgetResult<String> {
        let (month, source) = (month.trim(), source.trim());
        if month.is_empty() || source.is_empty() || amount.trim().is_empty() {
            return Err(invalid("Please fill in all income fields"));
        }
        let amount = parse_amount(amount, "Invalid income amount")?;

        let balance = self.ledger.append_income(month, source, amount)?.balance;
        tracing::info!(month, source, %amount, %balance, "income added");
        self.persist()?;

        Ok(format!("Income added to {}", month))
    }

    /// Append an expense entry to an existing month
    pub fn add_expense(
        &mut self,
        month: &str,
        category: &str,
        budgeted: &str,
        actual: &str,
    ) -> BudgetResult<String> {
        let (month, category) = (month.trim(), category.trim());
        if month.is_empty()
            || category.is_empty()
            || budgeted.trim().is_empty()
            || actual.trim().is_empty()
        {
            return Err(invalid("Please fill in all expense fields"));
        }
        let budgeted = parse_amount(budgeted, "Invalid budgeted amount")?;
        let actual = parse_amount(actual, "Invalid actual amount")?;

        let balance = self
            .ledger
            .append_expense(month, category, budgeted, actual)?
            .balance;
        tracing::info!(month, category, %budgeted, %actual, %balance, "expense added");
        self.persist()?;

        Ok(format!("Expense added to {}", month))
    }

    /// Set the savings amount for an existing month
    pub fn set_savings(&mut self, month: &str, amount: &str) -> BudgetResult<String> {
        let month = month.trim();
        if month.is_empty() || amount.trim().is_empty() {
            return Err(invalid("Please fill in all savings fields"));
        }
        let amount = parse_amount(amount, "Invalid savings amount")?;

        let balance = self.ledger.set_savings(month, amount)?.balance;
        tracing::info!(month, %amount, %balance, "savings set");
        self.persist()?;

        Ok(format!("Savings set for {}", month))
    }

    /// Recompute a month's balance and persist it
    pub fn recalculate(&mut self, month: &str) -> BudgetResult<String> {
        let budget = self.require(month)?;
        let month = budget.month.clone();

        self.ledger.recalculate(&month);
        self.persist()?;

        let balance = self.require(&month)?.balance;
        Ok(format!("Balance for {} is {}", month, balance))
    }

    /// Render a month's budget as text
    pub fn describe(&self, month: &str) -> BudgetResult<String> {
        self.require(month).map(format_budget_details)
    }

    /// Render a month's expenses with budgeted vs actual variance
    pub fn expense_breakdown(&self, month: &str) -> BudgetResult<String> {
        self.require(month).map(format_expense_breakdown)
    }

    /// Render all months as a summary table
    pub fn summary(&self) -> String {
        format_ledger_summary(&*self.ledger)
    }

    fn require(&self, month: &str) -> BudgetResult<&Budget> {
        let month = month.trim();
        if month.is_empty() {
            return Err(invalid("Month cannot be empty"));
        }
        self.ledger.require(month)
    }

    fn persist(&self) -> BudgetResult<()> {
        self.storage.ledger.save(&*self.ledger)
    }
}

fn parse_amount(input: &str, message: &str) -> BudgetResult<Amount> {
    Amount::parse(input).map_err(|e| {
        tracing::debug!(input, error = %e, "amount rejected");
        invalid(message)
    })
}

fn invalid(message: impl Into<String>) -> BudgetError {
    let message = message.into();
    tracing::warn!(%message, "input rejected");
    BudgetError::Validation(message)
}
