//! Ledger model
//!
//! The full collection of monthly budgets, in insertion order, keyed by
//! month. Serialized as a bare JSON array of budgets.

use serde::{Deserialize, Serialize};

use super::amount::Amount;
use super::budget::Budget;
use super::expense::Expense;
use super::income::Income;
use crate::error::{BudgetError, BudgetResult};

/// All monthly budgets
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Ledger {
    budgets: Vec<Budget>,
}

impl Ledger {
    /// Create an empty ledger
    pub fn new() -> Self {
        Self::default()
    }

    /// All budgets in insertion order
    pub fn budgets(&self) -> &[Budget] {
        &self.budgets
    }

    /// Month keys in insertion order
    pub fn months(&self) -> impl Iterator<Item = &str> {
        self.budgets.iter().map(|b| b.month.as_str())
    }

    /// Number of budgets
    pub fn len(&self) -> usize {
        self.budgets.len()
    }

    /// Check if the ledger has no budgets
    pub fn is_empty(&self) -> bool {
        self.budgets.is_empty()
    }

    /// Look up the budget for a month
    pub fn get(&self, month: &str) -> Option<&Budget> {
        self.budgets.iter().find(|b| b.month == month)
    }

    fn get_mut(&mut self, month: &str) -> Option<&mut Budget> {
        self.budgets.iter_mut().find(|b| b.month == month)
    }

    /// Look up the budget for a month, failing with NotFound if absent
    pub fn require(&self, month: &str) -> BudgetResult<&Budget> {
        self.get(month)
            .ok_or_else(|| BudgetError::budget_not_found(month))
    }

    fn require_mut(&mut self, month: &str) -> BudgetResult<&mut Budget> {
        self.get_mut(month)
            .ok_or_else(|| BudgetError::budget_not_found(month))
    }

    /// Append an empty budget for `month` unless one already exists.
    ///
    /// Returns `true` if a budget was inserted.
    pub fn add_budget(&mut self, month: &str) -> bool {
        if self.get(month).is_some() {
            return false;
        }
        self.budgets.push(Budget::new(month));
        true
    }

    /// Append an income entry to a month and recompute its balance
    pub fn append_income(
        &mut self,
        month: &str,
        source: impl Into<String>,
        amount: Amount,
    ) -> BudgetResult<&Budget> {
        let budget = self.require_mut(month)?;
        budget.add_income(Income::new(source, amount));
        Ok(&*budget)
    }

    /// Append an expense entry to a month and recompute its balance
    pub fn append_expense(
        &mut self,
        month: &str,
        category: impl Into<String>,
        budgeted: Amount,
        actual: Amount,
    ) -> BudgetResult<&Budget> {
        let budget = self.require_mut(month)?;
        budget.add_expense(Expense::new(category, budgeted, actual));
        Ok(&*budget)
    }

    /// Set a month's savings and recompute its balance
    pub fn set_savings(&mut self, month: &str, savings: Amount) -> BudgetResult<&Budget> {
        let budget = self.require_mut(month)?;
        budget.set_savings(savings);
        Ok(&*budget)
    }

    /// Recompute a month's balance. Absent months are ignored.
    pub fn recalculate(&mut self, month: &str) {
        if let Some(budget) = self.get_mut(month) {
            budget.recalculate();
        }
    }
}
