//! Monthly budget model
//!
//! One month's incomes, expenses and savings, plus the derived balance.
//!
//! The balance is stored (the ledger file carries it) but never maintained
//! incrementally: it only changes when [`Budget::recalculate`] runs.

use serde::{Deserialize, Serialize};

use super::amount::Amount;
use super::expense::Expense;
use super::income::Income;

/// A budget for a single month
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Budget {
    /// Month key, "YYYY-MM"
    pub month: String,

    /// Income entries in the order they were added
    #[serde(default)]
    pub incomes: Vec<Income>,

    /// Expense entries in the order they were added
    #[serde(default)]
    pub expenses: Vec<Expense>,

    /// Amount set aside this month
    #[serde(default)]
    pub savings: Amount,

    /// Derived: income - actual expenses - savings
    #[serde(default)]
    pub balance: Amount,
}

impl Budget {
    /// Create an empty budget for a month
    pub fn new(month: impl Into<String>) -> Self {
        Self {
            month: month.into(),
            incomes: Vec::new(),
            expenses: Vec::new(),
            savings: Amount::zero(),
            balance: Amount::zero(),
        }
    }

    /// Sum of all income amounts
    pub fn total_income(&self) -> Amount {
        self.incomes.iter().map(|i| i.amount).sum()
    }

    /// Sum of all actual expense amounts
    pub fn total_expenses(&self) -> Amount {
        self.expenses.iter().map(|e| e.actual).sum()
    }

    /// Sum of all budgeted expense amounts
    pub fn total_budgeted(&self) -> Amount {
        self.expenses.iter().map(|e| e.budgeted).sum()
    }

    /// Recompute the balance from the line items and savings
    pub fn recalculate(&mut self) {
        self.balance = self.total_income() - self.total_expenses() - self.savings;
    }

    /// Append an income entry and recompute the balance
    pub fn add_income(&mut self, income: Income) {
        self.incomes.push(income);
        self.recalculate();
    }

    /// Append an expense entry and recompute the balance
    pub fn add_expense(&mut self, expense: Expense) {
        self.expenses.push(expense);
        self.recalculate();
    }

    /// Replace the savings amount and recompute the balance
    pub fn set_savings(&mut self, savings: Amount) {
        self.savings = savings;
        self.recalculate();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_budget_is_zeroed() {
        let budget = Budget::new("2024-01");
        assert_eq!(budget.month, "2024-01");
        assert!(budget.incomes.is_empty());
        assert!(budget.expenses.is_empty());
        assert!(budget.savings.is_zero());
        assert!(budget.balance.is_zero());
    }

    #[test]
    fn test_balance_after_line_items() {
        let mut budget = Budget::new("2024-01");
        let rent = Expense::new("Rent", Amount::new(1200.0), Amount::new(1250.0));
        budget.add_income(Income::new("Salary", Amount::new(3000.0)));
        budget.add_expense(rent);

        assert_eq!(budget.balance.value(), 1750.0);
    }

    #[test]
    fn test_savings_reduce_balance() {
        let mut budget = Budget::new("2024-01");
        budget.add_income(Income::new("Salary", Amount::new(3000.0)));
        budget.set_savings(Amount::new(500.0));

        assert_eq!(budget.balance.value(), 2500.0);
    }

    #[test]
    fn test_balance_not_maintained_until_recalculate() {
        let mut budget = Budget::new("2024-01");
        budget.incomes.push(Income::new("Gift", Amount::new(100.0)));
        assert!(budget.balance.is_zero());

        budget.recalculate();
        assert_eq!(budget.balance.value(), 100.0);
    }

    #[test]
    fn test_totals() {
        let mut budget = Budget::new("2024-02");
        budget.add_income(Income::new("Salary", Amount::new(3000.0)));
        budget.add_income(Income::new("Freelance", Amount::new(450.0)));
        let rent = Expense::new("Rent", Amount::new(1200.0), Amount::new(1250.0));
        let food = Expense::new("Food", Amount::new(400.0), Amount::new(380.0));
        budget.add_expense(rent);
        budget.add_expense(food);

        assert_eq!(budget.total_income().value(), 3450.0);
        assert_eq!(budget.total_expenses().value(), 1630.0);
        assert_eq!(budget.total_budgeted().value(), 1600.0);
        assert_eq!(budget.balance.value(), 1820.0);
    }

    #[test]
    fn test_missing_collections_default_to_empty() {
        let budget: Budget = serde_json::from_str(r#"{"month": "2024-03"}"#).unwrap();
        assert_eq!(budget, Budget::new("2024-03"));
    }

    #[test]
    fn test_missing_month_is_rejected() {
        let result = serde_json::from_str::<Budget>(r#"{"savings": 10}"#);
        assert!(result.is_err());
    }
}
