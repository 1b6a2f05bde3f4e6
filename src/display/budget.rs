//! Budget display formatting
//!
//! Formats monthly budgets in detail and the whole ledger as a summary table.

use tabled::settings::object::Columns;
use tabled::settings::{Alignment, Modify, Style};
use tabled::{Table, Tabled};

use crate::models::{Amount, Budget, Ledger};

/// Format one month's incomes, expenses, savings and balance
pub fn format_budget_details(budget: &Budget) -> String {
    let mut output = String::new();

    output.push_str("Incomes:\n");
    for income in &budget.incomes {
        output.push_str(&format!("  {}: {}\n", income.source, income.amount));
    }

    output.push_str("Expenses:\n");
    for expense in &budget.expenses {
        output.push_str(&format!(
            "  {} (Budgeted: {}, Actual: {})\n",
            expense.category, expense.budgeted, expense.actual
        ));
    }

    output.push_str(&format!("Savings: {}\n", budget.savings));
    output.push_str(&format!("Balance: {}\n", budget.balance));

    output
}

#[derive(Tabled)]
struct SummaryRow {
    #[tabled(rename = "Month")]
    month: String,
    #[tabled(rename = "Income")]
    income: Amount,
    #[tabled(rename = "Expenses")]
    expenses: Amount,
    #[tabled(rename = "Savings")]
    savings: Amount,
    #[tabled(rename = "Balance")]
    balance: Amount,
}

/// Format every budget in the ledger as one table row
pub fn format_ledger_summary(ledger: &Ledger) -> String {
    if ledger.is_empty() {
        return "No budgets found.\n\nRun 'zerobudget budget add <YYYY-MM>' to create one."
            .to_string();
    }

    let rows = ledger.budgets().iter().map(|b| SummaryRow {
        month: b.month.clone(),
        income: b.total_income(),
        expenses: b.total_expenses(),
        savings: b.savings,
        balance: b.balance,
    });

    Table::new(rows)
        .with(Style::psql())
        .with(Modify::new(Columns::new(1..)).with(Alignment::right()))
        .to_string()
}

#[derive(Tabled)]
struct ExpenseRow<'a> {
    #[tabled(rename = "Category")]
    category: &'a str,
    #[tabled(rename = "Budgeted")]
    budgeted: Amount,
    #[tabled(rename = "Actual")]
    actual: Amount,
    #[tabled(rename = "Variance")]
    variance: Amount,
}

/// Format a month's expenses with budgeted vs actual variance
pub fn format_expense_breakdown(budget: &Budget) -> String {
    if budget.expenses.is_empty() {
        return format!("No expenses recorded for {}.", budget.month);
    }

    let rows = budget.expenses.iter().map(|e| ExpenseRow {
        category: &e.category,
        budgeted: e.budgeted,
        actual: e.actual,
        variance: e.variance(),
    });

    let mut output = Table::new(rows)
        .with(Style::psql())
        .with(Modify::new(Columns::new(1..)).with(Alignment::right()))
        .to_string();

    output.push_str(&format!(
        "\nTotal budgeted: {}  Total actual: {}\n",
        budget.total_budgeted(),
        budget.total_expenses()
    ));

    output
}
