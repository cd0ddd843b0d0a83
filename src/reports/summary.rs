//! Dashboard summary
//!
//! Derives totals, the trailing monthly expense trend, the expense breakdown
//! by category and the most recent transactions from the full transaction
//! list. Pure and recomputed on every read; never persisted.

use chrono::NaiveDate;
use serde::Serialize;

use crate::display::truncate;
use crate::models::{category_color, Money, Month, Transaction};

/// Months in the expense trend
pub const TRAILING_MONTHS: usize = 6;

/// Transactions in the recent list
pub const RECENT_LIMIT: usize = 5;

/// Longest expense trend `generate_with_window` will build
pub const MAX_TRAILING_MONTHS: usize = 120;

/// Expense total for one month of the trend
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MonthlyExpense {
    pub month: Month,
    /// Display label, e.g. "Jan 2025"
    pub label: String,
    pub amount: Money,
}

/// Expense total for one category
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryExpense {
    pub category: String,
    pub amount: Money,
    pub color: &'static str,
}

/// Dashboard view model
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DashboardSummary {
    pub total_expenses: Money,
    pub total_income: Money,
    /// Always `total_income - total_expenses`
    pub balance: Money,
    /// Trailing months ending with the current one, oldest first
    pub monthly_expenses: Vec<MonthlyExpense>,
    /// Descending by amount; ties keep first-encountered order
    pub category_breakdown: Vec<CategoryExpense>,
    /// Newest first; ties keep input order
    pub recent_transactions: Vec<Transaction>,
}

impl DashboardSummary {
    /// Summarize `transactions` as of `today` with the default window sizes
    pub fn generate(transactions: &[Transaction], today: NaiveDate) -> Self {
        Self::generate_with_window(transactions, today, TRAILING_MONTHS, RECENT_LIMIT)
    }

    /// Summarize as of the local date
    pub fn current(transactions: &[Transaction]) -> Self {
        Self::generate(transactions, chrono::Local::now().date_naive())
    }

    /// Summarize with explicit trend length and recent-list size
    ///
    /// The trend always covers at least the current month and at most
    /// [`MAX_TRAILING_MONTHS`].
    pub fn generate_with_window(
        transactions: &[Transaction],
        today: NaiveDate,
        months: usize,
        recent: usize,
    ) -> Self {
        let months = months.clamp(1, MAX_TRAILING_MONTHS);
        let total_expenses: Money = transactions
            .iter()
            .filter(|t| t.is_expense())
            .map(|t| t.amount)
            .sum();

        let total_income: Money = transactions
            .iter()
            .filter(|t| t.is_income())
            .map(|t| t.amount)
            .sum();

        Self {
            total_expenses,
            total_income,
            balance: total_income - total_expenses,
            monthly_expenses: monthly_expenses(transactions, Month::containing(today), months),
            category_breakdown: category_breakdown(transactions),
            recent_transactions: recent_transactions(transactions, recent),
        }
    }

    /// Format the summary for terminal display
    pub fn format_terminal(&self, symbol: &str) -> String {
        let mut output = String::new();

        output.push_str("Dashboard\n");
        output.push_str(&"=".repeat(60));
        output.push('\n');
        output.push_str(&format!(
            "Total Income:   {:>14}\n",
            self.total_income.format_with_symbol(symbol)
        ));
        output.push_str(&format!(
            "Total Expenses: {:>14}\n",
            self.total_expenses.format_with_symbol(symbol)
        ));
        output.push_str(&format!(
            "Balance:        {:>14}\n\n",
            self.balance.format_with_symbol(symbol)
        ));

        output.push_str("Monthly Expenses\n");
        output.push_str(&"-".repeat(60));
        output.push('\n');
        for entry in &self.monthly_expenses {
            output.push_str(&format!(
                "  {:<12} {:>14}\n",
                entry.label,
                entry.amount.format_with_symbol(symbol)
            ));
        }

        output.push_str("\nBy Category\n");
        output.push_str(&"-".repeat(60));
        output.push('\n');
        if self.category_breakdown.is_empty() {
            output.push_str("  No expenses yet\n");
        }
        for entry in &self.category_breakdown {
            output.push_str(&format!(
                "  {:<24} {:>14}  {}\n",
                entry.category,
                entry.amount.format_with_symbol(symbol),
                entry.color
            ));
        }

        output.push_str("\nRecent Transactions\n");
        output.push_str(&"-".repeat(60));
        output.push('\n');
        if self.recent_transactions.is_empty() {
            output.push_str("  No transactions yet\n");
        }
        for txn in &self.recent_transactions {
            let sign = if txn.is_income() { "+" } else { "-" };
            output.push_str(&format!(
                "  {} {:<24} {:>14}\n",
                txn.date.format("%b %d"),
                truncate(&txn.description, 24),
                format!("{}{}", sign, txn.amount.format_with_symbol(symbol))
            ));
        }

        output
    }
}

/// Expense totals for the `count` months ending at `current`, zero-filled
fn monthly_expenses(transactions: &[Transaction], current: Month, count: usize) -> Vec<MonthlyExpense> {
    current
        .trailing(count)
        .into_iter()
        .map(|month| MonthlyExpense {
            month,
            label: month.label(),
            amount: transactions
                .iter()
                .filter(|t| t.is_expense() && month.contains(t.date))
                .map(|t| t.amount)
                .sum(),
        })
        .collect()
}

/// Expense totals per category, largest first
fn category_breakdown(transactions: &[Transaction]) -> Vec<CategoryExpense> {
    let mut totals: Vec<CategoryExpense> = Vec::new();

    for txn in transactions.iter().filter(|t| t.is_expense()) {
        match totals.iter_mut().find(|c| c.category == txn.category) {
            Some(entry) => entry.amount += txn.amount,
            None => totals.push(CategoryExpense {
                category: txn.category.clone(),
                amount: txn.amount,
                color: category_color(&txn.category),
            }),
        }
    }

    // sort_by is stable, so equal totals keep encounter order
    totals.sort_by(|a, b| b.amount.cmp(&a.amount));
    totals
}

/// The `limit` newest transactions
fn recent_transactions(transactions: &[Transaction], limit: usize) -> Vec<Transaction> {
    let mut sorted: Vec<&Transaction> = transactions.iter().collect();
    sorted.sort_by(|a, b| b.date.cmp(&a.date));
    sorted.into_iter().take(limit).cloned().collect()
}
