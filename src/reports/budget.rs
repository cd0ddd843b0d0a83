//! Budget comparison report
//!
//! Compares each budget for a month with the expenses recorded against its
//! category in that month.

use serde::Serialize;
use std::fmt;

use crate::models::{category_color, Budget, BudgetId, Money, Month, Transaction};

/// Percent used at or below which a budget is on track
const ON_TRACK_PERCENT: f64 = 60.0;

/// Percent used at or below which a budget is a warning
const WARNING_PERCENT: f64 = 80.0;

/// How much of a budget has been used
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum BudgetStatus {
    OnTrack,
    Warning,
    OverLimit,
}

impl BudgetStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::OnTrack => "on track",
            Self::Warning => "warning",
            Self::OverLimit => "over limit",
        }
    }
}

impl fmt::Display for BudgetStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Budgeted versus spent for one budget
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BudgetComparison {
    pub budget_id: BudgetId,
    pub category: String,
    pub budgeted: Money,
    pub spent: Money,
    /// Never negative
    pub remaining: Money,
    pub color: &'static str,
}

impl BudgetComparison {
    /// Share of the budget spent, in percent
    ///
    /// A zero budget reads as 0% with no spending and 100% otherwise.
    pub fn percent_used(&self) -> f64 {
        if self.budgeted.is_zero() {
            return if self.spent.is_positive() { 100.0 } else { 0.0 };
        }
        self.spent.cents() as f64 / self.budgeted.cents() as f64 * 100.0
    }

    /// Amount spent beyond the budget, if any
    pub fn overspent(&self) -> Option<Money> {
        let over = self.spent - self.budgeted;
        over.is_positive().then_some(over)
    }

    pub fn status(&self) -> BudgetStatus {
        let percent = self.percent_used();
        if percent <= ON_TRACK_PERCENT {
            BudgetStatus::OnTrack
        } else if percent <= WARNING_PERCENT {
            BudgetStatus::Warning
        } else {
            BudgetStatus::OverLimit
        }
    }
}

/// Compare the budgets for `month` against that month's expenses
///
/// Budgets for other months are skipped; the rest keep their input order.
pub fn compare_budgets(
    transactions: &[Transaction],
    budgets: &[Budget],
    month: Month,
) -> Vec<BudgetComparison> {
    budgets
        .iter()
        .filter(|b| b.month == month)
        .map(|budget| {
            let spent: Money = transactions
                .iter()
                .filter(|t| {
                    t.is_expense() && t.category == budget.category && month.contains(t.date)
                })
                .map(|t| t.amount)
                .sum();

            let remaining = budget.amount - spent;

            BudgetComparison {
                budget_id: budget.id.clone(),
                category: budget.category.clone(),
                budgeted: budget.amount,
                spent,
                remaining: if remaining.is_negative() {
                    Money::zero()
                } else {
                    remaining
                },
                color: category_color(&budget.category),
            }
        })
        .collect()
}

/// Budget report for one month
#[derive(Debug, Clone, Serialize)]
pub struct BudgetReport {
    pub month: Month,
    pub rows: Vec<BudgetComparison>,
    pub total_budgeted: Money,
    pub total_spent: Money,
    pub total_remaining: Money,
}

impl BudgetReport {
    /// Generate the report for `month`
    pub fn generate(transactions: &[Transaction], budgets: &[Budget], month: Month) -> Self {
        let rows = compare_budgets(transactions, budgets, month);

        Self {
            month,
            total_budgeted: rows.iter().map(|r| r.budgeted).sum(),
            total_spent: rows.iter().map(|r| r.spent).sum(),
            total_remaining: rows.iter().map(|r| r.remaining).sum(),
            rows,
        }
    }

    /// Rows whose spending exceeds the budget
    pub fn overspent_rows(&self) -> Vec<&BudgetComparison> {
        self.rows.iter().filter(|r| r.overspent().is_some()).collect()
    }

    /// Format the report for terminal display
    pub fn format_terminal(&self, symbol: &str) -> String {
        let mut output = String::new();

        output.push_str(&format!("Budget Status - {}\n", self.month.label()));
        output.push_str(&"=".repeat(80));
        output.push('\n');

        if self.rows.is_empty() {
            output.push_str("No budgets set for this month\n");
            return output;
        }

        output.push_str(&format!(
            "{:<24} {:>12} {:>12} {:>12} {:>7}  {}\n",
            "Category", "Budgeted", "Spent", "Remaining", "Used", "Status"
        ));
        output.push_str(&"-".repeat(80));
        output.push('\n');

        for row in &self.rows {
            output.push_str(&format!(
                "{:<24} {:>12} {:>12} {:>12} {:>6.1}%  {}\n",
                row.category,
                row.budgeted.format_with_symbol(symbol),
                row.spent.format_with_symbol(symbol),
                row.remaining.format_with_symbol(symbol),
                row.percent_used(),
                row.status()
            ));
            if let Some(over) = row.overspent() {
                output.push_str(&format!(
                    "  {} over budget\n",
                    over.format_with_symbol(symbol)
                ));
            }
        }

        output.push_str(&"-".repeat(80));
        output.push('\n');
        output.push_str(&format!(
            "{:<24} {:>12} {:>12} {:>12}\n",
            "TOTAL",
            self.total_budgeted.format_with_symbol(symbol),
            self.total_spent.format_with_symbol(symbol),
            self.total_remaining.format_with_symbol(symbol)
        ));

        let overspent = self.overspent_rows();
        if !overspent.is_empty() {
            let names: Vec<&str> = overspent.iter().map(|r| r.category.as_str()).collect();
            output.push_str(&format!(
                "\n{} of {} budgets over limit: {}\n",
                overspent.len(),
                self.rows.len(),
                names.join(", ")
            ));
        }

        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{NewBudget, NewTransaction, TransactionId};
    use chrono::NaiveDate;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn month(s: &str) -> Month {
        s.parse().unwrap()
    }

    fn budget(id: &str, category: &str, cents: i64, m: &str) -> Budget {
        Budget::with_id(
            BudgetId::from(id),
            NewBudget::new(category, Money::from_cents(cents), month(m)),
        )
    }

    fn expense(cents: i64, category: &str, on: NaiveDate) -> Transaction {
        Transaction::with_id(
            TransactionId::new(),
            NewTransaction::expense(Money::from_cents(cents), "x", category, on),
        )
    }

    #[test]
    fn test_remaining_never_negative() {
        let budgets = vec![budget("b", "Food & Dining", 5000, "2025-01")];
        let transactions = vec![expense(7000, "Food & Dining", date(2025, 1, 10))];

        let rows = compare_budgets(&transactions, &budgets, month("2025-01"));

        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].budgeted.cents(), 5000);
        assert_eq!(rows[0].spent.cents(), 7000);
        assert!(rows[0].remaining.is_zero());
        assert_eq!(rows[0].overspent(), Some(Money::from_cents(2000)));
        assert_eq!(rows[0].status(), BudgetStatus::OverLimit);
    }

    #[test]
    fn test_only_matching_month_category_and_expenses_count() {
        let budgets = vec![
            budget("food", "Food & Dining", 20000, "2025-01"),
            budget("feb", "Food & Dining", 20000, "2025-02"),
            budget("travel", "Travel", 10000, "2025-01"),
        ];
        let transactions = vec![
            expense(2500, "Food & Dining", date(2025, 1, 1)),
            expense(1500, "Food & Dining", date(2025, 1, 31)),
            expense(9900, "Food & Dining", date(2025, 2, 1)),
            expense(4400, "Shopping", date(2025, 1, 15)),
            Transaction::with_id(
                TransactionId::new(),
                NewTransaction::income(
                    Money::from_cents(50000),
                    "refund",
                    "Food & Dining",
                    date(2025, 1, 5),
                ),
            ),
        ];

        let rows = compare_budgets(&transactions, &budgets, month("2025-01"));
        let ids: Vec<_> = rows.iter().map(|r| r.budget_id.as_str()).collect();

        assert_eq!(ids, vec!["food", "travel"]);
        assert_eq!(rows[0].spent.cents(), 4000);
        assert_eq!(rows[0].remaining.cents(), 16000);
        assert!(rows[1].spent.is_zero());
        assert_eq!(rows[1].remaining.cents(), 10000);
        assert_eq!(rows[1].color, "#F7DC6F");
    }

    #[test]
    fn test_status_thresholds() {
        let row = |spent| BudgetComparison {
            budget_id: BudgetId::from("b"),
            category: "Other".into(),
            budgeted: Money::from_cents(10000),
            spent: Money::from_cents(spent),
            remaining: Money::zero(),
            color: "#85C1E9",
        };

        assert_eq!(row(0).status(), BudgetStatus::OnTrack);
        assert_eq!(row(6000).status(), BudgetStatus::OnTrack);
        assert_eq!(row(6001).status(), BudgetStatus::Warning);
        assert_eq!(row(8000).status(), BudgetStatus::Warning);
        assert_eq!(row(8001).status(), BudgetStatus::OverLimit);
        assert!((row(2500).percent_used() - 25.0).abs() < f64::EPSILON);
        assert_eq!(row(10000).overspent(), None);
    }

    #[test]
    fn test_zero_budget_percent() {
        let budgets = vec![budget("z", "Other", 0, "2025-01")];
        let none = compare_budgets(&[], &budgets, month("2025-01"));
        assert_eq!(none[0].percent_used(), 0.0);

        let some = compare_budgets(
            &[expense(100, "Other", date(2025, 1, 2))],
            &budgets,
            month("2025-01"),
        );
        assert_eq!(some[0].percent_used(), 100.0);
    }

    #[test]
    fn test_report_totals_and_format() {
        let budgets = vec![
            budget("a", "Food & Dining", 5000, "2025-01"),
            budget("b", "Travel", 10000, "2025-01"),
        ];
        let transactions = vec![
            expense(7000, "Food & Dining", date(2025, 1, 10)),
            expense(2000, "Travel", date(2025, 1, 11)),
        ];

        let report = BudgetReport::generate(&transactions, &budgets, month("2025-01"));

        assert_eq!(report.total_budgeted.cents(), 15000);
        assert_eq!(report.total_spent.cents(), 9000);
        assert_eq!(report.total_remaining.cents(), 8000);
        assert_eq!(report.overspent_rows().len(), 1);

        let output = report.format_terminal("$");
        assert!(output.contains("Budget Status - Jan 2025"));
        assert!(output.contains("$20.00 over budget"));
        assert!(output.contains("on track"));
        assert!(output.contains("TOTAL"));
        assert!(output.contains("1 of 2 budgets over limit: Food & Dining"));
    }

    #[test]
    fn test_empty_report() {
        let report = BudgetReport::generate(&[], &[], month("2025-01"));
        assert!(report.rows.is_empty());
        assert!(report.format_terminal("$").contains("No budgets set"));
    }
}
