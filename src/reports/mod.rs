//! Reports module for the expense tracker
//!
//! Pure aggregation over in-memory records: the dashboard summary and the
//! monthly budget comparison. Nothing here touches storage.

pub mod budget;
pub mod summary;

pub use budget::{compare_budgets, BudgetComparison, BudgetReport, BudgetStatus};
pub use summary::{
    CategoryExpense, DashboardSummary, MonthlyExpense, MAX_TRAILING_MONTHS, RECENT_LIMIT,
    TRAILING_MONTHS,
};
