//! Core data models for the expense tracker
//!
//! This module contains the records that are persisted (transactions and
//! budgets), the value types they are built from, and the fixed category
//! catalog.

pub mod budget;
pub mod category;
pub mod ids;
pub mod money;
pub mod month;
pub mod transaction;

pub use budget::{Budget, BudgetPatch, NewBudget};
pub use category::{
    budget_categories, category_color, category_icon, find_category, Category, IconToken,
    DEFAULT_CATEGORIES,
};
pub use ids::{BudgetId, TransactionId};
pub use money::{Money, MoneyParseError};
pub use month::{Month, MonthParseError};
pub use transaction::{NewTransaction, Transaction, TransactionKind, TransactionPatch};
