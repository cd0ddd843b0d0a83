//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the service layer.

pub mod budget;
pub mod export;
pub mod transaction;

pub use budget::{handle_budget_command, BudgetCommands};
pub use export::{export_budgets_to, export_to, ExportFormat};
pub use transaction::{handle_transaction_command, TransactionCommands};
