//! Expense Tracker - personal income, expense and budget tracking
//!
//! This library records income and expense transactions and monthly
//! category budgets in a key-value store, and derives a dashboard summary
//! and budget-versus-spending comparisons from them.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Core data models (transactions, budgets, money, months, categories)
//! - `storage`: Key-value persistence of the transaction and budget collections
//! - `reports`: Pure aggregation (dashboard summary, budget comparison)
//! - `services`: Input validation and business operations
//! - `export`: CSV, JSON and YAML export
//! - `display`: Terminal formatting
//! - `cli`: Command handlers for the binary
//! - `logging`: Tracing subscriber setup
//!
//! # Example
//!
//! ```rust
//! use chrono::NaiveDate;
//! use expense_tracker::reports::DashboardSummary;
//! use expense_tracker::services::{TransactionInput, TransactionService};
//! use expense_tracker::storage::Storage;
//!
//! let storage = Storage::in_memory();
//! let service = TransactionService::new(&storage);
//! service
//!     .create(&TransactionInput {
//!         amount: "12.50".into(),
//!         description: "Lunch".into(),
//!         category: "Food & Dining".into(),
//!         date: "2025-01-15".into(),
//!         kind: "expense".into(),
//!     })
//!     .unwrap();
//!
//! let today = NaiveDate::from_ymd_opt(2025, 1, 31).unwrap();
//! let summary = DashboardSummary::generate(&storage.transactions.load(), today);
//! assert_eq!(summary.total_expenses.cents(), 1250);
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod logging;
pub mod models;
pub mod reports;
pub mod services;
pub mod storage;

pub use error::{TrackerError, TrackerResult};
