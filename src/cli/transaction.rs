//! Transaction CLI commands
//!
//! Implements CLI commands for adding, listing, editing, deleting and
//! exporting transactions.

use std::path::PathBuf;

use chrono::Local;
use clap::Subcommand;

use super::export::{export_contents, export_to, ExportFormat};
use crate::config::settings::Settings;
use crate::display::{format_transaction_details, format_transaction_list};
use crate::error::{TrackerError, TrackerResult};
use crate::models::{Month, TransactionId, TransactionKind};
use crate::services::{TransactionFilter, TransactionInput, TransactionService, DATE_FORMAT};
use crate::storage::Storage;

/// Transaction subcommands
#[derive(Subcommand, Debug)]
pub enum TransactionCommands {
    /// Record a new transaction
    Add {
        /// Amount (e.g., "12.50")
        amount: String,
        /// What the money was for
        description: String,
        /// Category name
        #[arg(short, long, default_value = "Other")]
        category: String,
        /// Transaction date (YYYY-MM-DD, defaults to today)
        #[arg(short, long)]
        date: Option<String>,
        /// Record as income instead of an expense
        #[arg(long)]
        income: bool,
    },

    /// List transactions, newest first
    List {
        /// Only this type (income or expense)
        #[arg(short = 't', long = "type")]
        kind: Option<TransactionKind>,
        /// Only this category
        #[arg(short, long)]
        category: Option<String>,
        /// Only this month (YYYY-MM)
        #[arg(short, long)]
        month: Option<Month>,
        /// Number of transactions to show
        #[arg(short, long, default_value = "20")]
        limit: usize,
    },

    /// Show one transaction
    Show {
        /// Transaction ID
        id: String,
    },

    /// Edit a transaction; omitted fields keep their current value
    Edit {
        /// Transaction ID
        id: String,
        #[arg(short, long)]
        amount: Option<String>,
        #[arg(long)]
        description: Option<String>,
        #[arg(short, long)]
        category: Option<String>,
        #[arg(short, long)]
        date: Option<String>,
        /// New type (income or expense)
        #[arg(short = 't', long = "type")]
        kind: Option<String>,
    },

    /// Delete a transaction
    Delete {
        /// Transaction ID
        id: String,
        /// Skip confirmation
        #[arg(short, long)]
        force: bool,
    },

    /// Export transactions (CSV), or transactions and budgets (JSON, YAML)
    Export {
        /// Output file (stdout if omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Export format
        #[arg(short, long, value_enum, default_value = "csv")]
        format: ExportFormat,
    },
}

/// Handle a transaction command
pub fn handle_transaction_command(
    storage: &Storage,
    settings: &Settings,
    cmd: TransactionCommands,
) -> TrackerResult<()> {
    let service = TransactionService::new(storage);
    let symbol = settings.currency_symbol.as_str();

    match cmd {
        TransactionCommands::Add {
            amount,
            description,
            category,
            date,
            income,
        } => {
            let kind = if income {
                TransactionKind::Income
            } else {
                TransactionKind::Expense
            };
            let input = TransactionInput {
                amount,
                description,
                category,
                date: date.unwrap_or_else(|| Local::now().date_naive().format(DATE_FORMAT).to_string()),
                kind: kind.to_string(),
            };

            let txn = service.create(&input)?;
            println!("Created transaction:");
            print!("{}", format_transaction_details(&txn, symbol));
        }

        TransactionCommands::List {
            kind,
            category,
            month,
            limit,
        } => {
            let filter = TransactionFilter {
                kind,
                category,
                month,
                limit: Some(limit),
            };
            let transactions = service.list(&filter);
            print!("{}", format_transaction_list(&transactions, symbol));
            if !transactions.is_empty() {
                println!("\nShowing {} transactions", transactions.len());
            }
        }

        TransactionCommands::Show { id } => {
            let id = TransactionId::from(id.as_str());
            let txn = service
                .get(&id)
                .ok_or_else(|| TrackerError::transaction_not_found(id.to_string()))?;
            print!("{}", format_transaction_details(&txn, symbol));
        }

        TransactionCommands::Edit {
            id,
            amount,
            description,
            category,
            date,
            kind,
        } => {
            let id = TransactionId::from(id.as_str());
            let existing = service
                .get(&id)
                .ok_or_else(|| TrackerError::transaction_not_found(id.to_string()))?;

            let mut input = TransactionInput::from_transaction(&existing);
            if let Some(amount) = amount {
                input.amount = amount;
            }
            if let Some(description) = description {
                input.description = description;
            }
            if let Some(category) = category {
                input.category = category;
            }
            if let Some(date) = date {
                input.date = date;
            }
            if let Some(kind) = kind {
                input.kind = kind;
            }

            let updated = service.update(&id, &input)?;
            println!("Updated transaction:");
            print!("{}", format_transaction_details(&updated, symbol));
        }

        TransactionCommands::Delete { id, force } => {
            let id = TransactionId::from(id.as_str());
            let txn = service
                .get(&id)
                .ok_or_else(|| TrackerError::transaction_not_found(id.to_string()))?;

            if !force {
                println!("About to delete transaction:");
                print!("{}", format_transaction_details(&txn, symbol));
                println!();
                println!("Use --force to confirm deletion");
                return Ok(());
            }

            if service.delete(&id)? {
                println!("Deleted transaction: {}", id);
            }
        }

        TransactionCommands::Export { output, format } => {
            export_to(storage, format, output.as_deref())?;
            if let Some(path) = output {
                println!("Exported {} to {}", export_contents(format), path.display());
            }
        }
    }

    Ok(())
}
