//! Budget CLI commands
//!
//! Implements CLI commands for setting monthly category budgets and
//! comparing them with actual spending.

use std::path::PathBuf;

use clap::Subcommand;

use super::export::export_budgets_to;
use crate::config::settings::Settings;
use crate::display::{format_budget_details, format_budget_list};
use crate::error::{TrackerError, TrackerResult};
use crate::models::{find_category, BudgetId, Month};
use crate::services::{BudgetInput, BudgetService};
use crate::storage::Storage;

/// Budget subcommands
#[derive(Subcommand, Debug)]
pub enum BudgetCommands {
    /// Set a budget for a category
    Set {
        /// Category name
        category: String,
        /// Amount (e.g., "250" or "250.00")
        amount: String,
        /// Budget month (YYYY-MM, defaults to the current month)
        #[arg(short, long)]
        month: Option<String>,
    },

    /// List budgets
    List {
        /// Only this month (YYYY-MM)
        #[arg(short, long)]
        month: Option<Month>,
    },

    /// Edit a budget; omitted fields keep their current value
    Edit {
        /// Budget ID
        id: String,
        #[arg(short, long)]
        category: Option<String>,
        #[arg(short, long)]
        amount: Option<String>,
        #[arg(short, long)]
        month: Option<String>,
    },

    /// Delete a budget
    Delete {
        /// Budget ID
        id: String,
        /// Skip confirmation
        #[arg(short, long)]
        force: bool,
    },

    /// Compare budgets with spending for a month
    Status {
        /// Budget month (YYYY-MM, defaults to the current month)
        #[arg(short, long)]
        month: Option<Month>,
    },

    /// Export budgets as CSV
    Export {
        /// Output file (stdout if omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

/// Handle a budget command
pub fn handle_budget_command(
    storage: &Storage,
    settings: &Settings,
    cmd: BudgetCommands,
) -> TrackerResult<()> {
    let service = BudgetService::new(storage);
    let symbol = settings.currency_symbol.as_str();

    match cmd {
        BudgetCommands::Set {
            category,
            amount,
            month,
        } => {
            let input = BudgetInput {
                category,
                amount,
                month: month.unwrap_or_else(|| Month::current().to_string()),
            };

            let budget = service.create(&input)?;
            println!("Created budget:");
            print!("{}", format_budget_details(&budget, symbol));
            if find_category(&budget.category).is_none() {
                println!("Note: '{}' is not a built-in category", budget.category);
            }
        }

        BudgetCommands::List { month } => {
            print!("{}", format_budget_list(&service.list(month), symbol));
        }

        BudgetCommands::Edit {
            id,
            category,
            amount,
            month,
        } => {
            let id = BudgetId::from(id.as_str());
            let existing = service
                .get(&id)
                .ok_or_else(|| TrackerError::budget_not_found(id.to_string()))?;

            let mut input = BudgetInput::from_budget(&existing);
            if let Some(category) = category {
                input.category = category;
            }
            if let Some(amount) = amount {
                input.amount = amount;
            }
            if let Some(month) = month {
                input.month = month;
            }

            let updated = service.update(&id, &input)?;
            println!("Updated budget:");
            print!("{}", format_budget_details(&updated, symbol));
        }

        BudgetCommands::Delete { id, force } => {
            let id = BudgetId::from(id.as_str());
            let budget = service
                .get(&id)
                .ok_or_else(|| TrackerError::budget_not_found(id.to_string()))?;

            if !force {
                println!("About to delete budget:");
                print!("{}", format_budget_details(&budget, symbol));
                println!();
                println!("Use --force to confirm deletion");
                return Ok(());
            }

            if service.delete(&id)? {
                println!("Deleted budget: {}", id);
            }
        }

        BudgetCommands::Status { month } => {
            let month = month.unwrap_or_else(Month::current);
            print!("{}", service.report(month).format_terminal(symbol));
        }

        BudgetCommands::Export { output } => {
            export_budgets_to(storage, output.as_deref())?;
            if let Some(path) = output {
                println!("Exported budgets to {}", path.display());
            }
        }
    }

    Ok(())
}
