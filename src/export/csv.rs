//! CSV export
//!
//! Writes transactions and budgets as spreadsheet-friendly CSV.

use std::io::Write;

use crate::error::{TrackerError, TrackerResult};
use crate::models::{Budget, Money, Transaction};

fn export_err(e: impl std::fmt::Display) -> TrackerError {
    TrackerError::Export(e.to_string())
}

/// Amount as a plain decimal with two places
fn decimal(amount: Money) -> String {
    format!("{:.2}", amount.as_f64())
}

/// Export transactions to CSV, one row per transaction in input order
pub fn export_transactions_csv<W: Write>(
    transactions: &[Transaction],
    writer: W,
) -> TrackerResult<()> {
    let mut out = ::csv::Writer::from_writer(writer);

    out.write_record(["ID", "Date", "Type", "Category", "Description", "Amount"])
        .map_err(export_err)?;

    for txn in transactions {
        let date = txn.date.to_string();
        let amount = decimal(txn.amount);
        out.write_record([
            txn.id.as_str(),
            date.as_str(),
            txn.kind.as_str(),
            txn.category.as_str(),
            txn.description.as_str(),
            amount.as_str(),
        ])
        .map_err(export_err)?;
    }

    out.flush().map_err(export_err)?;
    Ok(())
}

/// Export budgets to CSV
pub fn export_budgets_csv<W: Write>(budgets: &[Budget], writer: W) -> TrackerResult<()> {
    let mut out = ::csv::Writer::from_writer(writer);

    out.write_record(["ID", "Month", "Category", "Amount"])
        .map_err(export_err)?;

    for budget in budgets {
        let month = budget.month.to_string();
        let amount = decimal(budget.amount);
        out.write_record([
            budget.id.as_str(),
            month.as_str(),
            budget.category.as_str(),
            amount.as_str(),
        ])
        .map_err(export_err)?;
    }

    out.flush().map_err(export_err)?;
    Ok(())
}
