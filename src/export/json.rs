//! JSON export
//!
//! Exports both collections with schema versioning.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::io::Write;

use crate::error::{TrackerError, TrackerResult};
use crate::models::{Budget, Transaction};
use crate::storage::Storage;

/// Current export schema version
pub const EXPORT_SCHEMA_VERSION: &str = "1.0.0";

/// Full data export
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FullExport {
    /// Schema version for compatibility checking
    pub schema_version: String,

    pub exported_at: DateTime<Utc>,

    /// Application version that created the export
    pub app_version: String,

    pub transactions: Vec<Transaction>,

    pub budgets: Vec<Budget>,

    pub metadata: ExportMetadata,
}

/// Export metadata for reference
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportMetadata {
    pub transaction_count: usize,
    pub budget_count: usize,
    /// Earliest transaction date
    pub earliest_transaction: Option<String>,
    /// Latest transaction date
    pub latest_transaction: Option<String>,
}

impl FullExport {
    /// Snapshot both collections
    pub fn from_storage(storage: &Storage) -> Self {
        Self::new(storage.transactions.load(), storage.budgets.load())
    }

    pub fn new(transactions: Vec<Transaction>, budgets: Vec<Budget>) -> Self {
        let metadata = ExportMetadata {
            transaction_count: transactions.len(),
            budget_count: budgets.len(),
            earliest_transaction: transactions.iter().map(|t| t.date).min().map(|d| d.to_string()),
            latest_transaction: transactions.iter().map(|t| t.date).max().map(|d| d.to_string()),
        };

        Self {
            schema_version: EXPORT_SCHEMA_VERSION.to_string(),
            exported_at: Utc::now(),
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            transactions,
            budgets,
            metadata,
        }
    }
}

/// Export both collections as pretty-printed JSON
pub fn export_full_json<W: Write>(storage: &Storage, writer: &mut W) -> TrackerResult<()> {
    let export = FullExport::from_storage(storage);
    serde_json::to_writer_pretty(&mut *writer, &export)
        .map_err(|e| TrackerError::Export(e.to_string()))?;
    writeln!(writer).map_err(|e| TrackerError::Export(e.to_string()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Money, NewBudget, NewTransaction};
    use chrono::NaiveDate;

    #[test]
    fn test_json_export() {
        let storage = Storage::in_memory();
        storage
            .transactions
            .add(NewTransaction::expense(
                Money::from_cents(500),
                "Bus",
                "Transportation",
                NaiveDate::from_ymd_opt(2025, 1, 2).unwrap(),
            ))
            .unwrap();
        storage
            .transactions
            .add(NewTransaction::expense(
                Money::from_cents(700),
                "Train",
                "Transportation",
                NaiveDate::from_ymd_opt(2025, 1, 9).unwrap(),
            ))
            .unwrap();
        storage
            .budgets
            .add(NewBudget::new(
                "Transportation",
                Money::from_cents(5000),
                "2025-01".parse().unwrap(),
            ))
            .unwrap();

        let mut output = Vec::new();
        export_full_json(&storage, &mut output).unwrap();

        let parsed: FullExport = serde_json::from_slice(&output).unwrap();
        assert_eq!(parsed.schema_version, EXPORT_SCHEMA_VERSION);
        assert_eq!(parsed.metadata.transaction_count, 2);
        assert_eq!(parsed.metadata.budget_count, 1);
        assert_eq!(parsed.metadata.earliest_transaction.as_deref(), Some("2025-01-02"));
        assert_eq!(parsed.metadata.latest_transaction.as_deref(), Some("2025-01-09"));
        assert_eq!(parsed.transactions[1].description, "Train");
    }

    #[test]
    fn test_empty_export_metadata() {
        let export = FullExport::new(Vec::new(), Vec::new());
        assert_eq!(export.metadata.transaction_count, 0);
        assert!(export.metadata.earliest_transaction.is_none());
    }
}
