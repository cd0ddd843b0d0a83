//! Export helpers shared by the CLI commands

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use clap::ValueEnum;

use crate::error::{TrackerError, TrackerResult};
use crate::export::{
    export_budgets_csv, export_full_json, export_full_yaml, export_transactions_csv,
};
use crate::storage::Storage;

/// Export format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    /// CSV (transactions only)
    Csv,
    /// JSON (transactions and budgets)
    Json,
    /// YAML (transactions and budgets, human-readable)
    Yaml,
}

/// Write an export to `output`, or stdout when no path is given
pub fn export_to(storage: &Storage, format: ExportFormat, output: Option<&Path>) -> TrackerResult<()> {
    write_to(output, |mut writer| match format {
        ExportFormat::Csv => export_transactions_csv(&storage.transactions.load(), writer),
        ExportFormat::Json => export_full_json(storage, &mut writer),
        ExportFormat::Yaml => export_full_yaml(storage, &mut writer),
    })
}

/// Write the budgets as CSV to `output`, or stdout when no path is given
pub fn export_budgets_to(storage: &Storage, output: Option<&Path>) -> TrackerResult<()> {
    write_to(output, |writer| export_budgets_csv(&storage.budgets.load(), writer))
}

/// What an export in `format` contains, for the confirmation message
pub fn export_contents(format: ExportFormat) -> &'static str {
    match format {
        ExportFormat::Csv => "transactions",
        ExportFormat::Json | ExportFormat::Yaml => "transactions and budgets",
    }
}

fn write_to<F>(output: Option<&Path>, write: F) -> TrackerResult<()>
where
    F: FnOnce(&mut dyn Write) -> TrackerResult<()>,
{
    match output {
        Some(path) => {
            let file = File::create(path).map_err(|e| {
                TrackerError::Export(format!("Failed to create {}: {}", path.display(), e))
            })?;
            let mut writer = BufWriter::new(file);
            write(&mut writer)?;
            writer
                .flush()
                .map_err(|e| TrackerError::Export(e.to_string()))
        }
        None => {
            let stdout = io::stdout();
            let mut writer = stdout.lock();
            write(&mut writer)
        }
    }
}
