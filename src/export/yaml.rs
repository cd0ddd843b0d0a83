//! YAML export
//!
//! Same content as the JSON export, in a human-readable form.

use std::io::Write;

use crate::error::{TrackerError, TrackerResult};
use crate::export::json::FullExport;
use crate::storage::Storage;

/// Export both collections as YAML
pub fn export_full_yaml<W: Write>(storage: &Storage, writer: &mut W) -> TrackerResult<()> {
    let export = FullExport::from_storage(storage);

    writeln!(writer, "# Expense Tracker Export")
        .map_err(|e| TrackerError::Export(e.to_string()))?;
    writeln!(writer, "# Generated: {}", export.exported_at)
        .map_err(|e| TrackerError::Export(e.to_string()))?;
    writeln!(writer, "# App Version: {}", export.app_version)
        .map_err(|e| TrackerError::Export(e.to_string()))?;
    writeln!(writer).map_err(|e| TrackerError::Export(e.to_string()))?;

    serde_yaml::to_writer(writer, &export).map_err(|e| TrackerError::Export(e.to_string()))?;

    Ok(())
}
