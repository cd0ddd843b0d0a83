//! Export module for the expense tracker
//!
//! - CSV: transactions and budgets (spreadsheet-compatible)
//! - JSON: both collections with schema version and metadata
//! - YAML: the same content in human-readable form

pub mod csv;
pub mod json;
pub mod yaml;

pub use csv::{export_budgets_csv, export_transactions_csv};
pub use json::{export_full_json, ExportMetadata, FullExport, EXPORT_SCHEMA_VERSION};
pub use yaml::export_full_yaml;
