//! Export module for the expense tracker
//!
//! Writes the current table to a caller-supplied destination:
//! - CSV: same layout as the backing file (the default)
//! - JSON / YAML: the records plus export metadata

pub mod csv;
pub mod json;
pub mod yaml;

pub use self::csv::export_csv;
pub use json::{export_json, ExpenseExport, EXPORT_SCHEMA_VERSION};
pub use yaml::export_yaml;

use std::path::Path;

use clap::ValueEnum;

use crate::error::{ExpenseError, ExpenseResult};
use crate::models::ExpenseTable;
use crate::storage::write_atomic;

/// Supported export formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum ExportFormat {
    #[default]
    Csv,
    Json,
    Yaml,
}

/// Export `table` to `destination` in `format`
///
/// The document is rendered in memory first, so a failed export never leaves
/// a partial file behind.
pub fn export_table<P: AsRef<Path>>(
    table: &ExpenseTable,
    destination: P,
    format: ExportFormat,
) -> ExpenseResult<()> {
    let destination = destination.as_ref();

    let contents = match format {
        ExportFormat::Csv => return export_csv(table, destination),
        ExportFormat::Json => {
            let mut buffer = Vec::new();
            export_json(table, &mut buffer)?;
            buffer
        }
        ExportFormat::Yaml => {
            let mut buffer = Vec::new();
            export_yaml(table, &mut buffer)?;
            buffer
        }
    };

    write_atomic(destination, &contents).map_err(|e| {
        ExpenseError::Export(format!(
            "Failed to export to {}: {}",
            destination.display(),
            e
        ))
    })
}
