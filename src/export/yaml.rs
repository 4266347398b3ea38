//! YAML Export functionality
//!
//! Human-readable variant of the JSON export.

use std::io::Write;

use crate::error::{ExpenseError, ExpenseResult};
use crate::export::json::ExpenseExport;
use crate::models::ExpenseTable;

/// Export the table to YAML format
pub fn export_yaml<W: Write>(table: &ExpenseTable, writer: &mut W) -> ExpenseResult<()> {
    let export = ExpenseExport::from_table(table);

    writeln!(writer, "# Expense Tracker Export")
        .map_err(|e| ExpenseError::Export(e.to_string()))?;
    writeln!(writer, "# Generated: {}", export.exported_at)
        .map_err(|e| ExpenseError::Export(e.to_string()))?;
    writeln!(writer).map_err(|e| ExpenseError::Export(e.to_string()))?;

    serde_yaml::to_writer(writer, &export).map_err(|e| ExpenseError::Export(e.to_string()))?;

    Ok(())
}
