//! CSV Export functionality
//!
//! Writes the table in the same layout as the backing file.

use std::path::Path;

use crate::error::{ExpenseError, ExpenseResult};
use crate::models::ExpenseTable;
use crate::storage::file_io::{table_to_bytes, write_atomic, ColumnSchema};

/// Write the full table (header + rows, current order) to `destination`
pub fn export_csv<P: AsRef<Path>>(table: &ExpenseTable, destination: P) -> ExpenseResult<()> {
    let destination = destination.as_ref();
    let contents = table_to_bytes(table, &ColumnSchema::default())?;

    write_atomic(destination, &contents).map_err(|e| {
        ExpenseError::Export(format!(
            "Failed to export to {}: {}",
            destination.display(),
            e
        ))
    })
}
