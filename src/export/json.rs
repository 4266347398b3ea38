//! JSON Export functionality
//!
//! Exports the table together with a small metadata header.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::io::Write;

use crate::error::{ExpenseError, ExpenseResult};
use crate::models::ExpenseTable;

/// Current export schema version
pub const EXPORT_SCHEMA_VERSION: &str = "1.0.0";

/// Structured export document
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExpenseExport {
    /// Schema version for compatibility checking
    pub schema_version: String,

    /// Export timestamp
    pub exported_at: DateTime<Utc>,

    /// Application version that created the export
    pub app_version: String,

    /// Number of exported records
    pub record_count: usize,

    /// Sum of all exported amounts
    pub total_amount: f64,

    /// All records, in table order
    pub expenses: ExpenseTable,
}

impl ExpenseExport {
    pub fn from_table(table: &ExpenseTable) -> Self {
        Self {
            schema_version: EXPORT_SCHEMA_VERSION.to_string(),
            exported_at: Utc::now(),
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            record_count: table.len(),
            total_amount: table.total_amount(),
            expenses: table.clone(),
        }
    }
}

/// Export the table as pretty-printed JSON
pub fn export_json<W: Write>(table: &ExpenseTable, writer: &mut W) -> ExpenseResult<()> {
    let export = ExpenseExport::from_table(table);

    serde_json::to_writer_pretty(&mut *writer, &export)
        .map_err(|e| ExpenseError::Export(e.to_string()))?;
    writeln!(writer).map_err(|e| ExpenseError::Export(e.to_string()))?;

    Ok(())
}
