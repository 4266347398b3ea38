//! CLI command for exporting the expense table

use std::io::Write;
use std::path::PathBuf;

use crate::error::ExpenseResult;
use crate::export::{export_table, ExportFormat};

use super::AppContext;

/// Handle `export`
///
/// Falls back to the configured default filename when no destination is given.
pub fn handle_export<W: Write>(
    ctx: &AppContext,
    destination: Option<PathBuf>,
    format: ExportFormat,
    out: &mut W,
) -> ExpenseResult<()> {
    let table = ctx.service().load()?;
    if table.is_empty() {
        writeln!(out, "No data to export.")?;
        return Ok(());
    }

    let destination =
        destination.unwrap_or_else(|| PathBuf::from(&ctx.settings.default_export_file));
    export_table(&table, &destination, format)?;

    writeln!(out, "Exported to {}", destination.display())?;
    Ok(())
}
