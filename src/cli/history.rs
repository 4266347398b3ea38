//! CLI command for viewing the audit log

use std::io::Write;

use crate::error::ExpenseResult;

use super::AppContext;

/// Print the most recent `count` audit entries, oldest first
pub fn handle_history<W: Write>(ctx: &AppContext, count: usize, out: &mut W) -> ExpenseResult<()> {
    let Some(audit) = &ctx.audit else {
        writeln!(out, "Audit logging is disabled.")?;
        return Ok(());
    };

    let entries = audit.read_recent(count)?;
    if entries.is_empty() {
        writeln!(out, "No history recorded yet.")?;
        return Ok(());
    }

    for entry in entries {
        writeln!(out, "{}", entry.format_human_readable())?;
    }
    Ok(())
}
