//! CLI commands for settings and paths

use std::io::Write;

use crate::error::ExpenseResult;

use super::AppContext;

/// Handle `init`: write the current settings to `config.json`
///
/// An existing settings file is left alone.
pub fn handle_init<W: Write>(ctx: &AppContext, out: &mut W) -> ExpenseResult<()> {
    let settings_file = ctx.paths.settings_file();
    if settings_file.exists() {
        writeln!(out, "Settings already exist at: {}", settings_file.display())?;
        return Ok(());
    }

    ctx.settings.save(&ctx.paths)?;
    writeln!(out, "Settings written to: {}", settings_file.display())?;
    writeln!(out, "Data file: {}", ctx.store.describe())?;
    Ok(())
}

/// Handle `config`: show resolved paths and settings
pub fn handle_config<W: Write>(ctx: &AppContext, out: &mut W) -> ExpenseResult<()> {
    let settings_file = ctx.paths.settings_file();
    let settings_state = if settings_file.exists() {
        ""
    } else {
        " (not created, run 'expense init')"
    };

    writeln!(out, "Expense Tracker Configuration")?;
    writeln!(out, "=============================")?;
    writeln!(out, "Base directory:   {}", ctx.paths.base_dir().display())?;
    writeln!(
        out,
        "Settings file:    {}{}",
        settings_file.display(),
        settings_state
    )?;
    writeln!(out, "Data file:        {}", ctx.store.describe())?;
    writeln!(out, "Charts directory: {}", ctx.paths.charts_dir().display())?;
    writeln!(out, "Audit log:        {}", ctx.paths.audit_log().display())?;
    writeln!(out)?;
    writeln!(out, "Settings:")?;
    writeln!(out, "  Currency symbol:     {}", ctx.settings.currency_symbol)?;
    writeln!(out, "  Default export file: {}", ctx.settings.default_export_file)?;
    writeln!(out, "  Audit enabled:       {}", ctx.settings.audit_enabled)?;
    Ok(())
}
