//! CLI commands for summary reports

use std::io::Write;
use std::path::{Path, PathBuf};

use clap::Subcommand;

use crate::error::{ExpenseError, ExpenseResult};
use crate::storage::write_atomic;

use super::AppContext;

/// Summary subcommands
#[derive(Subcommand, Debug)]
pub enum SummaryCommands {
    /// Totals per category, largest first
    #[command(alias = "categories")]
    Category {
        /// Show top N categories only
        #[arg(long)]
        top: Option<usize>,

        /// Export to CSV file
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Totals per month (YYYY-MM), oldest first
    #[command(alias = "monthly")]
    Month {
        /// Export to CSV file
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

/// Handle summary commands
pub fn handle_summary_command<W: Write>(
    ctx: &AppContext,
    cmd: SummaryCommands,
    out: &mut W,
) -> ExpenseResult<()> {
    match cmd {
        SummaryCommands::Category { top, output } => {
            let report = ctx.service().category_summary(top)?;
            if report.is_empty() {
                writeln!(out, "No data for summary.")?;
                return Ok(());
            }

            match output {
                Some(path) => {
                    let mut buffer = Vec::new();
                    report.export_csv(&mut buffer)?;
                    write_report_file(&path, &buffer)?;
                    writeln!(out, "Category summary exported to: {}", path.display())?;
                }
                None => write!(out, "{}", report.format_terminal(ctx.currency()))?,
            }
        }
        SummaryCommands::Month { output } => {
            let report = ctx.service().monthly_summary()?;
            if report.is_empty() {
                writeln!(out, "No data for monthly summary.")?;
                return Ok(());
            }

            match output {
                Some(path) => {
                    let mut buffer = Vec::new();
                    report.export_csv(&mut buffer)?;
                    write_report_file(&path, &buffer)?;
                    writeln!(out, "Monthly summary exported to: {}", path.display())?;
                }
                None => write!(out, "{}", report.format_terminal(ctx.currency()))?,
            }
        }
    }

    Ok(())
}

fn write_report_file(path: &Path, contents: &[u8]) -> ExpenseResult<()> {
    write_atomic(path, contents).map_err(|e| {
        ExpenseError::Export(format!("Failed to write {}: {}", path.display(), e))
    })
}
