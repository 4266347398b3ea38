//! CLI commands for rendering charts

use std::io::Write;

use clap::Subcommand;

use crate::charts::{render_category_charts, render_monthly_trend, BAR_CHART_FILE};
use crate::error::ExpenseResult;

use super::AppContext;

/// Chart subcommands
#[derive(Subcommand, Debug, Clone, Copy)]
pub enum ChartCommands {
    /// Bar and pie charts of spending by category
    Category,

    /// Line chart of monthly totals
    #[command(alias = "monthly")]
    Trend,
}

/// Handle chart commands
pub fn handle_chart_command<W: Write>(
    ctx: &AppContext,
    cmd: ChartCommands,
    out: &mut W,
) -> ExpenseResult<()> {
    let table = ctx.service().load()?;
    let charts_dir = ctx.paths.charts_dir();

    match cmd {
        ChartCommands::Category => {
            let written = render_category_charts(table, &charts_dir)?;
            if written.is_empty() {
                writeln!(out, "No expenses to show graph.")?;
            }
            for path in written {
                let kind = if path.ends_with(BAR_CHART_FILE) {
                    "Bar"
                } else {
                    "Pie"
                };
                writeln!(out, "{} chart saved to: {}", kind, path.display())?;
            }
        }
        ChartCommands::Trend => match render_monthly_trend(table, &charts_dir)? {
            Some(path) => writeln!(out, "Monthly trend chart saved to: {}", path.display())?,
            None => writeln!(out, "No expenses to show monthly trend.")?,
        },
    }

    Ok(())
}
