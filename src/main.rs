use std::io;
use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use expense_cli::cli::{
    handle_add, handle_chart_command, handle_config, handle_delete, handle_export, handle_history,
    handle_init, handle_list, handle_search, handle_summary_command, AddArgs, AppContext,
    ChartCommands, SearchArgs, Shell, SummaryCommands,
};
use expense_cli::config::{ExpensePaths, Settings};
use expense_cli::export::ExportFormat;

#[derive(Parser)]
#[command(
    name = "expense",
    version,
    about = "Terminal-based personal expense tracker",
    long_about = "Records dated expenses to a CSV file and offers listing, search, \
                  deletion, summaries by category and month, export, and SVG charts. \
                  Run without a subcommand to start the interactive menu."
)]
struct Cli {
    /// Backing CSV file (overrides the configured location)
    #[arg(long, global = true, env = "EXPENSE_CLI_DATA_FILE")]
    data_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Add an expense
    Add(AddArgs),

    /// List expenses, newest first
    #[command(alias = "ls")]
    List {
        /// Number of expenses to show
        #[arg(short, long)]
        limit: Option<usize>,

        /// One line per expense instead of a table
        #[arg(long)]
        plain: bool,
    },

    /// Delete ALL expenses with the given date
    #[command(alias = "rm")]
    Delete {
        /// Date (YYYY-MM-DD)
        date: String,
    },

    /// Search expenses by date, category or keyword
    Search(SearchArgs),

    /// Summary reports
    #[command(subcommand)]
    Summary(SummaryCommands),

    /// Export all expenses to a file
    Export {
        /// Output file path (defaults to the configured export filename)
        output: Option<PathBuf>,

        /// Export format
        #[arg(short, long, value_enum, default_value = "csv")]
        format: ExportFormat,
    },

    /// Render SVG charts into the charts directory
    #[command(subcommand)]
    Chart(ChartCommands),

    /// Show recent changes from the audit log
    History {
        /// Number of entries to show
        #[arg(short = 'n', long, default_value = "20")]
        count: usize,
    },

    /// Start the interactive menu
    #[command(alias = "menu")]
    Shell,

    /// Write the settings file with default values
    Init,

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let paths = ExpensePaths::new()?;
    let settings = Settings::load_or_create(&paths)?;
    let ctx = AppContext::open(paths, settings, cli.data_file)?;

    let stdout = io::stdout();
    let mut out = stdout.lock();

    match cli.command {
        Some(Commands::Add(args)) => handle_add(&ctx, args, &mut out)?,
        Some(Commands::List { limit, plain }) => handle_list(&ctx, limit, plain, &mut out)?,
        Some(Commands::Delete { date }) => handle_delete(&ctx, &date, &mut out)?,
        Some(Commands::Search(args)) => {
            // clap's arg group guarantees one criterion
            if let Some(criteria) = args.criteria() {
                handle_search(&ctx, &criteria, &mut out)?;
            }
        }
        Some(Commands::Summary(cmd)) => handle_summary_command(&ctx, cmd, &mut out)?,
        Some(Commands::Export { output, format }) => {
            handle_export(&ctx, output, format, &mut out)?
        }
        Some(Commands::Chart(cmd)) => handle_chart_command(&ctx, cmd, &mut out)?,
        Some(Commands::History { count }) => handle_history(&ctx, count, &mut out)?,
        Some(Commands::Init) => handle_init(&ctx, &mut out)?,
        Some(Commands::Config) => handle_config(&ctx, &mut out)?,
        Some(Commands::Shell) | None => {
            let stdin = io::stdin();
            Shell::new(&ctx, stdin.lock(), &mut out).run()?;
        }
    }

    Ok(())
}
