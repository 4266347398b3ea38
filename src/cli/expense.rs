//! CLI commands for adding, listing, deleting and searching expenses

use std::io::Write;

use clap::{ArgGroup, Args};

use crate::display::{format_expense_lines, format_expense_table};
use crate::error::ExpenseResult;
use crate::services::{NewExpense, SearchCriteria};

use super::AppContext;

/// Arguments for `add`
#[derive(Args, Debug)]
pub struct AddArgs {
    /// Category (food, travel, shopping, etc)
    pub category: String,

    /// Amount spent
    #[arg(allow_hyphen_values = true)]
    pub amount: String,

    /// Expense date (YYYY-MM-DD), defaults to today
    #[arg(short, long)]
    pub date: Option<String>,

    /// Free-text description
    #[arg(short = 'm', long)]
    pub description: Option<String>,
}

/// Arguments for `search`; exactly one criterion is required
#[derive(Args, Debug)]
#[command(group(ArgGroup::new("criterion").required(true).args(["date", "category", "keyword"])))]
pub struct SearchArgs {
    /// Exact date (YYYY-MM-DD)
    #[arg(short, long)]
    pub date: Option<String>,

    /// Category (case insensitive)
    #[arg(short, long)]
    pub category: Option<String>,

    /// Keyword in description (case insensitive)
    #[arg(short, long)]
    pub keyword: Option<String>,
}

impl SearchArgs {
    pub fn criteria(self) -> Option<SearchCriteria> {
        self.date
            .map(SearchCriteria::Date)
            .or(self.category.map(SearchCriteria::Category))
            .or(self.keyword.map(SearchCriteria::Keyword))
    }
}

/// Handle `add`
pub fn handle_add<W: Write>(ctx: &AppContext, args: AddArgs, out: &mut W) -> ExpenseResult<()> {
    let record = ctx.service().add(NewExpense {
        date: args.date,
        category: args.category,
        amount: args.amount,
        description: args.description,
    })?;

    writeln!(out, "Expense added successfully!")?;
    writeln!(out, "{}", record)?;
    Ok(())
}

/// Handle `list`
pub fn handle_list<W: Write>(
    ctx: &AppContext,
    limit: Option<usize>,
    plain: bool,
    out: &mut W,
) -> ExpenseResult<()> {
    let limit = limit.or(ctx.settings.default_view_limit);
    let records = ctx.service().list(limit)?;

    if records.is_empty() {
        writeln!(out, "--- No expenses found ---")?;
    } else if plain {
        write!(out, "{}", format_expense_lines("All Expenses", &records))?;
    } else {
        write!(out, "{}", format_expense_table(&records))?;
    }
    Ok(())
}

/// Handle `delete`: removes every record with the given date
pub fn handle_delete<W: Write>(ctx: &AppContext, date: &str, out: &mut W) -> ExpenseResult<()> {
    let removed = ctx.service().delete_by_date(date)?;

    if removed > 0 {
        writeln!(
            out,
            "Deleted {} record(s) with date {}.",
            removed,
            date.trim()
        )?;
    } else {
        writeln!(out, "No records found with that date.")?;
    }
    Ok(())
}

/// Handle `search`
pub fn handle_search<W: Write>(
    ctx: &AppContext,
    criteria: &SearchCriteria,
    out: &mut W,
) -> ExpenseResult<()> {
    let results = ctx.service().search(criteria)?;

    if results.is_empty() {
        writeln!(out, "No results found.")?;
    } else {
        write!(out, "{}", format_expense_lines("Search Results", &results))?;
    }
    Ok(())
}
