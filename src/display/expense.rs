//! Expense display formatting
//!
//! Formats expense records for terminal output, either as a table or as one
//! labelled line per record.

use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::models::{format_amount, ExpenseRecord, ExpenseTable};

#[derive(Tabled)]
struct ExpenseRow {
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Amount")]
    amount: String,
    #[tabled(rename = "Description")]
    description: String,
}

impl From<&ExpenseRecord> for ExpenseRow {
    fn from(record: &ExpenseRecord) -> Self {
        Self {
            date: record.date.clone(),
            category: record.category.clone(),
            amount: format_amount(record.amount),
            description: record.description_or_empty().to_string(),
        }
    }
}

/// Format records as a table
pub fn format_expense_table<'a, I>(records: I) -> String
where
    I: IntoIterator<Item = &'a ExpenseRecord>,
{
    let rows: Vec<ExpenseRow> = records.into_iter().map(ExpenseRow::from).collect();
    if rows.is_empty() {
        return "No expenses found.\n".to_string();
    }

    let mut table = Table::new(rows);
    table.with(Style::psql());
    format!("{}\n", table)
}

/// Format records one per line, under a heading
pub fn format_expense_lines(heading: &str, table: &ExpenseTable) -> String {
    let mut output = format!("--- {} ---\n", heading);
    for record in table {
        output.push_str(&record.to_string());
        output.push('\n');
    }
    output
}
