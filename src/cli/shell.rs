//! Interactive menu shell
//!
//! Loops over a numbered menu until the user picks Exit or input ends. A
//! failed operation is reported and the loop carries on.

use std::io::{BufRead, Write};
use std::path::PathBuf;

use crate::display::format_expense_lines;
use crate::error::ExpenseResult;
use crate::export::ExportFormat;
use crate::services::SearchCriteria;

use super::{
    handle_add, handle_chart_command, handle_delete, handle_export, handle_list, handle_search,
    handle_summary_command, AddArgs, AppContext, ChartCommands, SummaryCommands,
};

const MENU: &str = "\
===== EXPENSE TRACKER =====
1. Add Expense
2. View All Expenses
3. Delete Expense by Date
4. Summary by Category
5. Summary by Month
6. Search Expenses
7. Export CSV
8. Show Category Graph
9. Show Monthly Trend Graph
10. Exit
";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MenuChoice {
    Add,
    View,
    Delete,
    CategorySummary,
    MonthlySummary,
    Search,
    Export,
    CategoryChart,
    TrendChart,
    Exit,
}

impl MenuChoice {
    fn parse(input: &str) -> Option<Self> {
        let choice = match input.trim() {
            "1" => Self::Add,
            "2" => Self::View,
            "3" => Self::Delete,
            "4" => Self::CategorySummary,
            "5" => Self::MonthlySummary,
            "6" => Self::Search,
            "7" => Self::Export,
            "8" => Self::CategoryChart,
            "9" => Self::TrendChart,
            "10" => Self::Exit,
            _ => return None,
        };
        Some(choice)
    }
}

/// Menu-driven shell over any input/output pair
pub struct Shell<'a, R, W> {
    ctx: &'a AppContext,
    input: R,
    output: W,
}

impl<'a, R: BufRead, W: Write> Shell<'a, R, W> {
    pub fn new(ctx: &'a AppContext, input: R, output: W) -> Self {
        Self { ctx, input, output }
    }

    /// Run until Exit is chosen or input is exhausted
    pub fn run(&mut self) -> ExpenseResult<()> {
        writeln!(self.output, "Data file: {}", self.ctx.store.describe())?;

        loop {
            write!(self.output, "{}", MENU)?;
            let Some(choice) = self.prompt("Enter your choice: ")? else {
                writeln!(self.output)?;
                writeln!(self.output, "Exiting...")?;
                break;
            };

            match MenuChoice::parse(&choice) {
                Some(MenuChoice::Exit) => {
                    writeln!(self.output, "Exiting...")?;
                    break;
                }
                Some(choice) => {
                    if let Err(e) = self.dispatch(choice) {
                        writeln!(self.output, "Error: {}", e)?;
                    }
                }
                None => writeln!(self.output, "Invalid option. Try again.")?,
            }
            writeln!(self.output)?;
        }

        self.output.flush()?;
        Ok(())
    }

    fn dispatch(&mut self, choice: MenuChoice) -> ExpenseResult<()> {
        match choice {
            MenuChoice::Add => self.add(),
            MenuChoice::View => handle_list(self.ctx, None, true, &mut self.output),
            MenuChoice::Delete => self.delete(),
            MenuChoice::CategorySummary => handle_summary_command(
                self.ctx,
                SummaryCommands::Category {
                    top: None,
                    output: None,
                },
                &mut self.output,
            ),
            MenuChoice::MonthlySummary => handle_summary_command(
                self.ctx,
                SummaryCommands::Month { output: None },
                &mut self.output,
            ),
            MenuChoice::Search => self.search(),
            MenuChoice::Export => self.export(),
            MenuChoice::CategoryChart => {
                handle_chart_command(self.ctx, ChartCommands::Category, &mut self.output)
            }
            MenuChoice::TrendChart => {
                handle_chart_command(self.ctx, ChartCommands::Trend, &mut self.output)
            }
            MenuChoice::Exit => Ok(()),
        }
    }

    /// Prompt and read one trimmed line; `None` at end of input
    fn prompt(&mut self, text: &str) -> ExpenseResult<Option<String>> {
        write!(self.output, "{}", text)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    fn add(&mut self) -> ExpenseResult<()> {
        let Some(date) = self.prompt("Enter date (YYYY-MM-DD) [default today]: ")? else {
            return Ok(());
        };
        let Some(category) = self.prompt("Enter category (food, travel, shopping, etc): ")? else {
            return Ok(());
        };
        let Some(amount) = self.prompt("Enter amount: ")? else {
            return Ok(());
        };
        let Some(description) = self.prompt("Enter description: ")? else {
            return Ok(());
        };

        let args = AddArgs {
            category,
            amount,
            date: Some(date),
            description: Some(description),
        };
        handle_add(self.ctx, args, &mut self.output)
    }

    fn delete(&mut self) -> ExpenseResult<()> {
        let records = self.ctx.service().list(None)?;
        if records.is_empty() {
            writeln!(self.output, "No expenses to delete.")?;
            return Ok(());
        }

        write!(self.output, "{}", format_expense_lines("All Expenses", &records))?;
        let Some(date) = self.prompt(
            "Enter the date (YYYY-MM-DD) of expense to delete \
             (this will delete ALL rows with this date): ",
        )?
        else {
            return Ok(());
        };

        handle_delete(self.ctx, &date, &mut self.output)
    }

    fn search(&mut self) -> ExpenseResult<()> {
        if self.ctx.service().load()?.is_empty() {
            writeln!(self.output, "No expenses found.")?;
            return Ok(());
        }

        writeln!(self.output, "Search by:")?;
        writeln!(self.output, "1. Date (YYYY-MM-DD)")?;
        writeln!(self.output, "2. Category")?;
        writeln!(self.output, "3. Keyword in description")?;
        let Some(choice) = self.prompt("Enter choice: ")? else {
            return Ok(());
        };

        let question = match choice.as_str() {
            "1" => "Enter date (YYYY-MM-DD): ",
            "2" => "Enter category (case insensitive): ",
            "3" => "Enter keyword: ",
            _ => {
                writeln!(self.output, "Invalid choice.")?;
                return Ok(());
            }
        };
        let Some(answer) = self.prompt(question)? else {
            return Ok(());
        };

        let criteria = match choice.as_str() {
            "1" => SearchCriteria::Date(answer),
            "2" => SearchCriteria::Category(answer),
            _ => SearchCriteria::Keyword(answer),
        };
        handle_search(self.ctx, &criteria, &mut self.output)
    }

    fn export(&mut self) -> ExpenseResult<()> {
        let question = format!(
            "Enter export filename (default {}): ",
            self.ctx.settings.default_export_file
        );
        let Some(filename) = self.prompt(&question)? else {
            return Ok(());
        };

        let destination = (!filename.is_empty()).then(|| PathBuf::from(filename));
        handle_export(self.ctx, destination, ExportFormat::Csv, &mut self.output)
    }
}
