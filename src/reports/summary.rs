//! Summary reports
//!
//! Spending totals grouped by category (largest first) and by month
//! (chronological), with terminal and CSV renderings.

use std::io::Write;

use crate::display::format_currency;
use crate::error::{ExpenseError, ExpenseResult};
use crate::models::ExpenseTable;

use super::query::{category_buckets, count_by_month, group_sum_by_month};

/// One row of a summary report
#[derive(Debug, Clone, PartialEq)]
pub struct SummaryRow {
    /// Category label or `YYYY-MM` month
    pub key: String,
    /// Sum of amounts in the group
    pub total: f64,
    /// Number of records in the group
    pub count: usize,
    /// Share of the report total, in percent
    pub percentage: f64,
}

/// Spending by category, sorted by total descending
#[derive(Debug, Clone)]
pub struct CategorySummary {
    pub rows: Vec<SummaryRow>,
    pub total: f64,
    pub record_count: usize,
}

impl CategorySummary {
    /// Group the table by category (case-insensitive)
    pub fn generate(table: &ExpenseTable) -> Self {
        let buckets = category_buckets(table);
        let total: f64 = buckets.iter().map(|b| b.total).sum();

        let mut rows: Vec<SummaryRow> = buckets
            .into_iter()
            .map(|b| SummaryRow {
                percentage: percentage_of(b.total, total),
                key: b.label,
                total: b.total,
                count: b.count,
            })
            .collect();

        rows.sort_by(|a, b| {
            b.total
                .total_cmp(&a.total)
                .then_with(|| a.key.cmp(&b.key))
        });

        Self {
            rows,
            total,
            record_count: table.len(),
        }
    }

    /// Keep only the `n` largest categories
    pub fn top(mut self, n: usize) -> Self {
        self.rows.truncate(n);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Format the report for terminal display
    pub fn format_terminal(&self, currency: &str) -> String {
        format_rows("Summary by Category", &self.rows, self.total, currency)
    }

    /// Export the report to CSV format
    pub fn export_csv<W: Write>(&self, writer: &mut W) -> ExpenseResult<()> {
        write_rows_csv(writer, "category", &self.rows)
    }
}

/// Spending by `YYYY-MM` month, in chronological order
#[derive(Debug, Clone)]
pub struct MonthlySummary {
    pub rows: Vec<SummaryRow>,
    pub total: f64,
    /// Records left out because their date does not parse
    pub skipped: usize,
}

impl MonthlySummary {
    pub fn generate(table: &ExpenseTable) -> Self {
        let sums = group_sum_by_month(table);
        let counts = count_by_month(table);
        let total: f64 = sums.values().sum();
        let counted: usize = counts.values().sum();

        let rows = sums
            .into_iter()
            .map(|(month, sum)| SummaryRow {
                count: counts.get(&month).copied().unwrap_or(0),
                percentage: percentage_of(sum, total),
                key: month,
                total: sum,
            })
            .collect();

        Self {
            rows,
            total,
            skipped: table.len() - counted,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Format the report for terminal display
    pub fn format_terminal(&self, currency: &str) -> String {
        let mut output = format_rows("Summary by Month (YYYY-MM)", &self.rows, self.total, currency);
        if self.skipped > 0 {
            output.push_str(&format!(
                "({} record(s) with an unparseable date not included)\n",
                self.skipped
            ));
        }
        output
    }

    /// Export the report to CSV format
    pub fn export_csv<W: Write>(&self, writer: &mut W) -> ExpenseResult<()> {
        write_rows_csv(writer, "month", &self.rows)
    }
}

fn percentage_of(part: f64, total: f64) -> f64 {
    if total == 0.0 {
        0.0
    } else {
        part / total * 100.0
    }
}

fn format_rows(title: &str, rows: &[SummaryRow], total: f64, currency: &str) -> String {
    let mut output = String::new();

    output.push_str(&format!("--- {} ---\n", title));
    for row in rows {
        output.push_str(&format!(
            "{}: {}\n",
            row.key,
            format_currency(currency, row.total)
        ));
    }
    output.push_str(&format!("Total: {}\n", format_currency(currency, total)));

    output
}

fn write_rows_csv<W: Write>(writer: &mut W, key_column: &str, rows: &[SummaryRow]) -> ExpenseResult<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);

    csv_writer.write_record([key_column, "total", "count", "percentage"])?;
    for row in rows {
        csv_writer.write_record([
            row.key.clone(),
            format!("{:.2}", row.total),
            row.count.to_string(),
            format!("{:.2}", row.percentage),
        ])?;
    }

    csv_writer
        .flush()
        .map_err(|e| ExpenseError::Export(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ExpenseRecord;

    fn table() -> ExpenseTable {
        vec![
            ExpenseRecord::new("2024-01-05", "food", 250.0, Some("lunch".into())),
            ExpenseRecord::new("2024-01-06", "travel", 1000.0, Some("taxi".into())),
            ExpenseRecord::new("2024-02-01", "Food", 50.0, None),
            ExpenseRecord::new("someday", "gifts", 100.0, None),
        ]
        .into()
    }

    #[test]
    fn test_category_summary_sorted_descending() {
        let summary = CategorySummary::generate(&table());

        let keys: Vec<_> = summary.rows.iter().map(|r| r.key.as_str()).collect();
        assert_eq!(keys, vec!["travel", "food", "gifts"]);
        assert_eq!(summary.rows[1].total, 300.0);
        assert_eq!(summary.rows[1].count, 2);
        assert_eq!(summary.total, 1400.0);
        assert_eq!(summary.record_count, 4);
    }

    #[test]
    fn test_category_summary_ties_by_label() {
        let table: ExpenseTable = vec![
            ExpenseRecord::new("2024-01-05", "b", 10.0, None),
            ExpenseRecord::new("2024-01-05", "a", 10.0, None),
        ]
        .into();

        let summary = CategorySummary::generate(&table);
        assert_eq!(summary.rows[0].key, "a");
        assert_eq!(summary.rows[1].key, "b");
        assert_eq!(summary.rows[0].percentage, 50.0);
    }

    #[test]
    fn test_top_categories() {
        let summary = CategorySummary::generate(&table()).top(1);
        assert_eq!(summary.rows.len(), 1);
        assert_eq!(summary.rows[0].key, "travel");
    }

    #[test]
    fn test_monthly_summary() {
        let summary = MonthlySummary::generate(&table());

        let keys: Vec<_> = summary.rows.iter().map(|r| r.key.as_str()).collect();
        assert_eq!(keys, vec!["2024-01", "2024-02"]);
        assert_eq!(summary.rows[0].total, 1250.0);
        assert_eq!(summary.rows[0].count, 2);
        assert_eq!(summary.total, 1300.0);
        assert_eq!(summary.skipped, 1);
    }

    #[test]
    fn test_format_terminal() {
        let output = CategorySummary::generate(&table()).format_terminal("₹");
        assert!(output.starts_with("--- Summary by Category ---\n"));
        assert!(output.contains("travel: ₹1000.00\n"));
        assert!(output.contains("food: ₹300.00\n"));
        assert!(output.contains("Total: ₹1400.00\n"));

        let monthly = MonthlySummary::generate(&table()).format_terminal("$");
        assert!(monthly.contains("2024-01: $1250.00\n"));
        assert!(monthly.contains("1 record(s) with an unparseable date"));
    }

    #[test]
    fn test_empty_summaries() {
        let empty = ExpenseTable::new();
        assert!(CategorySummary::generate(&empty).is_empty());
        let monthly = MonthlySummary::generate(&empty);
        assert!(monthly.is_empty());
        assert_eq!(monthly.skipped, 0);
    }

    #[test]
    fn test_export_csv() {
        let mut output = Vec::new();
        MonthlySummary::generate(&table())
            .export_csv(&mut output)
            .unwrap();

        let text = String::from_utf8(output).unwrap();
        assert!(text.starts_with("month,total,count,percentage\n"));
        assert!(text.contains("2024-01,1250.00,2,96.15\n"));
    }
}
