//! SVG chart rendering
//!
//! Charts take the loaded table by value, compute their own aggregates, and
//! write one SVG file each into the charts directory. A table with nothing to
//! plot writes no files.

mod category;
mod trend;

use std::fs;
use std::path::{Path, PathBuf};

use svg::Document;

use crate::error::{ExpenseError, ExpenseResult};
use crate::models::ExpenseTable;

pub use category::{render_category_bar, render_category_pie};
pub use trend::render_monthly_trend;

pub const BAR_CHART_FILE: &str = "category_bar_chart.svg";
pub const PIE_CHART_FILE: &str = "category_pie_chart.svg";
pub const TREND_CHART_FILE: &str = "monthly_trend.svg";

const WIDTH: f64 = 800.0;
const HEIGHT: f64 = 500.0;
const MARGIN: f64 = 60.0;

const COLORS: &[&str] = &[
    "#4e79a7", "#f28e2b", "#e15759", "#76b7b2", "#59a14f", "#edc948", "#b07aa1", "#ff9da7",
    "#9c755f", "#bab0ac",
];

fn color(index: usize) -> &'static str {
    COLORS[index % COLORS.len()]
}

/// Bar and pie charts of spending by category
///
/// Returns the written files; empty when the table is empty.
pub fn render_category_charts(table: ExpenseTable, dir: &Path) -> ExpenseResult<Vec<PathBuf>> {
    if table.is_empty() {
        return Ok(Vec::new());
    }

    let mut written = Vec::new();
    written.extend(render_category_bar(&table, dir)?);
    written.extend(render_category_pie(&table, dir)?);
    Ok(written)
}

fn blank_document() -> Document {
    Document::new()
        .set("viewBox", (0.0, 0.0, WIDTH, HEIGHT))
        .set("width", WIDTH)
        .set("height", HEIGHT)
        .set("font-family", "sans-serif")
}

fn title(text: &str) -> svg::node::element::Text {
    svg::node::element::Text::new(text)
        .set("x", WIDTH / 2.0)
        .set("y", MARGIN / 2.0)
        .set("text-anchor", "middle")
        .set("font-size", 20)
}

/// Write `document` to `dir/file_name`, creating `dir` if needed
fn save(document: &Document, dir: &Path, file_name: &str) -> ExpenseResult<PathBuf> {
    fs::create_dir_all(dir).map_err(|e| {
        ExpenseError::Chart(format!(
            "Failed to create charts directory {}: {}",
            dir.display(),
            e
        ))
    })?;

    let path = dir.join(file_name);
    svg::save(&path, document)
        .map_err(|e| ExpenseError::Chart(format!("Failed to write {}: {}", path.display(), e)))?;
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ExpenseRecord;
    use tempfile::TempDir;

    #[test]
    fn test_empty_table_writes_nothing() {
        let temp_dir = TempDir::new().unwrap();
        let charts = temp_dir.path().join("charts");

        let written = render_category_charts(ExpenseTable::new(), &charts).unwrap();
        assert!(written.is_empty());
        assert!(!charts.exists());
    }

    #[test]
    fn test_category_charts_written() {
        let temp_dir = TempDir::new().unwrap();
        let charts = temp_dir.path().join("charts");
        let table: ExpenseTable = vec![
            ExpenseRecord::new("2024-01-05", "food", 250.0, None),
            ExpenseRecord::new("2024-01-06", "travel", 1000.0, None),
        ]
        .into();

        let written = render_category_charts(table, &charts).unwrap();
        assert_eq!(
            written,
            vec![charts.join(BAR_CHART_FILE), charts.join(PIE_CHART_FILE)]
        );
        assert!(written.iter().all(|p| p.exists()));
    }
}
