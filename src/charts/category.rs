//! Category bar and pie charts

use std::f64::consts::PI;
use std::path::{Path, PathBuf};

use svg::node::element::path::Data;
use svg::node::element::{Circle, Line, Path as SvgPath, Rectangle, Text};

use crate::error::ExpenseResult;
use crate::models::{format_amount, ExpenseTable};
use crate::reports::CategorySummary;

use super::{blank_document, color, save, title, BAR_CHART_FILE, HEIGHT, MARGIN, PIE_CHART_FILE, WIDTH};

/// Bar chart of category totals, largest first
pub fn render_category_bar(table: &ExpenseTable, dir: &Path) -> ExpenseResult<Option<PathBuf>> {
    let summary = CategorySummary::generate(table);
    if summary.is_empty() {
        return Ok(None);
    }

    let plot_width = WIDTH - 2.0 * MARGIN;
    let plot_height = HEIGHT - 2.0 * MARGIN;
    let baseline = HEIGHT - MARGIN;
    let max = summary
        .rows
        .iter()
        .map(|r| r.total)
        .fold(0.0_f64, f64::max);
    let scale = if max > 0.0 { plot_height / max } else { 0.0 };
    let slot = plot_width / summary.rows.len() as f64;

    let mut document = blank_document().add(title("Spending by Category"));

    for (i, row) in summary.rows.iter().enumerate() {
        let height = row.total.max(0.0) * scale;
        let x = MARGIN + i as f64 * slot;

        document = document
            .add(
                Rectangle::new()
                    .set("x", x + slot * 0.1)
                    .set("y", baseline - height)
                    .set("width", slot * 0.8)
                    .set("height", height)
                    .set("fill", color(i)),
            )
            .add(
                Text::new(row.key.as_str())
                    .set("x", x + slot / 2.0)
                    .set("y", baseline + 18.0)
                    .set("text-anchor", "middle")
                    .set("font-size", 12),
            )
            .add(
                Text::new(format_amount(row.total))
                    .set("x", x + slot / 2.0)
                    .set("y", baseline - height - 6.0)
                    .set("text-anchor", "middle")
                    .set("font-size", 11),
            );
    }

    document = document
        .add(axis(MARGIN, baseline, WIDTH - MARGIN, baseline))
        .add(axis(MARGIN, MARGIN, MARGIN, baseline))
        .add(
            Text::new("Category")
                .set("x", WIDTH / 2.0)
                .set("y", HEIGHT - 12.0)
                .set("text-anchor", "middle")
                .set("font-size", 14),
        )
        .add(
            Text::new("Amount")
                .set("x", 16.0)
                .set("y", HEIGHT / 2.0)
                .set("text-anchor", "middle")
                .set("font-size", 14)
                .set("transform", format!("rotate(-90 16 {})", HEIGHT / 2.0)),
        );

    save(&document, dir, BAR_CHART_FILE).map(Some)
}

/// Pie chart of each category's share of total spending
///
/// Only categories with a positive total get a slice.
pub fn render_category_pie(table: &ExpenseTable, dir: &Path) -> ExpenseResult<Option<PathBuf>> {
    let summary = CategorySummary::generate(table);
    let slices: Vec<(&str, f64)> = summary
        .rows
        .iter()
        .filter(|r| r.total > 0.0)
        .map(|r| (r.key.as_str(), r.total))
        .collect();
    let total: f64 = slices.iter().map(|(_, v)| v).sum();
    if slices.is_empty() || total <= 0.0 {
        return Ok(None);
    }

    let cx = WIDTH / 2.0;
    let cy = HEIGHT / 2.0 + MARGIN / 4.0;
    let radius = HEIGHT / 2.0 - MARGIN;

    let mut document = blank_document().add(title("Category-wise Expense Distribution"));
    let mut start = -PI / 2.0;

    for (i, (label, value)) in slices.iter().enumerate() {
        let share = value / total;
        let sweep = share * 2.0 * PI;
        let end = start + sweep;

        if slices.len() == 1 {
            document = document.add(
                Circle::new()
                    .set("cx", cx)
                    .set("cy", cy)
                    .set("r", radius)
                    .set("fill", color(i)),
            );
        } else {
            let large_arc = if sweep > PI { 1.0 } else { 0.0 };
            let data = Data::new()
                .move_to((cx, cy))
                .line_to((cx + radius * start.cos(), cy + radius * start.sin()))
                .elliptical_arc_to((
                    radius,
                    radius,
                    0.0,
                    large_arc,
                    1.0,
                    cx + radius * end.cos(),
                    cy + radius * end.sin(),
                ))
                .close();
            document = document.add(
                SvgPath::new()
                    .set("d", data)
                    .set("fill", color(i))
                    .set("stroke", "white"),
            );
        }

        let middle = start + sweep / 2.0;
        let label_radius = radius + 24.0;
        document = document.add(
            Text::new(format!("{} ({:.1}%)", label, share * 100.0))
                .set("x", cx + label_radius * middle.cos())
                .set("y", cy + label_radius * middle.sin())
                .set("text-anchor", "middle")
                .set("font-size", 12),
        );

        start = end;
    }

    save(&document, dir, PIE_CHART_FILE).map(Some)
}

fn axis(x1: f64, y1: f64, x2: f64, y2: f64) -> Line {
    Line::new()
        .set("x1", x1)
        .set("y1", y1)
        .set("x2", x2)
        .set("y2", y2)
        .set("stroke", "black")
        .set("stroke-width", 1.5)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ExpenseRecord;
    use std::fs;
    use tempfile::TempDir;

    fn table() -> ExpenseTable {
        vec![
            ExpenseRecord::new("2024-01-05", "food", 250.0, None),
            ExpenseRecord::new("2024-01-06", "travel", 750.0, None),
            ExpenseRecord::new("2024-01-07", "Food", 0.0, None),
        ]
        .into()
    }

    #[test]
    fn test_bar_chart_labels() {
        let temp_dir = TempDir::new().unwrap();
        let path = render_category_bar(&table(), temp_dir.path())
            .unwrap()
            .unwrap();

        let content = fs::read_to_string(path).unwrap();
        assert!(content.contains("<svg"));
        assert!(content.contains("Spending by Category"));
        assert!(content.contains("travel"));
        assert!(content.contains("750.0"));
    }

    #[test]
    fn test_pie_chart_percentages() {
        let temp_dir = TempDir::new().unwrap();
        let path = render_category_pie(&table(), temp_dir.path())
            .unwrap()
            .unwrap();

        let content = fs::read_to_string(path).unwrap();
        assert!(content.contains("travel (75.0%)"));
        assert!(content.contains("food (25.0%)"));
    }

    #[test]
    fn test_pie_single_category() {
        let temp_dir = TempDir::new().unwrap();
        let table: ExpenseTable =
            vec![ExpenseRecord::new("2024-01-05", "food", 10.0, None)].into();

        let path = render_category_pie(&table, temp_dir.path())
            .unwrap()
            .unwrap();
        let content = fs::read_to_string(path).unwrap();
        assert!(content.contains("<circle"));
        assert!(content.contains("food (100.0%)"));
    }

    #[test]
    fn test_pie_skipped_without_positive_totals() {
        let temp_dir = TempDir::new().unwrap();
        let table: ExpenseTable =
            vec![ExpenseRecord::new("2024-01-05", "refund", -10.0, None)].into();

        assert!(render_category_pie(&table, temp_dir.path())
            .unwrap()
            .is_none());
        assert!(!temp_dir.path().join(PIE_CHART_FILE).exists());
    }
}
