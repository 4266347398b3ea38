//! Monthly trend line chart

use std::path::{Path, PathBuf};

use svg::node::element::path::Data;
use svg::node::element::{Circle, Line, Path as SvgPath, Text};

use crate::error::ExpenseResult;
use crate::models::ExpenseTable;
use crate::reports::group_sum_by_month;

use super::{blank_document, save, title, HEIGHT, MARGIN, TREND_CHART_FILE, WIDTH};

/// Line chart of monthly totals in chronological order
///
/// Records with an unparseable date are left out; returns `None` when no
/// record has a usable date.
pub fn render_monthly_trend(table: ExpenseTable, dir: &Path) -> ExpenseResult<Option<PathBuf>> {
    let months = group_sum_by_month(&table);
    if months.is_empty() {
        return Ok(None);
    }

    let points: Vec<(&String, f64)> = months.iter().map(|(m, v)| (m, *v)).collect();
    let low = points.iter().map(|(_, v)| *v).fold(0.0_f64, f64::min);
    let high = points.iter().map(|(_, v)| *v).fold(0.0_f64, f64::max);
    let range = if high > low { high - low } else { 1.0 };

    let plot_width = WIDTH - 2.0 * MARGIN;
    let plot_height = HEIGHT - 2.0 * MARGIN;
    let step = if points.len() > 1 {
        plot_width / (points.len() - 1) as f64
    } else {
        0.0
    };
    let x_of = |i: usize| {
        if points.len() > 1 {
            MARGIN + i as f64 * step
        } else {
            WIDTH / 2.0
        }
    };
    let y_of = |v: f64| HEIGHT - MARGIN - (v - low) / range * plot_height;

    let mut document = blank_document().add(title("Monthly Expense Trend"));

    // Grid
    for tick in 0..=4 {
        let y = MARGIN + plot_height * tick as f64 / 4.0;
        document = document.add(
            Line::new()
                .set("x1", MARGIN)
                .set("y1", y)
                .set("x2", WIDTH - MARGIN)
                .set("y2", y)
                .set("stroke", "#dddddd")
                .set("stroke-width", 1),
        );
    }

    let mut data = Data::new().move_to((x_of(0), y_of(points[0].1)));
    for (i, (_, value)) in points.iter().enumerate().skip(1) {
        data = data.line_to((x_of(i), y_of(*value)));
    }
    document = document.add(
        SvgPath::new()
            .set("d", data)
            .set("fill", "none")
            .set("stroke", "#4e79a7")
            .set("stroke-width", 2),
    );

    for (i, (month, value)) in points.iter().enumerate() {
        document = document
            .add(
                Circle::new()
                    .set("cx", x_of(i))
                    .set("cy", y_of(*value))
                    .set("r", 4)
                    .set("fill", "#4e79a7"),
            )
            .add(
                Text::new(month.as_str())
                    .set("x", x_of(i))
                    .set("y", HEIGHT - MARGIN + 18.0)
                    .set("text-anchor", "middle")
                    .set("font-size", 12),
            );
    }

    document = document
        .add(
            Line::new()
                .set("x1", MARGIN)
                .set("y1", HEIGHT - MARGIN)
                .set("x2", WIDTH - MARGIN)
                .set("y2", HEIGHT - MARGIN)
                .set("stroke", "black"),
        )
        .add(
            Text::new("Month (YYYY-MM)")
                .set("x", WIDTH / 2.0)
                .set("y", HEIGHT - 12.0)
                .set("text-anchor", "middle")
                .set("font-size", 14),
        );

    save(&document, dir, TREND_CHART_FILE).map(Some)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ExpenseRecord;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_trend_chart_months_in_order() {
        let temp_dir = TempDir::new().unwrap();
        let table: ExpenseTable = vec![
            ExpenseRecord::new("2024-03-01", "food", 10.0, None),
            ExpenseRecord::new("2024-01-05", "food", 250.0, None),
            ExpenseRecord::new("garbage", "food", 99.0, None),
        ]
        .into();

        let path = render_monthly_trend(table, temp_dir.path())
            .unwrap()
            .unwrap();
        assert_eq!(path, temp_dir.path().join(TREND_CHART_FILE));

        let content = fs::read_to_string(path).unwrap();
        let jan = content.find("2024-01").unwrap();
        let mar = content.find("2024-03").unwrap();
        assert!(jan < mar);
        assert!(!content.contains("garbage"));
    }

    #[test]
    fn test_trend_without_dates_writes_nothing() {
        let temp_dir = TempDir::new().unwrap();
        let table: ExpenseTable = vec![ExpenseRecord::new("soon", "food", 1.0, None)].into();

        assert!(render_monthly_trend(table, temp_dir.path())
            .unwrap()
            .is_none());
        assert!(render_monthly_trend(ExpenseTable::new(), temp_dir.path())
            .unwrap()
            .is_none());
    }
}
