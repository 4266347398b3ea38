//! Query helpers over a loaded expense table
//!
//! Filters, sorting, limits and grouped sums. None of these touch the store.

use std::collections::{BTreeMap, HashMap};

use crate::models::{ExpenseRecord, ExpenseTable};

/// Records whose date text equals `date` exactly
pub fn filter_by_date(table: &ExpenseTable, date: &str) -> ExpenseTable {
    table.iter().filter(|r| r.date == date).cloned().collect()
}

/// Records whose category equals `category`, ignoring case
pub fn filter_by_category(table: &ExpenseTable, category: &str) -> ExpenseTable {
    let needle = category.trim().to_lowercase();
    table
        .iter()
        .filter(|r| r.category.to_lowercase() == needle)
        .cloned()
        .collect()
}

/// Records whose description contains `keyword`, ignoring case
///
/// Records without a description never match.
pub fn filter_by_keyword(table: &ExpenseTable, keyword: &str) -> ExpenseTable {
    let needle = keyword.to_lowercase();
    table
        .iter()
        .filter(|r| {
            r.description
                .as_deref()
                .is_some_and(|d| d.to_lowercase().contains(&needle))
        })
        .cloned()
        .collect()
}

/// Stable sort by date text (zero-padded dates sort correctly as strings)
pub fn sort_by_date(table: &ExpenseTable, descending: bool) -> ExpenseTable {
    let mut records = table.records().to_vec();
    if descending {
        records.sort_by(|a, b| b.date.cmp(&a.date));
    } else {
        records.sort_by(|a, b| a.date.cmp(&b.date));
    }
    records.into()
}

/// First `n` items; `None` keeps everything
pub fn limit<T, I>(items: I, n: Option<usize>) -> Vec<T>
where
    I: IntoIterator<Item = T>,
{
    match n {
        Some(n) => items.into_iter().take(n).collect(),
        None => items.into_iter().collect(),
    }
}

/// Sum of amounts per category
///
/// Categories differing only by case share a bucket, labelled with the first
/// spelling encountered.
pub fn group_sum_by_category(table: &ExpenseTable) -> HashMap<String, f64> {
    category_buckets(table)
        .into_iter()
        .map(|bucket| (bucket.label, bucket.total))
        .collect()
}

/// Sum of amounts per `YYYY-MM` month, ascending by month
///
/// Records whose date does not parse are left out.
pub fn group_sum_by_month(table: &ExpenseTable) -> BTreeMap<String, f64> {
    let mut months = BTreeMap::new();
    for (month, record) in table.iter().filter_map(|r| r.month_key().map(|m| (m, r))) {
        *months.entry(month).or_insert(0.0) += record.amount;
    }
    months
}

/// One case-insensitive category group
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct CategoryBucket {
    pub label: String,
    pub total: f64,
    pub count: usize,
}

/// Category groups in first-seen order
pub(crate) fn category_buckets(table: &ExpenseTable) -> Vec<CategoryBucket> {
    let mut positions: HashMap<String, usize> = HashMap::new();
    let mut buckets: Vec<CategoryBucket> = Vec::new();

    for record in table {
        let key = record.category.to_lowercase();
        let idx = *positions.entry(key).or_insert_with(|| {
            buckets.push(CategoryBucket {
                label: record.category.clone(),
                total: 0.0,
                count: 0,
            });
            buckets.len() - 1
        });
        buckets[idx].total += record.amount;
        buckets[idx].count += 1;
    }

    buckets
}

/// Number of records per month, for records with a parseable date
pub(crate) fn count_by_month(table: &ExpenseTable) -> BTreeMap<String, usize> {
    let mut counts = BTreeMap::new();
    for month in table.iter().filter_map(ExpenseRecord::month_key) {
        *counts.entry(month).or_insert(0) += 1;
    }
    counts
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(date: &str, category: &str, amount: f64, description: Option<&str>) -> ExpenseRecord {
        ExpenseRecord::new(date, category, amount, description.map(String::from))
    }

    fn scenario() -> ExpenseTable {
        vec![
            record("2024-01-05", "food", 250.0, Some("lunch")),
            record("2024-01-06", "travel", 1000.0, Some("taxi")),
        ]
        .into()
    }

    fn mixed() -> ExpenseTable {
        vec![
            record("2024-01-05", "Food", 250.0, Some("Lunch with friends")),
            record("2024-02-10", "travel", 1000.0, Some("Taxi to airport")),
            record("2024-01-05", "food", 40.0, None),
            record("2024-03-01", "Shopping", 300.0, Some("shoes")),
            record("bad-date", "misc", 7.0, Some("")),
        ]
        .into()
    }

    #[test]
    fn test_scenario_aggregates() {
        let table = scenario();

        let by_category = group_sum_by_category(&table);
        assert_eq!(by_category.len(), 2);
        assert_eq!(by_category["food"], 250.0);
        assert_eq!(by_category["travel"], 1000.0);

        let by_month = group_sum_by_month(&table);
        assert_eq!(by_month.len(), 1);
        assert_eq!(by_month["2024-01"], 1250.0);

        let sorted = sort_by_date(&table, true);
        assert_eq!(sorted.records()[0].date, "2024-01-06");
        assert_eq!(sorted.records()[1].date, "2024-01-05");
    }

    #[test]
    fn test_filter_by_date_is_exact() {
        let table = mixed();
        assert_eq!(filter_by_date(&table, "2024-01-05").len(), 2);
        assert!(filter_by_date(&table, "2024-01").is_empty());
    }

    #[test]
    fn test_filter_by_category_ignores_case() {
        let table = mixed();
        let food = filter_by_category(&table, "FOOD");
        assert_eq!(food.len(), 2);
        assert_eq!(food.records()[0].category, "Food");
        assert!(filter_by_category(&table, "foo").is_empty());
    }

    #[test]
    fn test_filter_by_keyword() {
        let table = mixed();
        let taxi = filter_by_keyword(&table, "TAXI");
        assert_eq!(taxi.len(), 1);
        assert_eq!(taxi.records()[0].category, "travel");

        // Empty keyword matches every record with a description
        let all = filter_by_keyword(&table, "");
        assert_eq!(all.len(), 3);
        assert!(all.iter().all(|r| r.description.is_some()));
    }

    #[test]
    fn test_sort_is_stable() {
        let table = mixed();

        let desc = sort_by_date(&table, true);
        let dates: Vec<_> = desc.iter().map(|r| r.date.as_str()).collect();
        assert_eq!(
            dates,
            vec!["bad-date", "2024-03-01", "2024-02-10", "2024-01-05", "2024-01-05"]
        );
        // Equal dates keep their original relative order
        assert_eq!(desc.records()[3].amount, 250.0);
        assert_eq!(desc.records()[4].amount, 40.0);

        let asc = sort_by_date(&table, false);
        assert_eq!(asc.records()[0].amount, 250.0);
        assert_eq!(asc.records()[1].amount, 40.0);
    }

    #[test]
    fn test_limit() {
        let table = mixed();
        assert_eq!(limit(table.iter(), Some(2)).len(), 2);
        assert_eq!(limit(table.iter(), None).len(), 5);
        assert_eq!(limit(table.iter(), Some(50)).len(), 5);
        assert!(limit(table.iter(), Some(0)).is_empty());
    }

    #[test]
    fn test_category_sums_cover_total() {
        let table = mixed();
        let by_category = group_sum_by_category(&table);

        assert_eq!(by_category.len(), 4);
        assert_eq!(by_category["Food"], 290.0);
        let total: f64 = by_category.values().sum();
        assert_eq!(total, table.total_amount());
    }

    #[test]
    fn test_month_sums_skip_bad_dates() {
        let table = mixed();
        let by_month = group_sum_by_month(&table);

        let months: Vec<_> = by_month.keys().cloned().collect();
        assert_eq!(months, vec!["2024-01", "2024-02", "2024-03"]);
        assert_eq!(by_month["2024-01"], 290.0);

        let counts = count_by_month(&table);
        assert_eq!(counts["2024-01"], 2);
        assert_eq!(counts.values().sum::<usize>(), 4);
    }

    #[test]
    fn test_empty_table_aggregates() {
        let table = ExpenseTable::new();
        assert!(group_sum_by_category(&table).is_empty());
        assert!(group_sum_by_month(&table).is_empty());
        assert!(sort_by_date(&table, true).is_empty());
    }
}
