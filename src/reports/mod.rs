//! Reports module for the expense tracker
//!
//! Read-only views over a loaded table: filters, sorting, grouped sums, and
//! the category and monthly summary reports built on them.

pub mod query;
pub mod summary;

pub use query::{
    filter_by_category, filter_by_date, filter_by_keyword, group_sum_by_category,
    group_sum_by_month, limit, sort_by_date,
};
pub use summary::{CategorySummary, MonthlySummary, SummaryRow};
