//! Expense record model
//!
//! A single dated expense entry plus the validation and formatting rules for
//! its fields.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{ExpenseError, ExpenseResult};

/// Format used for every date written by the tracker
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Format of the month keys used by monthly aggregates
pub const MONTH_FORMAT: &str = "%Y-%m";

/// One expense entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExpenseRecord {
    /// Date as stored (`YYYY-MM-DD` for anything this tool writes)
    pub date: String,

    /// Free-text category, case preserved
    pub category: String,

    /// Amount spent
    pub amount: f64,

    /// Optional description; empty text is stored as missing
    #[serde(default)]
    pub description: Option<String>,
}

impl ExpenseRecord {
    /// Create a new record, normalizing an empty description to `None`
    pub fn new(
        date: impl Into<String>,
        category: impl Into<String>,
        amount: f64,
        description: Option<String>,
    ) -> Self {
        Self {
            date: date.into(),
            category: category.into(),
            amount,
            description: description.filter(|d| !d.is_empty()),
        }
    }

    /// Parse the stored date, if it is a valid `YYYY-MM-DD` date
    pub fn parsed_date(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(self.date.trim(), DATE_FORMAT).ok()
    }

    /// The `YYYY-MM` month this record falls in, if its date parses
    pub fn month_key(&self) -> Option<String> {
        self.parsed_date()
            .map(|d| d.format(MONTH_FORMAT).to_string())
    }

    /// Description text, empty when missing
    pub fn description_or_empty(&self) -> &str {
        self.description.as_deref().unwrap_or("")
    }
}

impl fmt::Display for ExpenseRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Date: {}, Category: {}, Amount: {}, Description: {}",
            self.date,
            self.category,
            format_amount(self.amount),
            self.description_or_empty()
        )
    }
}

/// Validate user-supplied date text and return it in canonical `YYYY-MM-DD` form
///
/// Unpadded month and day (`2024-1-5`) are accepted; a signed year is not.
pub fn validate_date(input: &str) -> ExpenseResult<String> {
    let trimmed = input.trim();
    let invalid = || {
        ExpenseError::Validation(format!(
            "Invalid date format: '{}'. Use YYYY-MM-DD",
            trimmed
        ))
    };

    if !trimmed.starts_with(|c: char| c.is_ascii_digit()) {
        return Err(invalid());
    }

    NaiveDate::parse_from_str(trimmed, DATE_FORMAT)
        .map(|d| d.format(DATE_FORMAT).to_string())
        .map_err(|_| invalid())
}

/// Validate user-supplied amount text
pub fn parse_amount_input(input: &str) -> ExpenseResult<f64> {
    let trimmed = input.trim();
    match trimmed.parse::<f64>() {
        Ok(amount) if amount.is_finite() => Ok(amount),
        _ => Err(ExpenseError::Validation(format!(
            "Amount must be a number, got '{}'",
            trimmed
        ))),
    }
}

/// Lenient amount parsing for stored data: anything unparseable becomes 0.0
pub fn coerce_stored_amount(field: &str) -> f64 {
    match field.trim().parse::<f64>() {
        Ok(amount) if !amount.is_nan() => amount,
        _ => 0.0,
    }
}

/// Render an amount in its canonical stored form
///
/// Integral values keep one decimal place (`250.0`); everything else uses the
/// shortest representation that parses back to the same value.
pub fn format_amount(amount: f64) -> String {
    if amount.is_finite() && amount.fract() == 0.0 && amount.abs() < 1e16 {
        format!("{:.1}", amount)
    } else {
        format!("{}", amount)
    }
}
