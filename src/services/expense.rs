//! Expense service
//!
//! Validation boundary between raw user input and the record store. Every
//! mutation that goes through here is also written to the audit log.

use chrono::Local;

use crate::audit::{AuditEntry, AuditLogger};
use crate::error::{ExpenseError, ExpenseResult};
use crate::models::{parse_amount_input, validate_date, ExpenseRecord, ExpenseTable, DATE_FORMAT};
use crate::reports::{
    filter_by_category, filter_by_keyword, limit, sort_by_date, CategorySummary,
    MonthlySummary,
};
use crate::storage::ExpenseStore;

/// Raw input for a new expense, as typed by the user
#[derive(Debug, Clone, Default)]
pub struct NewExpense {
    /// `YYYY-MM-DD`; today when missing or blank
    pub date: Option<String>,
    pub category: String,
    /// Amount text, validated as a float
    pub amount: String,
    pub description: Option<String>,
}

/// What to search for
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchCriteria {
    /// Exact `YYYY-MM-DD` date
    Date(String),
    /// Category, case-insensitive
    Category(String),
    /// Substring of the description, case-insensitive
    Keyword(String),
}

/// A validated date plus the text it was typed as
struct DateTarget {
    canonical: String,
    typed: String,
}

impl DateTarget {
    fn parse(input: &str) -> ExpenseResult<Self> {
        Ok(Self {
            canonical: validate_date(input)?,
            typed: input.trim().to_string(),
        })
    }

    fn matches(&self, record: &ExpenseRecord) -> bool {
        record.date == self.canonical || record.date == self.typed
    }
}

fn audit_failed(done: &str, err: ExpenseError) -> ExpenseError {
    ExpenseError::Audit(format!(
        "{}, but the audit log could not be written: {}",
        done, err
    ))
}

/// Service for expense management
pub struct ExpenseService<'a> {
    store: &'a dyn ExpenseStore,
    audit: Option<&'a AuditLogger>,
}

impl<'a> ExpenseService<'a> {
    /// Create a service without audit logging
    pub fn new(store: &'a dyn ExpenseStore) -> Self {
        Self { store, audit: None }
    }

    /// Record every mutation in `audit`
    pub fn with_audit(mut self, audit: &'a AuditLogger) -> Self {
        self.audit = Some(audit);
        self
    }

    /// Full table, in stored order
    pub fn load(&self) -> ExpenseResult<ExpenseTable> {
        self.store.load()
    }

    /// Validate `input` and append it to the store
    ///
    /// Nothing is written when validation fails.
    pub fn add(&self, input: NewExpense) -> ExpenseResult<ExpenseRecord> {
        let date = match input.date.as_deref().map(str::trim) {
            Some(date) if !date.is_empty() => validate_date(date)?,
            _ => Local::now().date_naive().format(DATE_FORMAT).to_string(),
        };
        let amount = parse_amount_input(&input.amount)?;
        let description = input.description.map(|d| d.trim().to_string());

        let record = ExpenseRecord::new(date, input.category.trim(), amount, description);
        self.store.insert(record.clone())?;

        if let Some(audit) = self.audit {
            audit
                .log(&AuditEntry::create(&record))
                .map_err(|e| audit_failed("Expense was saved", e))?;
        }

        Ok(record)
    }

    /// Remove every record dated `date`; returns how many were removed
    ///
    /// Matches both the canonical date and the text as typed, so rows stored
    /// with an unpadded date (`2024-1-5`) are reachable too.
    pub fn delete_by_date(&self, date: &str) -> ExpenseResult<usize> {
        let target = DateTarget::parse(date)?;
        let removed = self.store.take_where(&|r: &ExpenseRecord| target.matches(r))?;

        if let Some(audit) = self.audit {
            let entries: Vec<AuditEntry> = removed.iter().map(AuditEntry::delete).collect();
            audit.log_batch(&entries).map_err(|e| {
                audit_failed(&format!("{} record(s) were deleted", removed.len()), e)
            })?;
        }

        Ok(removed.len())
    }

    /// Records newest first, at most `max` of them
    pub fn list(&self, max: Option<usize>) -> ExpenseResult<ExpenseTable> {
        let sorted = sort_by_date(&self.store.load()?, true);
        Ok(limit(sorted, max).into())
    }

    /// Records matching `criteria`, newest first
    pub fn search(&self, criteria: &SearchCriteria) -> ExpenseResult<ExpenseTable> {
        let matches: ExpenseTable = match criteria {
            SearchCriteria::Date(date) => {
                let target = DateTarget::parse(date)?;
                self.store
                    .load()?
                    .iter()
                    .filter(|r| target.matches(r))
                    .cloned()
                    .collect()
            }
            SearchCriteria::Category(category) => {
                filter_by_category(&self.store.load()?, category)
            }
            SearchCriteria::Keyword(keyword) => {
                filter_by_keyword(&self.store.load()?, keyword.trim())
            }
        };

        Ok(sort_by_date(&matches, true))
    }

    /// Category totals, optionally cut to the `top` largest (at least 1)
    pub fn category_summary(&self, top: Option<usize>) -> ExpenseResult<CategorySummary> {
        if top == Some(0) {
            return Err(ExpenseError::Validation(
                "Top must be at least 1".to_string(),
            ));
        }

        let summary = CategorySummary::generate(&self.store.load()?);
        Ok(match top {
            Some(n) => summary.top(n),
            None => summary,
        })
    }

    pub fn monthly_summary(&self) -> ExpenseResult<MonthlySummary> {
        Ok(MonthlySummary::generate(&self.store.load()?))
    }
}
