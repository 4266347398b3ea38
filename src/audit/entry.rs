//! Audit entry data structures
//!
//! One entry per mutated expense record.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::{format_amount, ExpenseRecord};

/// Types of operations that can be audited
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    /// Record was appended
    Create,
    /// Record was removed
    Delete,
}

impl std::fmt::Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Operation::Create => write!(f, "CREATE"),
            Operation::Delete => write!(f, "DELETE"),
        }
    }
}

/// A single audit log entry
///
/// Records carry no identity of their own, so the entry keeps a full copy of
/// the record that was added or removed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditEntry {
    /// When the operation occurred (UTC)
    pub timestamp: DateTime<Utc>,

    /// Type of operation performed
    pub operation: Operation,

    /// The record as it was before the operation (deletes)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub before: Option<ExpenseRecord>,

    /// The record as it is after the operation (creates)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub after: Option<ExpenseRecord>,
}

impl AuditEntry {
    /// Entry for an appended record
    pub fn create(record: &ExpenseRecord) -> Self {
        Self {
            timestamp: Utc::now(),
            operation: Operation::Create,
            before: None,
            after: Some(record.clone()),
        }
    }

    /// Entry for a removed record
    pub fn delete(record: &ExpenseRecord) -> Self {
        Self {
            timestamp: Utc::now(),
            operation: Operation::Delete,
            before: Some(record.clone()),
            after: None,
        }
    }

    /// The record this entry is about
    pub fn record(&self) -> Option<&ExpenseRecord> {
        self.after.as_ref().or(self.before.as_ref())
    }

    /// Format the entry for human-readable output
    pub fn format_human_readable(&self) -> String {
        let mut output = format!(
            "[{}] {}",
            self.timestamp.format("%Y-%m-%d %H:%M:%S UTC"),
            self.operation
        );

        if let Some(record) = self.record() {
            output.push_str(&format!(
                " {} {} {}",
                record.date,
                record.category,
                format_amount(record.amount)
            ));
            if let Some(description) = &record.description {
                output.push_str(&format!(" ({})", description));
            }
        }

        output
    }
}
