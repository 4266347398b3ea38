//! Expense table model
//!
//! The full ordered collection of records, mirrored 1:1 with the backing file.

use serde::{Deserialize, Serialize};

use super::expense::ExpenseRecord;

/// Ordered sequence of expense records, in insertion order
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ExpenseTable {
    records: Vec<ExpenseRecord>,
}

impl ExpenseTable {
    /// Create an empty table
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn records(&self) -> &[ExpenseRecord] {
        &self.records
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ExpenseRecord> {
        self.records.iter()
    }

    /// Append a record to the end of the table
    pub fn push(&mut self, record: ExpenseRecord) {
        self.records.push(record);
    }

    /// Remove every record matching `predicate`, returning the removed records
    /// in their original order
    pub fn extract_where<F>(&mut self, predicate: F) -> Vec<ExpenseRecord>
    where
        F: Fn(&ExpenseRecord) -> bool,
    {
        let (removed, kept): (Vec<_>, Vec<_>) = std::mem::take(&mut self.records)
            .into_iter()
            .partition(|r| predicate(r));
        self.records = kept;
        removed
    }

    /// Sum of every amount in the table
    pub fn total_amount(&self) -> f64 {
        self.records.iter().map(|r| r.amount).sum()
    }
}

impl From<Vec<ExpenseRecord>> for ExpenseTable {
    fn from(records: Vec<ExpenseRecord>) -> Self {
        Self { records }
    }
}

impl FromIterator<ExpenseRecord> for ExpenseTable {
    fn from_iter<I: IntoIterator<Item = ExpenseRecord>>(iter: I) -> Self {
        Self {
            records: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for ExpenseTable {
    type Item = ExpenseRecord;
    type IntoIter = std::vec::IntoIter<ExpenseRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.into_iter()
    }
}

impl<'a> IntoIterator for &'a ExpenseTable {
    type Item = &'a ExpenseRecord;
    type IntoIter = std::slice::Iter<'a, ExpenseRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
