//! In-memory expense store
//!
//! Same load-mutate-save semantics as the CSV store without touching disk.

use std::sync::RwLock;

use crate::error::{ExpenseError, ExpenseResult};
use crate::models::ExpenseTable;

use super::ExpenseStore;

/// Expense store holding its table in memory
#[derive(Debug, Default)]
pub struct MemoryStore {
    table: RwLock<ExpenseTable>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ExpenseStore for MemoryStore {
    fn ensure_store(&self) -> ExpenseResult<()> {
        Ok(())
    }

    fn load(&self) -> ExpenseResult<ExpenseTable> {
        let table = self.table.read().map_err(|e| {
            ExpenseError::Storage(format!("Failed to acquire read lock: {}", e))
        })?;
        Ok(table.clone())
    }

    fn save(&self, table: &ExpenseTable) -> ExpenseResult<()> {
        let mut stored = self.table.write().map_err(|e| {
            ExpenseError::Storage(format!("Failed to acquire write lock: {}", e))
        })?;
        *stored = table.clone();
        Ok(())
    }

    fn describe(&self) -> String {
        "in-memory store".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ExpenseRecord;

    #[test]
    fn test_insert_and_delete() {
        let store = MemoryStore::new();
        store
            .insert(ExpenseRecord::new("2024-01-05", "food", 250.0, None))
            .unwrap();
        store
            .insert(ExpenseRecord::new("2024-01-06", "travel", 1000.0, None))
            .unwrap();

        assert_eq!(store.load().unwrap().len(), 2);
        assert_eq!(store.delete_where(&|r| r.category == "food").unwrap(), 1);
        assert_eq!(store.load().unwrap().records()[0].category, "travel");
    }
}
