//! Storage layer for the expense tracker
//!
//! Every operation reloads the full table from the backing store, mutates it
//! in memory, and writes it back in full. There is no locking: two processes
//! racing on the same backing file can lose updates (last writer wins).

pub mod csv_store;
pub mod file_io;
pub mod memory;

pub use csv_store::{CsvStore, StoreConfig};
pub use file_io::{read_table, write_atomic, write_table, ColumnSchema};
pub use memory::MemoryStore;

use crate::error::ExpenseResult;
use crate::models::{ExpenseRecord, ExpenseTable};

/// Persistence interface for the expense table
///
/// Implementors only provide `ensure_store`, `load` and `save`; insertion and
/// deletion are the load-mutate-save cycle on top of those.
pub trait ExpenseStore {
    /// Create an empty backing store if none exists. Idempotent.
    fn ensure_store(&self) -> ExpenseResult<()>;

    /// Read the full table
    fn load(&self) -> ExpenseResult<ExpenseTable>;

    /// Replace the stored table with `table`
    fn save(&self, table: &ExpenseTable) -> ExpenseResult<()>;

    /// Human-readable location of the store, for messages
    fn describe(&self) -> String;

    /// Append a record
    fn insert(&self, record: ExpenseRecord) -> ExpenseResult<()> {
        let mut table = self.load()?;
        table.push(record);
        self.save(&table)
    }

    /// Remove every record matching `predicate`; returns how many were removed
    fn delete_where(&self, predicate: &dyn Fn(&ExpenseRecord) -> bool) -> ExpenseResult<usize> {
        Ok(self.take_where(predicate)?.len())
    }

    /// Remove every record matching `predicate` and hand the removed records back
    ///
    /// The store is only rewritten when something was removed.
    fn take_where(
        &self,
        predicate: &dyn Fn(&ExpenseRecord) -> bool,
    ) -> ExpenseResult<Vec<ExpenseRecord>> {
        let mut table = self.load()?;
        let removed = table.extract_where(predicate);
        if !removed.is_empty() {
            self.save(&table)?;
        }
        Ok(removed)
    }
}
