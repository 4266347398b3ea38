//! CSV-backed expense store
//!
//! Owns the on-disk representation: a UTF-8 CSV file with a fixed header.

use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use crate::error::{ExpenseError, ExpenseResult};
use crate::models::ExpenseTable;

use super::file_io::{ensure_parent_dir, read_table, table_to_bytes, write_atomic, ColumnSchema};
use super::ExpenseStore;

/// Where and how the table is persisted
#[derive(Debug, Clone)]
pub struct StoreConfig {
    /// Backing CSV file
    pub path: PathBuf,
    /// Column names, in on-disk order
    pub columns: ColumnSchema,
}

impl StoreConfig {
    /// Config for `path` with the standard column names
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            columns: ColumnSchema::default(),
        }
    }
}

/// Expense store persisted as a single CSV file
#[derive(Debug, Clone)]
pub struct CsvStore {
    config: StoreConfig,
}

impl CsvStore {
    pub fn new(config: StoreConfig) -> Self {
        Self { config }
    }

    /// Store at `path` using the standard columns
    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self::new(StoreConfig::new(path))
    }

    pub fn path(&self) -> &Path {
        &self.config.path
    }
}

impl ExpenseStore for CsvStore {
    fn ensure_store(&self) -> ExpenseResult<()> {
        if self.config.path.exists() {
            return Ok(());
        }

        ensure_parent_dir(&self.config.path)?;
        let header_only = table_to_bytes(&ExpenseTable::new(), &self.config.columns)?;
        write_atomic(&self.config.path, &header_only)
    }

    fn load(&self) -> ExpenseResult<ExpenseTable> {
        self.ensure_store()?;

        let file = File::open(&self.config.path).map_err(|e| {
            ExpenseError::Storage(format!(
                "Failed to open {}: {}",
                self.config.path.display(),
                e
            ))
        })?;

        read_table(BufReader::new(file), &self.config.columns).map_err(|e| {
            ExpenseError::Storage(format!(
                "Failed to load expenses from {}: {}",
                self.config.path.display(),
                e
            ))
        })
    }

    fn save(&self, table: &ExpenseTable) -> ExpenseResult<()> {
        // Serialize fully before touching the file
        let contents = table_to_bytes(table, &self.config.columns)?;

        ensure_parent_dir(&self.config.path)?;
        write_atomic(&self.config.path, &contents)
    }

    fn describe(&self) -> String {
        self.config.path.display().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ExpenseRecord;
    use std::fs;
    use tempfile::TempDir;

    const HEADER: &str = "date,category,amount,description\n";

    fn create_test_store() -> (TempDir, CsvStore) {
        let temp_dir = TempDir::new().unwrap();
        let store = CsvStore::at(temp_dir.path().join("data").join("expenses.csv"));
        (temp_dir, store)
    }

    fn record(date: &str, category: &str, amount: f64, description: &str) -> ExpenseRecord {
        ExpenseRecord::new(date, category, amount, Some(description.to_string()))
    }

    #[test]
    fn test_ensure_store_creates_header_only() {
        let (_temp_dir, store) = create_test_store();

        store.ensure_store().unwrap();
        assert_eq!(fs::read_to_string(store.path()).unwrap(), HEADER);

        // Idempotent and non-destructive
        store.insert(record("2024-01-05", "food", 250.0, "lunch")).unwrap();
        store.ensure_store().unwrap();
        assert_eq!(store.load().unwrap().len(), 1);
    }

    #[test]
    fn test_load_missing_file_is_empty() {
        let (_temp_dir, store) = create_test_store();

        let table = store.load().unwrap();
        assert!(table.is_empty());
        assert!(store.path().exists());
    }

    #[test]
    fn test_insert_appends_last() {
        let (_temp_dir, store) = create_test_store();
        store.insert(record("2024-01-06", "travel", 1000.0, "taxi")).unwrap();

        let before = store.load().unwrap().len();
        let new_record = record("2024-01-05", "food", 250.0, "lunch");
        store.insert(new_record.clone()).unwrap();

        let table = store.load().unwrap();
        assert_eq!(table.len(), before + 1);
        assert_eq!(table.records().last(), Some(&new_record));
    }

    #[test]
    fn test_save_load_round_trip() {
        let (_temp_dir, store) = create_test_store();
        fs::create_dir_all(store.path().parent().unwrap()).unwrap();
        fs::write(
            store.path(),
            "date,category,amount,description\n\
             2024-01-05,Food,250.00,\"lunch, friends\"\n\
             2024-01-06,travel,abc,\n\
             garbage,misc,3.25,note\n",
        )
        .unwrap();

        let loaded = store.load().unwrap();
        store.save(&loaded).unwrap();
        let reloaded = store.load().unwrap();

        assert_eq!(loaded, reloaded);
        assert_eq!(reloaded.records()[0].amount, 250.0);
        assert_eq!(reloaded.records()[1].amount, 0.0);
        assert_eq!(reloaded.records()[2].date, "garbage");
    }

    #[test]
    fn test_save_preserves_order_and_format() {
        let (_temp_dir, store) = create_test_store();
        let table: ExpenseTable = vec![
            record("2024-01-06", "travel", 1000.0, "taxi"),
            record("2024-01-05", "food", 250.5, "lunch"),
        ]
        .into();

        store.save(&table).unwrap();

        assert_eq!(
            fs::read_to_string(store.path()).unwrap(),
            "date,category,amount,description\n\
             2024-01-06,travel,1000.0,taxi\n\
             2024-01-05,food,250.5,lunch\n"
        );
    }

    #[test]
    fn test_delete_where_removes_all_matching() {
        let (_temp_dir, store) = create_test_store();
        store.insert(record("2024-01-05", "food", 250.0, "lunch")).unwrap();
        store.insert(record("2024-01-06", "travel", 1000.0, "taxi")).unwrap();
        store.insert(record("2024-01-05", "food", 80.0, "snack")).unwrap();

        let removed = store.delete_where(&|r| r.date == "2024-01-05").unwrap();
        assert_eq!(removed, 2);

        let table = store.load().unwrap();
        assert_eq!(table.len(), 1);
        assert_eq!(table.records()[0].date, "2024-01-06");

        assert_eq!(store.delete_where(&|r| r.date == "2024-01-05").unwrap(), 0);
    }

    #[test]
    fn test_delete_without_match_does_not_rewrite() {
        let (_temp_dir, store) = create_test_store();
        fs::create_dir_all(store.path().parent().unwrap()).unwrap();
        // Non-canonical amount text would be normalized by a rewrite
        fs::write(store.path(), format!("{}2024-01-05,food,250.00,lunch\n", HEADER)).unwrap();

        assert_eq!(store.delete_where(&|r| r.date == "1999-01-01").unwrap(), 0);
        assert!(fs::read_to_string(store.path()).unwrap().contains("250.00"));
    }

    #[test]
    fn test_corrupt_file_reports_path() {
        let (_temp_dir, store) = create_test_store();
        fs::create_dir_all(store.path().parent().unwrap()).unwrap();
        fs::write(store.path(), "when,what\n1,2\n").unwrap();

        let err = store.load().unwrap_err();
        assert!(matches!(err, ExpenseError::Storage(_)));
        assert!(err.to_string().contains("expenses.csv"));
    }

    #[test]
    fn test_failed_save_keeps_previous_content() {
        let (temp_dir, store) = create_test_store();
        store.insert(record("2024-01-05", "food", 250.0, "lunch")).unwrap();
        let original = fs::read_to_string(store.path()).unwrap();

        // A directory squatting on the temp path makes the write fail
        fs::create_dir_all(temp_dir.path().join("data").join("expenses.csv.tmp")).unwrap();

        let mut table = store.load().unwrap();
        table.push(record("2024-01-06", "travel", 1000.0, "taxi"));
        assert!(store.save(&table).is_err());

        assert_eq!(fs::read_to_string(store.path()).unwrap(), original);
    }
}
