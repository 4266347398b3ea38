//! File I/O utilities with atomic writes
//!
//! Provides the CSV codec for expense tables and a write path that won't
//! corrupt the destination on failure.

use std::ffi::OsString;
use std::fs::{self, File};
use std::io::{Read, Write};
use std::path::{Path, PathBuf};

use csv::{ReaderBuilder, StringRecord, Writer};

use crate::error::{ExpenseError, ExpenseResult};
use crate::models::{coerce_stored_amount, format_amount, ExpenseRecord, ExpenseTable};

/// Column names of the backing file, in their fixed on-disk order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnSchema {
    pub date: String,
    pub category: String,
    pub amount: String,
    pub description: String,
}

impl Default for ColumnSchema {
    fn default() -> Self {
        Self {
            date: "date".to_string(),
            category: "category".to_string(),
            amount: "amount".to_string(),
            description: "description".to_string(),
        }
    }
}

impl ColumnSchema {
    /// Header row, in write order
    pub fn header(&self) -> [&str; 4] {
        [
            self.date.as_str(),
            self.category.as_str(),
            self.amount.as_str(),
            self.description.as_str(),
        ]
    }
}

/// Positions of each schema column within a particular file's header
struct ColumnIndex {
    date: usize,
    category: usize,
    amount: usize,
    description: usize,
}

impl ColumnIndex {
    fn locate(headers: &StringRecord, schema: &ColumnSchema) -> ExpenseResult<Self> {
        let find = |name: &str| -> ExpenseResult<usize> {
            headers
                .iter()
                .position(|h| h.trim() == name)
                .ok_or_else(|| {
                    ExpenseError::Storage(format!("Missing required column '{}'", name))
                })
        };

        Ok(Self {
            date: find(schema.date.as_str())?,
            category: find(schema.category.as_str())?,
            amount: find(schema.amount.as_str())?,
            description: find(schema.description.as_str())?,
        })
    }

    fn record(&self, row: &StringRecord) -> ExpenseRecord {
        let field = |idx: usize| row.get(idx).unwrap_or("");
        let description = field(self.description);

        ExpenseRecord::new(
            field(self.date),
            field(self.category),
            coerce_stored_amount(field(self.amount)),
            (!description.is_empty()).then(|| description.to_string()),
        )
    }
}

/// Read an expense table from CSV
///
/// Short rows are tolerated and bad amounts become 0.0; only format-level
/// problems (malformed CSV, invalid UTF-8, missing columns) are errors.
pub fn read_table<R: Read>(reader: R, schema: &ColumnSchema) -> ExpenseResult<ExpenseTable> {
    let mut csv_reader = ReaderBuilder::new().flexible(true).from_reader(reader);

    let headers = csv_reader.headers()?.clone();
    if headers.is_empty() {
        // Zero-byte file
        return Ok(ExpenseTable::new());
    }

    let index = ColumnIndex::locate(&headers, schema)?;

    let mut table = ExpenseTable::new();
    for result in csv_reader.records() {
        let row = result?;
        table.push(index.record(&row));
    }

    Ok(table)
}

/// Write the header plus one row per record
pub fn write_table<W: Write>(
    writer: W,
    table: &ExpenseTable,
    schema: &ColumnSchema,
) -> ExpenseResult<()> {
    let mut csv_writer = Writer::from_writer(writer);

    csv_writer.write_record(schema.header())?;

    for record in table {
        csv_writer.write_record([
            record.date.as_str(),
            record.category.as_str(),
            format_amount(record.amount).as_str(),
            record.description_or_empty(),
        ])?;
    }

    csv_writer.flush()?;
    Ok(())
}

/// Serialize a table into a complete in-memory buffer
pub fn table_to_bytes(table: &ExpenseTable, schema: &ColumnSchema) -> ExpenseResult<Vec<u8>> {
    let mut buffer = Vec::new();
    write_table(&mut buffer, table, schema)?;
    Ok(buffer)
}

/// Write bytes to a file atomically (write to temp, then rename)
///
/// The destination is either completely written or left untouched. Parent
/// directories are not created.
pub fn write_atomic<P: AsRef<Path>>(path: P, contents: &[u8]) -> ExpenseResult<()> {
    let path = path.as_ref();
    let temp_path = temp_path_for(path)?;

    let mut file = File::create(&temp_path).map_err(|e| {
        ExpenseError::Storage(format!(
            "Failed to create temp file {}: {}",
            temp_path.display(),
            e
        ))
    })?;

    let written = file
        .write_all(contents)
        .and_then(|_| file.flush())
        .and_then(|_| file.sync_all());

    if let Err(e) = written {
        let _ = fs::remove_file(&temp_path);
        return Err(ExpenseError::Storage(format!(
            "Failed to write {}: {}",
            temp_path.display(),
            e
        )));
    }

    fs::rename(&temp_path, path).map_err(|e| {
        let _ = fs::remove_file(&temp_path);
        ExpenseError::Storage(format!("Failed to replace {}: {}", path.display(), e))
    })?;

    Ok(())
}

/// Create the parent directory of `path` if it has one
pub fn ensure_parent_dir(path: &Path) -> ExpenseResult<()> {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => {
            fs::create_dir_all(parent).map_err(|e| {
                ExpenseError::Storage(format!(
                    "Failed to create directory {}: {}",
                    parent.display(),
                    e
                ))
            })
        }
        _ => Ok(()),
    }
}

/// Sibling temp file (`<name>.tmp`), so the final rename stays on one filesystem
fn temp_path_for(path: &Path) -> ExpenseResult<PathBuf> {
    let file_name = path.file_name().ok_or_else(|| {
        ExpenseError::Storage(format!("Not a file path: {}", path.display()))
    })?;

    let mut temp_name = OsString::from(file_name);
    temp_name.push(".tmp");
    Ok(path.with_file_name(temp_name))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn parse(csv: &str) -> ExpenseResult<ExpenseTable> {
        read_table(csv.as_bytes(), &ColumnSchema::default())
    }

    #[test]
    fn test_read_basic_rows() {
        let table = parse(
            "date,category,amount,description\n\
             2024-01-05,food,250.0,lunch with friends\n\
             2024-01-06,travel,1000,\n",
        )
        .unwrap();

        assert_eq!(table.len(), 2);
        let first = &table.records()[0];
        assert_eq!(first.date, "2024-01-05");
        assert_eq!(first.category, "food");
        assert_eq!(first.amount, 250.0);
        assert_eq!(first.description.as_deref(), Some("lunch with friends"));
        assert!(table.records()[1].description.is_none());
    }

    #[test]
    fn test_unparseable_amount_coerces_to_zero() {
        let table = parse("date,category,amount,description\n2024-01-05,food,abc,x\n").unwrap();
        assert_eq!(table.records()[0].amount, 0.0);
    }

    #[test]
    fn test_short_rows_are_tolerated() {
        let table = parse("date,category,amount,description\n2024-01-05,food\n").unwrap();
        let record = &table.records()[0];
        assert_eq!(record.amount, 0.0);
        assert!(record.description.is_none());
    }

    #[test]
    fn test_columns_located_by_name() {
        let table = parse("amount,description,date,category\n12.5,tea,2024-02-01,Drinks\n").unwrap();
        let record = &table.records()[0];
        assert_eq!(record.date, "2024-02-01");
        assert_eq!(record.category, "Drinks");
        assert_eq!(record.amount, 12.5);
    }

    #[test]
    fn test_missing_column_is_an_error() {
        let err = parse("date,category,description\n2024-01-05,food,x\n").unwrap_err();
        assert!(matches!(err, ExpenseError::Storage(_)));
    }

    #[test]
    fn test_empty_input_is_empty_table() {
        assert!(parse("").unwrap().is_empty());
        assert!(parse("date,category,amount,description\n").unwrap().is_empty());
    }

    #[test]
    fn test_invalid_utf8_is_an_error() {
        let bytes: &[u8] = b"date,category,amount,description\n2024-01-05,\xff\xfe,1,x\n";
        assert!(read_table(bytes, &ColumnSchema::default()).is_err());
    }

    #[test]
    fn test_write_table_format() {
        let table: ExpenseTable = vec![
            ExpenseRecord::new("2024-01-05", "food", 250.0, Some("lunch, with friends".into())),
            ExpenseRecord::new("2024-01-06", "travel", 12.75, None),
        ]
        .into();

        let bytes = table_to_bytes(&table, &ColumnSchema::default()).unwrap();
        let text = String::from_utf8(bytes).unwrap();

        assert_eq!(
            text,
            "date,category,amount,description\n\
             2024-01-05,food,250.0,\"lunch, with friends\"\n\
             2024-01-06,travel,12.75,\n"
        );
    }

    #[test]
    fn test_atomic_write_no_temp_file_left() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("expenses.csv");

        write_atomic(&path, b"date,category,amount,description\n").unwrap();

        assert!(path.exists());
        assert!(!temp_dir.path().join("expenses.csv.tmp").exists());
    }

    #[test]
    fn test_atomic_write_requires_parent() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("missing").join("out.csv");

        assert!(write_atomic(&path, b"x").is_err());
        assert!(!path.exists());
    }

    #[test]
    fn test_ensure_parent_dir() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nested").join("dir").join("expenses.csv");

        ensure_parent_dir(&path).unwrap();
        assert!(temp_dir.path().join("nested").join("dir").exists());
        ensure_parent_dir(Path::new("relative.csv")).unwrap();
    }
}
