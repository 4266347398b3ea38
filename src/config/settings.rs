//! User settings for the expense tracker
//!
//! Manages user preferences such as the currency symbol, the default export
//! filename, and an optional override of the backing data file.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use super::paths::ExpensePaths;
use crate::error::ExpenseError;

/// User settings for the expense tracker
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Currency symbol used in summaries
    #[serde(default = "default_currency")]
    pub currency_symbol: String,

    /// Filename offered when exporting without an explicit destination
    #[serde(default = "default_export_file")]
    pub default_export_file: String,

    /// Number of rows shown by `list` when no limit is given (unbounded if unset)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_view_limit: Option<usize>,

    /// Whether mutations are recorded in the audit log
    #[serde(default = "default_audit_enabled")]
    pub audit_enabled: bool,

    /// Backing CSV file; defaults to `<base>/data/expenses.csv`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_file: Option<PathBuf>,
}

fn default_schema_version() -> u32 {
    1
}

fn default_currency() -> String {
    "₹".to_string()
}

fn default_export_file() -> String {
    "export_expenses.csv".to_string()
}

fn default_audit_enabled() -> bool {
    true
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            currency_symbol: default_currency(),
            default_export_file: default_export_file(),
            default_view_limit: None,
            audit_enabled: default_audit_enabled(),
            data_file: None,
        }
    }
}

impl Settings {
    /// Load settings from disk, or create default settings if file doesn't exist
    pub fn load_or_create(paths: &ExpensePaths) -> Result<Self, ExpenseError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path).map_err(|e| {
                ExpenseError::Io(format!("Failed to read settings file: {}", e))
            })?;

            let settings: Settings = serde_json::from_str(&contents).map_err(|e| {
                ExpenseError::Config(format!("Failed to parse settings file: {}", e))
            })?;

            Ok(settings)
        } else {
            // Don't save yet - let caller decide when to persist
            Ok(Settings::default())
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &ExpensePaths) -> Result<(), ExpenseError> {
        paths.ensure_directories()?;

        let contents = serde_json::to_string_pretty(self).map_err(|e| {
            ExpenseError::Config(format!("Failed to serialize settings: {}", e))
        })?;

        std::fs::write(paths.settings_file(), contents)
            .map_err(|e| ExpenseError::Io(format!("Failed to write settings file: {}", e)))?;

        Ok(())
    }

    /// Resolve the backing file, preferring an explicit override
    pub fn expenses_file(&self, paths: &ExpensePaths, overridden: Option<PathBuf>) -> PathBuf {
        overridden
            .or_else(|| self.data_file.clone())
            .unwrap_or_else(|| paths.expenses_file())
    }
}
