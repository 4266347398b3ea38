//! CLI command handlers
//!
//! Bridges clap argument parsing and the interactive shell with the service
//! layer. Handlers write to any `Write` so the shell and tests can capture
//! their output.

pub mod chart;
pub mod config;
pub mod expense;
pub mod export;
pub mod history;
pub mod report;
pub mod shell;

pub use chart::{handle_chart_command, ChartCommands};
pub use config::{handle_config, handle_init};
pub use expense::{handle_add, handle_delete, handle_list, handle_search, AddArgs, SearchArgs};
pub use export::handle_export;
pub use history::handle_history;
pub use report::{handle_summary_command, SummaryCommands};
pub use shell::Shell;

use std::path::PathBuf;

use crate::audit::AuditLogger;
use crate::config::{ExpensePaths, Settings};
use crate::error::ExpenseResult;
use crate::services::ExpenseService;
use crate::storage::{CsvStore, ExpenseStore};

/// Everything a command needs: resolved paths, settings, the store and the
/// audit log
pub struct AppContext {
    pub paths: ExpensePaths,
    pub settings: Settings,
    pub store: Box<dyn ExpenseStore>,
    pub audit: Option<AuditLogger>,
}

impl AppContext {
    /// Open the CSV store for `paths`, creating directories and the backing
    /// file as needed
    pub fn open(
        paths: ExpensePaths,
        settings: Settings,
        data_file: Option<PathBuf>,
    ) -> ExpenseResult<Self> {
        paths.ensure_directories()?;

        let store = CsvStore::at(settings.expenses_file(&paths, data_file));
        store.ensure_store()?;

        Ok(Self::with_store(paths, settings, Box::new(store)))
    }

    /// Context over an arbitrary store
    pub fn with_store(
        paths: ExpensePaths,
        settings: Settings,
        store: Box<dyn ExpenseStore>,
    ) -> Self {
        let audit = settings
            .audit_enabled
            .then(|| AuditLogger::new(paths.audit_log()));

        Self {
            paths,
            settings,
            store,
            audit,
        }
    }

    pub fn service(&self) -> ExpenseService<'_> {
        let service = ExpenseService::new(self.store.as_ref());
        match &self.audit {
            Some(audit) => service.with_audit(audit),
            None => service,
        }
    }

    pub fn currency(&self) -> &str {
        &self.settings.currency_symbol
    }
}
