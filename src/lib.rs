//! expense-cli - Terminal-based personal expense tracker
//!
//! Records dated expenses to a CSV file and offers listing, deletion, search,
//! grouped summaries, export and SVG charts over that data.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Path resolution and user settings
//! - `error`: Custom error types
//! - `models`: Expense records and the ordered expense table
//! - `storage`: CSV-backed record store behind the `ExpenseStore` trait
//! - `reports`: Filters, sorting and grouped summaries
//! - `services`: Input validation and audited mutations
//! - `audit`: Append-only audit log
//! - `export`: CSV, JSON and YAML export
//! - `charts`: SVG chart rendering
//! - `display`: Terminal formatting
//! - `cli`: Command handlers and the interactive shell
//!
//! # Example
//!
//! ```rust,ignore
//! use expense_cli::services::{ExpenseService, NewExpense};
//! use expense_cli::storage::CsvStore;
//!
//! let store = CsvStore::at("expenses.csv");
//! let service = ExpenseService::new(&store);
//! service.add(NewExpense {
//!     date: Some("2024-01-05".into()),
//!     category: "food".into(),
//!     amount: "250".into(),
//!     description: Some("lunch".into()),
//! })?;
//! ```

pub mod audit;
pub mod charts;
pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod models;
pub mod reports;
pub mod services;
pub mod storage;

pub use error::{ExpenseError, ExpenseResult};
