//! Service layer for the expense tracker
//!
//! Validates user input, applies it through the store, and records mutations
//! in the audit log.

pub mod expense;

pub use expense::{ExpenseService, NewExpense, SearchCriteria};
