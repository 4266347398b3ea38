//! Core data models for the expense tracker
//!
//! This module contains the data structures that represent the expense
//! domain: individual records and the ordered table that holds them.

pub mod expense;
pub mod table;

pub use expense::{
    coerce_stored_amount, format_amount, parse_amount_input, validate_date, ExpenseRecord,
    DATE_FORMAT, MONTH_FORMAT,
};
pub use table::ExpenseTable;
