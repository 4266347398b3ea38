//! Audit logging for the expense tracker
//!
//! Every record appended or removed through the service layer is written to an
//! append-only, line-delimited JSON log (JSONL):
//!
//! - `AuditEntry`: timestamp, operation, and the affected record
//! - `AuditLogger`: appends entries to the log file and reads them back

mod entry;
mod logger;

pub use entry::{AuditEntry, Operation};
pub use logger::AuditLogger;
