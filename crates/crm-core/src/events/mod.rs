//! Domain events - records emitted when domain state changes

mod audit_log;

pub use audit_log::{AuditAction, AuditLogEntry};
