//! Append-only audit trail for domain violations.
//!
//! The audit trail is the one persisted artifact of the model: every raised
//! violation appends exactly one formatted text line to a sink. The sink is
//! injectable so production code writes to a file while tests capture lines
//! in memory.

mod sink;

pub use sink::{AuditSink, FileAuditLog, MemoryAuditLog, DEFAULT_AUDIT_PATH};
