//! Reporting layer coupling raised violations to the audit trail.

use std::fmt;
use std::path::Path;
use std::sync::Arc;

use crate::audit::{AuditSink, FileAuditLog, MemoryAuditLog};

use super::violations::Violation;

/// Routes every raised violation through an audit sink.
///
/// Raising a violation is a pure control-flow signal; the audit append is
/// the one side effect, and it happens in [`Auditor::flag`] before the
/// caller ever sees the error. Catching the violation therefore cannot
/// suppress the audit line.
///
/// # Example
///
/// ```rust
/// use registrar::validation::{Auditor, Violation};
///
/// let (auditor, log) = Auditor::capture();
///
/// let violation = auditor.flag(Violation::InvalidPersonData {
///     name: "Ada".into(),
/// });
///
/// assert_eq!(log.len(), 1);
/// assert_eq!(log.lines()[0], violation.audit_line());
/// ```
#[derive(Clone)]
pub struct Auditor {
    sink: Arc<dyn AuditSink>,
}

impl Auditor {
    /// Auditor writing through the given sink.
    pub fn new(sink: Arc<dyn AuditSink>) -> Self {
        Self { sink }
    }

    /// Auditor appending to the default log file.
    pub fn default_file() -> Self {
        Self::new(Arc::new(FileAuditLog::new()))
    }

    /// Auditor appending to a log file at `path`.
    pub fn to_file(path: impl AsRef<Path>) -> Self {
        Self::new(Arc::new(FileAuditLog::at(path)))
    }

    /// Auditor capturing lines in memory, with a handle to inspect them.
    pub fn capture() -> (Self, Arc<MemoryAuditLog>) {
        let log = Arc::new(MemoryAuditLog::new());
        (Self::new(log.clone()), log)
    }

    /// Record `violation` on the audit trail and hand it back to be raised.
    ///
    /// Raise sites call this as `Err(auditor.flag(violation))` so the
    /// audit append and the error signal can never be separated.
    pub fn flag(&self, violation: Violation) -> Violation {
        self.sink.record(&violation.audit_line());
        violation
    }
}

impl fmt::Debug for Auditor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Auditor").finish_non_exhaustive()
    }
}
