//! Append-only audit sinks.
//!
//! Every raised violation is mirrored to a sink as one formatted text line.
//! Sinks are infallible at the trait boundary: a sink that cannot write must
//! never mask the violation being raised, so write failures are swallowed
//! rather than propagated.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

/// Default audit log path, relative to the working directory.
pub const DEFAULT_AUDIT_PATH: &str = "university_exceptions.log";

/// Append-only sink for formatted violation lines.
///
/// Implementations receive one line per raised violation, in raise order.
/// The trail is append-only; no rotation or truncation is performed.
pub trait AuditSink: Send + Sync {
    /// Append one line to the sink.
    fn record(&self, line: &str);
}

/// File-backed audit log.
///
/// The file is opened in append mode for each write and closed again
/// afterwards; the log does not hold the file open between violations.
///
/// # Example
///
/// ```rust
/// use registrar::audit::{AuditSink, FileAuditLog};
///
/// let dir = std::env::temp_dir();
/// let log = FileAuditLog::at(dir.join("doc_audit.log"));
/// log.record("InvalidGrade: example line");
/// ```
#[derive(Clone, Debug)]
pub struct FileAuditLog {
    path: PathBuf,
}

impl FileAuditLog {
    /// Create a log appending to [`DEFAULT_AUDIT_PATH`].
    pub fn new() -> Self {
        Self::at(DEFAULT_AUDIT_PATH)
    }

    /// Create a log appending to the given path.
    pub fn at(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Path this log appends to.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Default for FileAuditLog {
    fn default() -> Self {
        Self::new()
    }
}

impl AuditSink for FileAuditLog {
    fn record(&self, line: &str) {
        // An unwritable trail must not mask the violation being raised.
        if let Ok(mut file) = OpenOptions::new().create(true).append(true).open(&self.path) {
            let _ = writeln!(file, "{line}");
        }
    }
}

/// In-memory capturing sink.
///
/// Stores recorded lines in order so tests can assert on the exact audit
/// trail instead of reading a file back.
#[derive(Debug, Default)]
pub struct MemoryAuditLog {
    lines: Mutex<Vec<String>>,
}

impl MemoryAuditLog {
    /// Create an empty capture buffer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of all recorded lines, in raise order.
    pub fn lines(&self) -> Vec<String> {
        self.buffer().clone()
    }

    /// Number of recorded lines.
    pub fn len(&self) -> usize {
        self.buffer().len()
    }

    /// Whether nothing has been recorded yet.
    pub fn is_empty(&self) -> bool {
        self.buffer().is_empty()
    }

    fn buffer(&self) -> std::sync::MutexGuard<'_, Vec<String>> {
        self.lines.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl AuditSink for MemoryAuditLog {
    fn record(&self, line: &str) {
        self.buffer().push(line.to_string());
    }
}
