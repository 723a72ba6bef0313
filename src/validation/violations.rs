//! The violation taxonomy for domain-rule breaches.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Domain-rule violations raised at construction or by a mutating call.
///
/// Each kind carries the structured context of the breach alongside a
/// human-readable message. Raising a violation always appends one line to
/// the audit trail (see [`crate::validation::Auditor`]); a violation is
/// never downgraded to a log line only, and never logged without also being
/// returned to the caller.
#[derive(Debug, Clone, Error, PartialEq, Serialize, Deserialize)]
pub enum Violation {
    /// Identity fields failed the fatal construction rules: empty name or
    /// identifier, age outside 1..=130, or contact shorter than 10.
    #[error("Invalid ID or contact information for person: {name}")]
    InvalidPersonData { name: String },

    /// GPA outside the 0.0..=4.0 scale.
    #[error("Invalid grade for student {student_id}: {gpa} is outside 0.0..=4.0")]
    InvalidGrade { student_id: String, gpa: f64 },

    /// Enrollment attempted against an absent course reference.
    #[error("Enrollment failed for student {student_id}, course {course_code}: no such course")]
    InvalidEnrollment {
        student_id: String,
        course_code: String,
    },

    /// Payment requested on a role with no payment formula. The attempted
    /// amount is always zero at raise time.
    #[error("Payment not defined for {subject_id} (attempted amount ${attempted}): {reason}")]
    PaymentNotDefined {
        subject_id: String,
        attempted: Decimal,
        reason: String,
    },
}

impl Violation {
    /// Course code recorded when the course reference itself is absent.
    pub const UNKNOWN_COURSE: &'static str = "UNKNOWN";

    /// Violation for a payment request on a role with no formula.
    pub fn payment_not_defined(subject_id: impl Into<String>) -> Self {
        Self::PaymentNotDefined {
            subject_id: subject_id.into(),
            attempted: Decimal::ZERO,
            reason: "no payment formula for this role".to_string(),
        }
    }

    /// Stable tag naming the violation kind.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::InvalidPersonData { .. } => "InvalidPersonData",
            Self::InvalidGrade { .. } => "InvalidGrade",
            Self::InvalidEnrollment { .. } => "InvalidEnrollment",
            Self::PaymentNotDefined { .. } => "PaymentNotDefined",
        }
    }

    /// The exact line appended to the audit trail when this violation is
    /// raised.
    pub fn audit_line(&self) -> String {
        format!("{}: {}", self.kind(), self)
    }
}
