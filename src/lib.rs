//! Registrar: a university people, enrollment, and payroll model.
//!
//! The core is a closed role taxonomy — students (undergraduate, graduate)
//! and professors (assistant, associate, full) over one validated identity
//! record — where each variant supplies its own payment formula and its own
//! slice of the layered display. Domain rules are enforced fail-fast at
//! construction and at each mutating call; every breach is raised as a
//! typed [`Violation`] and, inseparably, appended as one line to an
//! append-only audit trail.
//!
//! # Core Concepts
//!
//! - **Role variants**: a [`Person`] holds a [`people::Role`]; pattern
//!   matching over the closed enum replaces virtual dispatch, so new roles
//!   force every dispatch site to be updated.
//! - **Payment policy**: the [`people::PaymentPolicy`] capability, a pure
//!   per-variant formula. The role with no formula raises
//!   `PaymentNotDefined` instead of returning zero.
//! - **Audit trail**: raising a violation is pure control flow; the audit
//!   append is the one side effect, performed by the [`Auditor`] before the
//!   caller sees the error, through an injectable [`audit::AuditSink`].
//!
//! # Example
//!
//! ```rust
//! use chrono::NaiveDate;
//! use registrar::people::{GraduateProfile, Identity, Person, StudentProfile};
//! use registrar::validation::Auditor;
//! use rust_decimal::Decimal;
//!
//! let (auditor, log) = Auditor::capture();
//!
//! let mut grad = Person::graduate(
//!     Identity::new("Manjeet", 19, "GS001", "9876543210"),
//!     StudentProfile {
//!         enrollment_date: NaiveDate::from_ymd_opt(2021, 8, 15).unwrap(),
//!         program: "CS".into(),
//!         gpa: 3.9,
//!     },
//!     GraduateProfile {
//!         research_topic: "AI".into(),
//!         advisor: "Dr. Krish".into(),
//!         thesis_title: "AI Optimization".into(),
//!     },
//!     &auditor,
//! )
//! .unwrap();
//!
//! let graduate = grad.as_graduate_mut().unwrap();
//! graduate.add_teaching_hours(10);
//! graduate.add_research_hours(15);
//!
//! assert_eq!(grad.calculate_payment(&auditor).unwrap(), Decimal::from(2075));
//! assert!(log.is_empty());
//! ```

pub mod audit;
pub mod campus;
pub mod people;
pub mod validation;

// Re-export commonly used types
pub use audit::{AuditSink, FileAuditLog, MemoryAuditLog};
pub use campus::{Course, Department, University};
pub use people::{Identity, PaymentPolicy, Person, Role};
pub use validation::{Auditor, Violation};
