//! People: validated identity, the closed role taxonomy, payment policy,
//! and layered display.
//!
//! The original design's inheritance chains (Person → Student →
//! {Undergraduate, Graduate}, Person → Professor → {Assistant, Associate,
//! Full}) are flattened into one shared identity record plus closed enums
//! ([`Role`], [`Standing`], [`Rank`]). Pattern matching replaces virtual
//! dispatch, so a new role variant forces every dispatch site to be
//! updated.

mod display;
mod payment;
mod person;
mod professor;
mod student;

pub use payment::PaymentPolicy;
pub use person::{Identity, Person, Role, AGE_RANGE, MIN_CONTACT_LEN};
pub use professor::{Professor, ProfessorProfile, Rank};
pub use student::{
    Graduate, GraduateProfile, Standing, Student, StudentProfile, Undergraduate,
    UndergraduateProfile, GPA_RANGE,
};
