//! Person identity and the closed role taxonomy.

use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};

use crate::validation::{Auditor, Violation};

use super::professor::{Professor, ProfessorProfile, Rank};
use super::student::{
    Graduate, GraduateProfile, Standing, Student, StudentProfile, Undergraduate,
    UndergraduateProfile,
};

/// Ages accepted for any person.
pub const AGE_RANGE: RangeInclusive<u32> = 1..=130;

/// Minimum length of a contact string.
pub const MIN_CONTACT_LEN: usize = 10;

/// Identity fields shared by every role.
///
/// Identity carries no invariants of its own until it is attached to a
/// [`Person`]; the fatal validation rules run inside the person
/// constructors so a breach can be audited.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Identity {
    pub name: String,
    pub age: u32,
    pub id: String,
    pub contact: String,
}

impl Identity {
    pub fn new(
        name: impl Into<String>,
        age: u32,
        id: impl Into<String>,
        contact: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            age,
            id: id.into(),
            contact: contact.into(),
        }
    }

    /// Apply the fatal identity rules: non-empty name and identifier, age
    /// within [`AGE_RANGE`], contact at least [`MIN_CONTACT_LEN`] long.
    fn validate(&self) -> Result<(), Violation> {
        let valid = !self.name.is_empty()
            && AGE_RANGE.contains(&self.age)
            && !self.id.is_empty()
            && self.contact.len() >= MIN_CONTACT_LEN;
        if valid {
            Ok(())
        } else {
            Err(Violation::InvalidPersonData {
                name: self.name.clone(),
            })
        }
    }
}

/// Closed set of roles a person can hold.
///
/// New roles extend this enum, and exhaustive matching forces every
/// dispatch site (payment, display) to handle them.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum Role {
    /// No assigned role. The one variant with no payment formula: asking it
    /// for payment raises [`Violation::PaymentNotDefined`].
    Unassigned,
    Student(Student),
    Professor(Professor),
}

impl Role {
    /// Concrete role name for display and diagnostics.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Unassigned => "Person",
            Self::Student(student) => student.standing().name(),
            Self::Professor(professor) => professor.rank().name(),
        }
    }
}

/// A person with validated identity fields and a concrete role.
///
/// Every constructor validates atomically through the auditor: a person
/// failing any identity or role rule is never constructed, and identity
/// fields are immutable after construction.
///
/// # Example
///
/// ```rust
/// use registrar::people::{Identity, Person};
/// use registrar::validation::{Auditor, Violation};
///
/// let (auditor, log) = Auditor::capture();
///
/// let person = Person::unassigned(
///     Identity::new("Manjeet", 19, "GS001", "9876543210"),
///     &auditor,
/// )
/// .unwrap();
/// assert_eq!(person.id(), "GS001");
///
/// // Short contact: construction fails and the breach is audited.
/// let err = Person::unassigned(Identity::new("Manjeet", 19, "GS001", "123"), &auditor);
/// assert!(matches!(err, Err(Violation::InvalidPersonData { .. })));
/// assert_eq!(log.len(), 1);
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Person {
    name: String,
    age: u32,
    id: String,
    contact: String,
    role: Role,
}

impl Person {
    /// Construct a person with no role.
    pub fn unassigned(identity: Identity, auditor: &Auditor) -> Result<Self, Violation> {
        let identity = Self::validated(identity, auditor)?;
        Ok(Self::assemble(identity, Role::Unassigned))
    }

    /// Construct a student with no declared track.
    pub fn student(
        identity: Identity,
        profile: StudentProfile,
        auditor: &Auditor,
    ) -> Result<Self, Violation> {
        Self::with_standing(identity, profile, Standing::General, auditor)
    }

    /// Construct an undergraduate student.
    pub fn undergraduate(
        identity: Identity,
        profile: StudentProfile,
        undergraduate: UndergraduateProfile,
        auditor: &Auditor,
    ) -> Result<Self, Violation> {
        let standing = Standing::Undergraduate(Undergraduate::new(undergraduate));
        Self::with_standing(identity, profile, standing, auditor)
    }

    /// Construct a graduate student with both hour accumulators at zero.
    pub fn graduate(
        identity: Identity,
        profile: StudentProfile,
        graduate: GraduateProfile,
        auditor: &Auditor,
    ) -> Result<Self, Violation> {
        let standing = Standing::Graduate(Graduate::new(graduate));
        Self::with_standing(identity, profile, standing, auditor)
    }

    /// Construct a professor of the given rank.
    pub fn professor(
        identity: Identity,
        profile: ProfessorProfile,
        rank: Rank,
        auditor: &Auditor,
    ) -> Result<Self, Violation> {
        let identity = Self::validated(identity, auditor)?;
        let professor = Professor::new(&identity.name, profile, rank, auditor)?;
        Ok(Self::assemble(identity, Role::Professor(professor)))
    }

    fn with_standing(
        identity: Identity,
        profile: StudentProfile,
        standing: Standing,
        auditor: &Auditor,
    ) -> Result<Self, Violation> {
        // Identity rules run first, mirroring base-before-derived validation.
        let identity = Self::validated(identity, auditor)?;
        let student = Student::new(identity.id.clone(), profile, standing, auditor)?;
        Ok(Self::assemble(identity, Role::Student(student)))
    }

    fn validated(identity: Identity, auditor: &Auditor) -> Result<Identity, Violation> {
        match identity.validate() {
            Ok(()) => Ok(identity),
            Err(violation) => Err(auditor.flag(violation)),
        }
    }

    fn assemble(identity: Identity, role: Role) -> Self {
        let Identity {
            name,
            age,
            id,
            contact,
        } = identity;
        Self {
            name,
            age,
            id,
            contact,
            role,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn age(&self) -> u32 {
        self.age
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn contact(&self) -> &str {
        &self.contact
    }

    pub fn role(&self) -> &Role {
        &self.role
    }

    /// Student payload, when this person is a student.
    pub fn as_student(&self) -> Option<&Student> {
        match &self.role {
            Role::Student(student) => Some(student),
            _ => None,
        }
    }

    /// Mutable student payload, for enrollment and hour accumulation.
    pub fn as_student_mut(&mut self) -> Option<&mut Student> {
        match &mut self.role {
            Role::Student(student) => Some(student),
            _ => None,
        }
    }

    /// Professor payload, when this person is a professor.
    pub fn as_professor(&self) -> Option<&Professor> {
        match &self.role {
            Role::Professor(professor) => Some(professor),
            _ => None,
        }
    }

    /// Mutable graduate payload, when this person is a graduate student.
    pub fn as_graduate_mut(&mut self) -> Option<&mut Graduate> {
        self.as_student_mut().and_then(Student::as_graduate_mut)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn identity() -> Identity {
        Identity::new("Manjeet", 19, "GS001", "9876543210")
    }

    fn student_profile() -> StudentProfile {
        StudentProfile {
            enrollment_date: NaiveDate::from_ymd_opt(2021, 8, 15).unwrap(),
            program: "CS".into(),
            gpa: 3.9,
        }
    }

    #[test]
    fn valid_identity_constructs_without_audit_lines() {
        let (auditor, log) = Auditor::capture();
        let person = Person::unassigned(identity(), &auditor).unwrap();

        assert_eq!(person.name(), "Manjeet");
        assert_eq!(person.age(), 19);
        assert_eq!(person.id(), "GS001");
        assert_eq!(person.contact(), "9876543210");
        assert!(log.is_empty());
    }

    #[test]
    fn empty_identifier_is_fatal() {
        let (auditor, log) = Auditor::capture();
        let err =
            Person::unassigned(Identity::new("Manjeet", 19, "", "9876543210"), &auditor)
                .unwrap_err();

        assert_eq!(
            err,
            Violation::InvalidPersonData {
                name: "Manjeet".into(),
            }
        );
        assert_eq!(log.len(), 1);
    }

    #[test]
    fn short_contact_is_fatal() {
        let (auditor, log) = Auditor::capture();
        assert!(
            Person::unassigned(Identity::new("Manjeet", 19, "GS001", "123456789"), &auditor)
                .is_err()
        );
        assert_eq!(log.len(), 1);
    }

    #[test]
    fn ten_character_contact_is_the_boundary() {
        let (auditor, _log) = Auditor::capture();
        assert!(
            Person::unassigned(Identity::new("Manjeet", 19, "GS001", "0123456789"), &auditor)
                .is_ok()
        );
    }

    #[test]
    fn out_of_range_age_is_fatal() {
        let (auditor, log) = Auditor::capture();
        assert!(Person::unassigned(Identity::new("Manjeet", 0, "GS001", "9876543210"), &auditor)
            .is_err());
        assert!(
            Person::unassigned(Identity::new("Manjeet", 131, "GS001", "9876543210"), &auditor)
                .is_err()
        );
        assert_eq!(log.len(), 2);
    }

    #[test]
    fn empty_name_is_fatal() {
        let (auditor, _log) = Auditor::capture();
        assert!(
            Person::unassigned(Identity::new("", 19, "GS001", "9876543210"), &auditor).is_err()
        );
    }

    #[test]
    fn student_constructor_checks_identity_before_grade() {
        let (auditor, log) = Auditor::capture();
        let bad_identity = Identity::new("Manjeet", 19, "", "9876543210");
        let bad_profile = StudentProfile {
            gpa: 9.0,
            ..student_profile()
        };

        let err = Person::student(bad_identity, bad_profile, &auditor).unwrap_err();

        // Only the identity breach is raised; the grade is never reached.
        assert!(matches!(err, Violation::InvalidPersonData { .. }));
        assert_eq!(log.len(), 1);
    }

    #[test]
    fn graduate_constructor_attaches_graduate_standing() {
        let (auditor, _log) = Auditor::capture();
        let person = Person::graduate(
            identity(),
            student_profile(),
            GraduateProfile {
                research_topic: "AI".into(),
                advisor: "Dr. Krish".into(),
                thesis_title: "AI Optimization".into(),
            },
            &auditor,
        )
        .unwrap();

        assert_eq!(person.role().name(), "GraduateStudent");
        let student = person.as_student().unwrap();
        assert_eq!(student.student_id(), "GS001");
        assert_eq!(student.as_graduate().unwrap().teaching_hours(), 0);
    }

    #[test]
    fn role_names_cover_the_taxonomy() {
        let (auditor, _log) = Auditor::capture();
        let person = Person::unassigned(identity(), &auditor).unwrap();
        assert_eq!(person.role().name(), "Person");

        let student = Person::student(
            Identity::new("Asha", 20, "S002", "9876500000"),
            student_profile(),
            &auditor,
        )
        .unwrap();
        assert_eq!(student.role().name(), "Student");
    }

    #[test]
    fn person_roundtrips_through_serde() {
        let (auditor, _log) = Auditor::capture();
        let person = Person::graduate(
            identity(),
            student_profile(),
            GraduateProfile {
                research_topic: "AI".into(),
                advisor: "Dr. Krish".into(),
                thesis_title: "AI Optimization".into(),
            },
            &auditor,
        )
        .unwrap();

        let json = serde_json::to_string(&person).unwrap();
        let back: Person = serde_json::from_str(&json).unwrap();
        assert_eq!(person, back);
    }
}
