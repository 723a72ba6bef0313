//! Student roles: the base enrollment record plus undergraduate and
//! graduate standings.

use std::ops::RangeInclusive;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::campus::Course;
use crate::validation::{Auditor, Violation};

/// GPA scale accepted at construction.
pub const GPA_RANGE: RangeInclusive<f64> = 0.0..=4.0;

/// Fields required to register any student.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StudentProfile {
    pub enrollment_date: NaiveDate,
    pub program: String,
    pub gpa: f64,
}

/// Extra fields declared for an undergraduate standing.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct UndergraduateProfile {
    pub major: String,
    pub minor: String,
    pub graduation_date: NaiveDate,
}

/// Extra fields declared for a graduate standing.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GraduateProfile {
    pub research_topic: String,
    pub advisor: String,
    pub thesis_title: String,
}

/// Student payload attached to a person's role.
///
/// Construction validates the GPA into [`GPA_RANGE`] atomically; no student
/// with an out-of-range GPA ever exists. The course list holds course codes
/// only — a student references courses, it does not own them.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Student {
    student_id: String,
    enrollment_date: NaiveDate,
    program: String,
    gpa: f64,
    courses: Vec<String>,
    standing: Standing,
}

/// Closed set of student standings.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum Standing {
    /// Enrolled without a declared undergraduate or graduate track.
    General,
    Undergraduate(Undergraduate),
    Graduate(Graduate),
}

impl Standing {
    /// Standing name for display and diagnostics.
    pub fn name(&self) -> &'static str {
        match self {
            Self::General => "Student",
            Self::Undergraduate(_) => "UndergraduateStudent",
            Self::Graduate(_) => "GraduateStudent",
        }
    }
}

/// Undergraduate-specific fields. No extra invariants.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Undergraduate {
    major: String,
    minor: String,
    graduation_date: NaiveDate,
}

impl Undergraduate {
    pub(crate) fn new(profile: UndergraduateProfile) -> Self {
        Self {
            major: profile.major,
            minor: profile.minor,
            graduation_date: profile.graduation_date,
        }
    }

    pub fn major(&self) -> &str {
        &self.major
    }

    pub fn minor(&self) -> &str {
        &self.minor
    }

    pub fn graduation_date(&self) -> NaiveDate {
        self.graduation_date
    }
}

/// Graduate-specific fields plus the two assistantship-hour accumulators.
///
/// The accumulators start at zero and only grow: increments are unsigned,
/// so a negative delta is unrepresentable, and no operation decrements or
/// resets them.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Graduate {
    research_topic: String,
    advisor: String,
    thesis_title: String,
    teaching_hours: u32,
    research_hours: u32,
}

impl Graduate {
    pub(crate) fn new(profile: GraduateProfile) -> Self {
        Self {
            research_topic: profile.research_topic,
            advisor: profile.advisor,
            thesis_title: profile.thesis_title,
            teaching_hours: 0,
            research_hours: 0,
        }
    }

    /// Add teaching-assistant hours to the accumulator.
    pub fn add_teaching_hours(&mut self, hours: u32) {
        self.teaching_hours += hours;
    }

    /// Add research-assistant hours to the accumulator.
    pub fn add_research_hours(&mut self, hours: u32) {
        self.research_hours += hours;
    }

    pub fn teaching_hours(&self) -> u32 {
        self.teaching_hours
    }

    pub fn research_hours(&self) -> u32 {
        self.research_hours
    }

    pub fn research_topic(&self) -> &str {
        &self.research_topic
    }

    pub fn advisor(&self) -> &str {
        &self.advisor
    }

    pub fn thesis_title(&self) -> &str {
        &self.thesis_title
    }
}

impl Student {
    /// Validate and build the student payload.
    ///
    /// Fails with [`Violation::InvalidGrade`] carrying the exact offending
    /// GPA when it lies outside [`GPA_RANGE`].
    pub(crate) fn new(
        student_id: String,
        profile: StudentProfile,
        standing: Standing,
        auditor: &Auditor,
    ) -> Result<Self, Violation> {
        if !GPA_RANGE.contains(&profile.gpa) {
            return Err(auditor.flag(Violation::InvalidGrade {
                student_id,
                gpa: profile.gpa,
            }));
        }
        Ok(Self {
            student_id,
            enrollment_date: profile.enrollment_date,
            program: profile.program,
            gpa: profile.gpa,
            courses: Vec::new(),
            standing,
        })
    }

    /// Enroll in a course by reference.
    ///
    /// An absent reference raises [`Violation::InvalidEnrollment`] with
    /// course code [`Violation::UNKNOWN_COURSE`] and leaves the course list
    /// unchanged. Re-enrolling in a course already on the list is an
    /// idempotent no-op.
    pub fn enroll_in(
        &mut self,
        course: Option<&Course>,
        auditor: &Auditor,
    ) -> Result<(), Violation> {
        let Some(course) = course else {
            return Err(auditor.flag(Violation::InvalidEnrollment {
                student_id: self.student_id.clone(),
                course_code: Violation::UNKNOWN_COURSE.to_string(),
            }));
        };
        if !self.courses.iter().any(|code| code == course.code()) {
            self.courses.push(course.code().to_string());
        }
        Ok(())
    }

    /// Identifier of the person holding this student role.
    pub fn student_id(&self) -> &str {
        &self.student_id
    }

    pub fn enrollment_date(&self) -> NaiveDate {
        self.enrollment_date
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    pub fn gpa(&self) -> f64 {
        self.gpa
    }

    /// Course codes this student is enrolled in, in enrollment order.
    pub fn courses(&self) -> &[String] {
        &self.courses
    }

    pub fn standing(&self) -> &Standing {
        &self.standing
    }

    /// Graduate payload, when this student holds a graduate standing.
    pub fn as_graduate(&self) -> Option<&Graduate> {
        match &self.standing {
            Standing::Graduate(graduate) => Some(graduate),
            _ => None,
        }
    }

    /// Mutable graduate payload, for accumulating assistantship hours.
    pub fn as_graduate_mut(&mut self) -> Option<&mut Graduate> {
        match &mut self.standing {
            Standing::Graduate(graduate) => Some(graduate),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn profile(gpa: f64) -> StudentProfile {
        StudentProfile {
            enrollment_date: NaiveDate::from_ymd_opt(2021, 8, 15).unwrap(),
            program: "CS".into(),
            gpa,
        }
    }

    fn graduate_student(auditor: &Auditor) -> Student {
        Student::new(
            "GS001".into(),
            profile(3.9),
            Standing::Graduate(Graduate::new(GraduateProfile {
                research_topic: "AI".into(),
                advisor: "Dr. Krish".into(),
                thesis_title: "AI Optimization".into(),
            })),
            auditor,
        )
        .unwrap()
    }

    #[test]
    fn in_range_gpa_roundtrips_unchanged() {
        let (auditor, log) = Auditor::capture();
        let student = Student::new("S1".into(), profile(3.9), Standing::General, &auditor).unwrap();
        assert_eq!(student.gpa(), 3.9);
        assert!(log.is_empty());
    }

    #[test]
    fn out_of_range_gpa_fails_with_offending_value() {
        let (auditor, log) = Auditor::capture();
        let err = Student::new("S1".into(), profile(4.5), Standing::General, &auditor).unwrap_err();

        assert_eq!(
            err,
            Violation::InvalidGrade {
                student_id: "S1".into(),
                gpa: 4.5,
            }
        );
        assert_eq!(log.len(), 1);
    }

    #[test]
    fn gpa_bounds_are_inclusive() {
        let (auditor, _log) = Auditor::capture();
        assert!(Student::new("S1".into(), profile(0.0), Standing::General, &auditor).is_ok());
        assert!(Student::new("S2".into(), profile(4.0), Standing::General, &auditor).is_ok());
        assert!(Student::new("S3".into(), profile(-0.1), Standing::General, &auditor).is_err());
    }

    #[test]
    fn enrolling_absent_course_reports_unknown_and_leaves_list_unchanged() {
        let (auditor, log) = Auditor::capture();
        let mut student = graduate_student(&auditor);

        let err = student.enroll_in(None, &auditor).unwrap_err();

        assert_eq!(
            err,
            Violation::InvalidEnrollment {
                student_id: "GS001".into(),
                course_code: "UNKNOWN".into(),
            }
        );
        assert!(student.courses().is_empty());
        assert_eq!(log.len(), 1);
    }

    #[test]
    fn enrollment_is_idempotent() {
        let (auditor, log) = Auditor::capture();
        let mut student = graduate_student(&auditor);
        let course = Course::new("CS101", "P001");

        student.enroll_in(Some(&course), &auditor).unwrap();
        student.enroll_in(Some(&course), &auditor).unwrap();

        assert_eq!(student.courses(), ["CS101".to_string()]);
        assert!(log.is_empty());
    }

    #[test]
    fn hour_accumulators_are_monotonic() {
        let (auditor, _log) = Auditor::capture();
        let mut student = graduate_student(&auditor);
        let graduate = student.as_graduate_mut().unwrap();

        graduate.add_teaching_hours(10);
        graduate.add_teaching_hours(5);
        graduate.add_research_hours(15);

        let graduate = student.as_graduate().unwrap();
        assert_eq!(graduate.teaching_hours(), 15);
        assert_eq!(graduate.research_hours(), 15);

        // Reads never reset the accumulators.
        assert_eq!(graduate.teaching_hours(), 15);
    }

    #[test]
    fn general_student_has_no_graduate_payload() {
        let (auditor, _log) = Auditor::capture();
        let mut student =
            Student::new("S1".into(), profile(3.0), Standing::General, &auditor).unwrap();
        assert!(student.as_graduate().is_none());
        assert!(student.as_graduate_mut().is_none());
    }

    #[test]
    fn standing_names_are_stable() {
        assert_eq!(Standing::General.name(), "Student");
        assert_eq!(
            Standing::Undergraduate(Undergraduate::new(UndergraduateProfile {
                major: "CS".into(),
                minor: "Math".into(),
                graduation_date: NaiveDate::from_ymd_opt(2025, 5, 30).unwrap(),
            }))
            .name(),
            "UndergraduateStudent"
        );
    }
}
