//! The owning registry for the campus object graph.

use std::collections::BTreeMap;

use rust_decimal::Decimal;

use crate::people::Person;
use crate::validation::{Auditor, Violation};

use super::course::Course;
use super::department::Department;

/// Arena-style registry owning every entity on campus.
///
/// All entities of a kind live in one ordered map and are referenced
/// elsewhere by identifier, never by owning pointer, so no cross-entity
/// reference can dangle. The registry holds the [`Auditor`] and threads it
/// through every operation that can raise a violation.
///
/// # Example
///
/// ```rust
/// use chrono::NaiveDate;
/// use registrar::campus::{Course, University};
/// use registrar::people::{Identity, Person, StudentProfile};
/// use registrar::validation::Auditor;
///
/// let (auditor, _log) = Auditor::capture();
/// let mut university = University::new(auditor.clone());
///
/// let student = Person::student(
///     Identity::new("Asha", 20, "S001", "9876500000"),
///     StudentProfile {
///         enrollment_date: NaiveDate::from_ymd_opt(2021, 8, 15).unwrap(),
///         program: "CS".into(),
///         gpa: 3.2,
///     },
///     &auditor,
/// )
/// .unwrap();
///
/// university.admit(student);
/// university.add_course(Course::new("CS101", "P001"));
/// university.enroll("S001", Some("CS101")).unwrap();
///
/// let courses = university.person("S001").unwrap().as_student().unwrap().courses();
/// assert_eq!(courses, ["CS101".to_string()]);
/// ```
#[derive(Debug)]
pub struct University {
    auditor: Auditor,
    people: BTreeMap<String, Person>,
    courses: BTreeMap<String, Course>,
    departments: BTreeMap<String, Department>,
}

impl University {
    pub fn new(auditor: Auditor) -> Self {
        Self {
            auditor,
            people: BTreeMap::new(),
            courses: BTreeMap::new(),
            departments: BTreeMap::new(),
        }
    }

    /// The auditor this registry raises violations through.
    pub fn auditor(&self) -> &Auditor {
        &self.auditor
    }

    /// Register a person, keyed by id. Re-admitting replaces the entry.
    pub fn admit(&mut self, person: Person) {
        self.people.insert(person.id().to_string(), person);
    }

    /// Register a course, keyed by code.
    pub fn add_course(&mut self, course: Course) {
        self.courses.insert(course.code().to_string(), course);
    }

    /// Register a department, keyed by name.
    pub fn add_department(&mut self, department: Department) {
        self.departments
            .insert(department.name().to_string(), department);
    }

    pub fn person(&self, id: &str) -> Option<&Person> {
        self.people.get(id)
    }

    pub fn person_mut(&mut self, id: &str) -> Option<&mut Person> {
        self.people.get_mut(id)
    }

    pub fn course(&self, code: &str) -> Option<&Course> {
        self.courses.get(code)
    }

    pub fn department(&self, name: &str) -> Option<&Department> {
        self.departments.get(name)
    }

    pub fn department_mut(&mut self, name: &str) -> Option<&mut Department> {
        self.departments.get_mut(name)
    }

    /// Department names, ordered.
    pub fn list_departments(&self) -> Vec<&str> {
        self.departments.keys().map(String::as_str).collect()
    }

    /// Enroll a registered student in a registered course.
    ///
    /// Raises [`Violation::InvalidEnrollment`] when no course code is given
    /// (code `UNKNOWN`), when the code is not registered, or when
    /// `student_id` does not resolve to a student.
    pub fn enroll(&mut self, student_id: &str, course_code: Option<&str>) -> Result<(), Violation> {
        let course = match course_code {
            None => None,
            Some(code) => match self.courses.get(code) {
                Some(course) => Some(course),
                None => {
                    return Err(self
                        .auditor
                        .flag(enrollment_violation_for(student_id, Some(code))))
                }
            },
        };
        let Some(person) = self.people.get_mut(student_id) else {
            return Err(self
                .auditor
                .flag(enrollment_violation_for(student_id, course_code)));
        };
        let Some(student) = person.as_student_mut() else {
            return Err(self
                .auditor
                .flag(enrollment_violation_for(student_id, course_code)));
        };
        student.enroll_in(course, &self.auditor)
    }

    /// Compute the payment owed to a registered person.
    ///
    /// An unknown id raises [`Violation::PaymentNotDefined`] for that id.
    pub fn payment_for(&self, person_id: &str) -> Result<Decimal, Violation> {
        match self.people.get(person_id) {
            Some(person) => person.calculate_payment(&self.auditor),
            None => Err(self.auditor.flag(Violation::payment_not_defined(person_id))),
        }
    }
}

fn enrollment_violation_for(student_id: &str, course_code: Option<&str>) -> Violation {
    Violation::InvalidEnrollment {
        student_id: student_id.to_string(),
        course_code: course_code.unwrap_or(Violation::UNKNOWN_COURSE).to_string(),
    }
}
