//! Layered rendering of person summaries.
//!
//! Each role level contributes exactly one line, most-base first: the
//! person line, then the student or professor line, then the concrete
//! standing's line. The labels and ordering are a contract — downstream
//! output composes on them.

use super::person::{Person, Role};
use super::professor::Professor;
use super::student::{Standing, Student};

impl Person {
    /// Deterministic multi-line summary, one line per role level.
    pub fn display_details(&self) -> String {
        self.detail_lines().join("\n")
    }

    /// Summary lines in layering order.
    pub fn detail_lines(&self) -> Vec<String> {
        let mut lines = vec![format!(
            "Name: {}, Age: {}, ID: {}, Contact: {}",
            self.name(),
            self.age(),
            self.id(),
            self.contact()
        )];
        match self.role() {
            Role::Unassigned => {}
            Role::Student(student) => student.push_detail_lines(&mut lines),
            Role::Professor(professor) => professor.push_detail_lines(&mut lines),
        }
        lines
    }
}

impl Student {
    pub(crate) fn push_detail_lines(&self, lines: &mut Vec<String>) {
        lines.push(format!(
            "Enrollment: {}, Program: {}, GPA: {}",
            self.enrollment_date(),
            self.program(),
            self.gpa()
        ));
        match self.standing() {
            Standing::General => {}
            Standing::Undergraduate(undergraduate) => lines.push(format!(
                "Major: {}, Minor: {}, Graduation: {}",
                undergraduate.major(),
                undergraduate.minor(),
                undergraduate.graduation_date()
            )),
            Standing::Graduate(graduate) => lines.push(format!(
                "Research Topic: {}, Advisor: {}, Thesis: {}",
                graduate.research_topic(),
                graduate.advisor(),
                graduate.thesis_title()
            )),
        }
    }
}

impl Professor {
    pub(crate) fn push_detail_lines(&self, lines: &mut Vec<String>) {
        lines.push(format!(
            "Dept: {}, Spec: {}, Hire Date: {}",
            self.department(),
            self.specialization(),
            self.hire_date()
        ));
    }
}
