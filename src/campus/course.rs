//! Course offerings.

use serde::{Deserialize, Serialize};

/// A course offering, taught by exactly one professor.
///
/// The instructor is referenced by person id; a course never owns the
/// professor's lifetime.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Course {
    code: String,
    instructor_id: String,
}

impl Course {
    pub fn new(code: impl Into<String>, instructor_id: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            instructor_id: instructor_id.into(),
        }
    }

    pub fn code(&self) -> &str {
        &self.code
    }

    pub fn instructor_id(&self) -> &str {
        &self.instructor_id
    }
}
