//! Departments and their professor rosters.

use serde::{Deserialize, Serialize};

/// A department holding a non-owning roster of professor ids.
///
/// The department neither creates nor destroys professors; it only lists
/// them.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Department {
    name: String,
    professor_ids: Vec<String>,
}

impl Department {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            professor_ids: Vec::new(),
        }
    }

    /// Add a professor to the roster by id. Re-adding is a no-op.
    pub fn add_professor(&mut self, professor_id: impl Into<String>) {
        let professor_id = professor_id.into();
        if !self.professor_ids.contains(&professor_id) {
            self.professor_ids.push(professor_id);
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Professor ids on the roster, in insertion order.
    pub fn professors(&self) -> &[String] {
        &self.professor_ids
    }
}
