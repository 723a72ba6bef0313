//! Classrooms and the course timetable.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// A physical room that course slots are scheduled into.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Classroom {
    room: String,
}

impl Classroom {
    pub fn new(room: impl Into<String>) -> Self {
        Self { room: room.into() }
    }

    pub fn room(&self) -> &str {
        &self.room
    }
}

/// One scheduled slot: a time and a room.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ScheduleSlot {
    pub time: String,
    pub room: String,
}

/// Timetable mapping course codes to their slot.
///
/// Courses are referenced by code, not owned. Assigning a slot to a course
/// that already has one replaces it.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Schedule {
    slots: BTreeMap<String, ScheduleSlot>,
}

impl Schedule {
    pub fn new() -> Self {
        Self::default()
    }

    /// Assign a time slot and room to a course.
    pub fn assign_slot(
        &mut self,
        course_code: impl Into<String>,
        time: impl Into<String>,
        room: &Classroom,
    ) {
        self.slots.insert(
            course_code.into(),
            ScheduleSlot {
                time: time.into(),
                room: room.room().to_string(),
            },
        );
    }

    /// Slot assigned to a course, if any.
    pub fn slot(&self, course_code: &str) -> Option<&ScheduleSlot> {
        self.slots.get(course_code)
    }

    /// One line per scheduled course, ordered by course code.
    pub fn display_lines(&self) -> Vec<String> {
        self.slots
            .iter()
            .map(|(code, slot)| {
                format!("Course: {}, Time: {}, Room: {}", code, slot.time, slot.room)
            })
            .collect()
    }
}
