//! Campus bookkeeping: courses, departments, classrooms, the timetable,
//! and the owning registry.
//!
//! These are thin containers with no invariants of their own. Every
//! cross-entity relationship is a non-owning identifier reference resolved
//! through the [`University`] registry.

mod course;
mod department;
mod schedule;
mod university;

pub use course::Course;
pub use department::Department;
pub use schedule::{Classroom, Schedule, ScheduleSlot};
pub use university::University;
