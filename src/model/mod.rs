//! Domain types shared by the parsers, the fetch layer and the presentation
//! layer
//!
//! # Components
//!
//! - `DegreeProgram`: a catalog entry with its normalized `ProgramId`
//! - `CourseOccurrence`: one course on one weekday within an hour range
//! - `Schedule`: occurrences grouped by weekday, Monday first

mod course;
mod program;
mod schedule;

// Re-export main types
pub use course::{CourseOccurrence, HourSlot, Lesson};
pub use program::{normalize_id, Degree, DegreeProgram, ProgramId, Semester, SemesterCycle};
pub use schedule::{DaySchedule, Schedule};

pub(crate) use course::hour_format;
