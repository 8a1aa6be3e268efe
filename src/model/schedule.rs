//! Weekday-ordered schedules

use crate::model::CourseOccurrence;
use chrono::Weekday;
use serde::Serialize;

/// All courses held on a single weekday, ordered by start hour
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DaySchedule {
    pub weekday: Weekday,
    pub courses: Vec<CourseOccurrence>,
}

/// Courses grouped by weekday
///
/// Days are ordered Monday first and only present when they hold at least
/// one course. Built by [`crate::parser::assemble`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Schedule {
    days: Vec<DaySchedule>,
}

impl Schedule {
    pub(crate) fn from_days(days: Vec<DaySchedule>) -> Self {
        Self { days }
    }

    pub fn days(&self) -> &[DaySchedule] {
        &self.days
    }

    /// Returns the day entry for `weekday`, if any course falls on it
    pub fn day(&self, weekday: Weekday) -> Option<&DaySchedule> {
        self.days.iter().find(|day| day.weekday == weekday)
    }

    /// Returns true if the schedule holds no course at all
    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    /// Total number of course occurrences across all days
    pub fn len(&self) -> usize {
        self.days.iter().map(|day| day.courses.len()).sum()
    }
}
