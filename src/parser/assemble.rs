//! Schedule assembly from walked course cells

use crate::model::{CourseOccurrence, DaySchedule, Schedule};
use std::collections::BTreeMap;

/// Groups course occurrences into a [`Schedule`]
///
/// Days come out Monday first and only if they hold a course. Within a day
/// courses are ordered by start hour; courses starting at the same hour keep
/// the order they were walked in. An occurrence identical to one already on
/// the same day is dropped.
pub fn assemble(courses: Vec<CourseOccurrence>) -> Schedule {
    let mut by_day: BTreeMap<u32, DaySchedule> = BTreeMap::new();

    for course in courses {
        let day = by_day
            .entry(course.weekday.num_days_from_monday())
            .or_insert_with(|| DaySchedule {
                weekday: course.weekday,
                courses: Vec::new(),
            });

        if day.courses.contains(&course) {
            tracing::debug!("Dropping duplicate course {} on {:?}", course.name_short, course.weekday);
            continue;
        }
        day.courses.push(course);
    }

    let days = by_day
        .into_values()
        .map(|mut day| {
            // sort_by_key is stable
            day.courses.sort_by_key(|course| course.start);
            day
        })
        .collect();

    Schedule::from_days(days)
}
