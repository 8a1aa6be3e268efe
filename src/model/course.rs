//! Course occurrences and the hour slots they are placed on

use chrono::Weekday;
use serde::Serialize;
use std::fmt;
use std::time::Duration;

/// Kind of a course as abbreviated in the timetable cells
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Lesson {
    Lecture,
    Exercise,
    Internship,
    Seminar,
    SeminarLecture,
    LanguageLecture,
    Tutorial,
}

impl Lesson {
    /// Parses the lesson code of a timetable cell
    ///
    /// The page uses the German abbreviations (`V`, `Ü`, `SU`); the English
    /// ones are accepted as well.
    pub fn from_code(code: &str) -> Option<Self> {
        match code.to_uppercase().as_str() {
            "V" | "L" => Some(Self::Lecture),
            "Ü" | "U" | "E" => Some(Self::Exercise),
            "P" => Some(Self::Internship),
            "S" => Some(Self::Seminar),
            "SU" | "SL" => Some(Self::SeminarLecture),
            "F" => Some(Self::LanguageLecture),
            "T" => Some(Self::Tutorial),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Lecture => "Lecture",
            Self::Exercise => "Exercise",
            Self::Internship => "Internship",
            Self::Seminar => "Seminar",
            Self::SeminarLecture => "Seminar Lecture",
            Self::LanguageLecture => "Language Lecture",
            Self::Tutorial => "Tutorial",
        }
    }
}

impl fmt::Display for Lesson {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One column of the timetable header
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct HourSlot {
    pub column_index: usize,
    #[serde(with = "hour_format")]
    pub start: Duration,
    #[serde(with = "hour_format")]
    pub end: Duration,
}

impl HourSlot {
    /// Builds a slot from whole hours since midnight
    pub fn from_hours(column_index: usize, start: u64, end: u64) -> Self {
        Self {
            column_index,
            start: Duration::from_secs(start * 3600),
            end: Duration::from_secs(end * 3600),
        }
    }
}

/// A single course held on one weekday
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CourseOccurrence {
    pub name_short: String,
    pub name_long: String,
    pub professor_short: String,
    pub professor_long: String,
    pub room: String,
    pub lesson: Lesson,
    pub weekday: Weekday,
    #[serde(with = "hour_format")]
    pub start: Duration,
    #[serde(with = "hour_format")]
    pub end: Duration,
}

/// Serializes a duration since midnight as `"HH:MM"`
pub(crate) mod hour_format {
    use serde::Serializer;
    use std::time::Duration;

    pub fn to_string(duration: &Duration) -> String {
        let minutes = duration.as_secs() / 60;
        format!("{:02}:{:02}", minutes / 60, minutes % 60)
    }

    pub fn serialize<S: Serializer>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&to_string(duration))
    }
}
