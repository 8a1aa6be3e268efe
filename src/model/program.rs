//! Degree programs and the semesters they belong to

use serde::Serialize;
use std::fmt;

/// Academic degree of a program
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Degree {
    Bachelor,
    Master,
}

impl Degree {
    /// Parses the degree from the label of its option group
    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "Bachelor" => Some(Self::Bachelor),
            "Master" => Some(Self::Master),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Bachelor => "Bachelor",
            Self::Master => "Master",
        }
    }
}

impl fmt::Display for Degree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Half of an academic year
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum SemesterCycle {
    Summer,
    Winter,
}

impl SemesterCycle {
    /// Returns the complementary cycle
    pub fn other(&self) -> Self {
        match self {
            Self::Summer => Self::Winter,
            Self::Winter => Self::Summer,
        }
    }

    /// Value of the `Lage` form field selecting this cycle
    pub fn form_value(&self) -> &'static str {
        match self {
            Self::Summer => "SS",
            Self::Winter => "WS",
        }
    }

    /// ID of the radio input (and the `for` of its label) for this cycle
    pub fn input_id(&self) -> &'static str {
        match self {
            Self::Summer => "inlineSommersemester",
            Self::Winter => "inlineWintersemester",
        }
    }

    /// Parses the German label prefix used on the page
    pub fn from_german(prefix: &str) -> Option<Self> {
        match prefix {
            "Sommer" => Some(Self::Summer),
            "Winter" => Some(Self::Winter),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Summer => "Summer",
            Self::Winter => "Winter",
        }
    }
}

impl fmt::Display for SemesterCycle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Semester a program entry describes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Semester {
    pub cycle: SemesterCycle,
    pub year: i32,
    pub term: u32,
}

/// Normalizes a raw program ID for comparison
///
/// Applying it twice yields the same result as applying it once.
pub fn normalize_id(raw: &str) -> String {
    raw.trim().to_uppercase()
}

/// Identifier of a degree program, always stored normalized
///
/// Two IDs compare equal regardless of the case they were created with.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct ProgramId(String);

impl ProgramId {
    pub fn new(raw: &str) -> Self {
        Self(normalize_id(raw))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ProgramId {
    fn from(raw: &str) -> Self {
        Self::new(raw)
    }
}

impl fmt::Display for ProgramId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A degree program for which a timetable is available
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DegreeProgram {
    pub id: ProgramId,
    pub name: String,
    pub degree: Degree,
    pub semester: Semester,
}
