//! fbnd: timetables of FB03 as typed data
//!
//! This crate scrapes the dynamically rendered timetable pages of a single
//! faculty and turns them into degree programs and weekday-ordered course
//! schedules. The HTTP transport is a pluggable boundary; everything between
//! a raw document and a [`ResolvedTimetable`] lives here.

pub mod config;
pub mod fetch;
pub mod model;
pub mod output;
pub mod parser;
pub mod timetable;

use thiserror::Error;

/// Main error type for fbnd operations
#[derive(Debug, Error)]
pub enum FbndError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Parse error: {0}")]
    Parse(#[from] ParseError),

    #[error("Transport error: {0}")]
    Transport(#[from] TransportError),

    #[error("Invariant violated: {0}")]
    Invariant(#[from] InvariantViolation),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl FbndError {
    /// Returns true if the error signals upstream markup drift that retrying
    /// cannot fix
    pub fn is_fatal(&self) -> bool {
        matches!(self, Self::Invariant(_))
    }
}

/// Errors raised while reading a document whose structure does not match
/// what the timetable pages are known to look like
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("Hour range '{0}' is not of the form '<start>-<end>'")]
    HourRange(String),

    #[error("Hour range '{0}' does not end after it starts")]
    HourOrder(String),

    #[error("Column span '{0}' is not a non-negative integer")]
    ColumnSpan(String),

    #[error("Course title '{0}' does not contain '<name>/<professor>'")]
    TitleFields(String),

    #[error("Course text '{0}' does not contain '<name> <lesson> <professor> <room>'")]
    TextFields(String),

    #[error("Unknown lesson code '{0}'")]
    UnknownLesson(String),

    #[error("Unknown weekday abbreviation '{0}'")]
    UnknownWeekday(String),

    #[error("Course '{0}' appears before any weekday row")]
    MissingWeekday(String),

    #[error("No hour slot at column {position} for course '{course}'")]
    MissingHourSlot { position: usize, course: String },

    #[error("Course '{0}' does not end after it starts")]
    InvalidCourseHours(String),

    #[error("Degree program '{0}' has no ID attribute")]
    MissingProgramId(String),

    #[error("Degree program entry '{0}' does not match '<degree> <name> (<term>'")]
    ProgramPattern(String),

    #[error("Semester label '{0}' does not match '<cycle>semester <year>'")]
    SemesterLabel(String),
}

/// Errors from the outbound HTTP boundary, passed through unchanged
#[derive(Debug, Error)]
pub enum TransportError {
    #[error("HTTP error for {url}: {source}")]
    Http { url: String, source: reqwest::Error },

    #[error("Unexpected status {status} from {url}")]
    Status { url: String, status: u16 },

    #[error("{0}")]
    Other(String),
}

/// Logic violations that mean the upstream format changed under us
#[derive(Debug, Error, PartialEq, Eq)]
pub enum InvariantViolation {
    #[error("Degree program {id} exists in neither the summer nor the winter catalog")]
    UnresolvedProgram { id: String },
}

/// Configuration-specific errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid URL in config: {0}")]
    InvalidUrl(String),
}

/// Result type alias for fbnd operations
pub type Result<T> = std::result::Result<T, FbndError>;

/// Result type alias for document parsing
pub type ParseResult<T> = std::result::Result<T, ParseError>;

/// Result type alias for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

// Re-export commonly used types
pub use config::Config;
pub use fetch::{fetch_catalog, fetch_catalogs, fetch_timetable, CycleSelection, HttpTransport, Transport};
pub use model::{
    CourseOccurrence, DaySchedule, Degree, DegreeProgram, HourSlot, Lesson, ProgramId, Schedule,
    Semester, SemesterCycle,
};
pub use timetable::{ResolutionState, ResolvedTimetable};
