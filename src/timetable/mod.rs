//! Timetables and the degree program they belong to
//!
//! A schedule fetch does not reveal which cycle's catalog describes the
//! program: the service serves ambiguous IDs as winter. A timetable starts
//! [`ResolutionState::Unresolved`] when the program is missing from the
//! catalog it was served with, and is resolved at most once.

mod resolver;

pub use resolver::find_program;

use crate::model::{DegreeProgram, ProgramId, Schedule, SemesterCycle};
use serde::{Serialize, Serializer};

/// Whether the degree program of a timetable is known
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolutionState {
    Unresolved,
    Resolved(DegreeProgram),
}

impl ResolutionState {
    pub fn program(&self) -> Option<&DegreeProgram> {
        match self {
            Self::Unresolved => None,
            Self::Resolved(program) => Some(program),
        }
    }
}

/// A schedule together with its (possibly not yet known) degree program
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedTimetable {
    id: ProgramId,
    #[serde(rename = "degree_program", serialize_with = "serialize_state")]
    state: ResolutionState,
    fetched_cycle: SemesterCycle,
    #[serde(rename = "days")]
    schedule: Schedule,
    /// Set once both catalogs were searched without a match
    #[serde(skip)]
    unresolvable: bool,
}

impl ResolvedTimetable {
    /// Creates a timetable, resolved if `program` is known
    pub fn new(
        id: ProgramId,
        fetched_cycle: SemesterCycle,
        schedule: Schedule,
        program: Option<DegreeProgram>,
    ) -> Self {
        let state = match program {
            Some(program) => ResolutionState::Resolved(program),
            None => ResolutionState::Unresolved,
        };
        Self {
            id,
            state,
            fetched_cycle,
            schedule,
            unresolvable: false,
        }
    }

    pub fn id(&self) -> &ProgramId {
        &self.id
    }

    pub fn schedule(&self) -> &Schedule {
        &self.schedule
    }

    /// Cycle the schedule was served as
    pub fn fetched_cycle(&self) -> SemesterCycle {
        self.fetched_cycle
    }

    pub fn state(&self) -> &ResolutionState {
        &self.state
    }

    pub fn is_resolved(&self) -> bool {
        matches!(self.state, ResolutionState::Resolved(_))
    }

    pub fn program(&self) -> Option<&DegreeProgram> {
        self.state.program()
    }
}

fn serialize_state<S: Serializer>(state: &ResolutionState, serializer: S) -> Result<S::Ok, S::Error> {
    state.program().serialize(serializer)
}
