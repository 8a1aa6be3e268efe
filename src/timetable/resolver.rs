//! Cycle resolution

use crate::fetch::{fetch_catalog, Transport};
use crate::model::{DegreeProgram, ProgramId};
use crate::timetable::{ResolutionState, ResolvedTimetable};
use crate::{InvariantViolation, Result};

/// Looks up a program by its normalized ID
pub fn find_program<'a>(catalog: &'a [DegreeProgram], id: &ProgramId) -> Option<&'a DegreeProgram> {
    catalog.iter().find(|program| &program.id == id)
}

impl ResolvedTimetable {
    /// Attaches the degree program, fetching the other cycle's catalog if
    /// needed
    ///
    /// A resolved timetable returns its program without any request. An
    /// unresolved one fetches the catalog of the cycle it was *not* served
    /// as, exactly once on success.
    ///
    /// # Errors
    ///
    /// Transport and parse errors of the catalog fetch are passed through and
    /// leave the timetable unresolved, so a later call fetches again. If the
    /// program is in neither catalog, [`InvariantViolation::UnresolvedProgram`]
    /// is returned; it means the page format changed, and every later call
    /// returns it again without a request.
    pub async fn resolve<T: Transport>(&mut self, transport: &T) -> Result<&DegreeProgram> {
        if let ResolutionState::Unresolved = self.state {
            if self.unresolvable {
                return Err(self.unresolved_error().into());
            }

            let other = self.fetched_cycle.other();
            tracing::warn!(
                "Program {} is not in the {} catalog, checking {}",
                self.id,
                self.fetched_cycle,
                other
            );

            let catalog = fetch_catalog(transport, other).await?;
            let Some(program) = find_program(&catalog, &self.id).cloned() else {
                tracing::error!("Program {} is in neither catalog", self.id);
                self.unresolvable = true;
                return Err(self.unresolved_error().into());
            };

            tracing::info!("Resolved {} as {} {}", self.id, program.degree, program.name);
            self.state = ResolutionState::Resolved(program);
        }

        self.state
            .program()
            .ok_or_else(|| self.unresolved_error().into())
    }

    fn unresolved_error(&self) -> InvariantViolation {
        InvariantViolation::UnresolvedProgram {
            id: self.id.to_string(),
        }
    }
}
