//! Fetch orchestration
//!
//! Issues the one or two requests an operation needs and hands each response
//! to the parsers. Listing both cycles runs the two catalog fetches
//! concurrently and is all-or-nothing.

use crate::fetch::transport::{FormRequest, Transport};
use crate::model::{DegreeProgram, ProgramId, SemesterCycle};
use crate::parser::{detect_cycle, parse_catalog, parse_document, parse_schedule};
use crate::timetable::ResolvedTimetable;
use crate::Result;

/// Which catalogs a listing covers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CycleSelection {
    Summer,
    Winter,
    Both,
}

impl CycleSelection {
    /// Maps mutually exclusive `--summer`/`--winter` flags; neither means both
    pub fn from_flags(summer: bool, winter: bool) -> Self {
        match (summer, winter) {
            (true, false) => Self::Summer,
            (false, true) => Self::Winter,
            _ => Self::Both,
        }
    }

    pub fn cycles(&self) -> Vec<SemesterCycle> {
        match self {
            Self::Summer => vec![SemesterCycle::Summer],
            Self::Winter => vec![SemesterCycle::Winter],
            Self::Both => vec![SemesterCycle::Summer, SemesterCycle::Winter],
        }
    }
}

/// Fetches and parses the program catalog of one cycle
pub async fn fetch_catalog<T: Transport>(
    transport: &T,
    cycle: SemesterCycle,
) -> Result<Vec<DegreeProgram>> {
    tracing::info!("Fetching {} catalog", cycle);

    let body = transport.fetch(&FormRequest::Catalog(cycle)).await?;
    let document = parse_document(&body);

    Ok(parse_catalog(&document, cycle)?)
}

/// Fetches the catalogs of the selected cycles
///
/// With [`CycleSelection::Both`] the two fetches run concurrently and both
/// run to completion. Any failure fails the whole listing; if both fail, the
/// summer error is returned. On success the summer programs come first.
pub async fn fetch_catalogs<T: Transport>(
    transport: &T,
    selection: CycleSelection,
) -> Result<Vec<DegreeProgram>> {
    match selection {
        CycleSelection::Summer => fetch_catalog(transport, SemesterCycle::Summer).await,
        CycleSelection::Winter => fetch_catalog(transport, SemesterCycle::Winter).await,
        CycleSelection::Both => {
            let (summer, winter) = tokio::join!(
                fetch_catalog(transport, SemesterCycle::Summer),
                fetch_catalog(transport, SemesterCycle::Winter),
            );

            match (summer, winter) {
                (Ok(mut programs), Ok(winter)) => {
                    programs.extend(winter);
                    Ok(programs)
                }
                (Err(e), winter) => {
                    if let Err(suppressed) = winter {
                        tracing::debug!("Ignoring winter catalog error: {}", suppressed);
                    }
                    Err(e)
                }
                (Ok(_), Err(e)) => Err(e),
            }
        }
    }
}

/// Fetches the timetable of a program
///
/// The timetable page embeds the catalog of the cycle it was rendered for,
/// so the program is looked up there first. If it is missing, the returned
/// timetable is unresolved and [`ResolvedTimetable::resolve`] fetches the
/// other cycle.
pub async fn fetch_timetable<T: Transport>(transport: &T, id: &ProgramId) -> Result<ResolvedTimetable> {
    tracing::info!("Fetching timetable for {}", id);

    let body = transport.fetch(&FormRequest::Timetable(id.clone())).await?;
    let document = parse_document(&body);

    let schedule = parse_schedule(&document)?;
    let cycle = detect_cycle(&document);
    let program = parse_catalog(&document, cycle)?
        .into_iter()
        .find(|program| &program.id == id);

    tracing::debug!(
        "Timetable for {} has {} courses, served as {} ({})",
        id,
        schedule.len(),
        cycle,
        if program.is_some() { "resolved" } else { "unresolved" }
    );

    Ok(ResolvedTimetable::new(id.clone(), cycle, schedule, program))
}
