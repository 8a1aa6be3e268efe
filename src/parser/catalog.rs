//! Degree program catalog parsing
//!
//! The timetable page lists every program in a `<select>` with one
//! `<optgroup>` per degree:
//!
//! ```html
//! <select id="select_S">
//!     <optgroup label="Bachelor">
//!         <option value="<ID>">Bachelor <name> (<term> Semester)</option>
//!     </optgroup>
//!     <optgroup label="Master">
//!         <option value="<ID>">Master <name> (<term> Semester)</option>
//!     </optgroup>
//! </select>
//! ```
//!
//! The year comes from the label of the semester radio button elsewhere on
//! the same page.

use crate::model::{Degree, DegreeProgram, ProgramId, Semester, SemesterCycle};
use crate::{ParseError, ParseResult};
use regex::Regex;
use scraper::{ElementRef, Html, Selector};
use std::sync::LazyLock;

static PROGRAM_OPTIONS: LazyLock<Selector> = LazyLock::new(|| {
    Selector::parse(
        r#"#select_S > optgroup[label="Bachelor"] option, #select_S > optgroup[label="Master"] option"#,
    )
    .expect("valid selector")
});

static SEMESTER_LABELS: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("label[for]").expect("valid selector"));

static CHECKED_INPUTS: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("input[checked]").expect("valid selector"));

static PROGRAM_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(Bachelor|Master) +(.*?) +\((\d+)").expect("valid regex")
});

static SEMESTER_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(Winter|Sommer)semester (\d{4})").expect("valid regex")
});

/// Parses all degree programs listed on a page fetched for `cycle`
///
/// # Errors
///
/// Fails if the semester label for `cycle` is missing or malformed, if an
/// option has no `value` attribute, or if an option text does not match
/// `<degree> <name> (<term>`. Any of these means the page layout changed.
///
/// # Example
///
/// ```
/// use fbnd::model::{Degree, SemesterCycle};
/// use fbnd::parser::{parse_catalog, parse_document};
///
/// let html = r#"
///   <label for="inlineWintersemester">Wintersemester 2023/24</label>
///   <select id="select_S">
///     <optgroup label="Bachelor">
///       <option value="ab12">Bachelor Informatik  (3 Semester)</option>
///     </optgroup>
///   </select>"#;
///
/// let programs = parse_catalog(&parse_document(html), SemesterCycle::Winter).unwrap();
/// assert_eq!(programs[0].id.as_str(), "AB12");
/// assert_eq!(programs[0].degree, Degree::Bachelor);
/// ```
pub fn parse_catalog(document: &Html, cycle: SemesterCycle) -> ParseResult<Vec<DegreeProgram>> {
    let (cycle, year) = parse_semester(document, cycle)?;

    let programs = document
        .select(&PROGRAM_OPTIONS)
        .map(|option| parse_program(option, cycle, year))
        .collect::<ParseResult<Vec<_>>>()?;

    tracing::debug!(
        "Parsed {} degree programs for {} {}",
        programs.len(),
        cycle,
        year
    );

    Ok(programs)
}

/// Reads the cycle and year from the label of the semester radio button
/// belonging to `cycle`
pub fn parse_semester(document: &Html, cycle: SemesterCycle) -> ParseResult<(SemesterCycle, i32)> {
    let text = document
        .select(&SEMESTER_LABELS)
        .find(|label| label.value().attr("for") == Some(cycle.input_id()))
        .map(|label| label.text().collect::<String>())
        .unwrap_or_default();
    let text = text.trim();

    let invalid = || ParseError::SemesterLabel(text.to_string());
    let captures = SEMESTER_RE.captures(text).ok_or_else(invalid)?;
    let cycle = SemesterCycle::from_german(&captures[1]).ok_or_else(invalid)?;
    let year = captures[2].parse::<i32>().map_err(|_| invalid())?;

    Ok((cycle, year))
}

/// Returns the cycle a timetable page was rendered for
///
/// The service checks the summer radio button only when it served the
/// summer semester and falls back to winter otherwise.
pub fn detect_cycle(document: &Html) -> SemesterCycle {
    let summer = SemesterCycle::Summer.input_id();
    if document
        .select(&CHECKED_INPUTS)
        .any(|input| input.value().id() == Some(summer))
    {
        SemesterCycle::Summer
    } else {
        SemesterCycle::Winter
    }
}

fn parse_program(option: ElementRef<'_>, cycle: SemesterCycle, year: i32) -> ParseResult<DegreeProgram> {
    let text = option.text().collect::<String>();
    let text = text.trim();

    let id = option
        .value()
        .attr("value")
        .ok_or_else(|| ParseError::MissingProgramId(text.to_string()))?;

    let invalid = || ParseError::ProgramPattern(text.to_string());

    let degree = option
        .parent()
        .and_then(ElementRef::wrap)
        .and_then(|group| group.value().attr("label"))
        .and_then(Degree::from_label)
        .ok_or_else(invalid)?;

    let captures = PROGRAM_RE.captures(text).ok_or_else(invalid)?;
    let term = captures[3].parse::<u32>().map_err(|_| invalid())?;

    Ok(DegreeProgram {
        id: ProgramId::new(id),
        name: captures[2].trim().to_string(),
        degree,
        semester: Semester { cycle, year, term },
    })
}
