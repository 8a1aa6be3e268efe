//! Course grid walking
//!
//! Each body row is one weekday. A course cell spans as many hour columns as
//! its `colspan` says, while the document only counts it as one cell. The
//! walker keeps a per-row offset of the extra columns consumed so far and
//! projects every cell onto the absolute hour positions of the header.

use crate::model::CourseOccurrence;
use crate::model::Lesson;
use crate::parser::hours::HourGrid;
use crate::{ParseError, ParseResult};
use chrono::Weekday;
use scraper::{ElementRef, Html, Selector};
use std::sync::LazyLock;

static BODY_ROWS: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("tbody tr:not([style])").expect("valid selector"));

static ROW_CELLS: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("td").expect("valid selector"));

/// Class of the first cell in a row when it names the weekday
const WEEKDAY_MARKER: &str = "text-center";

/// The parts of a `<td>` the walker looks at
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawCell {
    pub weekday_marker: bool,
    pub title: Option<String>,
    pub text: String,
    pub colspan: Option<String>,
}

impl RawCell {
    fn from_element(element: ElementRef<'_>) -> Self {
        let value = element.value();
        Self {
            weekday_marker: value.classes().any(|class| class == WEEKDAY_MARKER),
            title: value.attr("title").map(str::to_string),
            text: element.text().collect(),
            colspan: value.attr("colspan").map(str::to_string),
        }
    }
}

/// Walks all body rows of a timetable page
///
/// Rows without a weekday marker continue the weekday of the row before.
/// The returned occurrences are in document order.
pub fn walk_grid(document: &Html, hours: &HourGrid) -> ParseResult<Vec<CourseOccurrence>> {
    let (_, courses) = document.select(&BODY_ROWS).try_fold(
        (None, Vec::new()),
        |(weekday, mut courses), row| {
            let cells: Vec<RawCell> = row.select(&ROW_CELLS).map(RawCell::from_element).collect();
            let (weekday, row_courses) = walk_row(&cells, weekday, hours)?;
            courses.extend(row_courses);
            Ok::<_, ParseError>((weekday, courses))
        },
    )?;

    tracing::debug!("Walked {} course cells", courses.len());

    Ok(courses)
}

/// Walks the cells of a single row
///
/// `weekday` is the weekday carried over from the previous row. Returns the
/// weekday in effect after this row along with the courses found in it.
pub fn walk_row(
    cells: &[RawCell],
    weekday: Option<Weekday>,
    hours: &HourGrid,
) -> ParseResult<(Option<Weekday>, Vec<CourseOccurrence>)> {
    let weekday = match cells.first() {
        Some(first) if first.weekday_marker => Some(parse_weekday(&first.text)?),
        _ => weekday,
    };

    let (_, courses) = cells
        .iter()
        .enumerate()
        .filter(|(i, cell)| !(*i == 0 && cell.weekday_marker))
        .try_fold((0, Vec::new()), |(offset, mut courses), (i, cell)| {
            let Some(title) = cell.title.as_deref() else {
                return Ok((offset, courses));
            };

            let span = parse_span(cell.colspan.as_deref())?;
            courses.push(place_course(cell, title, i.saturating_add(offset), span, weekday, hours)?);

            Ok::<_, ParseError>((offset.saturating_add(span - 1), courses))
        })?;

    Ok((weekday, courses))
}

/// Builds the occurrence for a cell whose left edge sits at `position`
fn place_course(
    cell: &RawCell,
    title: &str,
    position: usize,
    span: usize,
    weekday: Option<Weekday>,
    hours: &HourGrid,
) -> ParseResult<CourseOccurrence> {
    let mut title_fields = title.split('/');
    let (name_long, professor_long) = match (title_fields.next(), title_fields.next()) {
        (Some(name), Some(professor)) => (name.trim(), professor.trim()),
        _ => return Err(ParseError::TitleFields(title.to_string())),
    };

    let text = cell.text.trim();
    let text_fields: Vec<&str> = text.split_whitespace().collect();
    if text_fields.len() < 4 {
        return Err(ParseError::TextFields(text.to_string()));
    }
    let lesson = Lesson::from_code(text_fields[1])
        .ok_or_else(|| ParseError::UnknownLesson(text_fields[1].to_string()))?;

    let weekday = weekday.ok_or_else(|| ParseError::MissingWeekday(text.to_string()))?;

    let slot_at = |position: usize| {
        hours.get(position).ok_or_else(|| ParseError::MissingHourSlot {
            position,
            course: text.to_string(),
        })
    };
    // A span reaching past the header saturates and misses the grid
    let last = position.saturating_add(span - 1);
    let start = slot_at(position)?.start;
    let end = slot_at(last)?.end;

    if end <= start {
        return Err(ParseError::InvalidCourseHours(text.to_string()));
    }

    tracing::trace!(
        "{:?} column {}..={}: {}",
        weekday,
        position,
        last,
        text
    );

    Ok(CourseOccurrence {
        name_short: text_fields[0].to_string(),
        name_long: name_long.to_string(),
        professor_short: text_fields[2].to_string(),
        professor_long: professor_long.to_string(),
        room: text_fields[3..].join(" "),
        lesson,
        weekday,
        start,
        end,
    })
}

/// Parses a `colspan` value; a missing attribute counts as one column
///
/// Browsers treat `colspan="0"` as 1, and so does the walker.
fn parse_span(colspan: Option<&str>) -> ParseResult<usize> {
    match colspan {
        None => Ok(1),
        Some(raw) => raw
            .trim()
            .parse::<usize>()
            .map(|span| span.max(1))
            .map_err(|_| ParseError::ColumnSpan(raw.to_string())),
    }
}

/// Maps the German two-letter weekday abbreviations
fn parse_weekday(text: &str) -> ParseResult<Weekday> {
    match text.trim() {
        "Mo" => Ok(Weekday::Mon),
        "Di" => Ok(Weekday::Tue),
        "Mi" => Ok(Weekday::Wed),
        "Do" => Ok(Weekday::Thu),
        "Fr" => Ok(Weekday::Fri),
        "Sa" => Ok(Weekday::Sat),
        other => Err(ParseError::UnknownWeekday(other.to_string())),
    }
}
