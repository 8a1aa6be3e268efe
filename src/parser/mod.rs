//! Document parsers for the timetable pages
//!
//! This module turns raw HTML into typed data:
//! - `hours`: the header row, mapped to hour slots
//! - `grid`: the table body, walked into course occurrences
//! - `assemble`: occurrences grouped and ordered into a `Schedule`
//! - `catalog`: the degree program selection list
//!
//! All parsers are pure functions over a parsed document; a failure anywhere
//! discards the whole result.

mod assemble;
mod catalog;
mod grid;
mod hours;

pub use assemble::assemble;
pub use catalog::{detect_cycle, parse_catalog, parse_semester};
pub use grid::{walk_grid, walk_row, RawCell};
pub use hours::{parse_hour_range, parse_hours, HourGrid};

use crate::model::Schedule;
use crate::ParseResult;
use scraper::Html;

/// Parses a raw response body into a document tree
pub fn parse_document(html: &str) -> Html {
    Html::parse_document(html)
}

/// Extracts the complete weekday-ordered schedule from a timetable page
///
/// # Example
///
/// ```
/// use fbnd::parser::{parse_document, parse_schedule};
///
/// let html = r#"<table>
///   <thead><tr><th>Tag</th><th>08-10</th></tr></thead>
///   <tbody><tr>
///     <td class="text-center">Mo</td>
///     <td title="Analysis I/Prof. Mustermann">ANA1 V Must R101</td>
///   </tr></tbody>
/// </table>"#;
///
/// let schedule = parse_schedule(&parse_document(html)).unwrap();
/// assert_eq!(schedule.len(), 1);
/// ```
pub fn parse_schedule(document: &Html) -> ParseResult<Schedule> {
    let hours = parse_hours(document)?;
    let courses = walk_grid(document, &hours)?;
    Ok(assemble(courses))
}
