//! Header row parsing
//!
//! The first header cell labels the weekday column; every following cell
//! holds an hour range like `08-10`. Body cells are indexed by the same
//! positions, so position 0 stays reserved for the weekday column.

use crate::model::HourSlot;
use crate::{ParseError, ParseResult};
use scraper::{Html, Selector};
use std::sync::LazyLock;

static HEADER_CELLS: LazyLock<Selector> = LazyLock::new(|| {
    Selector::parse("thead tr th:not(:first-child)").expect("valid selector")
});

/// Latest hour a header range may name
const LAST_HOUR: u64 = 24;

/// Hour slots of a timetable, addressed by column position starting at 1
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HourGrid {
    slots: Vec<HourSlot>,
}

impl HourGrid {
    /// Builds a grid from `(start, end)` hour pairs in column order
    pub fn from_ranges(ranges: &[(u64, u64)]) -> Self {
        let slots = ranges
            .iter()
            .enumerate()
            .map(|(i, &(start, end))| HourSlot::from_hours(i + 1, start, end))
            .collect();
        Self { slots }
    }

    /// Returns the slot at `position`, where 1 is the first hour column
    pub fn get(&self, position: usize) -> Option<&HourSlot> {
        position
            .checked_sub(1)
            .and_then(|index| self.slots.get(index))
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &HourSlot> {
        self.slots.iter()
    }
}

/// Parses the header row of a timetable page into an [`HourGrid`]
///
/// # Errors
///
/// Returns [`ParseError::HourRange`] if a cell is not `<start>-<end>` with
/// integer hours between 0 and 24, and [`ParseError::HourOrder`] if a range does not end
/// after it starts.
pub fn parse_hours(document: &Html) -> ParseResult<HourGrid> {
    let slots = document
        .select(&HEADER_CELLS)
        .enumerate()
        .map(|(i, cell)| {
            let text = cell.text().collect::<String>();
            let (start, end) = parse_hour_range(&text)?;
            Ok(HourSlot::from_hours(i + 1, start, end))
        })
        .collect::<ParseResult<Vec<_>>>()?;

    tracing::debug!("Parsed {} hour slots from header", slots.len());

    Ok(HourGrid { slots })
}

/// Splits a header text like `"08-10"` into its start and end hour
pub fn parse_hour_range(text: &str) -> ParseResult<(u64, u64)> {
    let text = text.trim();
    let invalid = || ParseError::HourRange(text.to_string());

    let (start, end) = text.split_once('-').ok_or_else(invalid)?;
    let start: u64 = start.trim().parse().map_err(|_| invalid())?;
    let end: u64 = end.trim().parse().map_err(|_| invalid())?;
    if start > LAST_HOUR || end > LAST_HOUR {
        return Err(invalid());
    }

    if end <= start {
        return Err(ParseError::HourOrder(text.to_string()));
    }

    Ok((start, end))
}
