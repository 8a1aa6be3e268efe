//! Plain-text tables
//!
//! Columns are padded by display width rather than by `char` count, so
//! names with umlauts or wide characters line up.

use crate::model::{hour_format, DegreeProgram, Schedule, Semester};
use crate::output::colors::{paint, BOLD, GREEN, UNDERLINE, WHITE};
use chrono::Weekday;
use std::fmt::Write;
use unicode_width::UnicodeWidthStr;

/// Number of terminal columns `text` occupies
pub fn display_width(text: &str) -> usize {
    UnicodeWidthStr::width(text)
}

/// Left-aligns `text` within `width` terminal columns
fn pad(text: &str, width: usize) -> String {
    let fill = width.saturating_sub(display_width(text));
    format!("{}{}", text, " ".repeat(fill))
}

fn column_width<'a>(header: &str, cells: impl Iterator<Item = &'a str>) -> usize {
    cells.map(display_width).fold(display_width(header), usize::max)
}

fn format_cycle(semester: &Semester) -> String {
    format!("{} {}", semester.cycle, semester.year)
}

fn format_term(semester: &Semester) -> String {
    format!("Semester {}", semester.term)
}

/// Full English name of a weekday
pub fn weekday_name(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}

/// Renders the program listing: `ID | Cycle | Semester | Degree | Name`
pub fn format_programs(programs: &[DegreeProgram], color: bool) -> String {
    let rows: Vec<[String; 5]> = programs
        .iter()
        .map(|p| {
            [
                p.id.to_string(),
                format_cycle(&p.semester),
                format_term(&p.semester),
                p.degree.to_string(),
                p.name.clone(),
            ]
        })
        .collect();

    let headers = ["ID", "Cycle", "Semester", "Degree", "Name"];
    let widths: Vec<usize> = headers
        .iter()
        .enumerate()
        .map(|(col, header)| column_width(header, rows.iter().map(|row| row[col].as_str())))
        .collect();

    let mut out = String::new();

    // Padding goes outside the escape codes so widths stay correct
    let header_line: Vec<String> = headers
        .iter()
        .enumerate()
        .map(|(col, header)| {
            let fill = " ".repeat(widths[col] - display_width(header));
            if col + 1 == headers.len() {
                paint(header, &[WHITE, BOLD], color)
            } else {
                format!("{}{}", paint(header, &[WHITE, BOLD], color), fill)
            }
        })
        .collect();
    let _ = writeln!(out, "{}", header_line.join(" | "));

    for row in &rows {
        let line: Vec<String> = row
            .iter()
            .enumerate()
            .map(|(col, cell)| {
                if col + 1 == row.len() {
                    cell.clone()
                } else {
                    pad(cell, widths[col])
                }
            })
            .collect();
        let _ = writeln!(out, "{}", line.join(" | "));
    }

    out
}

/// Renders a schedule day by day
///
/// Each day gets an underlined heading, highlighted when it is `today`,
/// followed by `HH - HH | name | lesson | professor | room` lines.
pub fn format_schedule(schedule: &Schedule, today: Option<Weekday>, color: bool) -> String {
    let mut out = String::new();

    for day in schedule.days() {
        let heading = if Some(day.weekday) == today {
            paint(weekday_name(day.weekday), &[GREEN, UNDERLINE, BOLD], color)
        } else {
            paint(weekday_name(day.weekday), &[WHITE, UNDERLINE, BOLD], color)
        };
        let _ = writeln!(out, "{}", heading);

        let name_width = column_width("", day.courses.iter().map(|c| c.name_short.as_str()));
        let lesson_width = column_width("", day.courses.iter().map(|c| c.lesson.as_str()));
        let professor_width =
            column_width("", day.courses.iter().map(|c| c.professor_short.as_str()));

        for course in &day.courses {
            let _ = writeln!(
                out,
                "{} - {} | {} | {} | {} | {}",
                &hour_format::to_string(&course.start)[..2],
                &hour_format::to_string(&course.end)[..2],
                pad(&course.name_short, name_width),
                pad(course.lesson.as_str(), lesson_width),
                pad(&course.professor_short, professor_width),
                course.room
            );
        }
    }

    out
}
