//! Output module for rendering catalogs and timetables
//!
//! This module handles:
//! - Aligned plain-text tables for the terminal, optionally colored
//! - JSON output with stable field names

mod colors;
mod json;
mod table;

pub use json::write_json;
pub use table::{display_width, format_programs, format_schedule, weekday_name};
