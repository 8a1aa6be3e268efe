//! Fetch module for talking to the timetable endpoint
//!
//! This module contains:
//! - The `Transport` boundary and its `reqwest` implementation
//! - The orchestration that turns fetched pages into catalogs and timetables

mod orchestrator;
mod transport;

#[cfg(test)]
pub(crate) mod mock;

pub use orchestrator::{fetch_catalog, fetch_catalogs, fetch_timetable, CycleSelection};
pub use transport::{build_http_client, FormRequest, HttpTransport, Transport};
