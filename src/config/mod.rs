//! Configuration module for fbnd
//!
//! This module handles loading, parsing, and validating the optional TOML
//! configuration file. Every key has a default, so running without a file
//! talks to the faculty's public timetable endpoint.
//!
//! # Example
//!
//! ```no_run
//! use fbnd::config::load_config;
//! use std::path::Path;
//!
//! let config = load_config(Path::new("fbnd.toml")).unwrap();
//! println!("Fetching from: {}", config.http.endpoint);
//! ```

mod parser;
mod types;
mod validation;

// Re-export types
pub use types::{Config, HttpConfig, OutputConfig, DEFAULT_ENDPOINT};

// Re-export parser functions
pub use parser::{load_config, load_config_or_default};
pub use validation::validate;
