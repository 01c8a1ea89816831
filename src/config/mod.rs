//! Configuration module for Chart-Harvest
//!
//! This module handles loading, parsing, and validating TOML configuration files.
//! Every key has a built-in default, so running without a file targets the
//! IMDb Top chart with the stock selector profile.
//!
//! # Example
//!
//! ```no_run
//! use chart_harvest::config::load_config;
//! use std::path::Path;
//!
//! let loaded = load_config(Path::new("harvest.toml")).unwrap();
//! println!("Writing records to: {}", loaded.config.output.csv_path);
//! ```

mod parser;
mod types;
mod validation;

// Re-export types
pub use types::{
    Config, FetchConfig, OutputConfig, SelectorConfig, DEFAULT_CSV_PATH, DEFAULT_DISPLAY_LIMIT,
    DEFAULT_URL, DEFAULT_USER_AGENT,
};

// Re-export parser functions
pub use parser::{content_hash, load_config, parse_config, LoadedConfig};
pub use validation::validate;
