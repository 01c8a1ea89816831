//! Chart-Harvest: a single-page catalog scraper
//!
//! This crate fetches one public listing page, extracts a title, year,
//! rating and genre tags from every list entry, prints a summary table and
//! writes the full record set to a CSV file.

pub mod config;
pub mod output;
pub mod record;
pub mod scrape;

use thiserror::Error;

/// Main error type for Chart-Harvest operations
#[derive(Debug, Error)]
pub enum ScrapeError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("HTTP client error: {0}")]
    Reqwest(#[from] reqwest::Error),
}

/// Configuration-specific errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid URL in config: {0}")]
    InvalidUrl(String),

    #[error("Invalid CSS selector for {field}: {message}")]
    InvalidSelector { field: String, message: String },
}

// Re-export commonly used types
pub use config::Config;
pub use record::{Record, RecordSet, NOT_AVAILABLE};
pub use scrape::{RunSummary, Scraper};
