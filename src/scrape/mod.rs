//! Scrape module for page fetching and record extraction
//!
//! This module contains the pipeline stages, in data-flow order:
//! - HTTP fetching with a browser-like client identity
//! - HTML parsing into a document tree
//! - Per-fragment record extraction
//! - Run coordination and reporting

mod coordinator;
mod extractor;
mod fetcher;
mod parser;
mod selectors;

pub use coordinator::{render_no_records, RunSummary, Scraper, NO_RECORDS_MESSAGE};
pub use extractor::{
    extract_all, extract_categories, extract_rating, extract_record, extract_title,
    extract_year, filter_categories, is_four_digit_year, strip_rank_prefix,
};
pub use fetcher::{build_http_client, fetch_page, FetchError, RawPage};
pub use parser::{parse_bytes, parse_document};
pub use selectors::SelectorSet;
