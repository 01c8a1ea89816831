//! Output writer trait and error types

use crate::record::RecordSet;
use std::path::Path;
use thiserror::Error;

/// Errors that can occur while persisting records
#[derive(Debug, Error)]
pub enum OutputError {
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for output operations
pub type OutputResult<T> = Result<T, OutputError>;

/// Trait for record writers
///
/// A writer receives the full record set once per run, after the console
/// table has been shown.
pub trait OutputWriter {
    /// Persists every record in order
    ///
    /// # Arguments
    ///
    /// * `records` - The records of this run
    fn write_records(&self, records: &RecordSet) -> OutputResult<()>;

    /// Where the records end up
    fn destination(&self) -> &Path;
}
