//! Output module for reporting extracted records
//!
//! This module handles:
//! - Rendering the truncated console table
//! - Computing and rendering year statistics
//! - Writing the full record set to a CSV file

mod csv_output;
pub mod stats;
mod table;
mod traits;

pub use csv_output::{write_csv, CsvOutputWriter, CSV_HEADER};
pub use stats::{compute_year_statistics, render_statistics, year_statistics, YearStatistics};
pub use table::{render_table, truncate_display};
pub use traits::{OutputError, OutputResult, OutputWriter};
