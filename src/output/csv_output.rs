//! CSV output for extracted records

use crate::output::traits::{OutputResult, OutputWriter};
use crate::record::RecordSet;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Header row of the output file
pub const CSV_HEADER: [&str; 4] = ["title", "year", "rating", "categories"];

/// Writes records to a CSV file at a fixed path
#[derive(Debug, Clone)]
pub struct CsvOutputWriter {
    path: PathBuf,
}

impl CsvOutputWriter {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl OutputWriter for CsvOutputWriter {
    fn write_records(&self, records: &RecordSet) -> OutputResult<()> {
        let file = std::fs::File::create(&self.path)?;
        write_csv(file, records)?;
        tracing::debug!("Wrote {} rows to {}", records.len(), self.path.display());
        Ok(())
    }

    fn destination(&self) -> &Path {
        &self.path
    }
}

/// Writes the header and one row per record to any writer
///
/// Fields containing commas, quotes or newlines are quoted.
pub fn write_csv<W: Write>(writer: W, records: &RecordSet) -> OutputResult<()> {
    let mut writer = csv::Writer::from_writer(writer);

    writer.write_record(CSV_HEADER)?;
    for record in records {
        writer.write_record([
            record.title(),
            record.year(),
            record.rating(),
            record.categories(),
        ])?;
    }

    writer.flush()?;
    Ok(())
}
