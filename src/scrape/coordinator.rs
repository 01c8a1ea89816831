//! Scrape coordinator - one-shot pipeline orchestration
//!
//! This module drives a single run end to end:
//! - Courtesy pause before the request
//! - Fetching the listing page (or reading a saved snapshot)
//! - Parsing and record extraction
//! - Console table, CSV output and year statistics
//!
//! Every stage failure is converted to a log line plus a safe default, so a
//! run never aborts after setup succeeded.

use crate::config::{validate, Config};
use crate::output::{
    compute_year_statistics, render_statistics, render_table, CsvOutputWriter, OutputWriter,
    YearStatistics,
};
use crate::record::RecordSet;
use crate::scrape::{
    build_http_client, extract_all, fetch_page, parse_bytes, parse_document, SelectorSet,
};
use crate::ScrapeError;
use reqwest::Client;
use std::path::PathBuf;
use std::time::Duration;

/// Advisory shown when a run produced no records
pub const NO_RECORDS_MESSAGE: &str =
    "No movies were scraped. Please check your internet connection or try again later.";

/// Outcome of one run
#[derive(Debug, Clone, Default)]
pub struct RunSummary {
    /// All records in document order
    pub records: RecordSet,

    /// Year statistics, when at least one record has a numeric year
    pub statistics: Option<YearStatistics>,

    /// The file the records were written to, if the write succeeded
    pub output_path: Option<PathBuf>,

    /// Everything the run printed to stdout, in order
    pub console: String,
}

/// Main scraper structure
pub struct Scraper {
    config: Config,
    selectors: SelectorSet,
    client: Client,
}

impl Scraper {
    /// Creates a scraper from a configuration
    ///
    /// # Returns
    ///
    /// * `Ok(Scraper)` - Configuration is valid and the HTTP client was built
    /// * `Err(ScrapeError)` - Invalid configuration or client construction failed
    pub fn new(config: Config) -> Result<Self, ScrapeError> {
        validate(&config)?;
        let selectors = SelectorSet::compile(&config.selectors)?;
        let client = build_http_client(&config.fetch)?;

        Ok(Self {
            config,
            selectors,
            client,
        })
    }

    /// Waits, fetches the configured page and extracts its records
    ///
    /// A fetch failure is logged and yields an empty set.
    pub async fn fetch_records(&self) -> RecordSet {
        let delay = Duration::from_millis(self.config.fetch.pre_run_delay_ms);
        if !delay.is_zero() {
            tracing::debug!("Waiting {}ms before the request", delay.as_millis());
            tokio::time::sleep(delay).await;
        }

        let url = &self.config.fetch.url;
        tracing::info!("Fetching {}", url);

        match fetch_page(&self.client, url).await {
            Ok(page) => {
                tracing::info!(
                    "Fetched {} ({} bytes)",
                    page.final_url,
                    page.body.len()
                );
                self.extract_from_html(&page.body)
            }
            Err(e) => {
                tracing::error!(url = e.url(), "Error fetching the webpage: {}", e);
                RecordSet::new()
            }
        }
    }

    /// Parses HTML and extracts its records
    pub fn extract_from_html(&self, html: &str) -> RecordSet {
        let document = parse_document(html);
        extract_all(&document, &self.selectors)
    }

    /// Runs the full pipeline against the configured URL
    pub async fn run(&self) -> RunSummary {
        let records = self.fetch_records().await;
        let writer = CsvOutputWriter::new(&self.config.output.csv_path);
        self.report(records, &writer)
    }

    /// Runs the pipeline against a saved page instead of the network
    ///
    /// The bytes need not be valid UTF-8; invalid sequences are replaced
    /// before parsing.
    pub fn run_offline(&self, bytes: &[u8]) -> RunSummary {
        let document = parse_bytes(bytes);
        let records = extract_all(&document, &self.selectors);
        let writer = CsvOutputWriter::new(&self.config.output.csv_path);
        self.report(records, &writer)
    }

    /// Shows the table, writes the records and prints year statistics
    ///
    /// With no records only the advisory is printed and nothing is written.
    /// A write failure is logged; the table and statistics are still shown.
    /// The printed text is also kept in `RunSummary::console`.
    pub fn report(&self, records: RecordSet, writer: &dyn OutputWriter) -> RunSummary {
        let mut console = Console::default();

        if records.is_empty() {
            tracing::warn!("No list entries matched on the page");
            console.emit(render_no_records());
            return RunSummary {
                console: console.into_inner(),
                ..RunSummary::default()
            };
        }

        console.emit(format!("Successfully scraped {} movies!\n", records.len()));
        console.emit(render_table(&records, self.config.output.display_limit));

        let output_path = match writer.write_records(&records) {
            Ok(()) => {
                console.emit(format!(
                    "Data successfully saved to {}\n",
                    writer.destination().display()
                ));
                Some(writer.destination().to_path_buf())
            }
            Err(e) => {
                tracing::error!(
                    "Error saving to {}: {}",
                    writer.destination().display(),
                    e
                );
                None
            }
        };

        let statistics = compute_year_statistics(&records);
        match &statistics {
            Some(stats) => console.emit(render_statistics(stats)),
            None => tracing::debug!("No numeric years; statistics skipped"),
        }

        RunSummary {
            records,
            statistics,
            output_path,
            console: console.into_inner(),
        }
    }
}

/// Formats the advisory shown when a run produced no records
pub fn render_no_records() -> String {
    format!("{}\n", NO_RECORDS_MESSAGE)
}

/// Stdout that also keeps a copy of what was printed
#[derive(Default)]
struct Console {
    transcript: String,
}

impl Console {
    fn emit(&mut self, text: String) {
        print!("{}", text);
        self.transcript.push_str(&text);
    }

    fn into_inner(self) -> String {
        self.transcript
    }
}
