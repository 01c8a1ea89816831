use serde::Deserialize;

/// Default listing page
pub const DEFAULT_URL: &str = "https://www.imdb.com/chart/top/";

/// Browser-like identity sent with the request
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) \
AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";

/// Default output file
pub const DEFAULT_CSV_PATH: &str = "movies_data.csv";

/// Default number of records shown in the console table
pub const DEFAULT_DISPLAY_LIMIT: usize = 10;

/// Main configuration structure for Chart-Harvest
///
/// Every section is optional; an empty file yields the built-in profile.
/// Unknown keys are rejected so a misspelled selector never falls back to
/// the stock one unnoticed.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub fetch: FetchConfig,
    #[serde(default)]
    pub selectors: SelectorConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

/// Request configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FetchConfig {
    /// Absolute URL of the listing page
    #[serde(default = "default_url")]
    pub url: String,

    /// Client identity sent as the User-Agent header
    #[serde(rename = "user-agent", default = "default_user_agent")]
    pub user_agent: String,

    /// Courtesy pause before the request (milliseconds)
    #[serde(rename = "pre-run-delay-ms", default = "default_pre_run_delay_ms")]
    pub pre_run_delay_ms: u64,
}

/// CSS selectors describing one list entry and its fields
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SelectorConfig {
    /// Container of one catalog item
    #[serde(default = "default_entry")]
    pub entry: String,

    /// Heading holding "<rank><separator><title>"
    #[serde(default = "default_title")]
    pub title: String,

    /// Separator between the positional prefix and the title
    #[serde(rename = "title-separator", default = "default_title_separator")]
    pub title_separator: String,

    /// Elements scanned in order for a four-digit year
    #[serde(rename = "year-candidates", default = "default_year_candidates")]
    pub year_candidates: Vec<String>,

    /// Secondary metadata element used verbatim when no year is found
    #[serde(rename = "year-fallback", default = "default_year_fallback")]
    pub year_fallback: String,

    /// Element holding the rating text
    #[serde(default = "default_rating")]
    pub rating: String,

    /// Inline list items holding genre tags
    #[serde(default = "default_categories")]
    pub categories: String,
}

/// Output configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OutputConfig {
    /// Path of the CSV file
    #[serde(rename = "csv-path", default = "default_csv_path")]
    pub csv_path: String,

    /// Number of records printed in the console table
    #[serde(rename = "display-limit", default = "default_display_limit")]
    pub display_limit: usize,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            url: default_url(),
            user_agent: default_user_agent(),
            pre_run_delay_ms: default_pre_run_delay_ms(),
        }
    }
}

impl Default for SelectorConfig {
    fn default() -> Self {
        Self {
            entry: default_entry(),
            title: default_title(),
            title_separator: default_title_separator(),
            year_candidates: default_year_candidates(),
            year_fallback: default_year_fallback(),
            rating: default_rating(),
            categories: default_categories(),
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            csv_path: default_csv_path(),
            display_limit: default_display_limit(),
        }
    }
}

fn default_url() -> String {
    DEFAULT_URL.to_string()
}

fn default_user_agent() -> String {
    DEFAULT_USER_AGENT.to_string()
}

fn default_pre_run_delay_ms() -> u64 {
    1000
}

fn default_entry() -> String {
    "li.ipc-metadata-list-summary-item".to_string()
}

fn default_title() -> String {
    "h3.ipc-title__text".to_string()
}

fn default_title_separator() -> String {
    ". ".to_string()
}

fn default_year_candidates() -> Vec<String> {
    vec!["span.sc-b0691f29-8".to_string()]
}

fn default_year_fallback() -> String {
    "span.cli-title-metadata-item".to_string()
}

fn default_rating() -> String {
    "span.ipc-rating-star".to_string()
}

fn default_categories() -> String {
    "span.ipc-inline-list__item".to_string()
}

fn default_csv_path() -> String {
    DEFAULT_CSV_PATH.to_string()
}

fn default_display_limit() -> usize {
    DEFAULT_DISPLAY_LIMIT
}
