//! Compiled CSS selectors for one list entry

use crate::config::SelectorConfig;
use crate::ConfigError;
use scraper::Selector;

/// Selector profile compiled once per run
#[derive(Debug, Clone)]
pub struct SelectorSet {
    pub entry: Selector,
    pub title: Selector,
    pub title_separator: String,
    pub year_candidates: Vec<Selector>,
    pub year_fallback: Selector,
    pub rating: Selector,
    pub categories: Selector,
}

impl SelectorSet {
    /// Compiles every selector in the profile
    ///
    /// # Returns
    ///
    /// * `Ok(SelectorSet)` - All selectors compiled
    /// * `Err(ConfigError::InvalidSelector)` - Names the first field that failed
    pub fn compile(config: &SelectorConfig) -> Result<Self, ConfigError> {
        let year_candidates = config
            .year_candidates
            .iter()
            .map(|css| compile_one("year-candidates", css))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            entry: compile_one("entry", &config.entry)?,
            title: compile_one("title", &config.title)?,
            title_separator: config.title_separator.clone(),
            year_candidates,
            year_fallback: compile_one("year-fallback", &config.year_fallback)?,
            rating: compile_one("rating", &config.rating)?,
            categories: compile_one("categories", &config.categories)?,
        })
    }
}

fn compile_one(field: &str, css: &str) -> Result<Selector, ConfigError> {
    Selector::parse(css).map_err(|e| ConfigError::InvalidSelector {
        field: field.to_string(),
        message: e.to_string(),
    })
}
