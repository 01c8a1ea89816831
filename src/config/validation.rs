use crate::config::types::{Config, FetchConfig, OutputConfig, SelectorConfig};
use crate::scrape::SelectorSet;
use crate::ConfigError;
use url::Url;

/// Validates the entire configuration
pub fn validate(config: &Config) -> Result<(), ConfigError> {
    validate_fetch_config(&config.fetch)?;
    validate_selector_config(&config.selectors)?;
    validate_output_config(&config.output)?;
    Ok(())
}

/// Validates request configuration
fn validate_fetch_config(config: &FetchConfig) -> Result<(), ConfigError> {
    let url = Url::parse(&config.url)
        .map_err(|e| ConfigError::InvalidUrl(format!("Invalid url '{}': {}", config.url, e)))?;

    if url.scheme() != "http" && url.scheme() != "https" {
        return Err(ConfigError::InvalidUrl(format!(
            "url '{}' must use http or https",
            config.url
        )));
    }

    if config.user_agent.trim().is_empty() {
        return Err(ConfigError::Validation(
            "user_agent cannot be empty".to_string(),
        ));
    }

    Ok(())
}

/// Validates that every selector compiles and the separator is usable
fn validate_selector_config(config: &SelectorConfig) -> Result<(), ConfigError> {
    if config.title_separator.is_empty() {
        return Err(ConfigError::Validation(
            "title_separator cannot be empty".to_string(),
        ));
    }

    SelectorSet::compile(config)?;

    Ok(())
}

/// Validates output configuration
fn validate_output_config(config: &OutputConfig) -> Result<(), ConfigError> {
    if config.csv_path.trim().is_empty() {
        return Err(ConfigError::Validation(
            "csv_path cannot be empty".to_string(),
        ));
    }

    if config.display_limit < 1 {
        return Err(ConfigError::Validation(format!(
            "display_limit must be >= 1, got {}",
            config.display_limit
        )));
    }

    Ok(())
}
