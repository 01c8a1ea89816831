use crate::config::types::Config;
use crate::config::validation::validate;
use crate::ConfigError;
use sha2::{Digest, Sha256};
use std::path::{Path, PathBuf};

/// A validated configuration together with the file it came from
#[derive(Debug, Clone)]
pub struct LoadedConfig {
    pub config: Config,

    /// Path the profile was read from
    pub path: PathBuf,

    /// Hex SHA-256 of the exact text that was parsed
    ///
    /// Logged at startup so a run can be matched to the selector profile it
    /// used.
    pub hash: String,
}

/// Reads, parses and validates a configuration file
///
/// The file is read once; the hash covers the same text the config was
/// parsed from. Missing sections and keys take their built-in defaults.
///
/// # Returns
///
/// * `Ok(LoadedConfig)` - Valid configuration and its content hash
/// * `Err(ConfigError)` - Failed to read, parse, or validate the file
///
/// # Example
///
/// ```no_run
/// use std::path::Path;
/// use chart_harvest::config::load_config;
///
/// let loaded = load_config(Path::new("harvest.toml")).unwrap();
/// println!("Target: {} (profile {})", loaded.config.fetch.url, loaded.hash);
/// ```
pub fn load_config(path: &Path) -> Result<LoadedConfig, ConfigError> {
    let content = std::fs::read_to_string(path)?;
    let config = parse_config(&content)?;

    Ok(LoadedConfig {
        config,
        path: path.to_path_buf(),
        hash: content_hash(&content),
    })
}

/// Parses and validates configuration from TOML text
pub fn parse_config(content: &str) -> Result<Config, ConfigError> {
    let config: Config = toml::from_str(content)?;
    validate(&config)?;
    Ok(config)
}

/// Hex-encoded SHA-256 of configuration text
pub fn content_hash(content: &str) -> String {
    hex::encode(Sha256::digest(content.as_bytes()))
}
