//! HTTP fetcher implementation
//!
//! This module issues the single request of a run:
//! - Building the HTTP client with the configured client identity
//! - GET request for the listing page
//! - Classifying status and transport failures into `FetchError`
//!
//! There is no retry or redirect policy beyond reqwest defaults.

use crate::config::FetchConfig;
use reqwest::Client;
use thiserror::Error;

/// Errors that end a fetch
#[derive(Debug, Error)]
pub enum FetchError {
    /// The server answered with a non-success status
    #[error("HTTP {status} from {url}")]
    Status { url: String, status: u16 },

    /// The request never produced a response (DNS, connect, TLS, ...)
    #[error("Request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// The response body could not be read
    #[error("Failed to read body from {url}: {source}")]
    Body {
        url: String,
        #[source]
        source: reqwest::Error,
    },
}

impl FetchError {
    /// The URL the failed request was sent to
    pub fn url(&self) -> &str {
        match self {
            Self::Status { url, .. } | Self::Transport { url, .. } | Self::Body { url, .. } => url,
        }
    }
}

/// Raw content of a successfully fetched page
#[derive(Debug, Clone)]
pub struct RawPage {
    /// Final URL after redirects
    pub final_url: String,
    /// HTTP status code
    pub status_code: u16,
    /// Content-Type header value (empty if absent)
    pub content_type: String,
    /// Page body content
    pub body: String,
}

/// Builds an HTTP client that presents the configured client identity
///
/// # Example
///
/// ```no_run
/// use chart_harvest::config::FetchConfig;
/// use chart_harvest::scrape::build_http_client;
///
/// let client = build_http_client(&FetchConfig::default()).unwrap();
/// ```
pub fn build_http_client(config: &FetchConfig) -> Result<Client, reqwest::Error> {
    Client::builder()
        .user_agent(config.user_agent.as_str())
        .gzip(true)
        .brotli(true)
        .build()
}

/// Fetches a page and returns its body
///
/// | Condition | Result |
/// |-----------|--------|
/// | 2xx | `Ok(RawPage)` |
/// | any other status | `FetchError::Status` |
/// | connect/DNS/TLS/timeout | `FetchError::Transport` |
/// | body decode failure | `FetchError::Body` |
pub async fn fetch_page(client: &Client, url: &str) -> Result<RawPage, FetchError> {
    tracing::debug!("GET {}", url);

    let response = client
        .get(url)
        .send()
        .await
        .map_err(|source| FetchError::Transport {
            url: url.to_string(),
            source,
        })?;

    let status = response.status();
    if !status.is_success() {
        return Err(FetchError::Status {
            url: url.to_string(),
            status: status.as_u16(),
        });
    }

    let final_url = response.url().to_string();
    let content_type = response
        .headers()
        .get(reqwest::header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("")
        .to_string();

    if !content_type.contains("text/html") {
        tracing::warn!(
            "Expected HTML from {} but got Content-Type '{}'",
            final_url,
            content_type
        );
    }

    let body = response.text().await.map_err(|source| FetchError::Body {
        url: url.to_string(),
        source,
    })?;

    tracing::debug!(
        "Fetched {} ({} bytes, status {})",
        final_url,
        body.len(),
        status.as_u16()
    );

    Ok(RawPage {
        final_url,
        status_code: status.as_u16(),
        content_type,
        body,
    })
}
