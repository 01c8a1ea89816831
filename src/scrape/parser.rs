//! HTML parsing into a navigable document tree
//!
//! html5ever recovers from malformed markup, so parsing never fails; regions
//! it cannot make sense of simply produce no selector matches downstream.

use scraper::Html;

/// Parses HTML text into a document tree
///
/// # Example
///
/// ```
/// use chart_harvest::scrape::parse_document;
///
/// let document = parse_document("<ul><li class=\"entry\">One</li></ul>");
/// assert!(document.root_element().html().contains("entry"));
/// ```
pub fn parse_document(html: &str) -> Html {
    let document = Html::parse_document(html);

    if !document.errors.is_empty() {
        tracing::debug!(
            "Recovered from {} markup errors while parsing",
            document.errors.len()
        );
    }

    document
}

/// Parses raw bytes, replacing invalid UTF-8 sequences
pub fn parse_bytes(bytes: &[u8]) -> Html {
    parse_document(&String::from_utf8_lossy(bytes))
}
