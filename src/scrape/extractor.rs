//! Record extraction from list-entry fragments
//!
//! This module turns a parsed listing page into a `RecordSet`:
//! - Selecting every list-entry fragment in document order
//! - Deriving title, year, rating and categories per fragment
//!
//! Each field is extracted independently and falls back to `N/A` on its own,
//! so every matched fragment produces exactly one record, even an empty
//! placeholder.

use crate::record::{Record, RecordSet};
use crate::scrape::SelectorSet;
use scraper::{ElementRef, Html, Selector};

/// One way of deriving a year from a fragment
type YearStrategy = for<'a> fn(ElementRef<'a>, &SelectorSet) -> Option<String>;

/// Year strategies in priority order; the first non-empty result wins
const YEAR_STRATEGIES: [YearStrategy; 2] = [year_from_candidates, year_from_fallback];

/// Extracts a record from every list entry in the document
///
/// Zero matching fragments yields an empty set; whether that is fatal is the
/// caller's decision.
///
/// # Example
///
/// ```
/// use chart_harvest::config::SelectorConfig;
/// use chart_harvest::scrape::{extract_all, parse_document, SelectorSet};
///
/// let html = r#"<ul><li class="ipc-metadata-list-summary-item">
///     <h3 class="ipc-title__text">1. Heat</h3>
/// </li></ul>"#;
/// let selectors = SelectorSet::compile(&SelectorConfig::default()).unwrap();
/// let records = extract_all(&parse_document(html), &selectors);
/// assert_eq!(records.len(), 1);
/// assert_eq!(records.as_slice()[0].title(), "Heat");
/// ```
pub fn extract_all(document: &Html, selectors: &SelectorSet) -> RecordSet {
    let mut records = RecordSet::new();
    for (index, fragment) in document.select(&selectors.entry).enumerate() {
        records.push(extract_record(index, fragment, selectors));
    }

    tracing::debug!("Extracted {} records", records.len());
    records
}

/// Derives a record from one list-entry fragment
///
/// Never fails: a field that cannot be found becomes `N/A`, and a fragment
/// with nothing to extract yields a record that is `N/A` throughout.
pub fn extract_record(index: usize, fragment: ElementRef<'_>, selectors: &SelectorSet) -> Record {
    let title = extract_title(fragment, &selectors.title, &selectors.title_separator);
    let year = extract_year(fragment, selectors);
    let rating = extract_rating(fragment, &selectors.rating);
    let categories = extract_categories(fragment, &selectors.categories);

    let record = Record::new(title, year, rating, categories);
    if record.is_blank() {
        tracing::debug!("Entry #{} matched no fields; kept as N/A", index);
    } else {
        tracing::trace!("Entry #{}: {:?}", index, record);
    }

    record
}

/// Extracts the title from the heading, dropping its positional prefix
///
/// Returns `None` if the heading or the separator is missing.
pub fn extract_title(
    fragment: ElementRef<'_>,
    heading: &Selector,
    separator: &str,
) -> Option<String> {
    let text = fragment.select(heading).next().map(element_text)?;
    strip_rank_prefix(&text, separator)
}

/// Removes everything up to and including the first `separator`
///
/// `"1. Inception"` becomes `"Inception"`; text without the separator yields
/// `None` rather than the raw heading.
pub fn strip_rank_prefix(text: &str, separator: &str) -> Option<String> {
    let (_, rest) = text.split_once(separator)?;
    let rest = rest.trim();
    if rest.is_empty() {
        None
    } else {
        Some(rest.to_string())
    }
}

/// Runs the year strategies in order and returns the first non-empty result
pub fn extract_year(fragment: ElementRef<'_>, selectors: &SelectorSet) -> Option<String> {
    YEAR_STRATEGIES
        .iter()
        .find_map(|strategy| strategy(fragment, selectors).filter(|year| !year.is_empty()))
}

/// First candidate element whose text is exactly four digits
fn year_from_candidates(fragment: ElementRef<'_>, selectors: &SelectorSet) -> Option<String> {
    selectors
        .year_candidates
        .iter()
        .flat_map(|selector| fragment.select(selector))
        .map(element_text)
        .map(|text| text.trim().to_string())
        .find(|text| is_four_digit_year(text))
}

/// Text of the secondary metadata element, taken verbatim
///
/// Whitespace-only text counts as absent.
fn year_from_fallback(fragment: ElementRef<'_>, selectors: &SelectorSet) -> Option<String> {
    fragment
        .select(&selectors.year_fallback)
        .next()
        .map(element_text)
        .filter(|text| !text.trim().is_empty())
}

/// Returns true if `text` is exactly four ASCII digits
pub fn is_four_digit_year(text: &str) -> bool {
    text.len() == 4 && text.bytes().all(|b| b.is_ascii_digit())
}

/// Leading token of the rating element, e.g. `"9.3"` from `"9.3 (2.9M)"`
pub fn extract_rating(fragment: ElementRef<'_>, rating: &Selector) -> Option<String> {
    let text = fragment.select(rating).next().map(element_text)?;
    text.split_whitespace().next().map(str::to_string)
}

/// Collects the genre tags of a fragment
pub fn extract_categories(fragment: ElementRef<'_>, categories: &Selector) -> Vec<String> {
    filter_categories(fragment.select(categories).map(element_text))
}

/// Drops counters and markers from raw inline-list text
///
/// Two passes, in order: discard empty, purely numeric, or shorter than three
/// characters; then discard anything that still starts with a digit.
pub fn filter_categories<I, S>(tags: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let kept: Vec<String> = tags
        .into_iter()
        .map(|tag| tag.as_ref().trim().to_string())
        .filter(|tag| !tag.is_empty())
        .filter(|tag| !tag.chars().all(char::is_numeric))
        .filter(|tag| tag.chars().count() > 2)
        .collect();

    kept.into_iter()
        .filter(|tag| !tag.chars().next().is_some_and(char::is_numeric))
        .collect()
}

fn element_text(element: ElementRef<'_>) -> String {
    element.text().collect()
}
