//! Record definitions for extracted catalog entries
//!
//! A `Record` is the unit of output: four text fields that are always
//! populated, each falling back to the `N/A` sentinel on its own. A
//! `RecordSet` keeps records in document order.

/// Placeholder for a field that could not be extracted
///
/// Distinct from the empty string: an empty value never reaches output.
pub const NOT_AVAILABLE: &str = "N/A";

/// One catalog entry extracted from a list fragment
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    title: String,
    year: String,
    rating: String,
    categories: String,
}

impl Record {
    /// Builds a record, substituting `N/A` for every missing or blank field
    ///
    /// Categories are joined with `", "` in the order given.
    pub fn new(
        title: Option<String>,
        year: Option<String>,
        rating: Option<String>,
        categories: Vec<String>,
    ) -> Self {
        let categories = if categories.is_empty() {
            None
        } else {
            Some(categories.join(", "))
        };

        Self {
            title: or_sentinel(title),
            year: or_sentinel(year),
            rating: or_sentinel(rating),
            categories: or_sentinel(categories),
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    /// Year text: four digits, the verbatim fallback text, or `N/A`
    pub fn year(&self) -> &str {
        &self.year
    }

    pub fn rating(&self) -> &str {
        &self.rating
    }

    /// Comma-joined genre tags or `N/A`
    pub fn categories(&self) -> &str {
        &self.categories
    }

    /// Returns true if the year is a clean all-digit string
    pub fn has_numeric_year(&self) -> bool {
        !self.year.is_empty() && self.year.bytes().all(|b| b.is_ascii_digit())
    }

    /// Returns the year as a number when it is a clean all-digit string
    ///
    /// `None` for any other text, and for digit strings too long for `u128`.
    pub fn numeric_year(&self) -> Option<u128> {
        if !self.has_numeric_year() {
            return None;
        }
        self.year.parse().ok()
    }

    /// Returns true if every field fell back to `N/A`
    pub fn is_blank(&self) -> bool {
        [&self.title, &self.year, &self.rating, &self.categories]
            .iter()
            .all(|field| field.as_str() == NOT_AVAILABLE)
    }
}

fn or_sentinel(value: Option<String>) -> String {
    match value {
        Some(v) if !v.trim().is_empty() => v,
        _ => NOT_AVAILABLE.to_string(),
    }
}

/// Ordered collection of records for one run
///
/// Insertion order is document order on the source page. Records can be
/// appended but never modified or removed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordSet {
    records: Vec<Record>,
}

impl RecordSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, record: Record) {
        self.records.push(record);
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Record> {
        self.records.iter()
    }

    pub fn as_slice(&self) -> &[Record] {
        &self.records
    }
}

impl FromIterator<Record> for RecordSet {
    fn from_iter<I: IntoIterator<Item = Record>>(iter: I) -> Self {
        Self {
            records: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a RecordSet {
    type Item = &'a Record;
    type IntoIter = std::slice::Iter<'a, Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
