//! Year statistics over extracted records
//!
//! Only records whose year is a clean all-digit string take part; sentinel
//! and free-text years are ignored. Years are held as `u128` so that long
//! digit strings from the fallback element neither overflow nor vanish.

use crate::record::RecordSet;

/// Summary of the release years in a record set
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct YearStatistics {
    /// Smallest year
    pub earliest: u128,

    /// Largest year
    pub latest: u128,

    /// Integer (floor) mean of the years
    pub average: u128,

    /// Number of records that contributed a year
    pub counted: usize,
}

/// Computes year statistics
///
/// # Returns
///
/// * `Some(YearStatistics)` - At least one record has a numeric year
/// * `None` - No numeric years; statistics are skipped
pub fn compute_year_statistics(records: &RecordSet) -> Option<YearStatistics> {
    let mut years = Vec::new();
    for record in records.iter().filter(|r| r.has_numeric_year()) {
        match record.numeric_year() {
            Some(year) => years.push(year),
            None => tracing::warn!(
                "Year {:?} of {:?} is too large to count; left out of statistics",
                record.year(),
                record.title()
            ),
        }
    }
    year_statistics(&years)
}

/// Computes statistics over raw years; the mean truncates toward zero
///
/// Returns `None` for an empty slice, or if the sum overflows `u128`.
pub fn year_statistics(years: &[u128]) -> Option<YearStatistics> {
    let earliest = *years.iter().min()?;
    let latest = *years.iter().max()?;

    let Some(sum) = years.iter().try_fold(0u128, |acc, &year| acc.checked_add(year)) else {
        tracing::warn!("Sum of {} years overflowed; statistics skipped", years.len());
        return None;
    };

    Some(YearStatistics {
        earliest,
        latest,
        average: sum / years.len() as u128,
        counted: years.len(),
    })
}

/// Formats the statistics block shown after the table
pub fn render_statistics(stats: &YearStatistics) -> String {
    let mut out = String::new();
    out.push_str("\nStatistics:\n");
    out.push_str(&format!("Earliest year: {}\n", stats.earliest));
    out.push_str(&format!("Latest year: {}\n", stats.latest));
    out.push_str(&format!("Average year: {}\n", stats.average));
    out
}
