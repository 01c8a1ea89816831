//! Console table of extracted records

use crate::record::RecordSet;

const TABLE_WIDTH: usize = 80;
const HEADING: &str = "MOVIE DATABASE SCRAPER RESULTS";

const TITLE_WIDTH: usize = 40;
const CATEGORIES_WIDTH: usize = 30;

/// Shortens `text` to `max - 3` characters plus `...` when it exceeds `max`
///
/// Counts characters, not bytes.
pub fn truncate_display(text: &str, max: usize) -> String {
    if text.chars().count() > max {
        let kept: String = text.chars().take(max.saturating_sub(3)).collect();
        format!("{}...", kept)
    } else {
        text.to_string()
    }
}

/// Renders the banner, header and the first `limit` records
///
/// When more records exist than are shown, a trailing line reports how many
/// were left out.
pub fn render_table(records: &RecordSet, limit: usize) -> String {
    let mut out = String::new();

    out.push('\n');
    out.push_str(&"=".repeat(TABLE_WIDTH));
    out.push('\n');
    out.push_str(&format!("{:^width$}\n", HEADING, width = TABLE_WIDTH));
    out.push_str(&"=".repeat(TABLE_WIDTH));
    out.push('\n');
    out.push_str(&format!(
        "{:<40} {:<6} {:<6} {:<30}\n",
        "Title", "Year", "Rating", "Categories"
    ));
    out.push_str(&"-".repeat(TABLE_WIDTH));
    out.push('\n');

    for record in records.iter().take(limit) {
        out.push_str(&format!(
            "{:<40} {:<6} {:<6} {:<30}\n",
            truncate_display(record.title(), TITLE_WIDTH),
            record.year(),
            record.rating(),
            truncate_display(record.categories(), CATEGORIES_WIDTH),
        ));
    }

    if records.len() > limit {
        out.push_str(&format!(
            "\n... and {} more movies\n",
            records.len() - limit
        ));
    }

    out
}
