//! Blog content helpers: reading-time estimation and date formatting for
//! the seed article written when the blog feature is enabled.

use chrono::NaiveDate;

/// Fixed reading speed used for the estimate.
pub const WORDS_PER_MINUTE: usize = 200;

/// Estimated reading time in whole minutes, always rounded up.
pub fn reading_time_minutes(content: &str) -> usize {
    let words = content.split_whitespace().count();
    words.div_ceil(WORDS_PER_MINUTE)
}

/// Formats a date the way the generated blog displays it, e.g.
/// "January 5, 2026".
pub fn format_long_date(date: NaiveDate) -> String {
    date.format("%B %-d, %Y").to_string()
}
