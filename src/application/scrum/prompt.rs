//! Scrum prompt formatting

use chrono::NaiveDate;

/// The daily prompt text for a given date, e.g. "Scrum for August 31, 2026"
///
/// This exact string is also the key used to find the thread root in
/// channel history, so the format must stay stable within a run.
pub fn prompt_text(date: NaiveDate) -> String {
    format!("Scrum for {}", date.format("%B %d, %Y"))
}
