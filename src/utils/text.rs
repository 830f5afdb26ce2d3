//! Text processing utilities.
//!
//! Helpers for fitting free-form todo text into single table cells and
//! dialog lines.

/// Collapse line breaks and runs of whitespace into single spaces.
///
pub fn single_line(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Shorten `text` to `max_chars` characters, ending with "..." when anything
/// was cut. Counts characters, not bytes. Limits below 3 still yield "...".
///
pub fn truncate(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let keep = max_chars.saturating_sub(3);
    let mut result: String = text.chars().take(keep).collect();
    result.push_str("...");
    result
}
