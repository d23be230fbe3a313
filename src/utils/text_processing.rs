//! Text processing utilities.
//!
//! This module contains small string helpers used by the validation rules
//! and by the input-capture layer, such as stripping formatting characters
//! from phone numbers and truncating text to a character limit.

/// Keep only the ASCII digits of `text`.
///
/// Formatting such as spaces, dashes, parentheses and a leading `+` is
/// dropped, so `"+1 (555) 123-4567"` becomes `"15551234567"`.
pub fn strip_non_digits(text: &str) -> String {
    text.chars().filter(|c| c.is_ascii_digit()).collect()
}

/// Number of characters in `text`, counting whitespace.
///
/// Counts Unicode scalar values, not UTF-16 code units: a character outside
/// the Basic Multilingual Plane, such as an emoji, counts once here where a
/// JavaScript `length` would count it twice. Both the message minimum length
/// and the input cap use this count.
pub fn char_count(text: &str) -> usize {
    text.chars().count()
}

/// Truncate `text` to at most `max` characters.
///
/// Truncation happens on character boundaries, never inside a multi-byte
/// sequence.
///
/// # Arguments
/// * `text` - The text to truncate
/// * `max` - Maximum number of characters to keep
///
/// # Returns
/// The original string when it already fits, otherwise its first `max`
/// characters.
pub fn truncate_chars(text: &str, max: usize) -> String {
    match text.char_indices().nth(max) {
        Some((byte_index, _)) => text[..byte_index].to_string(),
        None => text.to_string(),
    }
}
