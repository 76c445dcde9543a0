//! String sanitization and wrapping helpers.
//!
//! This module turns arbitrary page titles into filesystem-safe ASCII
//! filenames and soft-wraps long strings for display.

use tracing::warn;
use unicode_normalization::UnicodeNormalization;

/// Non-alphanumeric characters that are allowed to survive sanitization.
const EXTRA_VALID_CHARS: &str = "-_.() ";

/// Reduce arbitrary Unicode text to a filesystem-safe ASCII string.
///
/// The input is decomposed to NFD form so that accented letters split into
/// a base letter plus combining marks, then every character outside the
/// allowed set is dropped. The allowed set is ASCII letters, digits, and
/// `-_.() ` (space included).
///
/// Used to turn page titles into export filenames.
///
/// # Examples
///
/// ```
/// # use chrome_history_utils::strings::replace_special_chars;
/// assert_eq!(
///     replace_special_chars("Crème brûlée (part 1).html"),
///     "Creme brulee (part 1).html"
/// );
/// ```
#[must_use]
pub fn replace_special_chars(input: &str) -> String {
    let sanitized: String = input
        .nfd()
        .filter(|c| c.is_ascii_alphanumeric() || EXTRA_VALID_CHARS.contains(*c))
        .collect();

    if sanitized.is_empty() && !input.is_empty() {
        warn!("no filename-safe characters left after sanitizing {input:?}");
    }

    sanitized
}

/// Soft-wrap a long string into multiple lines by splitting on `separator`.
///
/// Returns `text` unchanged when its character count is within
/// `max_line_length`. Otherwise the text is split on `separator` and tokens
/// are greedily packed into lines: a line break is inserted before any token
/// that would make the running line length reach `max_line_length`. Tokens
/// within a line are rejoined with `separator`; no separator is emitted at a
/// forced break.
///
/// A token longer than `max_line_length` is never split and occupies a line
/// of its own. Lengths are counted in characters, not bytes.
#[must_use]
pub fn convert_string_to_multiline(text: &str, max_line_length: usize, separator: &str) -> String {
    if text.chars().count() <= max_line_length {
        return text.to_string();
    }

    let separator_len = separator.chars().count();
    let mut result = String::with_capacity(text.len());
    let mut line_len = 0usize;

    for token in text.split(separator) {
        let token_len = token.chars().count();

        if line_len > 0 && line_len + token_len >= max_line_length {
            result.push('\n');
            line_len = 0;
        } else if line_len > 0 {
            result.push_str(separator);
        }

        result.push_str(token);
        // Account for the separator that would follow this token so the
        // break check sees the packed length, not just the raw characters.
        line_len += token_len + separator_len;
    }

    result
}
