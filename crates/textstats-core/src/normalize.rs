//! Tokenization and normalization.
//!
//! Two normalization policies are used:
//! - [`strip_punctuation`] removes punctuation and preserves case
//!   (used for average word length).
//! - [`frequency_form`] lowercases and removes punctuation
//!   (used for word frequencies).
//!
//! Punctuation is any character that is neither a word character
//! (alphanumeric or underscore) nor whitespace.

use regex::Regex;
use std::sync::LazyLock;

/// Matches every character outside `\w` and `\s`.
static PUNCTUATION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^\w\s]").expect("valid regex"));

/// Split text into whitespace-delimited tokens.
///
/// Runs of whitespace (spaces, tabs, newlines) act as a single separator and
/// leading/trailing whitespace produces no empty tokens.
///
/// # Examples
///
/// ```
/// use textstats_core::normalize::words;
///
/// let tokens: Vec<&str> = words("Hello,\tworld!\n").collect();
/// assert_eq!(tokens, ["Hello,", "world!"]);
/// ```
pub fn words(text: &str) -> impl Iterator<Item = &str> {
    text.split_whitespace()
}

/// Returns `true` for empty or whitespace-only text.
pub fn is_blank(text: &str) -> bool {
    text.trim().is_empty()
}

/// Remove punctuation, keeping case.
///
/// # Examples
///
/// ```
/// use textstats_core::normalize::strip_punctuation;
///
/// assert_eq!(strip_punctuation("Don't panic!"), "Dont panic");
/// ```
pub fn strip_punctuation(text: &str) -> String {
    PUNCTUATION.replace_all(text, "").into_owned()
}

/// Lowercase, then remove punctuation.
///
/// # Examples
///
/// ```
/// use textstats_core::normalize::frequency_form;
///
/// assert_eq!(frequency_form("The END."), "the end");
/// ```
pub fn frequency_form(text: &str) -> String {
    PUNCTUATION.replace_all(&text.to_lowercase(), "").into_owned()
}
