//! Statistic functions.
//!
//! Each function is a pure computation over the raw input text. None of them
//! depends on the result of another, and every one returns its zero value
//! (`0`, `0.0` or an empty list) for empty or whitespace-only input.

use std::collections::{HashMap, HashSet};

use crate::models::WordFrequency;
use crate::normalize::{frequency_form, is_blank, strip_punctuation, words};

/// Number of entries returned by [`most_common_words`] in an aggregate report.
pub const DEFAULT_TOP_N: usize = 5;

/// Count whitespace-delimited words.
///
/// # Examples
///
/// ```
/// use textstats_core::stats::word_count;
///
/// assert_eq!(word_count("Hello world"), 2);
/// assert_eq!(word_count("   "), 0);
/// ```
pub fn word_count(text: &str) -> usize {
    words(text).count()
}

/// Count characters, optionally ignoring the ASCII space character.
///
/// Only `' '` is excluded when `include_spaces` is false. Tabs, newlines and
/// other whitespace are still counted.
///
/// # Examples
///
/// ```
/// use textstats_core::stats::char_count;
///
/// assert_eq!(char_count("Hello world", true), 11);
/// assert_eq!(char_count("Hello world", false), 10);
/// ```
pub fn char_count(text: &str, include_spaces: bool) -> usize {
    if include_spaces {
        text.chars().count()
    } else {
        text.chars().filter(|&c| c != ' ').count()
    }
}

/// Count sentence segments.
///
/// The text is split on runs of `.`, `!` and `?`; segments that are empty or
/// whitespace-only are discarded. Text without any terminator is one sentence.
///
/// # Examples
///
/// ```
/// use textstats_core::stats::sentence_count;
///
/// assert_eq!(sentence_count("Hello. How are you? I am fine!"), 3);
/// assert_eq!(sentence_count("Wait... what?!"), 2);
/// ```
pub fn sentence_count(text: &str) -> usize {
    text.split(is_terminator)
        .filter(|segment| !is_blank(segment))
        .count()
}

const fn is_terminator(c: char) -> bool {
    matches!(c, '.' | '!' | '?')
}

/// Full frequency table of normalized words.
///
/// Words are lowercased with punctuation removed. Entries are ordered by
/// descending count; equal counts keep the order in which each word first
/// appeared.
pub fn word_frequencies(text: &str) -> Vec<WordFrequency> {
    let normalized = frequency_form(text);
    let mut positions: HashMap<&str, usize> = HashMap::new();
    let mut table: Vec<WordFrequency> = Vec::new();

    for word in words(&normalized) {
        match positions.get(word).copied() {
            Some(idx) => table[idx].count += 1,
            None => {
                positions.insert(word, table.len());
                table.push(WordFrequency::new(word, 1));
            }
        }
    }

    // Stable sort keeps first-appearance order among ties.
    table.sort_by(|a, b| b.count.cmp(&a.count));
    table
}

/// The `n` most frequent normalized words.
///
/// Returns fewer than `n` entries when the text has fewer distinct words.
///
/// # Examples
///
/// ```
/// use textstats_core::models::WordFrequency;
/// use textstats_core::stats::most_common_words;
///
/// let top = most_common_words("the cat and the dog and the bird", 2);
/// assert_eq!(top, [WordFrequency::new("the", 3), WordFrequency::new("and", 2)]);
/// ```
pub fn most_common_words(text: &str, n: usize) -> Vec<WordFrequency> {
    let mut table = word_frequencies(text);
    table.truncate(n);
    table
}

/// Number of distinct normalized words.
pub fn unique_word_count(text: &str) -> usize {
    let normalized = frequency_form(text);
    words(&normalized).collect::<HashSet<_>>().len()
}

/// Mean word length in characters, rounded to 2 decimals.
///
/// Punctuation is removed before splitting but case is kept. Input that holds
/// no words after punctuation removal yields `0.0`.
///
/// # Examples
///
/// ```
/// use textstats_core::stats::average_word_length;
///
/// assert_eq!(average_word_length("a bb ccc"), 2.0);
/// assert_eq!(average_word_length("?!"), 0.0);
/// ```
pub fn average_word_length(text: &str) -> f64 {
    if is_blank(text) {
        return 0.0;
    }

    let cleaned = strip_punctuation(text);
    let (total_chars, total_words) = words(&cleaned).fold((0usize, 0usize), |(chars, n), word| {
        (chars + word.chars().count(), n + 1)
    });

    if total_words == 0 {
        return 0.0;
    }

    round_to_hundredths(total_chars as f64 / total_words as f64)
}

/// Round to 2 decimals, ties to even on the exact binary value.
///
/// Formatting with a fixed precision is exact and breaks ties towards the
/// even digit, so `1.125` becomes `1.12` while `2.675` (stored slightly below
/// the tie) becomes `2.67`.
fn round_to_hundredths(value: f64) -> f64 {
    format!("{value:.2}").parse().unwrap_or(value)
}
