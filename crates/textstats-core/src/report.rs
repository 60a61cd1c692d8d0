//! Aggregate analysis.
//!
//! [`analyze`] runs every statistic function over the same input and
//! collects the results into a [`TextReport`]. Each statistic sees the
//! unmodified text; no statistic is derived from another.

use tracing::debug;

use crate::models::TextReport;
use crate::stats::{
    DEFAULT_TOP_N, average_word_length, char_count, most_common_words, sentence_count, word_count,
};

/// Compute the full report for a text.
///
/// Never fails: empty or whitespace-only input produces a report of zero
/// values and an empty word list.
///
/// # Examples
///
/// ```
/// use textstats_core::report::analyze;
///
/// let report = analyze("Hello world. How are you?");
/// assert_eq!(report.word_count, 5);
/// assert_eq!(report.sentence_count, 2);
/// ```
#[tracing::instrument(skip_all, fields(text_len = text.len()))]
pub fn analyze(text: &str) -> TextReport {
    let report = TextReport {
        word_count: word_count(text),
        char_count: char_count(text, true),
        char_count_no_spaces: char_count(text, false),
        sentence_count: sentence_count(text),
        average_word_length: average_word_length(text),
        most_common_words: most_common_words(text, DEFAULT_TOP_N),
    };

    debug!(
        words = report.word_count,
        sentences = report.sentence_count,
        distinct_top = report.most_common_words.len(),
        "Analyzed text"
    );

    report
}
