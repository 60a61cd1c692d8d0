//! # textstats-core
//!
//! Descriptive statistics for a block of text.
//!
//! This library computes word count, character count (with and without
//! spaces), sentence count, average word length and most frequent words,
//! and combines them into a single [`TextReport`].
//!
//! ## Features
//!
//! - **Independent statistics**: every function is pure and works directly
//!   on the input text, so callers may run them in any order or in parallel.
//! - **Total over strings**: empty or whitespace-only input yields zero
//!   values instead of errors.
//! - **Two normalization policies**: frequency analysis lowercases and strips
//!   punctuation, average word length strips punctuation but keeps case.
//! - **Stable ranking**: equally frequent words keep first-appearance order.
//!
//! ## Example
//!
//! ```rust
//! use textstats_core::prelude::*;
//!
//! let report = analyze("The cat sat. The cat ran!");
//!
//! assert_eq!(report.word_count, 6);
//! assert_eq!(report.sentence_count, 2);
//! assert_eq!(report.most_common_words[0], WordFrequency::new("the", 2));
//!
//! for (stat, value) in report.entries() {
//!     println!("{stat}: {value}");
//! }
//! ```

pub mod error;
pub mod models;
pub mod normalize;
pub mod report;
pub mod stats;

// Re-export commonly used types at the crate root
pub use error::{Result, TextStatsError};
pub use models::{StatValue, Statistic, TextReport, WordFrequency};
pub use report::analyze;
pub use stats::{
    DEFAULT_TOP_N, average_word_length, char_count, most_common_words, sentence_count,
    unique_word_count, word_count, word_frequencies,
};

/// Prelude module for convenient imports.
///
/// ```
/// use textstats_core::prelude::*;
/// ```
pub mod prelude {
    pub use crate::error::{Result, TextStatsError};
    pub use crate::models::*;
    pub use crate::report::analyze;
    pub use crate::stats::*;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_workflow_scenarios() {
        assert_eq!(word_count("Hello world"), 2);
        assert_eq!(char_count("Hello world", true), 11);
        assert_eq!(char_count("Hello world", false), 10);
        assert_eq!(sentence_count("Hello. How are you? I am fine!"), 3);
        assert_eq!(
            most_common_words("the cat and the dog and the bird", 2),
            [WordFrequency::new("the", 3), WordFrequency::new("and", 2)]
        );
        assert_eq!(average_word_length("a bb ccc"), 2.0);

        let report = analyze("Hello world. How are you?");
        assert_eq!(report.word_count, 5);
        assert_eq!(report.sentence_count, 2);
    }

    #[test]
    fn report_lookup_by_name() {
        let report = analyze("Hello world.");
        let stat: Statistic = "word_count".parse().unwrap();

        assert_eq!(report.get(stat), StatValue::Count(2));
    }

    #[test]
    fn prelude_exports() {
        use crate::prelude::*;

        let _report: TextReport = analyze("");
        let _top = most_common_words("", DEFAULT_TOP_N);
        let _stat = Statistic::WordCount;
    }
}
