//! Core data types for textstats.
//!
//! This module defines the primary types used throughout the library:
//! - [`WordFrequency`] - A normalized word and its occurrence count
//! - [`Statistic`] - The name of one report entry
//! - [`StatValue`] - The value of one report entry
//! - [`TextReport`] - The aggregate report for a text

use serde::Serialize;
use std::str::FromStr;

use crate::error::{Result, TextStatsError};

/// A normalized word and how many times it occurs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WordFrequency {
    /// Lowercased word with punctuation removed.
    pub word: String,
    /// Number of occurrences in the text.
    pub count: usize,
}

impl WordFrequency {
    pub fn new(word: impl Into<String>, count: usize) -> Self {
        Self {
            word: word.into(),
            count,
        }
    }
}

impl From<(&str, usize)> for WordFrequency {
    fn from((word, count): (&str, usize)) -> Self {
        Self::new(word, count)
    }
}

impl std::fmt::Display for WordFrequency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.word, self.count)
    }
}

/// Names of the entries in a [`TextReport`], in report order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Statistic {
    WordCount,
    CharCount,
    CharCountNoSpaces,
    SentenceCount,
    AverageWordLength,
    MostCommonWords,
}

impl Statistic {
    /// Every statistic, in report order.
    pub const ALL: [Statistic; 6] = [
        Statistic::WordCount,
        Statistic::CharCount,
        Statistic::CharCountNoSpaces,
        Statistic::SentenceCount,
        Statistic::AverageWordLength,
        Statistic::MostCommonWords,
    ];

    /// The report key for this statistic.
    pub const fn name(self) -> &'static str {
        match self {
            Statistic::WordCount => "word_count",
            Statistic::CharCount => "char_count",
            Statistic::CharCountNoSpaces => "char_count_no_spaces",
            Statistic::SentenceCount => "sentence_count",
            Statistic::AverageWordLength => "average_word_length",
            Statistic::MostCommonWords => "most_common_words",
        }
    }

    /// All report keys, in report order.
    pub fn names() -> [&'static str; 6] {
        Self::ALL.map(Statistic::name)
    }
}

impl std::fmt::Display for Statistic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Statistic {
    type Err = TextStatsError;

    fn from_str(s: &str) -> Result<Self> {
        let wanted = s.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|stat| stat.name() == wanted)
            .ok_or_else(|| TextStatsError::UnknownStatistic(s.to_string()))
    }
}

/// The value of a single report entry.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum StatValue {
    Count(usize),
    Average(f64),
    Words(Vec<WordFrequency>),
}

impl std::fmt::Display for StatValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StatValue::Count(n) => write!(f, "{n}"),
            StatValue::Average(avg) => write!(f, "{avg:.2}"),
            StatValue::Words(words) if words.is_empty() => write!(f, "(none)"),
            StatValue::Words(words) => {
                let parts: Vec<String> = words.iter().map(ToString::to_string).collect();
                write!(f, "{}", parts.join(", "))
            }
        }
    }
}

/// Descriptive statistics for one text.
///
/// Every field is computed independently from the same input. Serializes to
/// a JSON object keyed by [`Statistic::name`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TextReport {
    /// Whitespace-delimited token count.
    pub word_count: usize,
    /// Character count, whitespace included.
    pub char_count: usize,
    /// Character count with literal spaces removed (tabs and newlines kept).
    pub char_count_no_spaces: usize,
    /// Number of sentence segments.
    pub sentence_count: usize,
    /// Mean word length, rounded to 2 decimals.
    pub average_word_length: f64,
    /// Top 5 normalized words.
    pub most_common_words: Vec<WordFrequency>,
}

impl TextReport {
    /// Look up one entry by name.
    pub fn get(&self, stat: Statistic) -> StatValue {
        match stat {
            Statistic::WordCount => StatValue::Count(self.word_count),
            Statistic::CharCount => StatValue::Count(self.char_count),
            Statistic::CharCountNoSpaces => StatValue::Count(self.char_count_no_spaces),
            Statistic::SentenceCount => StatValue::Count(self.sentence_count),
            Statistic::AverageWordLength => StatValue::Average(self.average_word_length),
            Statistic::MostCommonWords => StatValue::Words(self.most_common_words.clone()),
        }
    }

    /// All entries as `(name, value)` pairs, in report order.
    pub fn entries(&self) -> Vec<(Statistic, StatValue)> {
        Statistic::ALL
            .into_iter()
            .map(|stat| (stat, self.get(stat)))
            .collect()
    }
}
