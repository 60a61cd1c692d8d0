//! Error types for textstats-core.
//!
//! The statistic functions never fail; errors only arise when naming
//! statistics from user-supplied strings.

use thiserror::Error;

/// The main error type for textstats operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TextStatsError {
    /// A statistic name that is not one of the report keys.
    #[error("Unknown statistic: '{0}'. Expected one of: {expected}", expected = crate::models::Statistic::names().join(", "))]
    UnknownStatistic(String),
}

/// Result type alias for textstats operations.
pub type Result<T> = std::result::Result<T, TextStatsError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_statistic_lists_valid_names() {
        let err = TextStatsError::UnknownStatistic("lines".to_string());
        let message = err.to_string();

        assert!(message.starts_with("Unknown statistic: 'lines'"));
        assert!(message.contains("word_count"));
        assert!(message.contains("most_common_words"));
    }
}
