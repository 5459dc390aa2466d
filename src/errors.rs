//! Error types for rapid_summarizer
//!
//! Every failure is a value: validation problems with the input, processing
//! failures inside the pipeline, and configuration problems are each their own
//! enum, wrapped by [`SummarizeError`].

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Input rejected before any processing happens.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// The text is empty or whitespace-only.
    #[error("input text is empty")]
    Empty,
    /// The text has fewer whitespace-delimited words than required.
    #[error("input has {words} words, at least {minimum} are required")]
    TooShort { words: usize, minimum: usize },
}

/// Failure while segmenting, scoring or selecting.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProcessingError {
    /// Segmentation produced no usable sentence.
    #[error("could not split the text into sentences")]
    NoSentences,
    /// An internal invariant did not hold.
    #[error("unexpected processing failure: {0}")]
    Unexpected(String),
}

impl ProcessingError {
    pub(crate) fn unexpected(message: impl Into<String>) -> Self {
        Self::Unexpected(message.into())
    }
}

/// Invalid or unreadable [`SummarizerConfig`](crate::types::SummarizerConfig).
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid config field `{field}`: {message}")]
    Invalid { field: &'static str, message: String },
    #[error("I/O error while {context}: {source}")]
    Io {
        context: &'static str,
        #[source]
        source: std::io::Error,
    },
    #[error("JSON parse error while {context}: {source}")]
    Json {
        context: &'static str,
        #[source]
        source: serde_json::Error,
    },
}

impl ConfigError {
    pub(crate) fn invalid(field: &'static str, message: impl Into<String>) -> Self {
        Self::Invalid {
            field,
            message: message.into(),
        }
    }

    pub(crate) fn io(context: &'static str, source: std::io::Error) -> Self {
        Self::Io { context, source }
    }

    pub(crate) fn json(context: &'static str, source: serde_json::Error) -> Self {
        Self::Json { context, source }
    }
}

/// Top-level error returned by the summarizer.
#[derive(Debug, Error)]
pub enum SummarizeError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    Processing(#[from] ProcessingError),
    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Stable, machine-readable discriminant of a [`SummarizeError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCode {
    Empty,
    TooShort,
    NoSentences,
    Unexpected,
    InvalidConfig,
}

impl ErrorCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::Empty => "empty",
            ErrorCode::TooShort => "too_short",
            ErrorCode::NoSentences => "no_sentences",
            ErrorCode::Unexpected => "unexpected",
            ErrorCode::InvalidConfig => "invalid_config",
        }
    }
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl SummarizeError {
    /// The discriminant of this error.
    pub fn code(&self) -> ErrorCode {
        match self {
            SummarizeError::Validation(ValidationError::Empty) => ErrorCode::Empty,
            SummarizeError::Validation(ValidationError::TooShort { .. }) => ErrorCode::TooShort,
            SummarizeError::Processing(ProcessingError::NoSentences) => ErrorCode::NoSentences,
            SummarizeError::Processing(ProcessingError::Unexpected(_)) => ErrorCode::Unexpected,
            SummarizeError::Config(_) => ErrorCode::InvalidConfig,
        }
    }

    /// Message suitable for showing to the person who supplied the text.
    ///
    /// Processing failures collapse into generic wording; the detailed cause
    /// stays available through `Display` for the caller to log.
    pub fn user_message(&self) -> String {
        match self {
            SummarizeError::Validation(ValidationError::Empty) => {
                "Please enter some text to summarize".to_string()
            }
            SummarizeError::Validation(ValidationError::TooShort { minimum, .. }) => {
                format!("Please enter at least {minimum} words for meaningful summarization")
            }
            SummarizeError::Processing(ProcessingError::NoSentences) => {
                "Could not process the text. Please try again.".to_string()
            }
            SummarizeError::Processing(ProcessingError::Unexpected(_)) => {
                "An error occurred while processing. Please try again.".to_string()
            }
            SummarizeError::Config(err) => err.to_string(),
        }
    }
}

/// Result type for summarizer operations
pub type Result<T> = std::result::Result<T, SummarizeError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes_match_variants() {
        let cases = [
            (SummarizeError::from(ValidationError::Empty), ErrorCode::Empty),
            (
                SummarizeError::from(ValidationError::TooShort {
                    words: 3,
                    minimum: 50,
                }),
                ErrorCode::TooShort,
            ),
            (
                SummarizeError::from(ProcessingError::NoSentences),
                ErrorCode::NoSentences,
            ),
            (
                SummarizeError::from(ProcessingError::unexpected("boom")),
                ErrorCode::Unexpected,
            ),
            (
                SummarizeError::from(ConfigError::invalid("lead_boost", "must be positive")),
                ErrorCode::InvalidConfig,
            ),
        ];

        for (err, code) in cases {
            assert_eq!(err.code(), code);
        }
    }

    #[test]
    fn test_user_messages() {
        let empty = SummarizeError::from(ValidationError::Empty);
        assert_eq!(empty.user_message(), "Please enter some text to summarize");

        let short = SummarizeError::from(ValidationError::TooShort {
            words: 10,
            minimum: 50,
        });
        assert_eq!(
            short.user_message(),
            "Please enter at least 50 words for meaningful summarization"
        );

        let unexpected = SummarizeError::from(ProcessingError::unexpected("index gap"));
        assert!(!unexpected.user_message().contains("index gap"));
        assert!(unexpected.to_string().contains("index gap"));
    }

    #[test]
    fn test_display_is_transparent() {
        let err = SummarizeError::from(ValidationError::TooShort {
            words: 49,
            minimum: 50,
        });
        assert_eq!(err.to_string(), "input has 49 words, at least 50 are required");
    }

    #[test]
    fn test_error_code_serializes_snake_case() {
        let json = serde_json::to_string(&ErrorCode::TooShort).unwrap();
        assert_eq!(json, "\"too_short\"");
        assert_eq!(ErrorCode::NoSentences.to_string(), "no_sentences");
    }
}
