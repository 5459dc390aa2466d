//! Core types for rapid_summarizer
//!
//! This module defines the data flowing through the summarizer: segmented
//! sentences, their scores, the length policy and the configuration.

use crate::errors::ConfigError;
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

// ============================================================================
// Sentence
// ============================================================================

/// A sentence from the input text
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sentence {
    /// The trimmed sentence text
    pub text: String,
    /// Sentence index within the document (0-based, contiguous)
    pub index: usize,
    /// Start byte offset of `text` in the original input
    pub start: usize,
    /// End byte offset of `text` in the original input
    pub end: usize,
}

impl Sentence {
    /// Create a new sentence
    pub fn new(text: impl Into<String>, index: usize, start: usize, end: usize) -> Self {
        Self {
            text: text.into(),
            index,
            start,
            end,
        }
    }

    /// Whether the sentence contains an ASCII decimal digit
    pub fn has_digit(&self) -> bool {
        self.text.bytes().any(|b| b.is_ascii_digit())
    }
}

/// A sentence paired with its importance score
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredSentence {
    pub sentence: Sentence,
    pub score: f64,
}

impl ScoredSentence {
    pub fn new(sentence: Sentence, score: f64) -> Self {
        Self { sentence, score }
    }

    /// Document position of the underlying sentence
    pub fn index(&self) -> usize {
        self.sentence.index
    }
}

// ============================================================================
// Length Policy
// ============================================================================

/// Named preset controlling how many sentences a summary targets.
///
/// Each policy is a fraction of the total sentence count, rounded up and
/// capped at an absolute maximum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LengthPolicy {
    /// 20% of the sentences, at most 3
    Brief,
    /// 30% of the sentences, at most 5
    #[default]
    Medium,
    /// 40% of the sentences, at most 8
    Detailed,
}

impl LengthPolicy {
    /// All policies, shortest first
    pub const ALL: [LengthPolicy; 3] = [
        LengthPolicy::Brief,
        LengthPolicy::Medium,
        LengthPolicy::Detailed,
    ];

    /// Fraction of the total sentence count to keep
    pub fn ratio(&self) -> f64 {
        match self {
            LengthPolicy::Brief => 0.2,
            LengthPolicy::Medium => 0.3,
            LengthPolicy::Detailed => 0.4,
        }
    }

    /// Absolute cap on the number of selected sentences
    pub fn cap(&self) -> usize {
        match self {
            LengthPolicy::Brief => 3,
            LengthPolicy::Medium => 5,
            LengthPolicy::Detailed => 8,
        }
    }

    /// Number of sentences to select out of `total`.
    ///
    /// `min(cap, ceil(total * ratio))`, computed in `f64`. Never zero when
    /// `total >= 1`.
    pub fn target_count(&self, total: usize) -> usize {
        if total == 0 {
            return 0;
        }
        let wanted = (total as f64 * self.ratio()).ceil() as usize;
        wanted.clamp(1, self.cap())
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            LengthPolicy::Brief => "brief",
            LengthPolicy::Medium => "medium",
            LengthPolicy::Detailed => "detailed",
        }
    }
}

impl std::fmt::Display for LengthPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a string names no known [`LengthPolicy`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown length policy \"{0}\", expected brief, medium or detailed")]
pub struct ParseLengthPolicyError(pub String);

impl std::str::FromStr for LengthPolicy {
    type Err = ParseLengthPolicyError;

    fn from_str(value: &str) -> std::result::Result<Self, Self::Err> {
        match value.trim().to_lowercase().as_str() {
            "brief" => Ok(LengthPolicy::Brief),
            "medium" => Ok(LengthPolicy::Medium),
            "detailed" => Ok(LengthPolicy::Detailed),
            _ => Err(ParseLengthPolicyError(value.to_string())),
        }
    }
}

// ============================================================================
// Configuration
// ============================================================================

/// Configuration for summarization.
///
/// Changing the defaults changes which sentences are selected.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SummarizerConfig {
    /// Minimum number of whitespace-delimited words accepted
    pub min_words: usize,
    /// Tokens shorter than this (in bytes, after normalization) are ignored
    pub min_word_length: usize,
    /// Number of leading sentences that receive `lead_boost`
    pub lead_sentences: usize,
    /// Multiplier for the leading sentences
    pub lead_boost: f64,
    /// Multiplier for sentences containing a decimal digit
    pub numeric_boost: f64,
    /// Additional stopwords (extends the built-in list)
    pub stopwords: Vec<String>,
    /// Language whose stopword list is merged into the built-in list
    pub language: Option<String>,
    /// Length policy used when the caller does not pass one
    pub length: LengthPolicy,
}

impl Default for SummarizerConfig {
    fn default() -> Self {
        Self {
            min_words: 50,
            min_word_length: 4,
            lead_sentences: 3,
            lead_boost: 1.5,
            numeric_boost: 1.2,
            stopwords: Vec::new(),
            language: None,
            length: LengthPolicy::Medium,
        }
    }
}

impl SummarizerConfig {
    /// Create a new config with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a config from JSON; omitted fields take their defaults
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self =
            serde_json::from_str(json).map_err(|e| ConfigError::json("parse config", e))?;
        config.validate()?;
        Ok(config)
    }

    /// Read and parse a JSON config file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let data =
            std::fs::read_to_string(path).map_err(|e| ConfigError::io("read config", e))?;
        Self::from_json(&data)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.min_word_length == 0 {
            return Err(ConfigError::invalid(
                "min_word_length",
                "must be at least 1",
            ));
        }
        for (field, value) in [
            ("lead_boost", self.lead_boost),
            ("numeric_boost", self.numeric_boost),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(ConfigError::invalid(
                    field,
                    format!("must be a positive finite number, got {value}"),
                ));
            }
        }
        Ok(())
    }

    pub fn with_length(mut self, length: LengthPolicy) -> Self {
        self.length = length;
        self
    }

    pub fn with_min_words(mut self, min_words: usize) -> Self {
        self.min_words = min_words;
        self
    }

    pub fn with_stopwords<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.stopwords.extend(words.into_iter().map(Into::into));
        self
    }

    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = Some(language.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_target_count_formulas() {
        // (total, brief, medium, detailed)
        let cases = [
            (1, 1, 1, 1),
            (3, 1, 1, 2),
            (4, 1, 2, 2),
            (6, 2, 2, 3),
            (10, 2, 3, 4),
            (11, 3, 4, 5),
            (20, 3, 5, 8),
            (100, 3, 5, 8),
        ];
        for (total, brief, medium, detailed) in cases {
            assert_eq!(
                LengthPolicy::Brief.target_count(total),
                brief,
                "brief/{total}"
            );
            assert_eq!(
                LengthPolicy::Medium.target_count(total),
                medium,
                "medium/{total}"
            );
            assert_eq!(
                LengthPolicy::Detailed.target_count(total),
                detailed,
                "detailed/{total}"
            );
        }
    }

    #[test]
    fn test_target_count_zero_total() {
        for policy in LengthPolicy::ALL {
            assert_eq!(policy.target_count(0), 0);
        }
    }

    #[test]
    fn test_length_policy_parse() {
        assert_eq!("brief".parse::<LengthPolicy>(), Ok(LengthPolicy::Brief));
        assert_eq!("Medium".parse::<LengthPolicy>(), Ok(LengthPolicy::Medium));
        assert_eq!(" DETAILED ".parse::<LengthPolicy>(), Ok(LengthPolicy::Detailed));
        assert!("long".parse::<LengthPolicy>().is_err());
    }

    #[test]
    fn test_length_policy_serde() {
        let json = serde_json::to_string(&LengthPolicy::Detailed).unwrap();
        assert_eq!(json, "\"detailed\"");
        let back: LengthPolicy = serde_json::from_str("\"brief\"").unwrap();
        assert_eq!(back, LengthPolicy::Brief);
    }

    #[test]
    fn test_default_config_constants() {
        let cfg = SummarizerConfig::default();
        assert_eq!(cfg.min_words, 50);
        assert_eq!(cfg.min_word_length, 4);
        assert_eq!(cfg.lead_sentences, 3);
        assert_eq!(cfg.lead_boost, 1.5);
        assert_eq!(cfg.numeric_boost, 1.2);
        assert_eq!(cfg.length, LengthPolicy::Medium);
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn test_config_from_partial_json() {
        let cfg = SummarizerConfig::from_json(r#"{ "length": "brief", "stopwords": ["data"] }"#)
            .unwrap();
        assert_eq!(cfg.length, LengthPolicy::Brief);
        assert_eq!(cfg.stopwords, vec!["data".to_string()]);
        assert_eq!(cfg.min_words, 50);
    }

    #[test]
    fn test_config_rejects_bad_boost() {
        let err = SummarizerConfig::from_json(r#"{ "lead_boost": -1.0 }"#).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::Invalid {
                field: "lead_boost",
                ..
            }
        ));

        let cfg = SummarizerConfig {
            numeric_boost: f64::NAN,
            ..Default::default()
        };
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn test_config_rejects_zero_word_length() {
        let cfg = SummarizerConfig {
            min_word_length: 0,
            ..Default::default()
        };
        assert!(matches!(
            cfg.validate(),
            Err(ConfigError::Invalid {
                field: "min_word_length",
                ..
            })
        ));
    }

    #[test]
    fn test_config_malformed_json() {
        let err = SummarizerConfig::from_json("{ not json").unwrap_err();
        assert!(matches!(err, ConfigError::Json { .. }));
    }

    #[test]
    fn test_sentence_has_digit() {
        assert!(Sentence::new("Sales rose 12 percent.", 0, 0, 22).has_digit());
        assert!(!Sentence::new("Sales rose sharply.", 0, 0, 19).has_digit());
    }
}
