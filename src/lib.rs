//! # rapid_summarizer
//!
//! Deterministic extractive summarization. A summary is a subset of the
//! input's own sentences, chosen by a score built from document-wide word
//! frequencies, and returned in original order.
//!
//! ```rust
//! use rapid_summarizer::{summarize, LengthPolicy};
//!
//! let text = "Solar power is now the cheapest source of new electricity. \
//!     Prices for solar panels fell by 90 percent over a decade. \
//!     Utilities are adding solar farms across the country. \
//!     Storage batteries smooth out solar output at night. \
//!     Critics worry about land use near solar farms. \
//!     Engineers are testing panels that float on reservoirs. \
//!     Demand for electricity keeps rising every year. \
//!     Some regions already run on solar power at midday.";
//!
//! let summary = summarize(text, LengthPolicy::Brief).unwrap();
//! assert!(!summary.is_empty());
//! ```
//!
//! The computation is a pure function of `(text, length)`: no I/O, no
//! randomness, no clock. Callers that want artificial latency or background
//! execution wrap the call themselves.

pub mod errors;
pub mod nlp;
pub mod pipeline;
pub mod summarizer;
pub mod types;

pub use errors::{ConfigError, ErrorCode, ProcessingError, Result, SummarizeError, ValidationError};
pub use nlp::stopwords::StopwordFilter;
pub use nlp::tokenizer::word_count;
pub use pipeline::{NoopObserver, PipelineObserver, StandardPipeline, Summary};
pub use summarizer::WordFrequencyTable;
pub use types::{LengthPolicy, ScoredSentence, Sentence, SummarizerConfig};

/// Summarizer bound to one validated configuration.
#[derive(Debug)]
pub struct Summarizer {
    config: SummarizerConfig,
    pipeline: StandardPipeline,
}

impl Default for Summarizer {
    fn default() -> Self {
        Self::new()
    }
}

impl Summarizer {
    /// Create a summarizer with the default configuration
    pub fn new() -> Self {
        Self {
            config: SummarizerConfig::default(),
            pipeline: StandardPipeline::standard(),
        }
    }

    /// Create a summarizer with a custom configuration
    pub fn with_config(config: SummarizerConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
            pipeline: StandardPipeline::standard(),
        })
    }

    pub fn config(&self) -> &SummarizerConfig {
        &self.config
    }

    /// Summarize with the configured default length
    pub fn summarize(&self, text: &str) -> Result<String> {
        self.summarize_with(text, self.config.length)
    }

    /// Summarize with an explicit length policy
    pub fn summarize_with(&self, text: &str, length: LengthPolicy) -> Result<String> {
        self.summarize_detailed(text, length).map(|summary| summary.text)
    }

    /// Summarize and return the selected sentences with their scores
    pub fn summarize_detailed(&self, text: &str, length: LengthPolicy) -> Result<Summary> {
        self.summarize_observed(text, length, &mut NoopObserver)
    }

    /// Summarize while reporting stage events to `observer`
    pub fn summarize_observed(
        &self,
        text: &str,
        length: LengthPolicy,
        observer: &mut impl PipelineObserver,
    ) -> Result<Summary> {
        self.pipeline.run(text, length, &self.config, observer)
    }
}

/// Summarize `text` with the default configuration
pub fn summarize(text: &str, length: LengthPolicy) -> Result<String> {
    Summarizer::new().summarize_with(text, length)
}

/// Summarize `text` with a custom configuration (and its default length)
pub fn summarize_with_config(text: &str, config: SummarizerConfig) -> Result<String> {
    Summarizer::with_config(config)?.summarize(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    const TEXT: &str = "Honeybees pollinate many of the crops people eat. \
        A single colony can hold 60000 bees in summer. \
        Beekeepers move hives between farms during the season. \
        Colony losses rose sharply in recent winters. \
        Pesticides and parasites both weaken honeybees. \
        Wild bees also pollinate crops and need habitat. \
        Farmers plant flower strips to support wild bees. \
        The farm stand sells fresh bread on weekends.";

    #[test]
    fn test_summarize_default() {
        let summary = summarize(TEXT, LengthPolicy::Medium).unwrap();
        // 8 sentences, medium -> 3
        let detailed = Summarizer::new()
            .summarize_detailed(TEXT, LengthPolicy::Medium)
            .unwrap();
        assert_eq!(detailed.selected_count(), 3);
        assert_eq!(summary, detailed.text);
    }

    #[test]
    fn test_summarizer_uses_config_length() {
        let config = SummarizerConfig::default().with_length(LengthPolicy::Brief);
        let summarizer = Summarizer::with_config(config).unwrap();
        let brief = summarizer.summarize(TEXT).unwrap();
        assert_eq!(brief, summarize(TEXT, LengthPolicy::Brief).unwrap());
    }

    #[test]
    fn test_with_config_rejects_invalid() {
        let config = SummarizerConfig {
            lead_boost: 0.0,
            ..Default::default()
        };
        let err = Summarizer::with_config(config).unwrap_err();
        assert_eq!(err.code(), ErrorCode::InvalidConfig);
    }

    #[test]
    fn test_summarize_with_config_extra_stopwords() {
        let config = SummarizerConfig::default().with_stopwords(["bees", "honeybees"]);
        let summary = summarize_with_config(TEXT, config).unwrap();
        assert!(!summary.is_empty());
    }

    #[test]
    fn test_empty_input() {
        let err = summarize("   ", LengthPolicy::Brief).unwrap_err();
        assert!(matches!(err, SummarizeError::Validation(ValidationError::Empty)));
    }
}
