//! Stage trait definitions for the pipeline.
//!
//! Each trait represents one processing stage boundary. Implementations are
//! statically dispatched; every trait is object-safe as well.
//!
//! | Stage | Trait | Default impl |
//! |-------|-------|--------------|
//! | validate | [`InputValidator`] | [`ValidationEngine`] |
//! | segment  | [`Segmenter`] | [`PunctuationSegmenter`] |
//! | tabulate | [`Tabulator`] | [`DocumentTabulator`] |
//! | score    | [`Scorer`] | [`WeightedScorer`] |
//! | select   | [`Selector`] | [`TopNSelector`] |

use crate::errors::{ProcessingError, ValidationError};
use crate::nlp::segmenter;
use crate::nlp::stopwords::StopwordFilter;
use crate::pipeline::artifacts::InputStats;
use crate::pipeline::validation::ValidationEngine;
use crate::summarizer::{FrequencyScorer, SentenceSelector, SummaryResult, WordFrequencyTable};
use crate::types::{LengthPolicy, ScoredSentence, Sentence, SummarizerConfig};

// ============================================================================
// InputValidator — reject unusable input (stage 0)
// ============================================================================

/// Rejects unusable input before any processing.
pub trait InputValidator {
    fn validate(&self, text: &str, cfg: &SummarizerConfig) -> Result<InputStats, ValidationError>;
}

impl InputValidator for ValidationEngine {
    fn validate(&self, text: &str, cfg: &SummarizerConfig) -> Result<InputStats, ValidationError> {
        ValidationEngine::validate(self, text, cfg)
    }
}

// ============================================================================
// Segmenter — raw text to ordered sentences (stage 1)
// ============================================================================

/// Splits raw text into an ordered sequence of sentences.
///
/// # Contract
///
/// - Sentences are trimmed and non-empty.
/// - Indices are contiguous from 0 in document order.
/// - No sentence at all is an error ([`ProcessingError::NoSentences`]).
pub trait Segmenter {
    fn segment(&self, text: &str, cfg: &SummarizerConfig) -> Result<Vec<Sentence>, ProcessingError>;
}

/// Punctuation-followed-by-capital heuristic (see [`crate::nlp::segmenter`]).
#[derive(Debug, Clone, Copy, Default)]
pub struct PunctuationSegmenter;

impl Segmenter for PunctuationSegmenter {
    #[inline]
    fn segment(
        &self,
        text: &str,
        _cfg: &SummarizerConfig,
    ) -> Result<Vec<Sentence>, ProcessingError> {
        segmenter::segment(text)
    }
}

// ============================================================================
// Tabulator — document-wide word counts (stage 2)
// ============================================================================

/// Builds the word frequency table from the entire input.
pub trait Tabulator {
    fn tabulate(
        &self,
        text: &str,
        stopwords: &StopwordFilter,
        cfg: &SummarizerConfig,
    ) -> WordFrequencyTable;
}

/// Counts content tokens over the whole document.
#[derive(Debug, Clone, Copy, Default)]
pub struct DocumentTabulator;

impl Tabulator for DocumentTabulator {
    #[inline]
    fn tabulate(
        &self,
        text: &str,
        stopwords: &StopwordFilter,
        cfg: &SummarizerConfig,
    ) -> WordFrequencyTable {
        WordFrequencyTable::from_text(text, stopwords, cfg.min_word_length)
    }
}

// ============================================================================
// Scorer — per-sentence importance (stage 3)
// ============================================================================

/// Assigns each sentence an importance score.
///
/// # Contract
///
/// One output per input sentence, in the same order.
pub trait Scorer {
    fn score(
        &self,
        sentences: &[Sentence],
        table: &WordFrequencyTable,
        stopwords: &StopwordFilter,
        cfg: &SummarizerConfig,
    ) -> Vec<ScoredSentence>;
}

/// Frequency sum with lead and numeric boosts taken from the config.
#[derive(Debug, Clone, Copy, Default)]
pub struct WeightedScorer;

impl Scorer for WeightedScorer {
    fn score(
        &self,
        sentences: &[Sentence],
        table: &WordFrequencyTable,
        stopwords: &StopwordFilter,
        cfg: &SummarizerConfig,
    ) -> Vec<ScoredSentence> {
        FrequencyScorer::from_config(cfg).score(sentences, table, stopwords)
    }
}

// ============================================================================
// Selector — top-N in document order (stage 4)
// ============================================================================

/// Chooses the sentences that make up the summary.
///
/// # Contract
///
/// The selected sentences come back in ascending index order.
pub trait Selector {
    fn select(
        &self,
        scored: &[ScoredSentence],
        policy: LengthPolicy,
        cfg: &SummarizerConfig,
    ) -> SummaryResult;
}

/// Highest scores first, ties to the earlier sentence, capped by policy.
#[derive(Debug, Clone, Copy, Default)]
pub struct TopNSelector;

impl Selector for TopNSelector {
    #[inline]
    fn select(
        &self,
        scored: &[ScoredSentence],
        policy: LengthPolicy,
        _cfg: &SummarizerConfig,
    ) -> SummaryResult {
        SentenceSelector::new().with_policy(policy).select(scored)
    }
}
