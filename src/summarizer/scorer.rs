//! Sentence importance scoring
//!
//! A sentence scores the sum of the document-wide counts of its content
//! tokens. Leading sentences and sentences containing a digit are boosted;
//! both multipliers compose.

use super::frequency::WordFrequencyTable;
use crate::nlp::stopwords::StopwordFilter;
use crate::nlp::tokenizer::content_tokens;
use crate::types::{ScoredSentence, Sentence, SummarizerConfig};

/// Frequency-based sentence scorer
#[derive(Debug, Clone)]
pub struct FrequencyScorer {
    /// Tokens shorter than this are ignored
    min_word_length: usize,
    /// Sentences with `index < lead_sentences` are boosted
    lead_sentences: usize,
    lead_boost: f64,
    numeric_boost: f64,
}

impl Default for FrequencyScorer {
    fn default() -> Self {
        Self::from_config(&SummarizerConfig::default())
    }
}

impl FrequencyScorer {
    /// Create a scorer with the default weights
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a scorer from a config's weights
    pub fn from_config(config: &SummarizerConfig) -> Self {
        Self {
            min_word_length: config.min_word_length,
            lead_sentences: config.lead_sentences,
            lead_boost: config.lead_boost,
            numeric_boost: config.numeric_boost,
        }
    }

    /// Sum of table counts over the sentence's content tokens.
    ///
    /// Always non-negative, `+0.0` when nothing matches.
    pub fn base_score(
        &self,
        sentence: &Sentence,
        table: &WordFrequencyTable,
        stopwords: &StopwordFilter,
    ) -> f64 {
        content_tokens(&sentence.text, stopwords, self.min_word_length)
            .iter()
            .fold(0.0, |acc, token| acc + table.count(token) as f64)
    }

    /// Base score with the lead and numeric multipliers applied
    pub fn score_sentence(
        &self,
        sentence: &Sentence,
        table: &WordFrequencyTable,
        stopwords: &StopwordFilter,
    ) -> f64 {
        let mut score = self.base_score(sentence, table, stopwords);
        if sentence.index < self.lead_sentences {
            score *= self.lead_boost;
        }
        if sentence.has_digit() {
            score *= self.numeric_boost;
        }
        score
    }

    /// Score every sentence, keeping input order and length
    pub fn score(
        &self,
        sentences: &[Sentence],
        table: &WordFrequencyTable,
        stopwords: &StopwordFilter,
    ) -> Vec<ScoredSentence> {
        sentences
            .iter()
            .map(|s| ScoredSentence::new(s.clone(), self.score_sentence(s, table, stopwords)))
            .collect()
    }
}
