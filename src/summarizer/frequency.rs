//! Word frequency tabulation
//!
//! Counts content tokens over the whole input once. Sentence scoring reads
//! the same table for every sentence instead of counting locally.

use crate::nlp::stopwords::StopwordFilter;
use crate::nlp::tokenizer::content_tokens;
use rustc_hash::FxHashMap;

/// Occurrence counts of normalized content tokens across a document
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WordFrequencyTable {
    counts: FxHashMap<String, usize>,
    total: usize,
}

impl WordFrequencyTable {
    /// Create an empty table
    pub fn new() -> Self {
        Self::default()
    }

    /// Tabulate the content tokens of `text`
    pub fn from_text(text: &str, stopwords: &StopwordFilter, min_length: usize) -> Self {
        let mut table = Self::new();
        for token in content_tokens(text, stopwords, min_length) {
            table.add(token);
        }
        table
    }

    /// Record one occurrence of `token`
    pub fn add(&mut self, token: String) {
        *self.counts.entry(token).or_insert(0) += 1;
        self.total += 1;
    }

    /// Count for `token`, or 0 if it never occurred
    pub fn count(&self, token: &str) -> usize {
        self.counts.get(token).copied().unwrap_or(0)
    }

    /// Number of distinct tokens
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Total number of counted occurrences
    pub fn total(&self) -> usize {
        self.total
    }

    /// Iterate over `(token, count)` pairs in unspecified order
    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.counts.iter().map(|(k, &v)| (k.as_str(), v))
    }

    /// The `n` most frequent tokens, count descending then token ascending
    pub fn top_terms(&self, n: usize) -> Vec<(&str, usize)> {
        let mut terms: Vec<_> = self.iter().collect();
        terms.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
        terms.truncate(n);
        terms
    }
}
