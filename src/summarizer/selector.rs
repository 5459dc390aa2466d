//! Ranked sentence selection for summarization
//!
//! Picks the highest-scoring sentences for a [`LengthPolicy`] and puts them
//! back into document order.

use std::cmp::Ordering;

use crate::types::{LengthPolicy, ScoredSentence};

/// Result of sentence selection
#[derive(Debug, Clone, PartialEq)]
pub struct SummaryResult {
    /// Selected sentences in document order
    pub sentences: Vec<ScoredSentence>,
    /// Number of sentences the policy asked for
    pub target: usize,
}

impl SummaryResult {
    /// Selected sentence texts joined by single spaces
    pub fn text(&self) -> String {
        self.sentences
            .iter()
            .map(|s| s.sentence.text.as_str())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Top-N sentence selector
#[derive(Debug, Clone, Copy, Default)]
pub struct SentenceSelector {
    policy: LengthPolicy,
}

impl SentenceSelector {
    /// Create a selector for the default policy
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the length policy
    pub fn with_policy(mut self, policy: LengthPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn policy(&self) -> LengthPolicy {
        self.policy
    }

    /// Select the top sentences.
    ///
    /// Sorting by score is stable, so among equal scores the earlier sentence
    /// wins. `-0.0` and `+0.0` are equal scores. The chosen subset is then
    /// re-sorted by index.
    pub fn select(&self, scored: &[ScoredSentence]) -> SummaryResult {
        let target = self.policy.target_count(scored.len());

        let mut ranked: Vec<ScoredSentence> = scored.to_vec();
        ranked.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal));
        ranked.truncate(target);

        // Sort by document order
        ranked.sort_by_key(|s| s.sentence.index);

        SummaryResult {
            sentences: ranked,
            target,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Sentence;

    fn scored(scores: &[f64]) -> Vec<ScoredSentence> {
        scores
            .iter()
            .enumerate()
            .map(|(i, &score)| {
                ScoredSentence::new(Sentence::new(format!("Sentence {i}."), i, 0, 0), score)
            })
            .collect()
    }

    fn indices(result: &SummaryResult) -> Vec<usize> {
        result.sentences.iter().map(|s| s.index()).collect()
    }

    #[test]
    fn test_selects_top_scores() {
        // 6 sentences, medium -> 2
        let input = scored(&[1.0, 9.0, 2.0, 3.0, 8.0, 0.0]);
        let result = SentenceSelector::new().select(&input);

        assert_eq!(result.target, 2);
        assert_eq!(indices(&result), vec![1, 4]);
    }

    #[test]
    fn test_document_order() {
        let input = scored(&[1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0, 10.0]);
        let result = SentenceSelector::new()
            .with_policy(LengthPolicy::Detailed)
            .select(&input);

        assert_eq!(indices(&result), vec![6, 7, 8, 9]);
        for i in 1..result.sentences.len() {
            assert!(result.sentences[i].index() > result.sentences[i - 1].index());
        }
    }

    #[test]
    fn test_ties_prefer_earlier_sentences() {
        let input = scored(&[5.0, 5.0, 5.0, 5.0, 5.0, 5.0]);
        let result = SentenceSelector::new().select(&input);

        assert_eq!(indices(&result), vec![0, 1]);
    }

    #[test]
    fn test_signed_zeros_tie() {
        // 2 sentences, brief -> 1
        let input = scored(&[-0.0, 0.0]);
        let result = SentenceSelector::new()
            .with_policy(LengthPolicy::Brief)
            .select(&input);

        assert_eq!(indices(&result), vec![0]);
    }

    #[test]
    fn test_zero_scores_still_selected() {
        let input = scored(&[0.0]);
        let result = SentenceSelector::new()
            .with_policy(LengthPolicy::Brief)
            .select(&input);

        assert_eq!(indices(&result), vec![0]);
        assert_eq!(result.text(), "Sentence 0.");
    }

    #[test]
    fn test_text_joins_with_single_space() {
        let input = scored(&[3.0, 1.0, 2.0, 0.0]);
        let result = SentenceSelector::new()
            .with_policy(LengthPolicy::Detailed)
            .select(&input);

        // 4 sentences, detailed -> 2
        assert_eq!(result.text(), "Sentence 0. Sentence 2.");
    }

    #[test]
    fn test_empty_input() {
        let result = SentenceSelector::new().select(&[]);

        assert!(result.sentences.is_empty());
        assert_eq!(result.target, 0);
        assert_eq!(result.text(), "");
    }
}
