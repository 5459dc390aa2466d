//! Typed pipeline artifacts.
//!
//! Intermediate results flow between stages as plain crate types
//! ([`Sentence`](crate::types::Sentence),
//! [`WordFrequencyTable`](crate::summarizer::WordFrequencyTable),
//! [`ScoredSentence`]); the types here are the ones that exist only at stage
//! boundaries.

use serde::{Deserialize, Serialize};

use crate::types::{LengthPolicy, ScoredSentence};

/// What the validator learned about the raw input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputStats {
    /// Whitespace-delimited word count
    pub words: usize,
}

/// Public-facing pipeline output.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Summary {
    /// Selected sentences joined by single spaces
    pub text: String,
    /// Selected sentences in document order
    pub sentences: Vec<ScoredSentence>,
    /// Policy the selection was made with
    pub length: LengthPolicy,
    /// Number of sentences the input was segmented into
    pub total_sentences: usize,
    /// Word count of the input
    pub word_count: usize,
}

impl Summary {
    /// Number of selected sentences
    pub fn selected_count(&self) -> usize {
        self.sentences.len()
    }

    /// Fraction of the input's sentences kept
    pub fn compression_ratio(&self) -> f64 {
        if self.total_sentences == 0 {
            return 0.0;
        }
        self.sentences.len() as f64 / self.total_sentences as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Sentence;

    fn summary() -> Summary {
        Summary {
            text: "Alpha. Gamma.".to_string(),
            sentences: vec![
                ScoredSentence::new(Sentence::new("Alpha.", 0, 0, 6), 3.0),
                ScoredSentence::new(Sentence::new("Gamma.", 2, 14, 20), 2.0),
            ],
            length: LengthPolicy::Detailed,
            total_sentences: 4,
            word_count: 4,
        }
    }

    #[test]
    fn test_counts() {
        let s = summary();
        assert_eq!(s.selected_count(), 2);
        assert_eq!(s.compression_ratio(), 0.5);
    }

    #[test]
    fn test_serializes_for_json_consumers() {
        let json = serde_json::to_value(summary()).unwrap();
        assert_eq!(json["text"], "Alpha. Gamma.");
        assert_eq!(json["length"], "detailed");
        assert_eq!(json["sentences"][1]["sentence"]["index"], 2);
        assert_eq!(json["sentences"][0]["score"], 3.0);
    }
}
