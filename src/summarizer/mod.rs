//! Summarization components
//!
//! Provides extractive summarization driven by document-wide word
//! frequencies: tabulate, score each sentence, then select the best ones.

pub mod frequency;
pub mod scorer;
pub mod selector;

pub use frequency::WordFrequencyTable;
pub use scorer::FrequencyScorer;
pub use selector::{SentenceSelector, SummaryResult};
