//! Input validation.
//!
//! The engine runs its registered [`ValidationRule`]s, in registration order,
//! against the raw text and its word count, and surfaces the first failure.
//! Empty input therefore reports `Empty` rather than `TooShort`.
//!
//! # Quick start
//!
//! ```rust
//! use rapid_summarizer::pipeline::validation::ValidationEngine;
//! use rapid_summarizer::types::SummarizerConfig;
//!
//! let engine = ValidationEngine::with_defaults();
//! assert!(engine.validate("too short", &SummarizerConfig::default()).is_err());
//! ```

use crate::errors::ValidationError;
use crate::nlp::tokenizer::{trim, word_count};
use crate::pipeline::artifacts::InputStats;
use crate::types::SummarizerConfig;

// ─── Rule trait ─────────────────────────────────────────────────────────────

/// A single check on the raw input.
///
/// Rules are stateless and must be `Send + Sync` so an engine can be shared
/// across threads.
pub trait ValidationRule: Send + Sync {
    /// Short, stable identifier for this rule (e.g., `"non_empty"`).
    fn name(&self) -> &str;

    /// Inspect the text and its word count.
    fn check(
        &self,
        text: &str,
        words: usize,
        config: &SummarizerConfig,
    ) -> Result<(), ValidationError>;
}

// ─── Engine ─────────────────────────────────────────────────────────────────

/// Runs a set of [`ValidationRule`]s against raw input text.
pub struct ValidationEngine {
    rules: Vec<Box<dyn ValidationRule>>,
}

impl ValidationEngine {
    /// Create an empty engine with no rules.
    pub fn new() -> Self {
        Self { rules: Vec::new() }
    }

    /// Create an engine with the default rules: non-empty, then minimum words.
    pub fn with_defaults() -> Self {
        let mut engine = Self::new();
        engine.add_rule(Box::new(NonEmptyRule));
        engine.add_rule(Box::new(MinWordsRule));
        engine
    }

    /// Register an additional rule.
    pub fn add_rule(&mut self, rule: Box<dyn ValidationRule>) {
        self.rules.push(rule);
    }

    /// Names of the registered rules, in order.
    pub fn rule_names(&self) -> Vec<&str> {
        self.rules.iter().map(|r| r.name()).collect()
    }

    /// Fail with the first rule's error, or return the input stats.
    pub fn validate(
        &self,
        text: &str,
        config: &SummarizerConfig,
    ) -> Result<InputStats, ValidationError> {
        let words = word_count(text);
        for rule in &self.rules {
            rule.check(text, words, config)?;
        }
        Ok(InputStats { words })
    }
}

impl Default for ValidationEngine {
    fn default() -> Self {
        Self::with_defaults()
    }
}

impl std::fmt::Debug for ValidationEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ValidationEngine")
            .field("rules", &self.rule_names())
            .finish()
    }
}

// ═══════════════════════════════════════════════════════════════════════════
//  Concrete rules
// ═══════════════════════════════════════════════════════════════════════════

// ─── 1. Text must not be blank ──────────────────────────────────────────────

struct NonEmptyRule;

impl ValidationRule for NonEmptyRule {
    fn name(&self) -> &str {
        "non_empty"
    }

    fn check(
        &self,
        text: &str,
        _words: usize,
        _config: &SummarizerConfig,
    ) -> Result<(), ValidationError> {
        if trim(text).is_empty() {
            Err(ValidationError::Empty)
        } else {
            Ok(())
        }
    }
}

// ─── 2. Enough words to summarize ───────────────────────────────────────────

struct MinWordsRule;

impl ValidationRule for MinWordsRule {
    fn name(&self) -> &str {
        "min_words"
    }

    fn check(
        &self,
        _text: &str,
        words: usize,
        config: &SummarizerConfig,
    ) -> Result<(), ValidationError> {
        if words < config.min_words {
            Err(ValidationError::TooShort {
                words,
                minimum: config.min_words,
            })
        } else {
            Ok(())
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════════
//  Tests
// ═══════════════════════════════════════════════════════════════════════════
