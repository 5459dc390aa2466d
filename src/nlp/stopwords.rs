//! Stopword filtering
//!
//! The built-in list is the fixed set of function words the scorer has always
//! ignored. A language list from the `stop-words` crate and custom words can be
//! merged on top of it.

use crate::types::SummarizerConfig;
use rustc_hash::FxHashSet;
use stop_words::{get, LANGUAGE};

/// Function words excluded from frequency counting and sentence scoring.
pub const BUILTIN_STOPWORDS: [&str; 24] = [
    "this", "that", "with", "from", "have", "been", "were", "will", "would", "could", "should",
    "their", "there", "these", "those", "what", "which", "when", "where", "who", "whom", "whose",
    "why", "how",
];

/// A filter for removing stopwords from text
#[derive(Debug, Clone)]
pub struct StopwordFilter {
    /// Set of stopwords (lowercase)
    stopwords: FxHashSet<String>,
    /// Whether the filter is case-sensitive
    case_sensitive: bool,
}

impl Default for StopwordFilter {
    fn default() -> Self {
        Self::builtin()
    }
}

impl StopwordFilter {
    /// The fixed built-in list
    pub fn builtin() -> Self {
        Self::from_list(&BUILTIN_STOPWORDS)
    }

    /// The built-in list merged with a language's list from `stop-words`.
    ///
    /// Supported languages: en, de, fr, es, it, pt, nl, ru, sv, no, da, fi,
    /// hu, tr, pl, ar. Unknown codes add nothing beyond the built-in list.
    pub fn for_language(language: &str) -> Self {
        let mut filter = Self::builtin();
        if let Some(words) = Self::load_stopwords(language) {
            filter.stopwords.extend(words);
        }
        filter
    }

    /// Build the filter described by a config: built-in list, optional
    /// language list, then the config's extra words.
    ///
    /// Case-sensitive, since it is only ever queried with normalized tokens.
    pub fn from_config(config: &SummarizerConfig) -> Self {
        let mut filter = match config.language.as_deref() {
            Some(language) => Self::for_language(language),
            None => Self::builtin(),
        };
        let extra: Vec<&str> = config.stopwords.iter().map(String::as_str).collect();
        filter.add_stopwords(&extra);
        filter.with_case_sensitive(true)
    }

    /// Create an empty stopword filter (no filtering)
    pub fn empty() -> Self {
        Self {
            stopwords: FxHashSet::default(),
            case_sensitive: false,
        }
    }

    /// Create a stopword filter from a custom list
    pub fn from_list(words: &[&str]) -> Self {
        let stopwords: FxHashSet<String> = words.iter().map(|w| w.to_lowercase()).collect();
        Self {
            stopwords,
            case_sensitive: false,
        }
    }

    /// Set case sensitivity
    pub fn with_case_sensitive(mut self, case_sensitive: bool) -> Self {
        self.case_sensitive = case_sensitive;
        self
    }

    /// Add additional stopwords to the filter
    pub fn add_stopwords(&mut self, words: &[&str]) {
        for word in words {
            self.stopwords.insert(word.to_lowercase());
        }
    }

    /// Check if a word is a stopword
    pub fn is_stopword(&self, word: &str) -> bool {
        if self.case_sensitive {
            self.stopwords.contains(word)
        } else {
            self.stopwords.contains(&word.to_lowercase())
        }
    }

    /// Get the number of stopwords in the filter
    pub fn len(&self) -> usize {
        self.stopwords.len()
    }

    /// Check if the filter is empty
    pub fn is_empty(&self) -> bool {
        self.stopwords.is_empty()
    }

    fn load_stopwords(language: &str) -> Option<Vec<String>> {
        let lang = match language.to_lowercase().as_str() {
            "en" | "english" => LANGUAGE::English,
            "de" | "german" => LANGUAGE::German,
            "fr" | "french" => LANGUAGE::French,
            "es" | "spanish" => LANGUAGE::Spanish,
            "it" | "italian" => LANGUAGE::Italian,
            "pt" | "portuguese" => LANGUAGE::Portuguese,
            "nl" | "dutch" => LANGUAGE::Dutch,
            "ru" | "russian" => LANGUAGE::Russian,
            "sv" | "swedish" => LANGUAGE::Swedish,
            "no" | "norwegian" => LANGUAGE::Norwegian,
            "da" | "danish" => LANGUAGE::Danish,
            "fi" | "finnish" => LANGUAGE::Finnish,
            "hu" | "hungarian" => LANGUAGE::Hungarian,
            "tr" | "turkish" => LANGUAGE::Turkish,
            "pl" | "polish" => LANGUAGE::Polish,
            "ar" | "arabic" => LANGUAGE::Arabic,
            _ => return None,
        };

        Some(get(lang).iter().map(|s| s.to_lowercase()).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_stopwords() {
        let filter = StopwordFilter::builtin();

        assert_eq!(filter.len(), 24);
        assert!(filter.is_stopword("which"));
        assert!(filter.is_stopword("Should")); // case insensitive
        assert!(filter.is_stopword("whom"));
        assert!(!filter.is_stopword("the")); // short words are handled by length, not here
        assert!(!filter.is_stopword("about"));
        assert!(!filter.is_stopword("machine"));
    }

    #[test]
    fn test_custom_stopwords() {
        let mut filter = StopwordFilter::from_list(&["custom", "words"]);

        assert!(filter.is_stopword("custom"));
        assert!(filter.is_stopword("words"));
        assert!(!filter.is_stopword("this"));

        filter.add_stopwords(&["Extra"]);
        assert!(filter.is_stopword("extra"));
        assert_eq!(filter.len(), 3);
    }

    #[test]
    fn test_empty_filter() {
        let filter = StopwordFilter::empty();

        assert!(!filter.is_stopword("this"));
        assert!(filter.is_empty());
    }

    #[test]
    fn test_language_list_extends_builtin() {
        let filter = StopwordFilter::for_language("en");

        assert!(filter.is_stopword("about"));
        assert!(filter.is_stopword("whose"));
        assert!(filter.len() > BUILTIN_STOPWORDS.len());
        assert!(!filter.is_stopword("machine"));
    }

    #[test]
    fn test_unknown_language_is_builtin_only() {
        let filter = StopwordFilter::for_language("klingon");
        assert_eq!(filter.len(), BUILTIN_STOPWORDS.len());
    }

    #[test]
    fn test_from_config() {
        let config = SummarizerConfig::default().with_stopwords(["Rust"]);
        let filter = StopwordFilter::from_config(&config);

        assert!(filter.is_stopword("rust"));
        assert!(filter.is_stopword("there"));
        // Normalized tokens are lowercase; the config filter does not re-lowercase.
        assert!(!filter.is_stopword("There"));
    }

    #[test]
    fn test_case_sensitivity() {
        let filter = StopwordFilter::builtin().with_case_sensitive(true);

        assert!(filter.is_stopword("these"));
        assert!(!filter.is_stopword("These"));
    }
}
