//! Word counting and token normalization
//!
//! Normalization is ASCII-oriented: text is lowercased, every
//! character that is neither an ASCII word character (`[A-Za-z0-9_]`) nor
//! whitespace is removed, and the rest is split on whitespace runs. Non-ASCII
//! letters are therefore dropped, so "café" normalizes to "caf".
//!
//! Whitespace is the ECMAScript set: Unicode `White_Space` without U+0085
//! (NEXT LINE) plus U+FEFF (BYTE ORDER MARK).

use super::stopwords::StopwordFilter;

/// Whether `c` separates words
pub fn is_space(c: char) -> bool {
    match c {
        '\u{85}' => false,
        '\u{feff}' => true,
        _ => c.is_whitespace(),
    }
}

/// `text` without leading and trailing whitespace
pub fn trim(text: &str) -> &str {
    text.trim_matches(is_space)
}

/// Whitespace-delimited words of `text`, empty pieces skipped
pub fn words(text: &str) -> impl Iterator<Item = &str> {
    text.split(is_space).filter(|w| !w.is_empty())
}

/// Number of whitespace-delimited words in `text`
pub fn word_count(text: &str) -> usize {
    words(text).count()
}

fn is_word_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// Lowercase `text` and strip everything but ASCII word characters and
/// whitespace.
pub fn normalize(text: &str) -> String {
    text.to_lowercase()
        .chars()
        .filter(|&c| is_word_char(c) || is_space(c))
        .collect()
}

/// Normalized tokens of `text` in order, including short words and stopwords
pub fn tokenize(text: &str) -> Vec<String> {
    words(&normalize(text)).map(str::to_string).collect()
}

/// Tokens that count towards importance: at least `min_length` bytes long and
/// not a stopword.
///
/// Normalized tokens are pure ASCII, so byte length equals character length.
pub fn content_tokens(text: &str, stopwords: &StopwordFilter, min_length: usize) -> Vec<String> {
    tokenize(text)
        .into_iter()
        .filter(|token| token.len() >= min_length && !stopwords.is_stopword(token))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_word_count() {
        assert_eq!(word_count(""), 0);
        assert_eq!(word_count("   \n\t "), 0);
        assert_eq!(word_count("one"), 1);
        assert_eq!(word_count("  one two\n\nthree\tfour  "), 4);
        // Punctuation-only tokens are still words for counting purposes
        assert_eq!(word_count("wait - what ?"), 4);
    }

    #[test]
    fn test_whitespace_set() {
        // U+FEFF separates words, U+0085 does not
        assert_eq!(word_count("alpha\u{feff}beta"), 2);
        assert_eq!(word_count("alpha\u{85}beta"), 1);
        assert_eq!(word_count("\u{feff}"), 0);
        assert_eq!(word_count("a\u{a0}b\u{3000}c\u{2028}d"), 4);
        assert_eq!(trim("\u{feff} word \u{feff}"), "word");
        assert_eq!(trim("\u{85}word"), "\u{85}word");
        assert_eq!(tokenize("Cold\u{85}Front"), vec!["coldfront".to_string()]);
    }

    #[test]
    fn test_normalize_strips_punctuation() {
        assert_eq!(normalize("Hello, World! It's 2024."), "hello world its 2024");
        assert_eq!(normalize("snake_case stays"), "snake_case stays");
        assert_eq!(normalize("state-of-the-art"), "stateoftheart");
    }

    #[test]
    fn test_normalize_drops_non_ascii_letters() {
        assert_eq!(normalize("Café naïve"), "caf nave");
        assert_eq!(normalize("日本語 text"), " text");
    }

    #[test]
    fn test_tokenize() {
        assert_eq!(
            tokenize("The cat -- sat."),
            vec!["the".to_string(), "cat".to_string(), "sat".to_string()]
        );
        assert!(tokenize("...").is_empty());
    }

    #[test]
    fn test_content_tokens_filters_length_and_stopwords() {
        let filter = StopwordFilter::builtin().with_case_sensitive(true);
        let tokens = content_tokens(
            "Those engineers would have built bridges with steel.",
            &filter,
            4,
        );
        assert_eq!(
            tokens,
            vec![
                "engineers".to_string(),
                "built".to_string(),
                "bridges".to_string(),
                "steel".to_string(),
            ]
        );
    }

    #[test]
    fn test_content_tokens_length_boundary() {
        let filter = StopwordFilter::empty();
        // "tree" has exactly four characters and is kept; "oak" is dropped
        assert_eq!(content_tokens("oak tree", &filter, 4), vec!["tree".to_string()]);
    }
}
