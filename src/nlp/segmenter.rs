//! Sentence segmentation
//!
//! A boundary falls right after `.`, `?` or `!` when the next non-whitespace
//! character is an ASCII capital letter. A literal `|` is a boundary too. The
//! heuristic knows nothing about grammar: "Dr. Smith" is split in two, and a
//! sentence ending in `.` followed by a lowercase or non-Latin letter is not
//! split at all.

use std::sync::LazyLock;

use regex::Regex;

use crate::errors::ProcessingError;
use crate::nlp::tokenizer::{is_space, trim};
use crate::types::Sentence;

/// Either a terminal mark, optional whitespace and a capital, or a pipe.
///
/// The whitespace class is the one [`is_space`] accepts.
static BOUNDARY: LazyLock<Option<Regex>> = LazyLock::new(|| {
    Regex::new(
        r"[.?!][\t\n\x0B\x0C\r \xA0\x{1680}\x{2000}-\x{200A}\x{2028}\x{2029}\x{202F}\x{205F}\x{3000}\x{FEFF}]*[A-Z]|\|",
    )
    .ok()
});

/// Split `text` into trimmed, non-empty sentences numbered from 0.
///
/// Fails with [`ProcessingError::NoSentences`] when nothing but whitespace
/// and pipes remains.
pub fn segment(text: &str) -> Result<Vec<Sentence>, ProcessingError> {
    let boundary = BOUNDARY
        .as_ref()
        .ok_or_else(|| ProcessingError::unexpected("sentence boundary pattern failed to compile"))?;

    // (fragment end, next fragment start) byte offsets
    let cuts = boundary.find_iter(text).map(|m| {
        if m.as_str() == "|" {
            (m.start(), m.end())
        } else {
            // The terminal mark and the capital are both single ASCII bytes.
            (m.start() + 1, m.end() - 1)
        }
    });

    let mut sentences = Vec::new();
    let mut start = 0;
    for (end, next) in cuts.chain(std::iter::once((text.len(), text.len()))) {
        push_fragment(text, start, end, &mut sentences);
        start = next;
    }

    if sentences.is_empty() {
        return Err(ProcessingError::NoSentences);
    }
    Ok(sentences)
}

fn push_fragment(text: &str, start: usize, end: usize, out: &mut Vec<Sentence>) {
    let fragment = &text[start..end];
    let trimmed = trim(fragment);
    if trimmed.is_empty() {
        return;
    }
    let lead = fragment.len() - fragment.trim_start_matches(is_space).len();
    let begin = start + lead;
    out.push(Sentence::new(
        trimmed,
        out.len(),
        begin,
        begin + trimmed.len(),
    ));
}
