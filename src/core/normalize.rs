//! Text normalization: raw cell text to a filtered token sequence.
//!
//! The pipeline is deliberately blunt: lowercase, keep only ASCII letters,
//! split on whitespace, then drop short words and stopwords. Anything outside
//! `a`-`z` (digits, punctuation, accented or non-Latin letters) acts as a
//! separator.

use std::sync::LazyLock;

use regex::Regex;

use super::stopwords::Stopwords;

/// Words of this many characters or fewer are dropped.
pub const SHORT_WORD_MAX_LEN: usize = 2;

static NON_LETTER_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[^a-z\s]").unwrap());

static WHITESPACE_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").unwrap());

/// Ordered tokens from one text blob. Duplicates are kept.
pub type TokenSequence = Vec<String>;

/// Normalize a possibly-missing text value into tokens.
///
/// Missing input yields an empty sequence. Never fails.
///
/// # Examples
///
/// ```
/// use csvcloud::core::{Stopwords, normalize};
///
/// let stopwords = Stopwords::indonesian();
/// let tokens = normalize(Some("A1 b2 C3!!  multiple   spaces"), &stopwords);
/// assert_eq!(tokens, vec!["multiple", "spaces"]);
/// assert!(normalize(None, &stopwords).is_empty());
/// ```
pub fn normalize(text: Option<&str>, stopwords: &Stopwords) -> TokenSequence {
    let Some(text) = text else {
        return Vec::new();
    };

    let lowered = text.to_lowercase();
    let letters_only = NON_LETTER_REGEX.replace_all(&lowered, " ");
    let collapsed = WHITESPACE_REGEX.replace_all(&letters_only, " ");

    collapsed
        .trim()
        .split(' ')
        .filter(|word| is_kept(word, stopwords))
        .map(str::to_string)
        .collect()
}

/// Join tokens back into the single-space form the cloud renderer consumes.
pub fn detokenize(tokens: &[String]) -> String {
    tokens.join(" ")
}

/// Normalize and re-join in one step.
pub fn clean_text(text: Option<&str>, stopwords: &Stopwords) -> String {
    detokenize(&normalize(text, stopwords))
}

fn is_kept(word: &str, stopwords: &Stopwords) -> bool {
    // Only ASCII letters remain here, so byte length equals character length.
    word.len() > SHORT_WORD_MAX_LEN && !stopwords.contains(word)
}
