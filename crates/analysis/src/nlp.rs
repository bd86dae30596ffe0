//! Tokenization and stopword filtering.

use once_cell::sync::Lazy;
use std::collections::HashSet;

/// Common English function words excluded from keyword ranking.
///
/// This list is closed: keyword extraction depends on its exact membership,
/// which is pinned by the test suite.
static STOPWORDS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "the", "and", "for", "that", "this", "with", "from", "are", "was", "but", "have", "not",
        "you", "your", "they", "their", "will", "can", "all", "what", "when", "which", "how",
        "who", "our", "has", "had", "were", "been", "would", "there", "here",
    ]
    .into_iter()
    .collect()
});

/// Returns the fixed English stopword set.
pub fn stopwords() -> &'static HashSet<&'static str> {
    &STOPWORDS
}

/// Returns true if the word is a member of the stopword set.
pub fn is_stopword(word: &str) -> bool {
    STOPWORDS.contains(word)
}

// Word characters are letters and underscore; digits and every other
// character separate tokens.
fn is_word_char(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_'
}

/// Splits text into lowercase word tokens.
///
/// Tokens are maximal runs of word characters, lowercased. Digits and
/// punctuation act as separators and never appear in a token. The iterator
/// is lazy, never fails, and yields nothing for inputs without word
/// characters (including the empty string). Multiplicity is preserved:
/// repeated words yield repeated tokens.
pub fn tokens(text: &str) -> impl Iterator<Item = String> + '_ {
    text.split(|c: char| !is_word_char(c))
        .filter(|word| !word.is_empty())
        .map(|word| word.to_ascii_lowercase())
}
