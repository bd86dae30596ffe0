//! Sentence splitting and extractive summarization.
//!
//! Sentences are scored by the cumulative frequency of their tokens over
//! the whole input, then the top scorers are returned verbatim. There is no
//! language model here; repeated vocabulary is the entire signal.

use crate::frequency::frequency_table;
use crate::nlp::tokens;
use chatdigest_core::constants::MIN_SUMMARY_TOKEN_LEN;
use once_cell::sync::Lazy;
use regex::Regex;

// Priority alternation: a run of characters up to sentence punctuation,
// else a run of newlines, else the unpunctuated remainder of the text.
static SENTENCE_SPLIT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^.!?]+[.!?]|\n+|.+$").expect("sentence split pattern"));

/// Splits text into sentence-like units.
///
/// Guaranteed to produce at least one unit for any non-empty input that
/// contains a non-newline character, even without punctuation.
pub fn split_sentences(text: &str) -> Vec<&str> {
    SENTENCE_SPLIT.find_iter(text).map(|m| m.as_str()).collect()
}

/// Selects up to `count` sentences with the highest cumulative token
/// frequency.
///
/// The frequency table is built over the entire input (tokens of length
/// three or more, no stopword filter); each sentence is then tokenized
/// independently and scored against that global table. The sort is stable,
/// so equally scored sentences keep their source order. Selected sentences
/// are trimmed, and any that trim to empty are dropped. If scoring selects
/// nothing non-empty, the first `count` sentences are returned instead, so
/// the summary is only empty when the input has no sentences at all.
pub fn summarize(text: &str, count: usize) -> Vec<String> {
    let sentences = split_sentences(text);
    let table = frequency_table(tokens(text), MIN_SUMMARY_TOKEN_LEN, None);

    let mut scored: Vec<(usize, &str)> = sentences
        .iter()
        .map(|sentence| {
            let score: usize = tokens(sentence)
                .map(|token| table.get(token.as_str()).copied().unwrap_or(0))
                .sum();
            (score, *sentence)
        })
        .collect();
    scored.sort_by_key(|(score, _)| std::cmp::Reverse(*score));

    let chosen: Vec<String> = scored
        .iter()
        .take(count)
        .map(|(_, sentence)| sentence.trim().to_string())
        .filter(|sentence| !sentence.is_empty())
        .collect();
    if !chosen.is_empty() {
        return chosen;
    }

    // Nothing usable was selected; fall back to the first `count` non-empty
    // sentences in source order so non-empty input keeps a summary.
    sentences
        .iter()
        .map(|sentence| sentence.trim().to_string())
        .filter(|sentence| !sentence.is_empty())
        .take(count)
        .collect()
}
