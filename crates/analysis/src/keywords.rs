//! Keyword ranking.

use crate::frequency::frequency_table;
use crate::nlp::{stopwords, tokens};
use chatdigest_core::constants::MIN_KEYWORD_TOKEN_LEN;

/// Ranks the most frequent substantive words in the text.
///
/// Tokens shorter than four characters and members of the fixed stopword
/// set are excluded. Returns at most `max` distinct tokens in descending
/// frequency order; equally frequent tokens keep their first-seen order.
pub fn extract_keywords(text: &str, max: usize) -> Vec<String> {
    let table = frequency_table(tokens(text), MIN_KEYWORD_TOKEN_LEN, Some(stopwords()));

    let mut ranked: Vec<(String, usize)> = table.into_iter().collect();
    // Stable sort: ties keep first-seen order.
    ranked.sort_by_key(|(_, count)| std::cmp::Reverse(*count));

    ranked
        .into_iter()
        .take(max)
        .map(|(word, _)| word)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nlp::is_stopword;

    #[test]
    fn ranks_by_descending_frequency() {
        let text = "budget budget budget report report weather";
        assert_eq!(
            extract_keywords(text, 8),
            vec!["budget", "report", "weather"]
        );
    }

    #[test]
    fn ties_keep_first_seen_order() {
        let text = "zebra apple zebra apple mango";
        assert_eq!(extract_keywords(text, 8), vec!["zebra", "apple", "mango"]);
    }

    #[test]
    fn excludes_short_tokens_and_stopwords() {
        let text = "the the the fix fix gym budget";
        // "the" is a stopword, "fix" and "gym" are under four characters.
        assert_eq!(extract_keywords(text, 8), vec!["budget"]);
    }

    #[test]
    fn respects_the_cap() {
        let text = "alpha bravo charlie delta echo";
        assert_eq!(extract_keywords(text, 2).len(), 2);
    }

    #[test]
    fn results_are_distinct_long_non_stopwords() {
        let text = "send the report, then send the report again";
        let keywords = extract_keywords(text, 8);
        for word in &keywords {
            assert!(word.chars().count() >= 4);
            assert!(!is_stopword(word));
        }
        let mut deduped = keywords.clone();
        deduped.dedup();
        assert_eq!(deduped, keywords);
    }

    #[test]
    fn empty_input_yields_no_keywords() {
        assert!(extract_keywords("", 8).is_empty());
    }
}
