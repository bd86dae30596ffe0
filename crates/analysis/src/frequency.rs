//! Frequency-table construction.
//!
//! One pure function serves both consumers: the summarizer counts tokens of
//! length three or more with no stopword filter, and the keyword extractor
//! counts tokens of length four or more with the stopword set applied. The
//! two tables are always built independently because their filtering
//! differs.

use indexmap::IndexMap;
use std::collections::HashSet;

/// Builds a token-to-count table from a token sequence.
///
/// A token is counted iff its length is at least `min_len` and, when a
/// stopword set is supplied, it is not a member of that set. The returned
/// map preserves first-seen insertion order, which downstream ranking uses
/// as the tie-break between equally frequent tokens.
pub fn frequency_table<I>(
    tokens: I,
    min_len: usize,
    stopwords: Option<&HashSet<&str>>,
) -> IndexMap<String, usize>
where
    I: IntoIterator<Item = String>,
{
    let mut table = IndexMap::new();
    for token in tokens {
        if token.chars().count() < min_len {
            continue;
        }
        if let Some(excluded) = stopwords {
            if excluded.contains(token.as_str()) {
                continue;
            }
        }
        *table.entry(token).or_insert(0) += 1;
    }
    table
}
