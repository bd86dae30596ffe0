//! Engine options.

use chatdigest_core::constants;
use serde::{Deserialize, Serialize};

/// Caps and knobs for one analysis pass.
///
/// Every analysis request constructs its outputs from scratch; the options
/// carry no state between invocations.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisOptions {
    /// Number of sentences in the extractive summary.
    pub summary_sentences: usize,

    /// Maximum number of ranked keywords.
    pub max_keywords: usize,

    /// Maximum number of detected action items.
    pub max_action_items: usize,

    /// Marker exporters emit in place of attachments; lines containing it
    /// are dropped during normalization.
    pub media_marker: String,
}

impl Default for AnalysisOptions {
    fn default() -> Self {
        Self {
            summary_sentences: constants::DEFAULT_SUMMARY_SENTENCES,
            max_keywords: constants::DEFAULT_MAX_KEYWORDS,
            max_action_items: constants::DEFAULT_MAX_ACTION_ITEMS,
            media_marker: constants::MEDIA_OMITTED_MARKER.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_constants() {
        let options = AnalysisOptions::default();
        assert_eq!(options.summary_sentences, 3);
        assert_eq!(options.max_keywords, 8);
        assert_eq!(options.max_action_items, 8);
        assert_eq!(options.media_marker, "Media omitted");
    }
}
