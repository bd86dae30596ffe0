//! Shared data types for chatdigest.

use serde::{Deserialize, Serialize};

/// A single ingested source document, before normalization.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceDocument {
    /// Display name of the source (usually the file name).
    pub name: String,
    /// Raw text content with any byte-order mark already removed.
    pub text: String,
}

impl SourceDocument {
    /// Creates a document from a name and raw text, stripping a leading
    /// byte-order mark if present.
    pub fn new(name: impl Into<String>, text: impl Into<String>) -> Self {
        let text = text.into();
        let text = text
            .strip_prefix('\u{feff}')
            .map(str::to_owned)
            .unwrap_or(text);
        Self {
            name: name.into(),
            text,
        }
    }
}

/// The three derived artifacts produced by one analysis pass.
///
/// All fields are ordered: summary sentences by descending score, keywords
/// by descending frequency, action items in original line order.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AnalysisReport {
    /// Extractive summary sentences, verbatim from the input.
    pub summary: Vec<String>,
    /// Ranked keywords.
    pub keywords: Vec<String>,
    /// Lines that matched the action vocabulary, verbatim.
    pub action_items: Vec<String>,
}

impl AnalysisReport {
    /// Returns true if no artifact contains any entry.
    pub fn is_empty(&self) -> bool {
        self.summary.is_empty() && self.keywords.is_empty() && self.action_items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn source_document_strips_byte_order_mark() {
        let doc = SourceDocument::new("chat.txt", "\u{feff}hello");
        assert_eq!(doc.text, "hello");
    }

    #[test]
    fn source_document_keeps_plain_text_untouched() {
        let doc = SourceDocument::new("chat.txt", "hello");
        assert_eq!(doc.text, "hello");
    }

    #[test]
    fn empty_report_is_empty() {
        assert!(AnalysisReport::default().is_empty());
        let report = AnalysisReport {
            keywords: vec!["budget".to_string()],
            ..Default::default()
        };
        assert!(!report.is_empty());
    }

    #[test]
    fn report_serializes_with_stable_field_names() {
        let report = AnalysisReport {
            summary: vec!["Sent the draft.".to_string()],
            keywords: vec!["draft".to_string()],
            action_items: vec!["Please send the report".to_string()],
        };
        let json = serde_json::to_value(&report).expect("report serializes");
        assert!(json.get("summary").is_some());
        assert!(json.get("keywords").is_some());
        assert!(json.get("action_items").is_some());
    }
}
