//! Composition of the individual analyses into one report.

use crate::actions::extract_action_items;
use crate::config::AnalysisOptions;
use crate::keywords::extract_keywords;
use crate::normalize::normalize_with_marker;
use crate::summarize::summarize;
use chatdigest_core::AnalysisReport;
use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

static NEWLINE_RUNS: Lazy<Regex> = Lazy::new(|| Regex::new(r"\n+").expect("newline run pattern"));

/// Runs the full analysis over a raw transcript.
///
/// Normalizes once, then derives the three artifacts independently from
/// the normalized text: the summarizer sees it whitespace-joined so
/// sentences can span message boundaries, while keyword and action
/// extraction see the line structure. Pure and synchronous; safe to call
/// concurrently on different inputs.
pub fn analyze(raw: &str, options: &AnalysisOptions) -> AnalysisReport {
    let normalized = normalize_with_marker(raw, &options.media_marker);
    debug!(
        input_bytes = raw.len(),
        normalized_lines = normalized.lines().count(),
        "normalized transcript"
    );

    let joined = NEWLINE_RUNS.replace_all(&normalized, " ");
    let report = AnalysisReport {
        summary: summarize(&joined, options.summary_sentences),
        keywords: extract_keywords(&normalized, options.max_keywords),
        action_items: extract_action_items(&normalized, options.max_action_items),
    };
    debug!(
        summary_sentences = report.summary.len(),
        keywords = report.keywords.len(),
        action_items = report.action_items.len(),
        "analysis complete"
    );
    report
}
