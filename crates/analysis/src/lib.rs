//! Heuristic text-analysis engine for chatdigest.
//!
//! This crate implements the whole analysis core: chat-line normalization,
//! tokenization, frequency scoring, extractive summarization, keyword
//! ranking, and action-item detection. Every public function is pure,
//! synchronous, and total over any string input; file handling and output
//! rendering live in the CLI crate.

#![deny(missing_docs, unsafe_code)]

/// Action-item detection.
pub mod actions;

/// Engine options.
pub mod config;

/// Composition of the individual analyses into one report.
pub mod engine;

/// Frequency-table construction.
pub mod frequency;

/// Keyword ranking.
pub mod keywords;

/// Tokenization and stopword filtering.
pub mod nlp;

/// Chat-line normalization.
pub mod normalize;

/// Sentence splitting and extractive summarization.
pub mod summarize;

// Re-exports for convenience
pub use actions::extract_action_items;
pub use config::AnalysisOptions;
pub use engine::analyze;
pub use keywords::extract_keywords;
pub use normalize::normalize;
pub use summarize::summarize;
