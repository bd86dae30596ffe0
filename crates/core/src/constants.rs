//! Application constants and analysis defaults.

/// Default number of sentences in an extractive summary.
pub const DEFAULT_SUMMARY_SENTENCES: usize = 3;

/// Default maximum number of ranked keywords.
pub const DEFAULT_MAX_KEYWORDS: usize = 8;

/// Default maximum number of detected action items.
pub const DEFAULT_MAX_ACTION_ITEMS: usize = 8;

/// Minimum token length counted by the summarization frequency table.
pub const MIN_SUMMARY_TOKEN_LEN: usize = 3;

/// Minimum token length counted by the keyword frequency table.
pub const MIN_KEYWORD_TOKEN_LEN: usize = 4;

/// Marker emitted by chat exporters in place of attachments. Lines that
/// contain it carry no text content and are dropped during normalization.
pub const MEDIA_OMITTED_MARKER: &str = "Media omitted";

/// Maximum file size for transcript import (16 MB).
pub const MAX_IMPORT_FILE_SIZE: u64 = 16 * 1024 * 1024;
