//! Transcript file ingestion.
//!
//! Reads exported chat transcripts from disk and turns them into
//! [`SourceDocument`]s: plain text files are read as-is (minus any
//! byte-order mark), HTML exports are converted to plain text first.
//! Everything that can fail lives here; the analysis engine itself only
//! ever sees in-memory strings.

use crate::error::{CliError, Result};
use chatdigest_core::SourceDocument;
use std::path::{Path, PathBuf};

// Render width for HTML-to-text conversion. Long lines are fine: the
// engine splits sentences on punctuation, not on column width.
const HTML_RENDER_WIDTH: usize = 200;

/// Reads and converts every input file, preserving argument order.
pub fn read_documents(paths: &[PathBuf], max_file_size: u64) -> Result<Vec<SourceDocument>> {
    paths
        .iter()
        .map(|path| read_document(path, max_file_size))
        .collect()
}

/// Reads a single transcript file.
///
/// Accepts `.txt`, `.log`, `.html`, and `.htm` files up to `max_file_size`
/// bytes; anything else is rejected before it is read.
pub fn read_document(path: &Path, max_file_size: u64) -> Result<SourceDocument> {
    let size = std::fs::metadata(path)
        .map_err(|e| CliError::Ingest(format!("{}: {}", path.display(), e)))?
        .len();
    if size > max_file_size {
        return Err(CliError::Ingest(format!(
            "{}: file is {} bytes, limit is {}",
            path.display(),
            size,
            max_file_size
        )));
    }

    let extension = path
        .extension()
        .map(|ext| ext.to_string_lossy().to_lowercase())
        .unwrap_or_default();
    let name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());

    let text = match extension.as_str() {
        "txt" | "log" => std::fs::read_to_string(path)?,
        "html" | "htm" => {
            let html = std::fs::read_to_string(path)?;
            html2text::from_read(html.as_bytes(), HTML_RENDER_WIDTH)
                .map_err(|e| CliError::Ingest(format!("{}: {}", path.display(), e)))?
        }
        other => {
            return Err(CliError::Ingest(format!(
                "{}: unsupported file type '{}', expected .txt, .log, .html or .htm",
                path.display(),
                other
            )))
        }
    };

    log::debug!("read {} ({} bytes)", name, text.len());
    Ok(SourceDocument::new(name, text))
}

/// Concatenates documents into one raw transcript, newline-separated, in
/// ingestion order.
pub fn combine(documents: &[SourceDocument]) -> String {
    documents
        .iter()
        .map(|doc| doc.text.as_str())
        .collect::<Vec<_>>()
        .join("\n")
}

/// Rejects empty or whitespace-only input before it reaches the engine.
///
/// The engine itself is total over any string; distinguishing "nothing to
/// analyze" from "legitimately short content" is this layer's job.
pub fn require_content(text: &str) -> Result<()> {
    if text.trim().is_empty() {
        return Err(CliError::Argument(
            "input is empty; provide transcript text to analyze".to_string(),
        ));
    }
    Ok(())
}
