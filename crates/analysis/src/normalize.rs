//! Chat-line normalization.
//!
//! Exported chat logs prefix every message with a timestamp and sender
//! name. Normalization strips those prefixes line by line so the analysis
//! passes see only message text. Lines that match none of the known shapes
//! pass through unchanged, so plain non-chat text is analyzed as-is rather
//! than dropped.

use chatdigest_core::constants::MEDIA_OMITTED_MARKER;
use once_cell::sync::Lazy;
use regex::Regex;

// Standard export shape: `dd/mm/yy, hh:mm - Name: message`.
static STANDARD_LINE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\d{1,2}/\d{1,2}/\d{2,4},.*? - .*?: (.*)$").expect("standard line pattern")
});

// Alternate export shape: `[dd/mm/yyyy, hh:mm:ss] Name: message`, with the
// bracket and time optional. The name segment is matched greedily up to the
// last prefix colon so that colons inside the timestamp do not split the
// line early. Deliberately permissive: any line opening with a date and
// containing a colon is treated as a chat line.
static BRACKETED_LINE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\[?\d{1,2}/\d{1,2}/\d{2,4}[^\]]*\]?\s*[^:]*:\s*(.*)$")
        .expect("bracketed line pattern")
});

// Ordered line rules; first capture wins, identity is the fallback.
fn strip_chat_prefix(line: &str) -> &str {
    for pattern in [&*STANDARD_LINE, &*BRACKETED_LINE] {
        if let Some(message) = pattern.captures(line).and_then(|caps| caps.get(1)) {
            return message.as_str();
        }
    }
    line
}

/// Strips chat metadata from every line of a raw transcript.
///
/// Empty lines are skipped, lines containing the media-omitted marker are
/// dropped entirely, and all other lines are kept in their original order,
/// joined with newlines. May return an empty string.
pub fn normalize(raw: &str) -> String {
    normalize_with_marker(raw, MEDIA_OMITTED_MARKER)
}

/// [`normalize`] with a caller-supplied media-omitted marker.
pub fn normalize_with_marker(raw: &str, media_marker: &str) -> String {
    let raw = raw.strip_prefix('\u{feff}').unwrap_or(raw);

    let mut output: Vec<&str> = Vec::new();
    for line in raw.lines() {
        if line.is_empty() {
            continue;
        }
        if line.contains(media_marker) {
            continue;
        }
        output.push(strip_chat_prefix(line));
    }
    output.join("\n")
}
