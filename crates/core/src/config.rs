//! Persistent configuration for chatdigest.
//!
//! Configuration is optional: every field has a default derived from
//! `crate::constants`, and the config file is only read when it exists.

use crate::constants;
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Main configuration for chatdigest.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DigestConfig {
    /// Analysis defaults.
    #[serde(default)]
    pub analysis: AnalysisDefaults,

    /// Transcript ingestion settings.
    #[serde(default)]
    pub ingest: IngestDefaults,
}

/// Default caps applied when the command line does not override them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisDefaults {
    /// Number of sentences in the extractive summary.
    pub summary_sentences: usize,

    /// Maximum number of ranked keywords.
    pub max_keywords: usize,

    /// Maximum number of detected action items.
    pub max_action_items: usize,
}

/// Transcript ingestion settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IngestDefaults {
    /// Maximum accepted file size in bytes.
    pub max_file_size: u64,
}

impl Default for AnalysisDefaults {
    fn default() -> Self {
        Self {
            summary_sentences: constants::DEFAULT_SUMMARY_SENTENCES,
            max_keywords: constants::DEFAULT_MAX_KEYWORDS,
            max_action_items: constants::DEFAULT_MAX_ACTION_ITEMS,
        }
    }
}

impl Default for IngestDefaults {
    fn default() -> Self {
        Self {
            max_file_size: constants::MAX_IMPORT_FILE_SIZE,
        }
    }
}

impl DigestConfig {
    /// Default location of the configuration file.
    pub fn default_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("chatdigest")
            .join("config.toml")
    }

    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content)
            .map_err(|e| Error::config(format!("{}: {}", path.display(), e)))
    }

    /// Load the configuration file at the default location, falling back to
    /// defaults when no file exists.
    pub fn load_default() -> Result<Self> {
        let path = Self::default_path();
        if path.exists() {
            tracing::debug!(path = %path.display(), "loading configuration");
            Self::load(&path)
        } else {
            Ok(Self::default())
        }
    }

    /// Serialize the configuration to TOML.
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| Error::config(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_constants() {
        let config = DigestConfig::default();
        assert_eq!(config.analysis.summary_sentences, 3);
        assert_eq!(config.analysis.max_keywords, 8);
        assert_eq!(config.analysis.max_action_items, 8);
        assert_eq!(config.ingest.max_file_size, 16 * 1024 * 1024);
    }

    #[test]
    fn round_trips_through_toml() {
        let config = DigestConfig::default();
        let toml = config.to_toml().expect("serializes");
        let parsed: DigestConfig = toml::from_str(&toml).expect("parses");
        assert_eq!(
            parsed.analysis.summary_sentences,
            config.analysis.summary_sentences
        );
        assert_eq!(parsed.ingest.max_file_size, config.ingest.max_file_size);
    }

    #[test]
    fn partial_file_fills_in_defaults() {
        let parsed: DigestConfig =
            toml::from_str("[analysis]\nsummary_sentences = 5\nmax_keywords = 10\nmax_action_items = 4\n")
                .expect("parses");
        assert_eq!(parsed.analysis.summary_sentences, 5);
        assert_eq!(parsed.ingest.max_file_size, 16 * 1024 * 1024);
    }
}
