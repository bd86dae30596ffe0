//! CLI command definitions for chatdigest.
//!
//! Provides the command-line interface for analyzing exported chat
//! transcripts: full analysis, normalization only, and a bundled sample
//! transcript for trying the tool out.

use clap::{Args, Parser, Subcommand, ValueEnum};
use std::fmt;
use std::path::PathBuf;

/// Main CLI application.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Logging verbosity
    #[arg(short, long, default_value_t = 0, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Configuration file path
    #[arg(short, long, env = "CHATDIGEST_CONFIG")]
    pub config: Option<PathBuf>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Analyze chat transcripts into a summary, keywords, and action items
    Analyze(AnalyzeArgs),

    /// Strip chat metadata from transcripts and print the plain text
    Normalize(NormalizeArgs),

    /// Print a small sample transcript for experimentation
    Sample,
}

/// Analysis arguments.
#[derive(Args, Debug)]
pub struct AnalyzeArgs {
    /// Transcript files (.txt or .html), analyzed as one combined input
    #[arg(required = true)]
    pub inputs: Vec<PathBuf>,

    /// Number of summary sentences
    #[arg(short, long)]
    pub sentences: Option<usize>,

    /// Maximum number of keywords
    #[arg(short, long)]
    pub keywords: Option<usize>,

    /// Maximum number of action items
    #[arg(short, long)]
    pub actions: Option<usize>,

    /// Output format
    #[arg(short, long, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Write the report to a file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Normalization arguments.
#[derive(Args, Debug)]
pub struct NormalizeArgs {
    /// Transcript files (.txt or .html)
    #[arg(required = true)]
    pub inputs: Vec<PathBuf>,
}

/// Report output format.
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    /// Plain text
    Text,
    /// JSON format
    Json,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn analyze_parses_caps_and_format() {
        let cli = Cli::parse_from([
            "chatdigest",
            "analyze",
            "chat.txt",
            "--sentences",
            "5",
            "--format",
            "json",
        ]);
        match cli.command {
            Commands::Analyze(args) => {
                assert_eq!(args.inputs, vec![PathBuf::from("chat.txt")]);
                assert_eq!(args.sentences, Some(5));
                assert_eq!(args.keywords, None);
                assert_eq!(args.format, OutputFormat::Json);
            }
            other => panic!("expected analyze command, got {:?}", other),
        }
    }

    #[test]
    fn analyze_requires_at_least_one_input() {
        assert!(Cli::try_parse_from(["chatdigest", "analyze"]).is_err());
    }

    #[test]
    fn verbosity_accumulates() {
        let cli = Cli::parse_from(["chatdigest", "-vv", "sample"]);
        assert_eq!(cli.verbose, 2);
    }
}
