//! CLI application entry point and configuration.
//!
//! This module provides the main CLI application logic, including argument
//! parsing, configuration loading, and command dispatch.

use crate::commands::{AnalyzeArgs, Cli, Commands, NormalizeArgs, OutputFormat};
use crate::error::{CliError, Result};
use crate::ingest;
use chatdigest_analysis::{analyze, normalize, AnalysisOptions};
use chatdigest_core::{AnalysisReport, DigestConfig};
use clap::Parser;
use std::path::PathBuf;

/// The demo transcript behind the `sample` subcommand.
const SAMPLE_TRANSCRIPT: &str = "\
12/11/2025, 09:00 - Alice: Hey, can you send the report?
12/11/2025, 09:05 - Bob: I'll finish it by 5pm.
12/11/2025, 09:10 - Alice: Also, we need to book the meeting room.
12/11/2025, 09:12 - Carol: Media omitted
12/11/2025, 09:20 - Bob: Sent the draft.
12/11/2025, 09:30 - Alice: Need to fix the budget numbers. Urgent.
12/11/2025, 10:00 - Dave: I'll handle the slides.";

/// Configuration for the CLI application.
#[derive(Debug, Clone, Default)]
pub struct AppConfig {
    /// Path to the configuration file actually loaded, if any.
    pub config_path: Option<PathBuf>,
    /// Logging verbosity level.
    pub verbosity: u8,
    /// Loaded digest configuration.
    pub digest: DigestConfig,
}

/// Main CLI application.
#[derive(Debug)]
pub struct App {
    /// Application configuration.
    pub config: AppConfig,
    /// Parsed CLI arguments.
    pub cli: Cli,
}

impl App {
    /// Create a new application instance from command line arguments.
    pub fn new() -> Result<Self> {
        let cli = Cli::parse();
        let config = Self::load_config(&cli)?;
        Ok(Self { config, cli })
    }

    /// Load configuration from file and defaults.
    fn load_config(cli: &Cli) -> Result<AppConfig> {
        let mut config = AppConfig {
            verbosity: cli.verbose,
            ..Default::default()
        };

        if let Some(config_path) = &cli.config {
            if !config_path.exists() {
                return Err(CliError::Config(format!(
                    "Configuration file not found: {}",
                    config_path.display()
                )));
            }
            config.digest = DigestConfig::load(config_path)?;
            config.config_path = Some(config_path.clone());
        } else {
            config.digest = DigestConfig::load_default()?;
        }

        Ok(config)
    }

    /// Run the application.
    pub fn run(self) -> Result<()> {
        self.setup_logging();

        match &self.cli.command {
            Commands::Analyze(args) => self.handle_analyze(args),
            Commands::Normalize(args) => self.handle_normalize(args),
            Commands::Sample => self.handle_sample(),
        }
    }

    /// Set up logging based on verbosity level.
    fn setup_logging(&self) {
        let level = match self.config.verbosity {
            0 => log::LevelFilter::Warn,
            1 => log::LevelFilter::Info,
            2 => log::LevelFilter::Debug,
            _ => log::LevelFilter::Trace,
        };

        env_logger::Builder::new()
            .filter_level(level)
            .format_module_path(false)
            .format_target(false)
            .format_timestamp(None)
            .try_init()
            .ok(); // Ignore errors if logger already initialized
    }

    fn handle_analyze(&self, args: &AnalyzeArgs) -> Result<()> {
        let documents = ingest::read_documents(&args.inputs, self.config.digest.ingest.max_file_size)?;
        let combined = ingest::combine(&documents);
        ingest::require_content(&combined)?;

        let options = self.analysis_options(args)?;
        log::info!(
            "analyzing {} file(s), {} bytes",
            documents.len(),
            combined.len()
        );
        let report = analyze(&combined, &options);

        let rendered = match args.format {
            OutputFormat::Text => render_text_report(&report),
            OutputFormat::Json => serde_json::to_string_pretty(&report)
                .map_err(|e| CliError::Internal(e.to_string()))?,
        };

        match &args.output {
            Some(path) => {
                let mut contents = rendered;
                if args.format == OutputFormat::Text {
                    contents = format!(
                        "chatdigest report, generated {}\n\n{}",
                        chrono::Local::now().to_rfc3339(),
                        contents
                    );
                }
                std::fs::write(path, contents)?;
                println!("Report written to {}", path.display());
            }
            None => println!("{}", rendered),
        }
        Ok(())
    }

    fn handle_normalize(&self, args: &NormalizeArgs) -> Result<()> {
        let documents = ingest::read_documents(&args.inputs, self.config.digest.ingest.max_file_size)?;
        let combined = ingest::combine(&documents);
        ingest::require_content(&combined)?;

        println!("{}", normalize(&combined));
        Ok(())
    }

    fn handle_sample(&self) -> Result<()> {
        println!("{}", SAMPLE_TRANSCRIPT);
        Ok(())
    }

    /// Build engine options from configuration defaults and CLI overrides.
    fn analysis_options(&self, args: &AnalyzeArgs) -> Result<AnalysisOptions> {
        let defaults = &self.config.digest.analysis;
        let options = AnalysisOptions {
            summary_sentences: args.sentences.unwrap_or(defaults.summary_sentences),
            max_keywords: args.keywords.unwrap_or(defaults.max_keywords),
            max_action_items: args.actions.unwrap_or(defaults.max_action_items),
            ..Default::default()
        };
        if options.summary_sentences == 0 || options.max_keywords == 0 || options.max_action_items == 0
        {
            return Err(CliError::Argument(
                "sentence, keyword, and action caps must be at least 1".to_string(),
            ));
        }
        Ok(options)
    }
}

/// Render a report as human-readable text.
fn render_text_report(report: &AnalysisReport) -> String {
    let mut out = String::new();

    out.push_str("Summary:\n");
    for sentence in &report.summary {
        out.push_str("  ");
        out.push_str(sentence);
        out.push('\n');
    }
    if report.summary.is_empty() {
        out.push_str("  (none)\n");
    }

    out.push_str("\nKeywords: ");
    if report.keywords.is_empty() {
        out.push_str("(none)");
    } else {
        out.push_str(&report.keywords.join(", "));
    }
    out.push('\n');

    out.push_str("\nAction Items:\n");
    for item in &report.action_items {
        out.push_str("  - ");
        out.push_str(item);
        out.push('\n');
    }
    if report.action_items.is_empty() {
        out.push_str("  No specific action items detected.\n");
    }

    out
}

/// Parse arguments, load configuration, and run the selected command.
pub fn run() -> Result<()> {
    App::new()?.run()
}
