//! Command-line interface for chatdigest.
//!
//! This crate provides the thin I/O layer around the analysis engine:
//! reading transcript files, dispatching commands, and rendering reports.

#![deny(missing_docs, unsafe_code)]

/// CLI command definitions and parsing.
pub mod commands;

/// CLI application entry point and configuration.
pub mod app;

/// Transcript file ingestion.
pub mod ingest;

/// Error types for CLI operations.
pub mod error;
