//! Core types, errors, and configuration for chatdigest
//!
//! This crate provides the foundational types and error handling used
//! throughout chatdigest, a tool that turns exported chat transcripts into
//! an extractive summary, a ranked keyword list, and a list of action items.

#![deny(missing_docs, unsafe_code)]

pub mod config;
pub mod constants;
pub mod error;
pub mod types;

// Re-exports for convenience
pub use config::DigestConfig;
pub use error::{Error, Result};
pub use types::*;
