// Rust guideline compliant 2026-02-06

//! Error types for the Lineage core library.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for Lineage operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for Lineage operations.
#[derive(Debug, Error)]
pub enum Error {
    /// A line could not be turned into a record. Fatal to the current parse.
    #[error("Malformed line {line}: {reason} ({content:?})")]
    MalformedLine {
        /// One-based line number in the source.
        line: usize,
        /// The offending line, trimmed.
        content: String,
        /// What was wrong with it.
        reason: String,
    },

    /// The input file could not be opened or read.
    #[error("Source unavailable: {}: {source}", path.display())]
    SourceUnavailable {
        /// Path of the file that failed.
        path: PathBuf,
        /// Underlying IO failure.
        #[source]
        source: std::io::Error,
    },

    /// IO error while reading a stream that has no path.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Invalid configuration value or file.
    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    /// No top-level record declares the reference.
    #[error("Reference not found: {0}")]
    NotFound(String),

    /// The reference resolves, but not to an individual.
    #[error("Not an individual: {0}")]
    NotAnIndividual(String),

    /// Someone is recorded as their own ancestor.
    #[error("Ancestry cycle detected: {0:?}")]
    AncestryCycle(Vec<String>),
}

impl Error {
    /// Builds a [`Error::MalformedLine`] for the given line.
    pub fn malformed(line: usize, content: &str, reason: impl Into<String>) -> Self {
        Error::MalformedLine {
            line,
            content: content.to_string(),
            reason: reason.into(),
        }
    }
}
