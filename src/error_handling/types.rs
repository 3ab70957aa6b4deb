//! Error type definitions.

use log::SetLoggerError;
use thiserror::Error;

/// Error types for initialization failures.
#[derive(Error, Debug)]
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),
}

/// Error types for loading the search engine definitions file.
#[derive(Error, Debug)]
pub enum DefinitionsError {
    /// The definitions file could not be read.
    #[error("Failed to read definitions file {path}: {source}")]
    Io {
        /// Path of the file that could not be read.
        path: String,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The definitions file is not valid JSON, or does not match the schema.
    #[error("Failed to parse definitions JSON: {0}")]
    Parse(#[from] serde_json::Error),

    /// Two definitions share the same URL pattern.
    #[error("Duplicate URL pattern in definitions: {0}")]
    DuplicatePattern(String),
}

/// Error types for scanning the favicon asset directory.
#[derive(Error, Debug)]
pub enum FaviconError {
    /// The favicon directory could not be listed.
    #[error("Failed to list favicon directory {path}: {source}")]
    Io {
        /// Path of the directory that could not be listed.
        path: String,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
}
