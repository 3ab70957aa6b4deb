//! Configuration types and CLI options.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::config::constants::{DEFAULT_DEFINITIONS_PATH, DEFAULT_FAVICON_DIR};

/// Logging level for the application.
///
/// Controls the verbosity of log output, from most restrictive (Error) to most
/// verbose (Trace).
#[derive(Clone, Debug, ValueEnum)]
pub enum LogLevel {
    /// Only error messages
    Error,
    /// Error and warning messages
    Warn,
    /// Error, warning, and informational messages
    Info,
    /// All messages except trace
    Debug,
    /// All messages including trace
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Log output format.
///
/// Controls how log messages are formatted:
/// - `Plain`: Human-readable format with colors (default)
/// - `Json`: Structured JSON format for machine parsing
#[derive(Clone, Debug, ValueEnum)]
pub enum LogFormat {
    /// Human-readable format with colors (default)
    Plain,
    /// Structured JSON format for machine parsing
    Json,
}

/// Command-line options and audit configuration.
///
/// This struct is generated by `clap` from the field attributes. It doubles as
/// the library-facing configuration: tests and embedders construct it directly
/// with `Config::default()` and override the paths they need.
///
/// # Examples
///
/// ```bash
/// # Audit the default definitions file and favicon directory
/// referrer_audit
///
/// # Audit explicit paths
/// referrer_audit SearchEngines.json --favicons ./images/searchEngines
/// ```
#[derive(Debug, Clone, Parser)]
#[command(
    name = "referrer_audit",
    about = "Audits search engine referrer definitions and favicon assets."
)]
pub struct Config {
    /// Search engine definitions file (JSON)
    #[arg(value_parser, default_value = DEFAULT_DEFINITIONS_PATH)]
    pub definitions: PathBuf,

    /// Favicon asset directory
    #[arg(long, value_parser, default_value = DEFAULT_FAVICON_DIR)]
    pub favicons: PathBuf,

    /// Log level: error|warn|info|debug|trace
    #[arg(long, value_enum, default_value_t = LogLevel::Info)]
    pub log_level: LogLevel,

    /// Log format: plain|json
    #[arg(long, value_enum, default_value_t = LogFormat::Plain)]
    pub log_format: LogFormat,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            definitions: PathBuf::from(DEFAULT_DEFINITIONS_PATH),
            favicons: PathBuf::from(DEFAULT_FAVICON_DIR),
            log_level: LogLevel::Info,
            log_format: LogFormat::Plain,
        }
    }
}
