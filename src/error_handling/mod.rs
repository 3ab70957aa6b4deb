//! Error types and audit failure statistics.
//!
//! This module provides:
//! - Error type definitions for initialization and data loading
//! - Per-check failure counters ([`AuditStats`])
//!
//! Check failures themselves are data, not errors: a failing check is recorded
//! and the batch continues. The error enums here cover environmental problems
//! only (unreadable files, malformed JSON, duplicate patterns).

mod stats;
mod types;

pub use stats::AuditStats;
pub use types::{DefinitionsError, FaviconError, InitializationError};
