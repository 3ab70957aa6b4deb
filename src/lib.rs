//! referrer_audit library: search engine referrer metadata auditing.
//!
//! This library audits the static metadata a web analytics deployment uses to
//! recognize search engine referrers: a definitions file mapping referring URL
//! patterns to engine names and keyword parameters, and a directory of
//! `<host>.png` favicon assets. It checks that every engine defines keyword
//! parameters, that every engine has a favicon, and that no stale favicon is
//! left behind. It also exposes [`remove_url_protocol`], the scheme-stripping
//! helper used when matching referrer URLs.
//!
//! # Example
//!
//! ```no_run
//! use referrer_audit::{run_audit, Config};
//! use std::path::PathBuf;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = Config {
//!     definitions: PathBuf::from("SearchEngines.json"),
//!     favicons: PathBuf::from("images/searchEngines"),
//!     ..Default::default()
//! };
//!
//! let report = run_audit(&config)?;
//! println!("Checked {} engines: {} problem(s) found",
//!          report.engines_checked, report.failures.len());
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]

mod app;
mod checks;
pub mod config;
mod definitions;
mod error_handling;
mod favicon;
pub mod initialization;

// Re-export public API
pub use app::{host_for_pattern, remove_url_protocol};
pub use checks::{
    check_favicon_coverage, check_keyword_params, check_obsolete_favicons, check_url_patterns,
    CheckFailure, CheckKind,
};
pub use config::{Config, LogFormat, LogLevel};
pub use definitions::{DefinitionRegistry, SearchEngineDefinition};
pub use error_handling::{AuditStats, DefinitionsError, FaviconError, InitializationError};
pub use favicon::FaviconSet;
pub use run::{run_audit, AuditReport};

// Internal run module (contains the main audit logic)
mod run {
    use anyhow::{Context, Result};
    use log::{info, warn};

    use crate::app::print_failure_statistics;
    use crate::checks::{self, CheckFailure};
    use crate::config::Config;
    use crate::definitions::DefinitionRegistry;
    use crate::error_handling::AuditStats;
    use crate::favicon::FaviconSet;

    /// Results of an audit run.
    ///
    /// Contains summary counts and the full list of failures.
    #[derive(Debug, Clone)]
    pub struct AuditReport {
        /// Total number of definitions in the registry
        pub definitions_total: usize,
        /// Number of canonical (first-seen-per-name) engines checked
        pub engines_checked: usize,
        /// Number of favicon assets found
        pub favicons_total: usize,
        /// All failures, in check order
        pub failures: Vec<CheckFailure>,
        /// Elapsed time in seconds
        pub elapsed_seconds: f64,
    }

    impl AuditReport {
        /// Whether the audit found no problems.
        pub fn passed(&self) -> bool {
            self.failures.is_empty()
        }
    }

    /// Runs the full audit with the provided configuration.
    ///
    /// This is the main entry point for the library. It loads the definitions
    /// file, lists the favicon directory, and runs every data-integrity check.
    /// Check failures are logged, counted, and returned in the report; they do
    /// not cause an `Err`.
    ///
    /// # Errors
    ///
    /// This function will return an error if:
    /// - The definitions file cannot be read or parsed
    /// - The favicon directory cannot be listed
    pub fn run_audit(config: &Config) -> Result<AuditReport> {
        let start_time = std::time::Instant::now();

        let registry = DefinitionRegistry::load(&config.definitions)
            .context("Failed to load search engine definitions")?;
        let favicons =
            FaviconSet::scan(&config.favicons).context("Failed to scan favicon directory")?;

        let engines_checked = registry.canonical_entries().len();
        info!(
            "Auditing {} canonical engines ({} definitions) against {} favicon assets",
            engines_checked,
            registry.len(),
            favicons.len()
        );

        let failures = checks::run_all(&registry, &favicons);

        let stats = AuditStats::new();
        for failure in &failures {
            stats.increment(failure.kind);
            warn!("{}: {}", failure.kind.as_str(), failure.message);
        }
        print_failure_statistics(&stats);

        Ok(AuditReport {
            definitions_total: registry.len(),
            engines_checked,
            favicons_total: favicons.len(),
            failures,
            elapsed_seconds: start_time.elapsed().as_secs_f64(),
        })
    }
}
