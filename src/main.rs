//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `referrer_audit` library that handles:
//! - Command-line argument parsing
//! - Logger initialization
//! - User-facing output formatting and exit codes
//!
//! All core functionality is implemented in the library crate.

use anyhow::{Context, Result};
use clap::Parser;
use std::process;

use referrer_audit::initialization::init_logger_with;
use referrer_audit::{run_audit, Config};

fn main() -> Result<()> {
    // Parse command-line arguments into Config
    let config = Config::parse();

    // Initialize logger based on config
    let log_level = config.log_level.clone();
    let log_format = config.log_format.clone();
    init_logger_with(log_level.into(), log_format).context("Failed to initialize logger")?;

    match run_audit(&config) {
        Ok(report) if report.passed() => {
            println!(
                "✅ Audited {} definition{} and {} favicon asset{} in {:.1}s - no problems found",
                report.definitions_total,
                if report.definitions_total == 1 { "" } else { "s" },
                report.favicons_total,
                if report.favicons_total == 1 { "" } else { "s" },
                report.elapsed_seconds
            );
            Ok(())
        }
        Ok(report) => {
            eprintln!(
                "❌ {} problem{} found across {} definitions and {} favicon assets - see log for details",
                report.failures.len(),
                if report.failures.len() == 1 { "" } else { "s" },
                report.definitions_total,
                report.favicons_total
            );
            process::exit(1);
        }
        Err(e) => {
            eprintln!("referrer_audit error: {:#}", e);
            process::exit(1);
        }
    }
}
