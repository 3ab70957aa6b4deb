//! Failure statistics printing.

use log::info;
use strum::IntoEnumIterator;

use crate::checks::CheckKind;
use crate::error_handling::AuditStats;

/// Prints per-check failure counts to the log.
///
/// Works with both plain and JSON log formats (log::info! handles formatting).
pub fn print_failure_statistics(stats: &AuditStats) {
    let total = stats.total();
    if total == 0 {
        info!("All checks passed");
        return;
    }

    info!("Failure Counts ({} total):", total);
    for kind in CheckKind::iter() {
        let count = stats.get_count(kind);
        if count > 0 {
            info!("   {}: {}", kind.as_str(), count);
        }
    }
}
