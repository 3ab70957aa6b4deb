//! Audit failure counters.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};

use strum::IntoEnumIterator;

use crate::checks::CheckKind;

/// Failure counters, one per check kind.
///
/// All check kinds are initialized to zero on creation, so incrementing never
/// allocates. Counters are atomic so a shared `AuditStats` can be handed to
/// tests and reporting code without locking.
pub struct AuditStats {
    counts: HashMap<CheckKind, AtomicUsize>,
}

impl AuditStats {
    /// Creates a tracker with every counter at zero.
    pub fn new() -> Self {
        let mut counts = HashMap::new();
        for kind in CheckKind::iter() {
            counts.insert(kind, AtomicUsize::new(0));
        }
        AuditStats { counts }
    }

    /// Records one failure of the given kind.
    pub fn increment(&self, kind: CheckKind) {
        // All CheckKind variants are initialized in new(), so unwrap() is safe
        self.counts
            .get(&kind)
            .unwrap()
            .fetch_add(1, Ordering::Relaxed);
    }

    /// Failures recorded for the given kind.
    pub fn get_count(&self, kind: CheckKind) -> usize {
        // All CheckKind variants are initialized in new(), so unwrap() is safe
        self.counts.get(&kind).unwrap().load(Ordering::SeqCst)
    }

    /// Total failures recorded across every check kind.
    pub fn total(&self) -> usize {
        CheckKind::iter().map(|kind| self.get_count(kind)).sum()
    }
}

impl Default for AuditStats {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_audit_stats_initialization() {
        let stats = AuditStats::new();
        // All check kinds should be initialized to 0
        for kind in CheckKind::iter() {
            assert_eq!(stats.get_count(kind), 0);
        }
        assert_eq!(stats.total(), 0);
    }

    #[test]
    fn test_audit_stats_increment() {
        let stats = AuditStats::new();
        stats.increment(CheckKind::MissingFavicon);
        assert_eq!(stats.get_count(CheckKind::MissingFavicon), 1);
        assert_eq!(stats.get_count(CheckKind::ObsoleteFavicon), 0);
    }

    #[test]
    fn test_audit_stats_total() {
        let stats = AuditStats::new();
        stats.increment(CheckKind::MissingKeywordParams);
        stats.increment(CheckKind::MissingKeywordParams);
        stats.increment(CheckKind::ObsoleteFavicon);
        assert_eq!(stats.get_count(CheckKind::MissingKeywordParams), 2);
        assert_eq!(stats.total(), 3);
    }
}
