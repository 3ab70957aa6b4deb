//! Data-integrity checks over the definition registry and favicon assets.
//!
//! Each check is a one-shot pass producing a list of [`CheckFailure`]s. A
//! failing entry never stops the batch; every offending item is reported,
//! tagged with its host or filename.

use strum_macros::EnumIter;

use crate::app::host_for_pattern;
use crate::config::FAVICON_EXTENSION;
use crate::definitions::DefinitionRegistry;
use crate::favicon::FaviconSet;

/// Categories of audit failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter)]
pub enum CheckKind {
    /// A URL pattern from which no host can be extracted.
    InvalidUrlPattern,
    /// A canonical definition with no keyword parameters.
    MissingKeywordParams,
    /// A canonical definition with no `<host>.png` favicon asset.
    MissingFavicon,
    /// A favicon asset with no matching definition host.
    ObsoleteFavicon,
}

impl CheckKind {
    /// Human-readable label used in logs and statistics.
    pub fn as_str(&self) -> &'static str {
        match self {
            CheckKind::InvalidUrlPattern => "Invalid URL pattern",
            CheckKind::MissingKeywordParams => "Missing keyword parameters",
            CheckKind::MissingFavicon => "Missing favicon",
            CheckKind::ObsoleteFavicon => "Obsolete favicon",
        }
    }
}

/// A single audit failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckFailure {
    /// Which check failed.
    pub kind: CheckKind,
    /// Host or filename identifying the offending item, for triage.
    pub subject: String,
    /// Human-readable description of the failure.
    pub message: String,
}

impl CheckFailure {
    fn new(kind: CheckKind, subject: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            kind,
            subject: subject.into(),
            message: message.into(),
        }
    }
}

/// A host must be extractable from every URL pattern.
///
/// Runs over all entries, not just canonical ones: an unparseable pattern is
/// a data problem wherever it appears. The per-engine checks below skip
/// entries without an extractable host so each bad pattern is reported once.
pub fn check_url_patterns(registry: &DefinitionRegistry) -> Vec<CheckFailure> {
    registry
        .entries()
        .iter()
        .filter(|entry| host_for_pattern(&entry.url_pattern).is_none())
        .map(|entry| {
            CheckFailure::new(
                CheckKind::InvalidUrlPattern,
                entry.url_pattern.clone(),
                format!(
                    "cannot extract a host from URL pattern {:?} ({})",
                    entry.url_pattern, entry.name
                ),
            )
        })
        .collect()
}

/// Every canonical definition must name at least one keyword parameter.
pub fn check_keyword_params(registry: &DefinitionRegistry) -> Vec<CheckFailure> {
    let mut failures = Vec::new();
    for entry in registry.canonical_entries() {
        let Some(host) = host_for_pattern(&entry.url_pattern) else {
            continue;
        };
        if entry.keyword_params.is_empty() {
            failures.push(CheckFailure::new(
                CheckKind::MissingKeywordParams,
                host.clone(),
                format!(
                    "search engine {} ({}) defines no keyword parameters",
                    entry.name, host
                ),
            ));
        }
    }
    failures
}

/// Every canonical definition must have a `<host>.png` favicon asset.
pub fn check_favicon_coverage(
    registry: &DefinitionRegistry,
    favicons: &FaviconSet,
) -> Vec<CheckFailure> {
    let mut failures = Vec::new();
    for entry in registry.canonical_entries() {
        let Some(host) = host_for_pattern(&entry.url_pattern) else {
            continue;
        };
        if !favicons.contains_host(&host) {
            failures.push(CheckFailure::new(
                CheckKind::MissingFavicon,
                host.clone(),
                format!(
                    "search engine {} has no favicon asset {}{}",
                    entry.name, host, FAVICON_EXTENSION
                ),
            ));
        }
    }
    failures
}

/// Every favicon asset must match a host of some definition.
///
/// Unlike the per-engine checks this runs against hosts from *all* entries:
/// a favicon belonging to a secondary URL pattern is not obsolete. Dotfiles
/// and `xx.` placeholders are excluded by [`FaviconSet::checkable_files`].
pub fn check_obsolete_favicons(
    registry: &DefinitionRegistry,
    favicons: &FaviconSet,
) -> Vec<CheckFailure> {
    let known_hosts = registry.hosts();

    let mut failures = Vec::new();
    for name in favicons.checkable_files() {
        // A file without the .png suffix can never match a host and is
        // reported under its full filename.
        let host = name.strip_suffix(FAVICON_EXTENSION).unwrap_or(name);
        if !known_hosts.contains(host) {
            failures.push(CheckFailure::new(
                CheckKind::ObsoleteFavicon,
                host,
                format!("favicon {name} has no matching search engine definition"),
            ));
        }
    }
    failures
}

/// Runs all checks in order and collects their failures.
pub fn run_all(registry: &DefinitionRegistry, favicons: &FaviconSet) -> Vec<CheckFailure> {
    let mut failures = check_url_patterns(registry);
    failures.extend(check_keyword_params(registry));
    failures.extend(check_favicon_coverage(registry, favicons));
    failures.extend(check_obsolete_favicons(registry, favicons));
    failures
}
