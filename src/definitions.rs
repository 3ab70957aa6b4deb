//! Search engine definitions: entry model and registry loading.

use std::collections::{BTreeSet, HashSet};
use std::fs;
use std::path::Path;

use log::info;
use serde::Deserialize;

use crate::app::host_for_pattern;
use crate::error_handling::DefinitionsError;

/// A single search engine definition.
///
/// Describes how to recognize traffic from one search engine: the referring
/// URL pattern and the query-string parameters carrying the search keyword.
/// Several patterns may share one engine name (regional mirrors, alternate
/// hosts); the first pattern in file order is the canonical one.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SearchEngineDefinition {
    /// Referring URL pattern the engine is recognized by, stored without a
    /// scheme (e.g. `www.google.com`).
    #[serde(rename = "url")]
    pub url_pattern: String,

    /// Engine display name (e.g. `Google`).
    pub name: String,

    /// Query-string parameters carrying the search keyword, in priority order.
    /// Expected to be non-empty; emptiness is checked by the audit, not
    /// enforced at load time.
    #[serde(rename = "params", default)]
    pub keyword_params: Vec<String>,
}

/// Ordered, read-only collection of search engine definitions.
///
/// Loaded once from the definitions file and never mutated. Iteration order is
/// file order, which defines which entry is "first seen" for a given engine
/// name. URL patterns are unique; a duplicate is a load error.
#[derive(Debug, Clone, Default)]
pub struct DefinitionRegistry {
    entries: Vec<SearchEngineDefinition>,
}

impl DefinitionRegistry {
    /// Parses a registry from raw definitions JSON (an array of entries).
    ///
    /// # Errors
    ///
    /// Returns `DefinitionsError::Parse` for malformed JSON and
    /// `DefinitionsError::DuplicatePattern` when two entries share a URL
    /// pattern.
    pub fn from_json_str(raw: &str) -> Result<Self, DefinitionsError> {
        let entries: Vec<SearchEngineDefinition> = serde_json::from_str(raw)?;

        let mut seen = HashSet::new();
        for entry in &entries {
            if !seen.insert(entry.url_pattern.as_str()) {
                return Err(DefinitionsError::DuplicatePattern(
                    entry.url_pattern.clone(),
                ));
            }
        }

        Ok(Self { entries })
    }

    /// Loads a registry from a definitions file.
    pub fn load(path: &Path) -> Result<Self, DefinitionsError> {
        let raw = fs::read_to_string(path).map_err(|source| DefinitionsError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let registry = Self::from_json_str(&raw)?;
        info!(
            "Loaded {} search engine definitions from {}",
            registry.len(),
            path.display()
        );
        Ok(registry)
    }

    /// All definitions in file order.
    pub fn entries(&self) -> &[SearchEngineDefinition] {
        &self.entries
    }

    /// Number of definitions, including secondary patterns.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the registry holds no definitions.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The first definition per distinct engine name, in registry order.
    ///
    /// This is the explicit dedup pre-pass used by the per-engine checks: when
    /// an engine has several URL patterns, only its first pattern is treated
    /// as the canonical reference. Secondary patterns still contribute their
    /// hosts via [`DefinitionRegistry::hosts`].
    pub fn canonical_entries(&self) -> Vec<&SearchEngineDefinition> {
        let mut seen_names = HashSet::new();
        self.entries
            .iter()
            .filter(|entry| seen_names.insert(entry.name.as_str()))
            .collect()
    }

    /// All distinct hosts across every definition, including entries skipped
    /// by the per-name dedup. Hosts that cannot be extracted are omitted here;
    /// the pattern check reports them separately.
    pub fn hosts(&self) -> BTreeSet<String> {
        self.entries
            .iter()
            .filter_map(|entry| host_for_pattern(&entry.url_pattern))
            .collect()
    }
}
