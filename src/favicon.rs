//! Favicon asset inventory.

use std::collections::BTreeSet;
use std::fs;
use std::path::Path;

use log::info;

use crate::config::{FAVICON_EXTENSION, PLACEHOLDER_PREFIX};
use crate::error_handling::FaviconError;

/// Filenames found in the favicon asset directory.
///
/// Each real asset is expected to be named `<host>.png` for a host appearing
/// in some search engine definition. Names are kept sorted so audit output is
/// deterministic regardless of the platform's directory iteration order.
#[derive(Debug, Clone, Default)]
pub struct FaviconSet {
    files: BTreeSet<String>,
}

impl FaviconSet {
    /// Lists the favicon directory into a set of filenames.
    ///
    /// Subdirectories are ignored; only file names are collected. Names that
    /// are not valid UTF-8 are skipped, since no definition host can match
    /// them anyway.
    pub fn scan(dir: &Path) -> Result<Self, FaviconError> {
        let to_error = |source| FaviconError::Io {
            path: dir.display().to_string(),
            source,
        };

        let mut files = BTreeSet::new();
        for entry in fs::read_dir(dir).map_err(to_error)? {
            let entry = entry.map_err(to_error)?;
            if entry.path().is_dir() {
                continue;
            }
            if let Ok(name) = entry.file_name().into_string() {
                files.insert(name);
            }
        }

        info!("Found {} favicon assets in {}", files.len(), dir.display());
        Ok(Self { files })
    }

    /// Builds a set directly from filenames. Used by tests and embedders that
    /// already hold a listing.
    pub fn from_names<I>(names: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        Self {
            files: names.into_iter().map(Into::into).collect(),
        }
    }

    /// Number of files found, including placeholders and dotfiles.
    pub fn len(&self) -> usize {
        self.files.len()
    }

    /// Whether the directory listing was empty.
    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    /// Whether a favicon asset exists for the given host.
    pub fn contains_host(&self, host: &str) -> bool {
        self.files.contains(&format!("{host}{FAVICON_EXTENSION}"))
    }

    /// Filenames subject to the obsolete-asset check, in sorted order.
    ///
    /// Dotfiles and `xx.` placeholders are excluded.
    pub fn checkable_files(&self) -> impl Iterator<Item = &str> {
        self.files
            .iter()
            .map(String::as_str)
            .filter(|name| !name.starts_with('.') && !name.starts_with(PLACEHOLDER_PREFIX))
    }
}
