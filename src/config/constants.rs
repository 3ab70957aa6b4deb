//! Application-wide constants and defaults.

/// Default location of the search engine definitions file.
pub const DEFAULT_DEFINITIONS_PATH: &str = "./SearchEngines.json";

/// Default favicon asset directory.
pub const DEFAULT_FAVICON_DIR: &str = "./images/searchEngines";

/// File extension expected for every favicon asset.
pub const FAVICON_EXTENSION: &str = ".png";

/// Favicon filenames starting with this prefix are placeholders, not real
/// search engine icons, and are skipped by the obsolete-asset check.
pub const PLACEHOLDER_PREFIX: &str = "xx.";

/// Separator between a URI scheme and the rest of a URL.
pub const SCHEME_SEPARATOR: &str = "://";
