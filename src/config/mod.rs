//! Configuration: CLI options, types, and constants.

mod constants;
mod types;

pub use constants::{
    DEFAULT_DEFINITIONS_PATH, DEFAULT_FAVICON_DIR, FAVICON_EXTENSION, PLACEHOLDER_PREFIX,
    SCHEME_SEPARATOR,
};
pub use types::{Config, LogFormat, LogLevel};
