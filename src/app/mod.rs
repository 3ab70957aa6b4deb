//! Application-level helpers: URL utilities and statistics output.

mod statistics;
mod url;

pub use statistics::print_failure_statistics;
pub use url::{host_for_pattern, remove_url_protocol};
