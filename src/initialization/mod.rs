//! One-time setup performed before the audit runs.

mod logger;

pub use logger::init_logger_with;
