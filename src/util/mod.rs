//! Utility modules for apkpipe
//!
//! Currently only structured logging setup lives here.

pub mod logging;

pub use logging::{init_logging, parse_level, resolve_level, LoggingConfig};
