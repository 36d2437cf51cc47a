pub mod logging;

pub use logging::{LOG_LEVEL_ENV, StderrLogger, init_stderr_logger, max_level_from};

// Re-export log crate so downstream crates can use base::log::*
pub use log;
