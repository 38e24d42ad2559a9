//! Logging setup for the CLI
//!
//! Verbosity flags map to a tracing level filter; `RUST_LOG` overrides
//! when set. Log lines go to stderr so they never mix with command
//! output.

use crate::error::{Error, Result};
use tracing_subscriber::EnvFilter;

/// Logging configuration
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Log level filter
    pub level: String,
    /// Include source locations
    pub source_location: bool,
}

impl LoggingConfig {
    /// Create logging config from verbosity level
    pub fn from_verbosity(verbosity: u8) -> Self {
        match verbosity {
            0 => Self {
                level: "warn".to_string(),
                source_location: false,
            },
            1 => Self {
                level: "info".to_string(),
                source_location: false,
            },
            2 => Self {
                level: "debug".to_string(),
                source_location: true,
            },
            _ => Self {
                level: "trace".to_string(),
                source_location: true,
            },
        }
    }
}

/// Initialize the logging system
pub fn init_logging(config: &LoggingConfig) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_file(config.source_location)
        .with_line_number(config.source_location)
        .try_init()
        .map_err(|e| Error::config(format!("failed to initialize logging: {e}")))
}
