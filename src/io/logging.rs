//! Log subscriber setup for the command-line driver

use crate::io::configuration::DEFAULT_LOG_DIRECTIVE;
use crate::io::error::{Result, WallError};
use tracing_subscriber::EnvFilter;

/// Filter directive for a count of `-v` flags
pub const fn directive_for_verbosity(verbosity: u8) -> &'static str {
    match verbosity {
        0 => DEFAULT_LOG_DIRECTIVE,
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Install the global `tracing` subscriber, writing to stderr
///
/// `RUST_LOG` takes precedence over the verbosity-derived directive.
///
/// # Errors
///
/// Returns an error if the filter is malformed or a global subscriber is
/// already installed
pub fn init_logging(verbosity: u8) -> Result<()> {
    let filter = match std::env::var(EnvFilter::DEFAULT_ENV) {
        Ok(directives) if !directives.is_empty() => EnvFilter::try_new(directives),
        _ => EnvFilter::try_new(directive_for_verbosity(verbosity)),
    }
    .map_err(|e| WallError::Logging {
        reason: e.to_string(),
    })?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| WallError::Logging {
            reason: e.to_string(),
        })
}
