//! Structured logging to stderr

use crate::io::configuration::{DEBUG_LOG_FILTER, DEFAULT_LOG_FILTER};
use tracing::debug;
use tracing_subscriber::EnvFilter;

/// Filter directives for the requested verbosity
///
/// Debug output overrides `RUST_LOG`; otherwise `RUST_LOG` wins over the default.
pub fn build_filter(debug: bool) -> EnvFilter {
    if debug {
        EnvFilter::new(DEBUG_LOG_FILTER)
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER))
    }
}

/// Install the global fmt subscriber writing to stderr
///
/// A subscriber installed earlier stays in place.
pub fn init_logging(debug: bool) {
    if let Err(error) = tracing_subscriber::fmt()
        .with_env_filter(build_filter(debug))
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
    {
        debug!(%error, "Keeping the installed tracing subscriber");
    }
}
