//! Logging setup for provider plugins.
//!
//! The bus reads the plugin's response from stdout, so log output always goes
//! to stderr.

#![warn(missing_docs, clippy::pedantic)]

use std::io;

use thiserror::Error;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::filter::ParseError;

/// Errors raised while installing the subscriber.
#[derive(Debug, Error)]
pub enum TelemetryError {
    /// The configured filter directive is malformed.
    #[error("invalid log filter `{filter}`: {source}")]
    InvalidFilter {
        /// Directive that failed to parse.
        filter: String,
        /// Source parse error.
        #[source]
        source: ParseError,
    },
    /// A global subscriber was already installed.
    #[error("tracing subscriber already initialized: {0}")]
    AlreadyInitialized(String),
}

/// Result alias for telemetry operations.
pub type TelemetryResult<T> = Result<T, TelemetryError>;

/// Builds the filter: `RUST_LOG` when set and valid, `default_filter` otherwise.
///
/// # Errors
///
/// Returns [`TelemetryError::InvalidFilter`] when `default_filter` is used and
/// does not parse.
pub fn env_filter(default_filter: &str) -> TelemetryResult<EnvFilter> {
    if let Ok(filter) = EnvFilter::try_from_default_env() {
        return Ok(filter);
    }
    EnvFilter::try_new(default_filter).map_err(|source| TelemetryError::InvalidFilter {
        filter: default_filter.to_owned(),
        source,
    })
}

/// Installs the global `fmt` subscriber writing to stderr.
///
/// # Errors
///
/// Returns [`TelemetryError`] when the filter is invalid or a subscriber is
/// already installed.
pub fn init_tracing(default_filter: &str) -> TelemetryResult<()> {
    tracing_subscriber::fmt()
        .with_env_filter(env_filter(default_filter)?)
        .with_writer(io::stderr)
        .with_target(false)
        .try_init()
        .map_err(|err| TelemetryError::AlreadyInitialized(err.to_string()))
}
