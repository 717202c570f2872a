//! Shared error definitions for provider primitives.

use serde_json::Error as JsonError;
use thiserror::Error;

/// Result alias used throughout the provider.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while manipulating provider primitive types.
#[derive(Debug, Error)]
pub enum Error {
    /// Event name failed validation.
    #[error("invalid event name `{name}`: {reason}")]
    InvalidEventName {
        /// The offending name.
        name: String,
        /// Human-readable reason for rejection.
        reason: String,
    },

    /// Response payload could not be decoded into the requested type.
    #[error("invalid response payload: {source}")]
    InvalidPayload {
        /// Source decoding error.
        #[from]
        source: JsonError,
    },
}
