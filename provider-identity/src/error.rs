//! Error types for identity generation.

use thiserror::Error;

/// Errors emitted while generating or decoding connection identities.
#[derive(Debug, Error)]
pub enum IdentityError {
    /// Generation settings were rejected.
    #[error("invalid identity settings: {0}")]
    InvalidSettings(&'static str),
    /// The connection document could not be converted to or from YAML.
    #[error("connection document error: {source}")]
    Yaml {
        /// Source [`serde_yaml::Error`].
        #[from]
        source: serde_yaml::Error,
    },
    /// The token was not valid base64.
    #[error("token is not valid base64: {source}")]
    Base64 {
        /// Source [`base64::DecodeError`].
        #[from]
        source: base64::DecodeError,
    },
    /// A generator backed by an external service could not produce a token.
    #[error("identity generator unavailable: {reason}")]
    Unavailable {
        /// Human-readable reason describing the failure.
        reason: String,
    },
}

impl IdentityError {
    /// Helper to construct availability errors from string-like values.
    #[must_use]
    pub fn unavailable(reason: impl Into<String>) -> Self {
        Self::Unavailable {
            reason: reason.into(),
        }
    }
}

/// Result type alias for identity operations.
pub type IdentityResult<T> = Result<T, IdentityError>;
