//! Error types for prompt list construction.

use provider_identity::IdentityError;
use thiserror::Error;

/// Result alias for prompt operations.
pub type PromptResult<T> = Result<T, PromptError>;

/// Errors that can occur while building a prompt list.
///
/// The display strings are what the bus receives in the response `error`
/// field, so they keep the labels installers already match on.
#[derive(Debug, Error)]
pub enum PromptError {
    /// The descriptor list could not be encoded.
    #[error("Failed marshalling JSON input: {reason}")]
    Serialization {
        /// Reason reported by the encoder.
        reason: String,
    },

    /// The identity generator could not produce a default token.
    #[error("Failed generating network token: {source}")]
    Identity {
        /// Source generator error.
        #[from]
        source: IdentityError,
    },

    /// A prompt table entry is malformed.
    #[error("invalid prompt `{section}`: {reason}")]
    InvalidTable {
        /// Section path of the offending entry.
        section: String,
        /// Human-readable reason for rejection.
        reason: &'static str,
    },
}

impl PromptError {
    /// Creates a serialization error from a string-like reason.
    #[must_use]
    pub fn serialization(reason: impl Into<String>) -> Self {
        Self::Serialization {
            reason: reason.into(),
        }
    }
}

impl From<serde_json::Error> for PromptError {
    fn from(err: serde_json::Error) -> Self {
        Self::serialization(err.to_string())
    }
}
