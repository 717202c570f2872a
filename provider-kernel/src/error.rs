//! Errors raised by the plugin transport.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Transport faults while exchanging an event with the bus.
///
/// Handler failures never show up here; they travel inside the response.
#[derive(Debug, Error)]
pub enum KernelError {
    /// Reading the event or writing the response failed.
    #[error("i/o error: {source}")]
    Io {
        /// Source [`std::io::Error`].
        #[from]
        source: io::Error,
    },
    /// The input was not a valid event document.
    #[error("invalid event document: {source}")]
    Decode {
        /// Source [`serde_json::Error`].
        #[source]
        source: serde_json::Error,
    },
    /// The out-of-line payload file could not be read.
    #[error("cannot read event payload {}: {source}", .path.display())]
    PayloadFile {
        /// File named by the event.
        path: PathBuf,
        /// Source [`std::io::Error`].
        #[source]
        source: io::Error,
    },
    /// The response could not be encoded.
    #[error("cannot encode event response: {source}")]
    Encode {
        /// Source [`serde_json::Error`].
        #[source]
        source: serde_json::Error,
    },
}

/// Result alias for transport operations.
pub type KernelResult<T> = Result<T, KernelError>;
