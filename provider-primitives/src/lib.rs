//! Core shared types for c3os provider plugins.
//!
//! Every handler in the provider answers the bus through the same
//! [`EventResponse`] envelope, whatever the event type.

#![warn(missing_docs, clippy::pedantic)]

mod error;
mod event;
mod response;

/// Error type and result alias shared across the provider crates.
pub use error::{Error, Result};
/// Bus events and their names.
pub use event::{Event, EventType};
/// Response envelope returned to the bus for every event.
pub use response::{EventOutcome, EventResponse, UNSPECIFIED_FAILURE};
