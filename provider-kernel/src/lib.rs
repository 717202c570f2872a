//! Bus-facing side of a provider plugin.
//!
//! The bus runs the provider binary once per event, passing the event name as
//! an argument and the event document on stdin, and reads the response
//! document back from stdout. [`PluginFactory`] maps event names to
//! [`EventHandler`]s and performs that exchange.

#![warn(missing_docs, clippy::pedantic)]

mod error;
mod factory;
mod handler;

pub use error::{KernelError, KernelResult};
pub use factory::PluginFactory;
pub use handler::{EventContext, EventHandler};
