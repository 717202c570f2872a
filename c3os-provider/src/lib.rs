//! c3os bus provider.
//!
//! Answers the `agent.interactive-install` event with the questions the
//! interactive installer should ask, including a freshly generated network
//! token as the fallback for an empty answer. The runtime crates are
//! re-exported here; configuration and logging sit behind the `config` and
//! `telemetry` features.

#![warn(missing_docs, clippy::pedantic)]

mod handlers;

pub use handlers::{InteractiveInstall, provider_factory};
#[cfg(feature = "config")]
pub use handlers::factory_from_config;

/// Bus event and response types.
pub use provider_primitives as primitives;

/// Connection identity generation.
pub use provider_identity as identity;

/// Prompt descriptors and the prompt list builder.
pub use provider_prompts as prompts;

/// Handler registry and plugin protocol.
pub use provider_kernel as kernel;

/// Configuration loading (enabled by `config` feature).
#[cfg(feature = "config")]
pub use provider_config as config;

/// Logging setup (enabled by `telemetry` feature).
#[cfg(feature = "telemetry")]
pub use provider_telemetry as telemetry;
