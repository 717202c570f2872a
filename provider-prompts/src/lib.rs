//! Prompt descriptors for the interactive installer.
//!
//! The installer asks the operator a list of questions and writes each answer
//! into its configuration document. This crate describes *what* to ask: a
//! static, ordered table of [`PromptSpec`] entries, resolved per invocation
//! into [`PromptDescriptor`] values by the [`PromptListBuilder`], which fills
//! in computed defaults and encodes the list as the event's response payload.

#![warn(missing_docs, clippy::pedantic)]

pub mod builder;
pub mod descriptor;
pub mod encoder;
pub mod error;
pub mod table;

pub use builder::PromptListBuilder;
pub use descriptor::{PromptDescriptor, PromptMode};
pub use encoder::{JsonEncoder, PromptEncoder};
pub use error::{PromptError, PromptResult};
pub use table::{
    DefaultSource, INTERACTIVE_INSTALL_PROMPTS, K3S_ENABLED_SECTION, NETWORK_TOKEN_SECTION,
    PromptSpec, validate_table,
};
