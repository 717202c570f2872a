//! Static prompt tables.

use std::collections::HashSet;

use crate::descriptor::{PromptDescriptor, PromptMode};
use crate::error::{PromptError, PromptResult};

/// Configuration key holding the mesh network token.
pub const NETWORK_TOKEN_SECTION: &str = "c3os.network_token";
/// Configuration key toggling k3s.
pub const K3S_ENABLED_SECTION: &str = "k3s.enabled";

/// Where the empty-answer fallback of a prompt comes from.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum DefaultSource {
    /// No fallback; the installer applies its own baseline.
    None,
    /// Fixed fallback value.
    Static(&'static str),
    /// A freshly generated connection identity token.
    GeneratedIdentity,
}

/// Compile-time description of one prompt.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct PromptSpec {
    /// Configuration key the answer is written to.
    pub section: &'static str,
    /// Question text.
    pub prompt: &'static str,
    /// Expected answer kind.
    pub mode: PromptMode,
    /// Gating question asked before the prompt.
    pub gate: Option<&'static str>,
    /// Fallback for an empty answer.
    pub if_empty: DefaultSource,
    /// Pre-filled answer.
    pub default_value: Option<&'static str>,
    /// Input hint.
    pub placeholder: Option<&'static str>,
}

impl PromptSpec {
    /// Free text prompt without gate or fallback.
    #[must_use]
    pub const fn text(section: &'static str, prompt: &'static str) -> Self {
        Self::new(section, prompt, PromptMode::Text)
    }

    /// Yes/no prompt without gate or fallback.
    #[must_use]
    pub const fn boolean(section: &'static str, prompt: &'static str) -> Self {
        Self::new(section, prompt, PromptMode::Boolean)
    }

    const fn new(section: &'static str, prompt: &'static str, mode: PromptMode) -> Self {
        Self {
            section,
            prompt,
            mode,
            gate: None,
            if_empty: DefaultSource::None,
            default_value: None,
            placeholder: None,
        }
    }

    /// Asks `question` before the prompt.
    #[must_use]
    pub const fn gated_by(self, question: &'static str) -> Self {
        Self {
            gate: Some(question),
            ..self
        }
    }

    /// Sets the empty-answer fallback.
    #[must_use]
    pub const fn if_empty(self, source: DefaultSource) -> Self {
        Self {
            if_empty: source,
            ..self
        }
    }

    /// Sets the pre-filled answer.
    #[must_use]
    pub const fn with_default(self, value: &'static str) -> Self {
        Self {
            default_value: Some(value),
            ..self
        }
    }

    /// Sets the input hint.
    #[must_use]
    pub const fn with_placeholder(self, value: &'static str) -> Self {
        Self {
            placeholder: Some(value),
            ..self
        }
    }

    /// Turns the entry into a descriptor, using `generated` for a
    /// [`DefaultSource::GeneratedIdentity`] fallback.
    #[must_use]
    pub fn resolve(&self, generated: Option<&str>) -> PromptDescriptor {
        let mut descriptor = PromptDescriptor::new(self.section, self.prompt, self.mode);
        if let Some(question) = self.gate {
            descriptor = descriptor.gated_by(question);
        }
        match self.if_empty {
            DefaultSource::None => {}
            DefaultSource::Static(value) => descriptor = descriptor.if_empty(value),
            DefaultSource::GeneratedIdentity => {
                if let Some(token) = generated {
                    descriptor = descriptor.if_empty(token);
                }
            }
        }
        if let Some(value) = self.default_value {
            descriptor = descriptor.with_default(value);
        }
        if let Some(value) = self.placeholder {
            descriptor = descriptor.with_placeholder(value);
        }
        descriptor
    }
}

/// Questions posed during an interactive install, in the order they are asked.
pub const INTERACTIVE_INSTALL_PROMPTS: &[PromptSpec] = &[
    PromptSpec::text(
        NETWORK_TOKEN_SECTION,
        "Insert a network token, leave empty to autogenerate",
    )
    .gated_by("Do you want to setup a full mesh-support?")
    .if_empty(DefaultSource::GeneratedIdentity),
    PromptSpec::boolean(K3S_ENABLED_SECTION, "Do you want to enable k3s?"),
];

/// Checks that a table yields well-formed descriptors.
///
/// # Errors
///
/// Returns [`PromptError::InvalidTable`] when a section is empty or repeated,
/// or when a prompt or gating question has no text.
pub fn validate_table(table: &[PromptSpec]) -> PromptResult<()> {
    let mut seen = HashSet::with_capacity(table.len());
    for spec in table {
        let invalid = |reason| PromptError::InvalidTable {
            section: spec.section.to_owned(),
            reason,
        };

        if spec.section.trim().is_empty() {
            return Err(invalid("section cannot be empty"));
        }
        if !seen.insert(spec.section) {
            return Err(invalid("section is listed more than once"));
        }
        if spec.prompt.trim().is_empty() {
            return Err(invalid("prompt text cannot be empty"));
        }
        if spec.gate.is_some_and(|question| question.trim().is_empty()) {
            return Err(invalid("gating question cannot be empty"));
        }
    }
    Ok(())
}
