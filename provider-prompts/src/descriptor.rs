//! Prompt descriptor wire type.

use serde::{Deserialize, Serialize};

/// Kind of answer a prompt expects.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum PromptMode {
    /// Free text answer.
    Text,
    /// Yes/no answer.
    Boolean,
}

/// One question the installer poses to the operator.
///
/// Serialized with the installer's field names (`YAMLSection`, `Prompt`,
/// `AskFirst`, ...). Fields at their zero value are left out of the encoding
/// and read back as zero values.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PromptDescriptor {
    #[serde(rename = "YAMLSection")]
    section: String,
    #[serde(rename = "Bool", skip_serializing_if = "std::ops::Not::not")]
    boolean: bool,
    #[serde(rename = "Prompt")]
    prompt: String,
    #[serde(rename = "Default", skip_serializing_if = "String::is_empty")]
    default_value: String,
    #[serde(rename = "AskFirst", skip_serializing_if = "std::ops::Not::not")]
    ask_first: bool,
    #[serde(rename = "AskPrompt", skip_serializing_if = "String::is_empty")]
    ask_prompt: String,
    #[serde(rename = "IfEmpty", skip_serializing_if = "String::is_empty")]
    if_empty: String,
    #[serde(rename = "PlaceHolder", skip_serializing_if = "String::is_empty")]
    placeholder: String,
}

impl PromptDescriptor {
    /// Creates a prompt writing its answer to `section`.
    #[must_use]
    pub fn new(section: impl Into<String>, prompt: impl Into<String>, mode: PromptMode) -> Self {
        Self {
            section: section.into(),
            boolean: mode == PromptMode::Boolean,
            prompt: prompt.into(),
            ..Self::default()
        }
    }

    /// Asks `question` first; the prompt is only posed if the operator agrees.
    #[must_use]
    pub fn gated_by(mut self, question: impl Into<String>) -> Self {
        self.ask_first = true;
        self.ask_prompt = question.into();
        self
    }

    /// Value written when the operator leaves the answer empty.
    #[must_use]
    pub fn if_empty(mut self, value: impl Into<String>) -> Self {
        self.if_empty = value.into();
        self
    }

    /// Pre-filled answer shown in the input.
    #[must_use]
    pub fn with_default(mut self, value: impl Into<String>) -> Self {
        self.default_value = value.into();
        self
    }

    /// Hint shown while the input is empty.
    #[must_use]
    pub fn with_placeholder(mut self, value: impl Into<String>) -> Self {
        self.placeholder = value.into();
        self
    }

    /// Dot path of the configuration key the answer is written to.
    #[must_use]
    pub fn section(&self) -> &str {
        &self.section
    }

    /// Question text.
    #[must_use]
    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    /// Expected answer kind.
    #[must_use]
    pub fn mode(&self) -> PromptMode {
        if self.boolean {
            PromptMode::Boolean
        } else {
            PromptMode::Text
        }
    }

    /// Gating question, when the prompt is asked conditionally.
    #[must_use]
    pub fn gate(&self) -> Option<&str> {
        self.ask_first.then_some(self.ask_prompt.as_str())
    }

    /// Fallback for an empty answer.
    #[must_use]
    pub fn if_empty_value(&self) -> Option<&str> {
        non_empty(&self.if_empty)
    }

    /// Pre-filled answer.
    #[must_use]
    pub fn default_value(&self) -> Option<&str> {
        non_empty(&self.default_value)
    }

    /// Input hint.
    #[must_use]
    pub fn placeholder(&self) -> Option<&str> {
        non_empty(&self.placeholder)
    }
}

fn non_empty(value: &str) -> Option<&str> {
    (!value.is_empty()).then_some(value)
}
