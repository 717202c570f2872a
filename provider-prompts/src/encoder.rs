//! Payload encoders for prompt lists.

use crate::descriptor::PromptDescriptor;
use crate::error::PromptResult;

/// Turns a descriptor list into the text carried in the response `data` field.
pub trait PromptEncoder: Send + Sync {
    /// Encodes `prompts`, preserving their order.
    ///
    /// # Errors
    ///
    /// Returns [`PromptError::Serialization`](crate::PromptError::Serialization)
    /// when the list cannot be encoded.
    fn encode(&self, prompts: &[PromptDescriptor]) -> PromptResult<String>;
}

/// Compact JSON array encoding, the format installers decode.
#[derive(Clone, Copy, Debug, Default)]
pub struct JsonEncoder;

impl PromptEncoder for JsonEncoder {
    fn encode(&self, prompts: &[PromptDescriptor]) -> PromptResult<String> {
        Ok(serde_json::to_string(prompts)?)
    }
}
