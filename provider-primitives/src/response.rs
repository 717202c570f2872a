//! Response envelope shared by every event handler.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Error text used for failures reported without a message.
pub const UNSPECIFIED_FAILURE: &str = "provider failed without a message";

/// Outcome of a handler, before it is put on the wire.
///
/// Converting into [`EventResponse`] is the only way a handler populates the
/// envelope, so `data` and `error` are never both set. A failure always
/// carries a message: an empty one is replaced by [`UNSPECIFIED_FAILURE`]. An
/// empty success is the "no opinion" envelope, equal to
/// [`EventResponse::default`].
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum EventOutcome {
    /// Handler succeeded with the given serialized payload.
    Success(String),
    /// Handler failed with a human-readable message.
    Failure(String),
}

impl EventOutcome {
    /// Builds a failure outcome from a message.
    #[must_use]
    pub fn failure(message: impl Into<String>) -> Self {
        Self::Failure(message.into())
    }
}

/// Envelope relayed back to whoever requested the event.
///
/// The default value is the empty envelope, which the bus reads as "this
/// provider has nothing to say about the event".
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct EventResponse {
    #[serde(default)]
    state: String,
    #[serde(default)]
    data: String,
    #[serde(default)]
    error: String,
}

impl EventResponse {
    /// Successful response carrying `data`.
    #[must_use]
    pub fn success(data: impl Into<String>) -> Self {
        EventOutcome::Success(data.into()).into()
    }

    /// Failed response carrying `message`; `data` and `state` stay empty.
    #[must_use]
    pub fn failure(message: impl Into<String>) -> Self {
        EventOutcome::failure(message).into()
    }

    /// Opaque continuation token.
    #[must_use]
    pub fn state(&self) -> &str {
        &self.state
    }

    /// Serialized payload.
    #[must_use]
    pub fn data(&self) -> &str {
        &self.data
    }

    /// Error message, empty on success.
    #[must_use]
    pub fn error(&self) -> &str {
        &self.error
    }

    /// Returns `true` when the handler reported a failure.
    #[must_use]
    pub fn errored(&self) -> bool {
        !self.error.is_empty()
    }

    /// Decodes the JSON payload into `T`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidPayload`](crate::Error::InvalidPayload) when
    /// `data` is not valid JSON for `T`.
    pub fn unmarshal<T: DeserializeOwned>(&self) -> Result<T> {
        Ok(serde_json::from_str(&self.data)?)
    }
}

impl From<EventOutcome> for EventResponse {
    fn from(outcome: EventOutcome) -> Self {
        match outcome {
            EventOutcome::Success(data) => Self {
                state: String::new(),
                data,
                error: String::new(),
            },
            EventOutcome::Failure(error) => Self {
                state: String::new(),
                data: String::new(),
                error: if error.is_empty() {
                    UNSPECIFIED_FAILURE.to_owned()
                } else {
                    error
                },
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn failure_clears_payload() {
        let response = EventResponse::failure("Failed marshalling JSON input: boom");
        assert!(response.errored());
        assert!(response.data().is_empty());
        assert!(response.state().is_empty());
        assert_eq!(response.error(), "Failed marshalling JSON input: boom");
    }

    #[test]
    fn failure_without_message_still_errors() {
        for response in [
            EventResponse::failure(""),
            EventResponse::from(EventOutcome::Failure(String::new())),
        ] {
            assert!(response.errored());
            assert!(response.data().is_empty());
            assert_eq!(response.error(), UNSPECIFIED_FAILURE);
        }
    }

    #[test]
    fn empty_success_is_the_no_opinion_envelope() {
        assert_eq!(EventResponse::success(""), EventResponse::default());
    }

    #[test]
    fn wire_shape_uses_lowercase_fields() {
        let response = EventResponse::success("[]");
        let value = serde_json::to_value(&response).expect("encode");
        assert_eq!(value, json!({"state": "", "data": "[]", "error": ""}));
    }

    #[test]
    fn default_is_empty_envelope() {
        let response = EventResponse::default();
        assert!(!response.errored());
        assert!(response.data().is_empty());
    }

    #[test]
    fn unmarshal_reads_data() {
        let response: EventResponse =
            serde_json::from_str(r#"{"data":"{\"ok\":true}"}"#).expect("decode");
        let value: serde_json::Value = response.unmarshal().expect("payload");
        assert_eq!(value, json!({"ok": true}));

        let broken = EventResponse::success("not json");
        assert!(broken.unmarshal::<serde_json::Value>().is_err());
    }
}
