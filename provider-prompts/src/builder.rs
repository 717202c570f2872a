//! Builds the prompt list answered to an interactive-install event.

use provider_identity::{IdentityError, IdentityGenerator};
use provider_primitives::{Event, EventOutcome, EventResponse};
use tracing::{debug, warn};

use crate::descriptor::PromptDescriptor;
use crate::encoder::{JsonEncoder, PromptEncoder};
use crate::error::PromptResult;
use crate::table::{DefaultSource, INTERACTIVE_INSTALL_PROMPTS, PromptSpec, validate_table};

/// Resolves a prompt table into descriptors and wraps them in a response.
///
/// Each call works on fresh values only; a builder can serve concurrent
/// invocations without coordination.
///
/// # Examples
///
/// ```
/// use provider_identity::FixedIdentity;
/// use provider_primitives::{Event, EventType};
/// use provider_prompts::{PromptDescriptor, PromptListBuilder};
///
/// let builder = PromptListBuilder::new(FixedIdentity::new("dG9rZW4="));
/// let response = builder.build(&Event::new(EventType::INTERACTIVE_INSTALL));
///
/// let prompts: Vec<PromptDescriptor> = response.unmarshal().unwrap();
/// assert_eq!(prompts[0].if_empty_value(), Some("dG9rZW4="));
/// ```
#[derive(Debug)]
pub struct PromptListBuilder<G, E = JsonEncoder> {
    table: &'static [PromptSpec],
    generator: G,
    encoder: E,
}

impl<G: IdentityGenerator> PromptListBuilder<G> {
    /// Creates a builder for the interactive-install table using `generator`
    /// for computed defaults.
    #[must_use]
    pub fn new(generator: G) -> Self {
        Self {
            table: INTERACTIVE_INSTALL_PROMPTS,
            generator,
            encoder: JsonEncoder,
        }
    }
}

impl<G, E> PromptListBuilder<G, E>
where
    G: IdentityGenerator,
    E: PromptEncoder,
{
    /// Replaces the prompt table.
    ///
    /// # Errors
    ///
    /// Returns [`PromptError::InvalidTable`](crate::PromptError::InvalidTable)
    /// when the table fails [`validate_table`].
    pub fn with_table(mut self, table: &'static [PromptSpec]) -> PromptResult<Self> {
        validate_table(table)?;
        self.table = table;
        Ok(self)
    }

    /// Replaces the payload encoder.
    #[must_use]
    pub fn with_encoder<E2: PromptEncoder>(self, encoder: E2) -> PromptListBuilder<G, E2> {
        PromptListBuilder {
            table: self.table,
            generator: self.generator,
            encoder,
        }
    }

    /// Returns the table entries in order.
    #[must_use]
    pub fn table(&self) -> &'static [PromptSpec] {
        self.table
    }

    /// Resolves the table into descriptors.
    ///
    /// The generator runs at most once, and always when any entry takes a
    /// generated fallback, whether or not the operator will end up using it.
    ///
    /// # Errors
    ///
    /// Returns [`PromptError::Identity`](crate::PromptError::Identity) when the
    /// generator fails or hands back an empty token.
    pub fn descriptors(&self) -> PromptResult<Vec<PromptDescriptor>> {
        let needs_identity = self
            .table
            .iter()
            .any(|spec| spec.if_empty == DefaultSource::GeneratedIdentity);
        let generated = if needs_identity {
            let token = self.generator.generate()?;
            if token.is_empty() {
                return Err(IdentityError::unavailable("generator returned an empty token").into());
            }
            Some(token)
        } else {
            None
        };

        Ok(self
            .table
            .iter()
            .map(|spec| spec.resolve(generated.as_deref()))
            .collect())
    }

    /// Resolves and encodes the prompt list.
    ///
    /// # Errors
    ///
    /// Propagates generator and encoder failures.
    pub fn payload(&self) -> PromptResult<String> {
        let prompts = self.descriptors()?;
        self.encoder.encode(&prompts)
    }

    /// Produces the handler outcome: the encoded list, or the failure message.
    #[must_use]
    pub fn outcome(&self) -> EventOutcome {
        match self.payload() {
            Ok(payload) => EventOutcome::Success(payload),
            Err(err) => {
                warn!(error = %err, "prompt list could not be built");
                EventOutcome::failure(err.to_string())
            }
        }
    }

    /// Answers `event` with the prompt list.
    ///
    /// The event only marks the dispatch; none of its fields are read.
    #[must_use]
    pub fn build(&self, event: &Event) -> EventResponse {
        debug!(event = %event.name, prompts = self.table.len(), "building prompt list");
        self.outcome().into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::descriptor::PromptMode;
    use crate::error::PromptError;
    use crate::table::{K3S_ENABLED_SECTION, NETWORK_TOKEN_SECTION};
    use provider_identity::{FixedIdentity, IdentityResult, MeshIdentityGenerator};
    use provider_primitives::EventType;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn event() -> Event {
        Event::new(EventType::INTERACTIVE_INSTALL)
    }

    fn decode(response: &EventResponse) -> Vec<PromptDescriptor> {
        response.unmarshal().expect("prompt list")
    }

    struct CountingIdentity {
        calls: AtomicUsize,
    }

    impl IdentityGenerator for CountingIdentity {
        fn generate(&self) -> IdentityResult<String> {
            let n = self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(format!("token-{n}"))
        }
    }

    struct BrokenIdentity;

    impl IdentityGenerator for BrokenIdentity {
        fn generate(&self) -> IdentityResult<String> {
            Err(IdentityError::unavailable("entropy source closed"))
        }
    }

    struct FailingEncoder;

    impl PromptEncoder for FailingEncoder {
        fn encode(&self, _prompts: &[PromptDescriptor]) -> PromptResult<String> {
            Err(PromptError::serialization("injected encoder fault"))
        }
    }

    #[test]
    fn interactive_install_scenario() {
        let builder = PromptListBuilder::new(FixedIdentity::new("Zml4ZWQ="));
        let response = builder.build(&event());

        assert!(!response.errored());
        assert!(response.state().is_empty());

        let prompts = decode(&response);
        assert_eq!(prompts.len(), 2);

        let token = &prompts[0];
        assert_eq!(token.section(), NETWORK_TOKEN_SECTION);
        assert_eq!(
            token.prompt(),
            "Insert a network token, leave empty to autogenerate"
        );
        assert_eq!(token.mode(), PromptMode::Text);
        assert_eq!(token.gate(), Some("Do you want to setup a full mesh-support?"));
        assert_eq!(token.if_empty_value(), Some("Zml4ZWQ="));

        let k3s = &prompts[1];
        assert_eq!(k3s.section(), K3S_ENABLED_SECTION);
        assert_eq!(k3s.prompt(), "Do you want to enable k3s?");
        assert_eq!(k3s.mode(), PromptMode::Boolean);
        assert_eq!(k3s.gate(), None);
        assert_eq!(k3s.if_empty_value(), None);
    }

    #[test]
    fn payload_matches_installer_shape() {
        let builder = PromptListBuilder::new(FixedIdentity::new("Zml4ZWQ="));
        let payload: serde_json::Value =
            serde_json::from_str(&builder.payload().expect("payload")).expect("json");

        assert_eq!(
            payload,
            serde_json::json!([
                {
                    "YAMLSection": "c3os.network_token",
                    "Prompt": "Insert a network token, leave empty to autogenerate",
                    "AskFirst": true,
                    "AskPrompt": "Do you want to setup a full mesh-support?",
                    "IfEmpty": "Zml4ZWQ="
                },
                {
                    "YAMLSection": "k3s.enabled",
                    "Bool": true,
                    "Prompt": "Do you want to enable k3s?"
                }
            ])
        );
    }

    #[test]
    fn generator_runs_once_per_invocation() {
        let builder = PromptListBuilder::new(CountingIdentity {
            calls: AtomicUsize::new(0),
        });

        let first = decode(&builder.build(&event()));
        let second = decode(&builder.build(&event()));

        assert_eq!(builder.generator.calls.load(Ordering::SeqCst), 2);
        assert_eq!(first[0].if_empty_value(), Some("token-0"));
        assert_eq!(second[0].if_empty_value(), Some("token-1"));
    }

    #[test]
    fn generated_tokens_are_fresh() {
        let builder = PromptListBuilder::new(MeshIdentityGenerator::default());

        let first = decode(&builder.build(&event()));
        let second = decode(&builder.build(&event()));

        let first = first[0].if_empty_value().expect("token");
        let second = second[0].if_empty_value().expect("token");
        assert!(!first.is_empty());
        assert_ne!(first, second);
    }

    #[test]
    fn encoder_failure_is_reported_as_data() {
        let builder =
            PromptListBuilder::new(FixedIdentity::new("Zml4ZWQ=")).with_encoder(FailingEncoder);
        let response = builder.build(&event());

        assert!(response.errored());
        assert!(response.data().is_empty());
        assert!(response.state().is_empty());
        assert_eq!(
            response.error(),
            "Failed marshalling JSON input: injected encoder fault"
        );
    }

    #[test]
    fn generator_failure_is_reported_as_data() {
        let response = PromptListBuilder::new(BrokenIdentity).build(&event());

        assert!(response.data().is_empty());
        assert!(response.error().starts_with("Failed generating network token:"));
        assert!(response.error().contains("entropy source closed"));
    }

    #[test]
    fn empty_generated_token_is_reported_as_data() {
        let response = PromptListBuilder::new(FixedIdentity::new("")).build(&event());

        assert!(response.errored());
        assert!(response.data().is_empty());
        assert!(response.state().is_empty());
        assert!(response.error().starts_with("Failed generating network token:"));
        assert!(response.error().contains("empty token"));
    }

    #[test]
    fn exactly_one_of_data_or_error_is_set() {
        let ok = PromptListBuilder::new(FixedIdentity::new("Zml4ZWQ=")).build(&event());
        let failed = PromptListBuilder::new(FixedIdentity::new("Zml4ZWQ="))
            .with_encoder(FailingEncoder)
            .build(&event());
        let empty_token = PromptListBuilder::new(FixedIdentity::new("")).build(&event());

        for response in [ok, failed, empty_token] {
            assert_ne!(response.data().is_empty(), response.error().is_empty());
        }
    }

    #[test]
    fn tables_without_generated_defaults_skip_the_generator() {
        static TABLE: &[PromptSpec] = &[PromptSpec::boolean("k3s.enabled", "Enable k3s?")];

        let builder = PromptListBuilder::new(BrokenIdentity)
            .with_table(TABLE)
            .expect("valid table");
        let response = builder.build(&event());

        assert!(!response.errored());
        assert_eq!(decode(&response).len(), 1);
    }

    #[test]
    fn invalid_tables_are_rejected() {
        static TABLE: &[PromptSpec] = &[PromptSpec::text("", "Nowhere?")];

        let err = PromptListBuilder::new(FixedIdentity::new("x"))
            .with_table(TABLE)
            .expect_err("invalid table");
        assert!(matches!(err, PromptError::InvalidTable { .. }));
    }
}
