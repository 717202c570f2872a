//! Event handlers registered by the provider.

use provider_identity::IdentityGenerator;
use provider_kernel::{EventContext, EventHandler, PluginFactory};
use provider_primitives::{EventResponse, EventType};
use provider_prompts::{JsonEncoder, PromptEncoder, PromptListBuilder};
use tracing::info;

/// Handler for [`EventType::INTERACTIVE_INSTALL`].
#[derive(Debug)]
pub struct InteractiveInstall<G, E = JsonEncoder> {
    builder: PromptListBuilder<G, E>,
}

impl<G: IdentityGenerator> InteractiveInstall<G> {
    /// Creates the handler with `generator` providing the network token default.
    #[must_use]
    pub fn new(generator: G) -> Self {
        Self::from_builder(PromptListBuilder::new(generator))
    }
}

impl<G, E> InteractiveInstall<G, E>
where
    G: IdentityGenerator,
    E: PromptEncoder,
{
    /// Creates the handler around a preconfigured builder.
    #[must_use]
    pub fn from_builder(builder: PromptListBuilder<G, E>) -> Self {
        Self { builder }
    }
}

impl<G, E> EventHandler for InteractiveInstall<G, E>
where
    G: IdentityGenerator,
    E: PromptEncoder,
{
    fn handle(&self, ctx: &EventContext) -> EventResponse {
        let response = self.builder.build(ctx.event());
        info!(
            invocation = %ctx.invocation_id(),
            errored = response.errored(),
            "answered interactive install"
        );
        response
    }
}

/// Factory with every provider handler registered.
#[must_use]
pub fn provider_factory<G>(generator: G) -> PluginFactory
where
    G: IdentityGenerator + 'static,
{
    PluginFactory::new().with_handler(
        EventType::INTERACTIVE_INSTALL,
        InteractiveInstall::new(generator),
    )
}

/// Factory using a mesh identity generator built from `config`.
///
/// # Errors
///
/// Returns [`IdentityError::InvalidSettings`](provider_identity::IdentityError::InvalidSettings)
/// when the identity settings are unusable.
#[cfg(feature = "config")]
pub fn factory_from_config(
    config: &provider_config::ProviderConfig,
) -> provider_identity::IdentityResult<PluginFactory> {
    let generator = provider_identity::MeshIdentityGenerator::new(config.identity.clone())?;
    Ok(provider_factory(generator))
}
