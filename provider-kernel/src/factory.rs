//! Handler registry and the stdin/stdout plugin exchange.

use std::collections::HashMap;
use std::fmt;
use std::fs;
use std::io::{Read, Write};
use std::sync::Arc;

use provider_primitives::{Event, EventResponse, EventType};
use tracing::{debug, info_span};

use crate::error::{KernelError, KernelResult};
use crate::handler::{EventContext, EventHandler};

/// Routes bus events to the handlers registered for them.
///
/// Events nobody registered for are answered with the empty envelope, which
/// the bus reads as "nothing to contribute".
#[derive(Clone, Default)]
pub struct PluginFactory {
    handlers: HashMap<EventType, Arc<dyn EventHandler>>,
}

impl fmt::Debug for PluginFactory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PluginFactory")
            .field("events", &self.handlers.keys().collect::<Vec<_>>())
            .finish()
    }
}

impl PluginFactory {
    /// Creates a factory without handlers.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `handler` for `event_type`, returning the handler it replaced.
    pub fn register<H>(&mut self, event_type: EventType, handler: H) -> Option<Arc<dyn EventHandler>>
    where
        H: EventHandler + 'static,
    {
        self.handlers.insert(event_type, Arc::new(handler))
    }

    /// Builder-style [`register`](Self::register).
    #[must_use]
    pub fn with_handler<H>(mut self, event_type: EventType, handler: H) -> Self
    where
        H: EventHandler + 'static,
    {
        self.register(event_type, handler);
        self
    }

    /// Returns `true` when a handler is registered for `event_type`.
    #[must_use]
    pub fn handles(&self, event_type: &EventType) -> bool {
        self.handlers.contains_key(event_type)
    }

    /// Returns the registered event names, sorted.
    #[must_use]
    pub fn event_types(&self) -> Vec<&EventType> {
        let mut names: Vec<_> = self.handlers.keys().collect();
        names.sort();
        names
    }

    /// Dispatches `event` to the handler registered under `name`.
    ///
    /// The bus routes on the name it invoked the plugin with, so `name` wins
    /// over the name carried inside the event.
    #[must_use]
    pub fn dispatch(&self, name: &EventType, event: Event) -> EventResponse {
        let ctx = EventContext::from_event(event);
        let span = info_span!(
            "event",
            name = %name,
            invocation = %ctx.invocation_id(),
        );
        let _guard = span.enter();

        if ctx.event_type() != name {
            debug!(carried = %ctx.event_type(), "event name differs from dispatch name");
        }

        let Some(handler) = self.handlers.get(name) else {
            debug!("no handler registered");
            return EventResponse::default();
        };

        let response = handler.handle(&ctx);
        debug!(
            errored = response.errored(),
            elapsed = ?ctx.received_at().elapsed(),
            "event handled"
        );
        response
    }

    /// Reads an event document from `reader`, dispatches it under `name`, and
    /// writes the response document to `writer`.
    ///
    /// # Errors
    ///
    /// Returns a [`KernelError`] when the event cannot be read or decoded, the
    /// payload file cannot be read, or the response cannot be written.
    pub fn run<R, W>(&self, name: &EventType, mut reader: R, mut writer: W) -> KernelResult<EventResponse>
    where
        R: Read,
        W: Write,
    {
        let mut input = String::new();
        reader.read_to_string(&mut input)?;
        let mut event: Event =
            serde_json::from_str(&input).map_err(|source| KernelError::Decode { source })?;

        if let Some(path) = event.payload_file() {
            let path = path.to_path_buf();
            debug!(path = %path.display(), "loading event payload from file");
            event.data = fs::read_to_string(&path)
                .map_err(|source| KernelError::PayloadFile { path, source })?;
        }

        let response = self.dispatch(name, event);
        serde_json::to_writer(&mut writer, &response)
            .map_err(|source| KernelError::Encode { source })?;
        writer.flush()?;
        Ok(response)
    }
}
