//! Handler trait and per-invocation context.

use std::sync::Arc;
use std::time::Instant;

use provider_primitives::{Event, EventResponse, EventType};
use uuid::Uuid;

/// Context provided to event handlers.
#[derive(Debug, Clone)]
pub struct EventContext {
    invocation_id: Uuid,
    received_at: Instant,
    event: Arc<Event>,
}

impl EventContext {
    /// Constructs a context from an owned event.
    #[must_use]
    pub fn from_event(event: Event) -> Self {
        Self::from_shared(Arc::new(event))
    }

    /// Constructs a context from a shared event instance.
    #[must_use]
    pub fn from_shared(event: Arc<Event>) -> Self {
        Self {
            invocation_id: Uuid::new_v4(),
            received_at: Instant::now(),
            event,
        }
    }

    /// Identifier of this invocation, used to correlate log lines.
    #[must_use]
    pub const fn invocation_id(&self) -> Uuid {
        self.invocation_id
    }

    /// Returns the time the event was received.
    #[must_use]
    pub fn received_at(&self) -> Instant {
        self.received_at
    }

    /// Returns the event being handled.
    #[must_use]
    pub fn event(&self) -> &Event {
        &self.event
    }

    /// Returns the name the event carries.
    #[must_use]
    pub fn event_type(&self) -> &EventType {
        &self.event.name
    }
}

/// Handler answering one kind of bus event.
///
/// Handlers never fail out of band: every outcome, including errors, is an
/// [`EventResponse`].
pub trait EventHandler: Send + Sync {
    /// Handles the event described by `ctx`.
    fn handle(&self, ctx: &EventContext) -> EventResponse;
}

impl<F> EventHandler for F
where
    F: Fn(&EventContext) -> EventResponse + Send + Sync,
{
    fn handle(&self, ctx: &EventContext) -> EventResponse {
        self(ctx)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn closures_are_handlers() {
        let handler = |ctx: &EventContext| EventResponse::success(ctx.event_type().to_string());
        let ctx = EventContext::from_event(Event::new(EventType::INSTALL));

        assert_eq!(handler.handle(&ctx).data(), "agent.install");
    }

    #[test]
    fn each_context_gets_its_own_invocation_id() {
        let event = Arc::new(Event::new(EventType::BOOTSTRAP));
        let first = EventContext::from_shared(Arc::clone(&event));
        let second = EventContext::from_shared(event);

        assert_ne!(first.invocation_id(), second.invocation_id());
        assert_eq!(first.event(), second.event());
    }
}
