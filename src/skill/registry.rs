//! Ordered request handler chain
//!
//! - **Version**: 1.0.0
//! - **Since**: 1.0.0
//!
//! ## Changelog
//! - 1.0.0: First-match-wins chain with shadowing warnings

use log::warn;
use std::sync::Arc;

use super::handler::RequestHandler;
use super::predicates::Predicate;
use crate::envelope::RequestEnvelope;

/// Handlers in registration order
///
/// Order is part of the contract: the first handler whose predicate matches
/// handles the request, so specific handlers go before catch-alls.
///
/// # Example
///
/// ```ignore
/// let mut chain = HandlerChain::new();
/// chain.register(Arc::new(HelpHandler));
/// chain.register(Arc::new(IntentReflectorHandler));
///
/// if let Some(handler) = chain.find(&envelope) {
///     handler.handle(&input).await?;
/// }
/// ```
#[derive(Clone, Default)]
pub struct HandlerChain {
    handlers: Vec<(Predicate, Arc<dyn RequestHandler>)>,
}

impl HandlerChain {
    /// Create a new empty chain
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a handler after every handler registered so far
    ///
    /// Logs a warning when an earlier handler already accepts everything the
    /// new one would; the handler is still appended.
    pub fn register(&mut self, handler: Arc<dyn RequestHandler>) {
        let predicate = handler.predicate();
        if let Some((_, earlier)) = self
            .handlers
            .iter()
            .find(|(existing, _)| existing.shadows(&predicate))
        {
            warn!(
                "Handler '{}' is registered after '{}' and will never be selected",
                handler.name(),
                earlier.name()
            );
        }
        self.handlers.push((predicate, handler));
    }

    /// First handler accepting the request
    pub fn find(&self, envelope: &RequestEnvelope) -> Option<&Arc<dyn RequestHandler>> {
        self.handlers
            .iter()
            .find(|(predicate, _)| predicate.matches(envelope))
            .map(|(_, handler)| handler)
    }

    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }

    /// Handler names in registration order
    pub fn handler_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.handlers.iter().map(|(_, handler)| handler.name())
    }
}
