//! Request and exception handler traits
//!
//! - **Version**: 1.0.0
//! - **Since**: 1.0.0
//!
//! ## Changelog
//! - 1.0.0: Predicate-driven request handlers and the infallible exception handler

use async_trait::async_trait;

use super::error::SkillError;
use super::input::HandlerInput;
use super::predicates::Predicate;
use crate::core::Response;

/// Trait for request handlers
///
/// Each handler declares the requests it accepts through a [`Predicate`].
/// Handlers are registered with a [`HandlerChain`](super::registry::HandlerChain)
/// and the first one whose predicate matches handles the request.
///
/// # Example
///
/// ```ignore
/// pub struct HelpHandler;
///
/// #[async_trait]
/// impl RequestHandler for HelpHandler {
///     fn name(&self) -> &'static str {
///         "help"
///     }
///
///     fn predicate(&self) -> Predicate {
///         Predicate::IntentName(HELP_INTENT)
///     }
///
///     async fn handle(&self, input: &HandlerInput<'_>) -> Result<Response, SkillError> {
///         Ok(Response::builder().speak("How can I help?").ask("How can I help?").build())
///     }
/// }
/// ```
#[async_trait]
pub trait RequestHandler: Send + Sync {
    /// Short name used in logs
    fn name(&self) -> &'static str;

    /// Requests this handler accepts
    fn predicate(&self) -> Predicate;

    /// Handle an accepted request
    async fn handle(&self, input: &HandlerInput<'_>) -> Result<Response, SkillError>;
}

/// Recovers from a failed request handler
///
/// Returns a `Response` rather than a `Result`: recovery cannot fail.
#[async_trait]
pub trait ExceptionHandler: Send + Sync {
    async fn handle(&self, input: &HandlerInput<'_>, error: &SkillError) -> Response;
}
