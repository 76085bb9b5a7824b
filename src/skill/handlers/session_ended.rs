//! Session end handler

use async_trait::async_trait;
use log::{info, warn};

use crate::core::Response;
use crate::envelope::{Request, RequestKind};
use crate::skill::error::SkillError;
use crate::skill::handler::RequestHandler;
use crate::skill::input::HandlerInput;
use crate::skill::predicates::Predicate;

/// Acknowledges the end of a session with an empty response
pub struct SessionEndedRequestHandler;

#[async_trait]
impl RequestHandler for SessionEndedRequestHandler {
    fn name(&self) -> &'static str {
        "session_ended"
    }

    fn predicate(&self) -> Predicate {
        Predicate::RequestType(RequestKind::SessionEnded)
    }

    async fn handle(&self, input: &HandlerInput<'_>) -> Result<Response, SkillError> {
        if let Request::SessionEnded(ended) = &input.envelope.request {
            let reason = ended.reason.as_deref().unwrap_or("unspecified");
            match &ended.error {
                Some(error) => warn!(
                    "[{}] Session ended ({reason}): {} {}",
                    input.request_id(),
                    error.kind.as_deref().unwrap_or("UNKNOWN"),
                    error.message.as_deref().unwrap_or("")
                ),
                None => info!("[{}] Session ended ({reason})", input.request_id()),
            }
        }
        Ok(Response::empty())
    }
}
