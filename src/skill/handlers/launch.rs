//! Launch handler

use async_trait::async_trait;

use crate::core::Response;
use crate::envelope::RequestKind;
use crate::skill::error::SkillError;
use crate::skill::handler::RequestHandler;
use crate::skill::input::HandlerInput;
use crate::skill::predicates::Predicate;

pub const WELCOME_SPEECH: &str = "Welcome to RemindME. Would you like to schedule a reminder?";

/// Greets the user and asks whether to schedule a reminder
pub struct LaunchRequestHandler;

#[async_trait]
impl RequestHandler for LaunchRequestHandler {
    fn name(&self) -> &'static str {
        "launch"
    }

    fn predicate(&self) -> Predicate {
        Predicate::RequestType(RequestKind::Launch)
    }

    async fn handle(&self, _input: &HandlerInput<'_>) -> Result<Response, SkillError> {
        Ok(Response::builder()
            .speak(WELCOME_SPEECH)
            .ask(WELCOME_SPEECH)
            .build())
    }
}
