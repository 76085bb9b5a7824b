//! Single handler for the Cancel and Stop intents

use async_trait::async_trait;

use crate::core::Response;
use crate::skill::error::SkillError;
use crate::skill::handler::RequestHandler;
use crate::skill::input::HandlerInput;
use crate::skill::predicates::{Predicate, CANCEL_INTENT, STOP_INTENT};

pub const GOODBYE_SPEECH: &str = "Goodbye!";

pub struct CancelOrStopIntentHandler;

#[async_trait]
impl RequestHandler for CancelOrStopIntentHandler {
    fn name(&self) -> &'static str {
        "cancel_or_stop"
    }

    fn predicate(&self) -> Predicate {
        Predicate::any_of([
            Predicate::IntentName(CANCEL_INTENT),
            Predicate::IntentName(STOP_INTENT),
        ])
    }

    async fn handle(&self, _input: &HandlerInput<'_>) -> Result<Response, SkillError> {
        Ok(Response::builder().speak(GOODBYE_SPEECH).build())
    }
}
