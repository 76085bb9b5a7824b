//! Help intent handler

use async_trait::async_trait;

use crate::core::Response;
use crate::skill::error::SkillError;
use crate::skill::handler::RequestHandler;
use crate::skill::input::HandlerInput;
use crate::skill::predicates::{Predicate, HELP_INTENT};

pub const HELP_SPEECH: &str =
    "You can say yes and I will schedule a reminder for you. How can I help?";

pub struct HelpIntentHandler;

#[async_trait]
impl RequestHandler for HelpIntentHandler {
    fn name(&self) -> &'static str {
        "help"
    }

    fn predicate(&self) -> Predicate {
        Predicate::IntentName(HELP_INTENT)
    }

    async fn handle(&self, _input: &HandlerInput<'_>) -> Result<Response, SkillError> {
        Ok(Response::builder().speak(HELP_SPEECH).ask(HELP_SPEECH).build())
    }
}
