//! Intent reflector
//!
//! Repeats the name of any intent that reached it. Useful while testing the
//! interaction model; must stay last in the chain so it does not take intents
//! meant for specific handlers.

use async_trait::async_trait;

use crate::core::Response;
use crate::envelope::RequestKind;
use crate::skill::error::SkillError;
use crate::skill::handler::RequestHandler;
use crate::skill::input::HandlerInput;
use crate::skill::predicates::Predicate;

pub struct IntentReflectorHandler;

#[async_trait]
impl RequestHandler for IntentReflectorHandler {
    fn name(&self) -> &'static str {
        "intent_reflector"
    }

    fn predicate(&self) -> Predicate {
        Predicate::RequestType(RequestKind::Intent)
    }

    async fn handle(&self, input: &HandlerInput<'_>) -> Result<Response, SkillError> {
        let intent_name = input.envelope.intent_name().unwrap_or("an unknown intent");
        Ok(Response::builder()
            .speak(format!("You just triggered {intent_name}."))
            .build())
    }
}
