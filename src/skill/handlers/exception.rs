//! Catch-all exception handler

use async_trait::async_trait;
use log::error;

use crate::core::Response;
use crate::skill::error::SkillError;
use crate::skill::handler::ExceptionHandler;
use crate::skill::input::HandlerInput;

pub const FALLBACK_SPEECH: &str = "Sorry, I had trouble doing what you asked. Please try again.";

/// Logs any handler failure and apologises, keeping the session open
pub struct CatchAllExceptionHandler;

#[async_trait]
impl ExceptionHandler for CatchAllExceptionHandler {
    async fn handle(&self, input: &HandlerInput<'_>, err: &SkillError) -> Response {
        error!("[{}] Request failed: {err:#}", input.request_id());
        Response::builder()
            .speak(FALLBACK_SPEECH)
            .ask(FALLBACK_SPEECH)
            .build()
    }
}
