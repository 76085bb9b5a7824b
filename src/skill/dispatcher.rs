//! Request dispatch
//!
//! - **Version**: 1.1.0
//! - **Since**: 1.0.0
//!
//! ## Changelog
//! - 1.1.0: Skill id verification and JSON invocation entry point
//! - 1.0.0: First-match dispatch with centralized exception recovery

use anyhow::{anyhow, Result};
use log::{debug, info, warn};
use std::sync::Arc;

use super::error::{InvokeError, SkillError};
use super::handler::{ExceptionHandler, RequestHandler};
use super::input::HandlerInput;
use super::registry::HandlerChain;
use crate::core::Response;
use crate::envelope::{RequestEnvelope, ResponseEnvelope};
use crate::reminders::ServiceClientFactory;

/// A fully assembled skill: handler chain, exception handler and services
///
/// Built once at startup by [`SkillBuilder`] and shared read-only afterwards.
pub struct Skill {
    chain: HandlerChain,
    exception_handler: Arc<dyn ExceptionHandler>,
    services: Arc<dyn ServiceClientFactory>,
    skill_id: Option<String>,
}

impl Skill {
    pub fn builder() -> SkillBuilder {
        SkillBuilder::default()
    }

    pub fn chain(&self) -> &HandlerChain {
        &self.chain
    }

    /// Run exactly one handler for the request and always produce a response
    ///
    /// A handler failure, or a request no handler accepts, is passed to the
    /// exception handler once.
    pub async fn dispatch(&self, envelope: &RequestEnvelope) -> Response {
        let input = HandlerInput::new(envelope, self.services.as_ref());
        let request_id = envelope.request_id();

        let outcome = match self.chain.find(envelope) {
            Some(handler) => {
                debug!("[{request_id}] Dispatching to '{}'", handler.name());
                handler.handle(&input).await
            }
            None => Err(SkillError::Dispatch {
                request_type: envelope
                    .kind()
                    .map(|kind| kind.as_str())
                    .unwrap_or("an unrecognised request type")
                    .to_string(),
            }),
        };

        match outcome {
            Ok(response) => response,
            Err(error) => self.exception_handler.handle(&input, &error).await,
        }
    }

    /// Verify the caller and dispatch, wrapping the result in a response envelope
    pub async fn invoke(&self, envelope: RequestEnvelope) -> Result<ResponseEnvelope, InvokeError> {
        self.verify_skill_id(&envelope)?;
        let response = self.dispatch(&envelope).await;
        Ok(ResponseEnvelope::new(
            response,
            envelope.session_attributes().cloned(),
        ))
    }

    /// Parse a raw JSON payload and invoke
    pub async fn invoke_json(&self, payload: &[u8]) -> Result<ResponseEnvelope, InvokeError> {
        let envelope = RequestEnvelope::from_slice(payload)?;
        info!(
            "[{}] Received {}",
            envelope.request_id(),
            envelope
                .kind()
                .map(|kind| kind.as_str())
                .unwrap_or("unrecognised request")
        );
        self.invoke(envelope).await
    }

    fn verify_skill_id(&self, envelope: &RequestEnvelope) -> Result<(), InvokeError> {
        let Some(expected) = &self.skill_id else {
            return Ok(());
        };
        match envelope.application_id() {
            Some(actual) if actual == expected => Ok(()),
            actual => {
                let actual = actual.unwrap_or("<missing>").to_string();
                warn!(
                    "[{}] Rejecting request for application {actual}",
                    envelope.request_id()
                );
                Err(InvokeError::SkillIdMismatch {
                    expected: expected.clone(),
                    actual,
                })
            }
        }
    }
}

/// Assembles a [`Skill`]
///
/// Request handlers are tried in the order they are added.
#[derive(Default)]
pub struct SkillBuilder {
    chain: HandlerChain,
    exception_handler: Option<Arc<dyn ExceptionHandler>>,
    services: Option<Arc<dyn ServiceClientFactory>>,
    skill_id: Option<String>,
}

impl SkillBuilder {
    pub fn add_request_handler(mut self, handler: Arc<dyn RequestHandler>) -> Self {
        self.chain.register(handler);
        self
    }

    pub fn add_request_handlers(
        mut self,
        handlers: impl IntoIterator<Item = Arc<dyn RequestHandler>>,
    ) -> Self {
        for handler in handlers {
            self.chain.register(handler);
        }
        self
    }

    pub fn exception_handler(mut self, handler: Arc<dyn ExceptionHandler>) -> Self {
        self.exception_handler = Some(handler);
        self
    }

    pub fn service_client_factory(mut self, services: Arc<dyn ServiceClientFactory>) -> Self {
        self.services = Some(services);
        self
    }

    pub fn skill_id(mut self, skill_id: Option<String>) -> Self {
        self.skill_id = skill_id;
        self
    }

    pub fn build(self) -> Result<Skill> {
        if self.chain.is_empty() {
            return Err(anyhow!("skill has no request handlers"));
        }
        let exception_handler = self
            .exception_handler
            .ok_or_else(|| anyhow!("skill has no exception handler"))?;
        let services = self
            .services
            .ok_or_else(|| anyhow!("skill has no service client factory"))?;

        Ok(Skill {
            chain: self.chain,
            exception_handler,
            services,
            skill_id: self.skill_id,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ReminderSettings;
    use crate::envelope::RequestKind;
    use crate::skill::handlers::{
        create_all_handlers, CatchAllExceptionHandler, IntentReflectorHandler, FALLBACK_SPEECH,
    };
    use crate::skill::predicates::{Predicate, HELP_INTENT};
    use crate::skill::test_support::{
        intent, launch, session_ended, unknown, MockServiceFactory,
    };
    use async_trait::async_trait;
    use serde_json::json;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn skill() -> Skill {
        Skill::builder()
            .add_request_handlers(create_all_handlers(&ReminderSettings::default()))
            .exception_handler(Arc::new(CatchAllExceptionHandler))
            .service_client_factory(Arc::new(MockServiceFactory::created("tok")))
            .build()
            .unwrap()
    }

    /// Handler failing with an unclassified error, counting its calls
    #[derive(Default)]
    struct FaultyHandler {
        calls: AtomicUsize,
    }

    #[async_trait]
    impl RequestHandler for FaultyHandler {
        fn name(&self) -> &'static str {
            "faulty"
        }

        fn predicate(&self) -> Predicate {
            Predicate::RequestType(RequestKind::Launch)
        }

        async fn handle(&self, _input: &HandlerInput<'_>) -> Result<Response, SkillError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Err(anyhow!("boom").into())
        }
    }

    /// Exception handler recording what it was given
    #[derive(Default)]
    struct RecordingExceptionHandler {
        calls: AtomicUsize,
    }

    #[async_trait]
    impl ExceptionHandler for RecordingExceptionHandler {
        async fn handle(&self, _input: &HandlerInput<'_>, error: &SkillError) -> Response {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Response::builder().speak(error.to_string()).build()
        }
    }

    #[test]
    fn test_build_requires_handlers_and_exception_handler() {
        assert!(Skill::builder()
            .exception_handler(Arc::new(CatchAllExceptionHandler))
            .service_client_factory(Arc::new(MockServiceFactory::created("tok")))
            .build()
            .is_err());

        assert!(Skill::builder()
            .add_request_handler(Arc::new(IntentReflectorHandler))
            .service_client_factory(Arc::new(MockServiceFactory::created("tok")))
            .build()
            .is_err());
    }

    #[tokio::test]
    async fn test_faulty_handler_routes_to_fallback_once() {
        let faulty = Arc::new(FaultyHandler::default());
        let recorder = Arc::new(RecordingExceptionHandler::default());
        let skill = Skill::builder()
            .add_request_handler(faulty.clone())
            .exception_handler(recorder.clone())
            .service_client_factory(Arc::new(MockServiceFactory::created("tok")))
            .build()
            .unwrap();

        let response = skill.dispatch(&launch()).await;

        assert_eq!(faulty.calls.load(Ordering::SeqCst), 1);
        assert_eq!(recorder.calls.load(Ordering::SeqCst), 1);
        assert_eq!(response.speech(), Some("boom"));
    }

    #[tokio::test]
    async fn test_faulty_handler_yields_generic_apology() {
        let skill = Skill::builder()
            .add_request_handler(Arc::new(FaultyHandler::default()))
            .exception_handler(Arc::new(CatchAllExceptionHandler))
            .service_client_factory(Arc::new(MockServiceFactory::created("tok")))
            .build()
            .unwrap();

        let response = skill.dispatch(&launch()).await;
        assert_eq!(response.speech(), Some(FALLBACK_SPEECH));
        assert_eq!(response.reprompt(), Some(FALLBACK_SPEECH));
        assert!(response.keeps_session_open());
        assert!(response.card().is_none());
    }

    #[tokio::test]
    async fn test_unmatched_request_reaches_fallback() {
        let response = skill().dispatch(&unknown()).await;
        assert_eq!(response.speech(), Some(FALLBACK_SPEECH));
    }

    #[tokio::test]
    async fn test_session_ended_is_terminal_and_empty() {
        let response = skill().dispatch(&session_ended()).await;
        assert_eq!(response, Response::empty());
        assert!(!response.keeps_session_open());
    }

    #[tokio::test]
    async fn test_reflector_after_named_handlers() {
        let skill = skill();
        let help = skill.dispatch(&intent(HELP_INTENT)).await;
        assert!(help.keeps_session_open());
        assert!(!help.speech().unwrap().contains(HELP_INTENT));

        let reflected = skill.dispatch(&intent("OrderPizzaIntent")).await;
        assert!(reflected.speech().unwrap().contains("OrderPizzaIntent"));
    }

    #[tokio::test]
    async fn test_reflector_registered_first_takes_named_intents() {
        let skill = Skill::builder()
            .add_request_handler(Arc::new(IntentReflectorHandler))
            .add_request_handlers(create_all_handlers(&ReminderSettings::default()))
            .exception_handler(Arc::new(CatchAllExceptionHandler))
            .service_client_factory(Arc::new(MockServiceFactory::created("tok")))
            .build()
            .unwrap();

        let response = skill.dispatch(&intent(HELP_INTENT)).await;
        assert_eq!(
            response.speech(),
            Some(format!("You just triggered {HELP_INTENT}.").as_str())
        );
    }

    #[tokio::test]
    async fn test_invoke_json_wraps_response_and_echoes_attributes() {
        let payload = json!({
            "version": "1.0",
            "session": {"sessionId": "s1", "attributes": {"visits": 4}},
            "request": {"type": "LaunchRequest", "requestId": "r1"}
        });

        let envelope = skill()
            .invoke_json(payload.to_string().as_bytes())
            .await
            .unwrap();
        let value = serde_json::to_value(&envelope).unwrap();

        assert_eq!(value["version"], "1.0");
        assert_eq!(value["sessionAttributes"]["visits"], 4);
        assert_eq!(value["response"]["shouldEndSession"], false);
        assert!(value["response"]["outputSpeech"]["ssml"]
            .as_str()
            .unwrap()
            .starts_with("<speak>Welcome to RemindME"));
    }

    #[tokio::test]
    async fn test_invoke_json_rejects_malformed_payload() {
        let err = skill().invoke_json(b"not json").await.unwrap_err();
        assert!(matches!(err, InvokeError::MalformedEnvelope(_)));
    }

    #[tokio::test]
    async fn test_invoke_json_intent_without_name_reaches_reflector() {
        let payload = json!({
            "request": {"type": "IntentRequest", "requestId": "r", "intent": {}}
        });

        let envelope = skill()
            .invoke_json(payload.to_string().as_bytes())
            .await
            .unwrap();
        assert_eq!(
            envelope.response.speech(),
            Some("You just triggered an unknown intent.")
        );
    }

    #[tokio::test]
    async fn test_invoke_json_accepts_sparse_context() {
        let payload = json!({
            "session": {"application": {}},
            "context": {"System": {"user": {}, "device": {}, "application": {}}},
            "request": {"type": "LaunchRequest"}
        });

        let envelope = skill()
            .invoke_json(payload.to_string().as_bytes())
            .await
            .unwrap();
        assert!(envelope
            .response
            .speech()
            .unwrap()
            .starts_with("Welcome to RemindME"));
    }

    #[tokio::test]
    async fn test_invoke_json_session_ended_with_bare_error() {
        let payload = json!({
            "request": {"type": "SessionEndedRequest", "requestId": "r", "error": {}}
        });

        let envelope = skill()
            .invoke_json(payload.to_string().as_bytes())
            .await
            .unwrap();
        assert!(envelope.response.speech().is_none());
    }

    #[tokio::test]
    async fn test_skill_id_verification() {
        let skill = Skill::builder()
            .add_request_handlers(create_all_handlers(&ReminderSettings::default()))
            .exception_handler(Arc::new(CatchAllExceptionHandler))
            .service_client_factory(Arc::new(MockServiceFactory::created("tok")))
            .skill_id(Some("amzn1.ask.skill.expected".to_string()))
            .build()
            .unwrap();

        let matching: RequestEnvelope = serde_json::from_value(json!({
            "context": {"System": {"application": {"applicationId": "amzn1.ask.skill.expected"}}},
            "request": {"type": "LaunchRequest", "requestId": "r1"}
        }))
        .unwrap();
        assert!(skill.invoke(matching).await.is_ok());

        let other: RequestEnvelope = serde_json::from_value(json!({
            "context": {"System": {"application": {"applicationId": "amzn1.ask.skill.other"}}},
            "request": {"type": "LaunchRequest", "requestId": "r2"}
        }))
        .unwrap();
        match skill.invoke(other).await.unwrap_err() {
            InvokeError::SkillIdMismatch { expected, actual } => {
                assert_eq!(expected, "amzn1.ask.skill.expected");
                assert_eq!(actual, "amzn1.ask.skill.other");
            }
            err => panic!("unexpected error: {err}"),
        }

        assert!(skill.invoke(launch()).await.is_err());
    }
}
