//! Envelope fixtures and a counting Reminders API mock

use anyhow::Result;
use async_trait::async_trait;
use serde_json::{json, Value};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use crate::envelope::{RequestEnvelope, SystemState};
use crate::reminders::{
    ReminderError, ReminderManagementService, ReminderRequest, ReminderResponse,
    ServiceClientFactory,
};

fn envelope(request: Value, system: Value) -> RequestEnvelope {
    serde_json::from_value(json!({
        "version": "1.0",
        "session": {"new": true, "sessionId": "amzn1.echo-api.session.test"},
        "context": {"System": system},
        "request": request
    }))
    .unwrap()
}

fn system_without_consent() -> Value {
    json!({
        "user": {"userId": "amzn1.ask.account.test"},
        "apiEndpoint": "https://api.amazonalexa.com",
        "apiAccessToken": "access-token"
    })
}

pub fn launch() -> RequestEnvelope {
    envelope(
        json!({"type": "LaunchRequest", "requestId": "req-launch", "locale": "en-US"}),
        system_without_consent(),
    )
}

pub fn intent(name: &str) -> RequestEnvelope {
    envelope(
        json!({
            "type": "IntentRequest",
            "requestId": "req-intent",
            "locale": "en-US",
            "intent": {"name": name, "confirmationStatus": "NONE"}
        }),
        system_without_consent(),
    )
}

pub fn intent_with_consent(name: &str, consent_token: &str) -> RequestEnvelope {
    envelope(
        json!({
            "type": "IntentRequest",
            "requestId": "req-consent",
            "intent": {"name": name}
        }),
        json!({
            "user": {
                "userId": "amzn1.ask.account.test",
                "permissions": {"consentToken": consent_token}
            },
            "apiEndpoint": "https://api.amazonalexa.com",
            "apiAccessToken": "access-token"
        }),
    )
}

pub fn session_ended() -> RequestEnvelope {
    envelope(
        json!({"type": "SessionEndedRequest", "requestId": "req-ended", "reason": "USER_INITIATED"}),
        system_without_consent(),
    )
}

pub fn unknown() -> RequestEnvelope {
    envelope(
        json!({"type": "Display.ElementSelected", "requestId": "req-unknown"}),
        system_without_consent(),
    )
}

/// What the mock service answers
#[derive(Debug, Clone)]
pub enum MockOutcome {
    Created(String),
    ServiceFailure { status: u16, body: String },
}

/// Reminders API mock counting calls and keeping the last request
pub struct MockReminderService {
    outcome: MockOutcome,
    calls: AtomicUsize,
    last_request: Mutex<Option<ReminderRequest>>,
}

impl MockReminderService {
    pub fn new(outcome: MockOutcome) -> Self {
        Self {
            outcome,
            calls: AtomicUsize::new(0),
            last_request: Mutex::new(None),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn last_request(&self) -> Option<ReminderRequest> {
        self.last_request.lock().unwrap().clone()
    }
}

#[async_trait]
impl ReminderManagementService for MockReminderService {
    async fn create_reminder(
        &self,
        request: &ReminderRequest,
    ) -> Result<ReminderResponse, ReminderError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        *self.last_request.lock().unwrap() = Some(request.clone());
        match &self.outcome {
            MockOutcome::Created(token) => Ok(ReminderResponse {
                alert_token: token.clone(),
                ..ReminderResponse::default()
            }),
            MockOutcome::ServiceFailure { status, body } => Err(ReminderError::Service {
                status: *status,
                body: body.clone(),
            }),
        }
    }
}

/// Factory handing out one shared [`MockReminderService`]
pub struct MockServiceFactory {
    pub service: Arc<MockReminderService>,
}

impl MockServiceFactory {
    pub fn new(outcome: MockOutcome) -> Self {
        Self {
            service: Arc::new(MockReminderService::new(outcome)),
        }
    }

    pub fn created(token: &str) -> Self {
        Self::new(MockOutcome::Created(token.to_string()))
    }
}

impl ServiceClientFactory for MockServiceFactory {
    fn reminder_service(
        &self,
        _system: Option<&SystemState>,
    ) -> Result<Arc<dyn ReminderManagementService>> {
        Ok(self.service.clone())
    }
}
