//! Yes intent: schedule a reminder through the Reminders API
//!
//! - **Version**: 1.0.0
//! - **Since**: 1.0.0

use async_trait::async_trait;
use chrono::Utc;
use log::{info, warn};

use crate::core::{Card, ReminderSettings, Response};
use crate::reminders::{ReminderError, ReminderRequest, REMINDERS_PERMISSION};
use crate::skill::error::SkillError;
use crate::skill::handler::RequestHandler;
use crate::skill::input::HandlerInput;
use crate::skill::predicates::{Predicate, YES_INTENT};

pub const MISSING_PERMISSIONS_SPEECH: &str =
    "Please enable Reminders permissions in the Amazon Alexa app.";
pub const REMINDER_CREATED_SPEECH: &str = "Great! I've scheduled a reminder for you.";
pub const REMINDER_FAILED_SPEECH: &str = "Uh Oh. Looks like something went wrong.";
pub const REMINDER_CREATED_TITLE: &str = "Reminder created with id";
pub const REMINDER_FAILED_TITLE: &str = "Reminder not created";

/// Schedules one relative reminder per confirmation
///
/// Without a consent token the user is asked for the reminders permission and
/// the service is not called.
pub struct CreateReminderIntentHandler {
    settings: ReminderSettings,
}

impl CreateReminderIntentHandler {
    pub fn new(settings: ReminderSettings) -> Self {
        Self { settings }
    }
}

#[async_trait]
impl RequestHandler for CreateReminderIntentHandler {
    fn name(&self) -> &'static str {
        "create_reminder"
    }

    fn predicate(&self) -> Predicate {
        Predicate::IntentName(YES_INTENT)
    }

    async fn handle(&self, input: &HandlerInput<'_>) -> Result<Response, SkillError> {
        let request_id = input.request_id();

        if input.envelope.consent_token().is_none() {
            info!("[{request_id}] No reminders consent, asking for permission");
            return Ok(Response::builder()
                .speak(MISSING_PERMISSIONS_SPEECH)
                .card(Card::permissions_consent([REMINDERS_PERMISSION]))
                .build());
        }

        let service = input.reminder_service()?;
        let request = ReminderRequest::relative(Utc::now(), &self.settings);

        match service.create_reminder(&request).await {
            Ok(created) => {
                info!("[{request_id}] Created reminder {}", created.alert_token);
                Ok(Response::builder()
                    .speak(REMINDER_CREATED_SPEECH)
                    .card(Card::simple(REMINDER_CREATED_TITLE, created.alert_token))
                    .build())
            }
            Err(ReminderError::Service { status, body }) => {
                warn!("[{request_id}] Reminder service refused ({status}): {body}");
                Ok(Response::builder()
                    .speak(REMINDER_FAILED_SPEECH)
                    .card(Card::simple(REMINDER_FAILED_TITLE, body))
                    .build())
            }
            Err(other) => Err(other.into()),
        }
    }
}
