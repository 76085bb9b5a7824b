//! Request handler implementations
//!
//! - **Version**: 1.0.0
//! - **Since**: 1.0.0

pub mod cancel_stop;
pub mod create_reminder;
pub mod exception;
pub mod help;
pub mod launch;
pub mod reflector;
pub mod session_ended;

use anyhow::Result;
use std::sync::Arc;

use super::dispatcher::Skill;
use super::handler::RequestHandler;
use crate::core::{Config, ReminderSettings};
use crate::reminders::ServiceClientFactory;

pub use cancel_stop::CancelOrStopIntentHandler;
pub use create_reminder::CreateReminderIntentHandler;
pub use exception::{CatchAllExceptionHandler, FALLBACK_SPEECH};
pub use help::HelpIntentHandler;
pub use launch::LaunchRequestHandler;
pub use reflector::IntentReflectorHandler;
pub use session_ended::SessionEndedRequestHandler;

/// Create all request handlers in dispatch order
///
/// The reflector stays last so it never takes intents meant for the handlers
/// above it.
pub fn create_all_handlers(reminder: &ReminderSettings) -> Vec<Arc<dyn RequestHandler>> {
    vec![
        Arc::new(LaunchRequestHandler),
        Arc::new(CreateReminderIntentHandler::new(reminder.clone())),
        Arc::new(HelpIntentHandler),
        Arc::new(CancelOrStopIntentHandler),
        Arc::new(SessionEndedRequestHandler),
        Arc::new(IntentReflectorHandler),
    ]
}

/// Assemble the skill once at startup
pub fn build_skill(config: &Config, services: Arc<dyn ServiceClientFactory>) -> Result<Skill> {
    Skill::builder()
        .add_request_handlers(create_all_handlers(&config.reminder))
        .exception_handler(Arc::new(CatchAllExceptionHandler))
        .service_client_factory(services)
        .skill_id(config.skill_id.clone())
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Card;
    use crate::skill::predicates::{CANCEL_INTENT, HELP_INTENT, STOP_INTENT, YES_INTENT};
    use crate::skill::test_support::{
        intent, intent_with_consent, launch, session_ended, MockOutcome, MockServiceFactory,
    };
    use std::collections::HashMap;

    fn config() -> Config {
        Config::from_vars(HashMap::new()).unwrap()
    }

    #[test]
    fn test_handler_order() {
        let names: Vec<_> = create_all_handlers(&ReminderSettings::default())
            .iter()
            .map(|h| h.name())
            .collect();
        assert_eq!(
            names,
            vec![
                "launch",
                "create_reminder",
                "help",
                "cancel_or_stop",
                "session_ended",
                "intent_reflector"
            ]
        );
    }

    #[tokio::test]
    async fn test_end_to_end_dispatch() {
        let services = Arc::new(MockServiceFactory::created("alert-1"));
        let skill = build_skill(&config(), services.clone()).unwrap();

        let launched = skill.dispatch(&launch()).await;
        assert!(!launched.speech().unwrap().is_empty());
        assert!(launched.keeps_session_open());

        let help = skill.dispatch(&intent(HELP_INTENT)).await;
        assert!(help.keeps_session_open());

        let cancel = skill.dispatch(&intent(CANCEL_INTENT)).await;
        let stop = skill.dispatch(&intent(STOP_INTENT)).await;
        assert_eq!(cancel, stop);
        assert_eq!(cancel.should_end_session(), Some(true));

        let ended = skill.dispatch(&session_ended()).await;
        assert!(ended.speech().is_none());

        let reflected = skill.dispatch(&intent("WeatherIntent")).await;
        assert!(reflected.speech().unwrap().contains("WeatherIntent"));

        assert_eq!(services.service.calls(), 0);
        let created = skill
            .dispatch(&intent_with_consent(YES_INTENT, "consent"))
            .await;
        assert_eq!(
            created.card(),
            Some(&Card::simple("Reminder created with id", "alert-1"))
        );
        assert_eq!(services.service.calls(), 1);
    }

    #[tokio::test]
    async fn test_service_failure_is_handled_inline() {
        let services = Arc::new(MockServiceFactory::new(MockOutcome::ServiceFailure {
            status: 401,
            body: "invalid token".to_string(),
        }));
        let skill = build_skill(&config(), services.clone()).unwrap();

        let response = skill
            .dispatch(&intent_with_consent(YES_INTENT, "consent"))
            .await;

        // Handled by the action itself, not by the exception handler
        assert_ne!(response.speech(), Some(FALLBACK_SPEECH));
        match response.card() {
            Some(Card::Simple { content, .. }) => assert!(content.contains("invalid token")),
            other => panic!("unexpected card: {other:?}"),
        }
        assert_eq!(services.service.calls(), 1);
    }
}
