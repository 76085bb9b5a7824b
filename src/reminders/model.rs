//! Reminders API request and response bodies

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::core::ReminderSettings;

/// Timestamp layout expected by the Reminders API
pub const REQUEST_TIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.3f";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReminderRequest {
    pub request_time: String,
    pub trigger: Trigger,
    pub alert_info: AlertInfo,
    pub push_notification: PushNotification,
}

impl ReminderRequest {
    /// Relative reminder firing `settings.offset_seconds` after `now`
    pub fn relative(now: DateTime<Utc>, settings: &ReminderSettings) -> Self {
        Self {
            request_time: now.format(REQUEST_TIME_FORMAT).to_string(),
            trigger: Trigger {
                kind: TriggerType::ScheduledRelative,
                offset_in_seconds: settings.offset_seconds,
            },
            alert_info: AlertInfo {
                spoken_info: SpokenInfo {
                    content: vec![SpokenText {
                        locale: settings.locale.clone(),
                        text: settings.text.clone(),
                    }],
                },
            },
            push_notification: PushNotification {
                status: PushNotificationStatus::Enabled,
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Trigger {
    #[serde(rename = "type")]
    pub kind: TriggerType,
    pub offset_in_seconds: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TriggerType {
    ScheduledRelative,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AlertInfo {
    pub spoken_info: SpokenInfo,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SpokenInfo {
    pub content: Vec<SpokenText>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SpokenText {
    pub locale: String,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PushNotification {
    pub status: PushNotificationStatus,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PushNotificationStatus {
    Enabled,
}

/// Successful create-reminder answer
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReminderResponse {
    pub alert_token: String,
    #[serde(default)]
    pub created_time: Option<String>,
    #[serde(default)]
    pub updated_time: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub version: Option<String>,
    #[serde(default)]
    pub href: Option<String>,
}
