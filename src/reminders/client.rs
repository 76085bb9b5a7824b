//! Reminders API client
//!
//! - **Version**: 1.0.0
//! - **Since**: 1.0.0
//!
//! ## Changelog
//! - 1.0.0: Single-attempt HTTP client and per-request client factory

use anyhow::{anyhow, Result};
use async_trait::async_trait;
use log::debug;
use std::sync::Arc;
use std::time::Duration;

use super::error::ReminderError;
use super::model::{ReminderRequest, ReminderResponse};
use crate::envelope::SystemState;

pub const REMINDERS_PATH: &str = "/v1/alerts/reminders";

/// Remote reminder management
///
/// One call per invocation; implementations must not retry.
#[async_trait]
pub trait ReminderManagementService: Send + Sync {
    async fn create_reminder(
        &self,
        request: &ReminderRequest,
    ) -> Result<ReminderResponse, ReminderError>;
}

/// Builds service clients bound to the caller's API endpoint and token
pub trait ServiceClientFactory: Send + Sync {
    fn reminder_service(
        &self,
        system: Option<&SystemState>,
    ) -> Result<Arc<dyn ReminderManagementService>>;
}

/// HTTP implementation talking to `{api_endpoint}/v1/alerts/reminders`
pub struct HttpReminderClient {
    client: reqwest::Client,
    endpoint: String,
    access_token: String,
}

impl HttpReminderClient {
    pub fn new(api_endpoint: &str, access_token: &str, timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            endpoint: format!("{}{}", api_endpoint.trim_end_matches('/'), REMINDERS_PATH),
            access_token: access_token.to_string(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl ReminderManagementService for HttpReminderClient {
    async fn create_reminder(
        &self,
        request: &ReminderRequest,
    ) -> Result<ReminderResponse, ReminderError> {
        debug!("POST {} (offset {}s)", self.endpoint, request.trigger.offset_in_seconds);

        let response = self
            .client
            .post(&self.endpoint)
            .bearer_auth(&self.access_token)
            .json(request)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(ReminderError::Service {
                status: status.as_u16(),
                body,
            });
        }

        Ok(serde_json::from_str(&body)?)
    }
}

/// Factory producing [`HttpReminderClient`]s from the envelope's system state
#[derive(Debug, Clone)]
pub struct HttpServiceClientFactory {
    timeout: Duration,
}

impl HttpServiceClientFactory {
    pub fn new(timeout: Duration) -> Self {
        Self { timeout }
    }
}

impl ServiceClientFactory for HttpServiceClientFactory {
    fn reminder_service(
        &self,
        system: Option<&SystemState>,
    ) -> Result<Arc<dyn ReminderManagementService>> {
        let system = system.ok_or_else(|| anyhow!("request carries no system context"))?;
        let endpoint = system
            .api_endpoint
            .as_deref()
            .ok_or_else(|| anyhow!("request carries no apiEndpoint"))?;
        let token = system
            .api_access_token
            .as_deref()
            .ok_or_else(|| anyhow!("request carries no apiAccessToken"))?;

        Ok(Arc::new(HttpReminderClient::new(endpoint, token, self.timeout)?))
    }
}
