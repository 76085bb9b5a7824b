//! Per-invocation input handed to every handler
//!
//! - **Version**: 1.0.0
//! - **Since**: 1.0.0

use anyhow::Result;
use std::sync::Arc;

use crate::envelope::RequestEnvelope;
use crate::reminders::{ReminderManagementService, ServiceClientFactory};

/// The request being dispatched plus access to remote services
///
/// Borrowed for the duration of one dispatch; handlers never own the envelope.
#[derive(Clone, Copy)]
pub struct HandlerInput<'a> {
    pub envelope: &'a RequestEnvelope,
    services: &'a dyn ServiceClientFactory,
}

impl<'a> HandlerInput<'a> {
    pub fn new(envelope: &'a RequestEnvelope, services: &'a dyn ServiceClientFactory) -> Self {
        Self { envelope, services }
    }

    pub fn request_id(&self) -> &str {
        self.envelope.request_id()
    }

    /// Reminders client bound to this request's API endpoint and access token
    pub fn reminder_service(&self) -> Result<Arc<dyn ReminderManagementService>> {
        self.services.reminder_service(self.envelope.system())
    }
}
