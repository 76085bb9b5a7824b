//! # Request Envelope
//!
//! Inbound event types as delivered by the voice platform.
//!
//! JSON, camelCase. The `request` object is internally tagged by `type`;
//! request types this skill does not know deserialize to [`Request::Unknown`].
//! Only `request.type` is mandatory: any other missing field reads as `None`
//! so the request still reaches the dispatcher.

use serde::Deserialize;
use serde_json::Value;
use std::collections::HashMap;

/// Top-level inbound envelope
#[derive(Debug, Clone, Deserialize)]
#[serde(try_from = "RawEnvelope")]
pub struct RequestEnvelope {
    pub version: String,
    pub session: Option<Session>,
    pub context: Option<Context>,
    /// Fields every request type carries, unknown types included
    pub header: RequestHeader,
    pub request: Request,
}

/// Wire shape before the request object is split into header and kind
#[derive(Deserialize)]
struct RawEnvelope {
    #[serde(default)]
    version: String,
    session: Option<Session>,
    context: Option<Context>,
    request: Value,
}

impl TryFrom<RawEnvelope> for RequestEnvelope {
    type Error = serde_json::Error;

    fn try_from(raw: RawEnvelope) -> Result<Self, Self::Error> {
        let header = RequestHeader::deserialize(&raw.request)?;
        let request = Request::deserialize(raw.request)?;
        Ok(Self {
            version: raw.version,
            session: raw.session,
            context: raw.context,
            header,
            request,
        })
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RequestHeader {
    pub request_id: Option<String>,
    pub timestamp: Option<String>,
    pub locale: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    #[serde(default)]
    pub new: bool,
    pub session_id: Option<String>,
    pub application: Option<Application>,
    pub attributes: Option<HashMap<String, Value>>,
    pub user: Option<User>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Context {
    #[serde(rename = "System", default)]
    pub system: SystemState,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SystemState {
    pub application: Option<Application>,
    pub user: Option<User>,
    pub device: Option<Device>,
    pub api_endpoint: Option<String>,
    pub api_access_token: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Application {
    pub application_id: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub user_id: Option<String>,
    pub access_token: Option<String>,
    pub permissions: Option<Permissions>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Permissions {
    pub consent_token: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Device {
    pub device_id: Option<String>,
}

// ============================================================================
// Request kinds
// ============================================================================

#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type")]
pub enum Request {
    #[serde(rename = "LaunchRequest")]
    Launch,
    #[serde(rename = "IntentRequest")]
    Intent(IntentRequest),
    #[serde(rename = "SessionEndedRequest")]
    SessionEnded(SessionEndedRequest),
    #[serde(other)]
    Unknown,
}

/// Discriminant of [`Request`] used by the kind predicates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RequestKind {
    Launch,
    Intent,
    SessionEnded,
}

impl RequestKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            RequestKind::Launch => "LaunchRequest",
            RequestKind::Intent => "IntentRequest",
            RequestKind::SessionEnded => "SessionEndedRequest",
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IntentRequest {
    pub dialog_state: Option<String>,
    pub intent: Option<Intent>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Intent {
    pub name: Option<String>,
    pub confirmation_status: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SessionEndedRequest {
    pub reason: Option<String>,
    pub error: Option<SessionEndedError>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SessionEndedError {
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub message: Option<String>,
}

// ============================================================================
// Accessors
// ============================================================================

impl RequestEnvelope {
    /// Parse an envelope from raw JSON bytes
    pub fn from_slice(payload: &[u8]) -> serde_json::Result<Self> {
        serde_json::from_slice(payload)
    }

    pub fn kind(&self) -> Option<RequestKind> {
        match &self.request {
            Request::Launch => Some(RequestKind::Launch),
            Request::Intent(_) => Some(RequestKind::Intent),
            Request::SessionEnded(_) => Some(RequestKind::SessionEnded),
            Request::Unknown => None,
        }
    }

    /// Intent name, only for intent requests that carry one
    pub fn intent_name(&self) -> Option<&str> {
        match &self.request {
            Request::Intent(request) => request
                .intent
                .as_ref()
                .and_then(|intent| intent.name.as_deref()),
            _ => None,
        }
    }

    pub fn request_id(&self) -> &str {
        self.header.request_id.as_deref().unwrap_or("unknown")
    }

    pub fn locale(&self) -> Option<&str> {
        self.header.locale.as_deref()
    }

    pub fn system(&self) -> Option<&SystemState> {
        self.context.as_ref().map(|c| &c.system)
    }

    /// Consent token granted by the user; an empty token counts as absent
    pub fn consent_token(&self) -> Option<&str> {
        self.system()
            .and_then(|s| s.user.as_ref())
            .and_then(|u| u.permissions.as_ref())
            .and_then(|p| p.consent_token.as_deref())
            .filter(|token| !token.is_empty())
    }

    /// Application id from the context, falling back to the session
    pub fn application_id(&self) -> Option<&str> {
        let from_context = self
            .system()
            .and_then(|s| s.application.as_ref())
            .and_then(|a| a.application_id.as_deref());
        let from_session = || {
            self.session
                .as_ref()
                .and_then(|s| s.application.as_ref())
                .and_then(|a| a.application_id.as_deref())
        };
        from_context.or_else(from_session)
    }

    pub fn session_attributes(&self) -> Option<&HashMap<String, Value>> {
        self.session.as_ref().and_then(|s| s.attributes.as_ref())
    }
}
