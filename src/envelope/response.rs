//! Outbound response envelope

use serde::Serialize;
use serde_json::Value;
use std::collections::HashMap;

use crate::core::Response;

pub const RESPONSE_VERSION: &str = "1.0";

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponseEnvelope {
    pub version: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub session_attributes: Option<HashMap<String, Value>>,
    pub response: Response,
}

impl ResponseEnvelope {
    pub fn new(response: Response, session_attributes: Option<HashMap<String, Value>>) -> Self {
        Self {
            version: RESPONSE_VERSION.to_string(),
            session_attributes,
            response,
        }
    }
}
