use thiserror::Error;

use crate::reminders::ReminderError;

/// Failure escaping a request handler, recovered by the exception handler
#[derive(Debug, Error)]
pub enum SkillError {
    #[error("no request handler accepts {request_type}")]
    Dispatch { request_type: String },
    #[error(transparent)]
    Reminder(#[from] ReminderError),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Rejection of a whole invocation, before any handler runs
#[derive(Debug, Error)]
pub enum InvokeError {
    #[error("malformed request envelope: {0}")]
    MalformedEnvelope(#[from] serde_json::Error),
    #[error("skill id mismatch: expected {expected}, got {actual}")]
    SkillIdMismatch { expected: String, actual: String },
}
