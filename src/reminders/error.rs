use thiserror::Error;

/// Failures of a create-reminder call
#[derive(Debug, Error)]
pub enum ReminderError {
    /// The service answered with a non-success status; `body` is its diagnostic payload
    #[error("reminder service returned {status}: {body}")]
    Service { status: u16, body: String },
    #[error("reminder service request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("malformed reminder service response: {0}")]
    Decode(#[from] serde_json::Error),
}
