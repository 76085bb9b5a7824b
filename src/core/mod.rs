//! # Core Module
//!
//! Configuration and the response model shared by every handler.
//!
//! - **Version**: 1.0.0
//! - **Since**: 1.0.0
//! - **Toggleable**: false

pub mod config;
pub mod response;

// Re-export commonly used items
pub use config::{Config, ReminderSettings};
pub use response::{truncate_for_card, Card, OutputSpeech, Response, ResponseBuilder, CARD_CONTENT_LIMIT};
