//! # Reminders Feature
//!
//! Client for the platform Reminders API, used by the Yes intent.
//!
//! - **Version**: 1.0.0
//! - **Since**: 1.0.0
//! - **Toggleable**: false

pub mod client;
pub mod error;
pub mod model;

pub use client::{
    HttpReminderClient, HttpServiceClientFactory, ReminderManagementService, ServiceClientFactory,
};
pub use error::ReminderError;
pub use model::{ReminderRequest, ReminderResponse};

/// Permission scope required to create reminders
pub const REMINDERS_PERMISSION: &str = "alexa::alerts:reminders:skill:readwrite";
