// Core layer - configuration and the response model
pub mod core;

// Wire types exchanged with the voice platform
pub mod envelope;

// Reminders API client
pub mod reminders;

// Application layer - predicates, handler chain, dispatcher, handlers
pub mod skill;

pub use crate::core::{Config, Response};
pub use envelope::{RequestEnvelope, ResponseEnvelope};
pub use skill::{build_skill, Skill};
