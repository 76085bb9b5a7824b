//! # Envelope Module
//!
//! Wire types exchanged with the voice platform.
//!
//! - **Version**: 1.0.0
//! - **Since**: 1.0.0
//! - **Toggleable**: false

pub mod request;
pub mod response;

pub use request::{
    Application, Context, Device, Intent, IntentRequest, Permissions, Request, RequestHeader,
    RequestEnvelope, RequestKind, Session, SessionEndedError, SessionEndedRequest, SystemState,
    User,
};
pub use response::{ResponseEnvelope, RESPONSE_VERSION};
