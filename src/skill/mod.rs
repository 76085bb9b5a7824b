//! # Skill
//!
//! Request routing: predicates, the ordered handler chain, the dispatcher and
//! the concrete handlers.
//!
//! - **Version**: 1.0.0
//! - **Since**: 1.0.0
//! - **Toggleable**: false

pub mod dispatcher;
pub mod error;
pub mod handler;
pub mod handlers;
pub mod input;
pub mod predicates;
pub mod registry;

#[cfg(test)]
pub(crate) mod test_support;

pub use dispatcher::{Skill, SkillBuilder};
pub use error::{InvokeError, SkillError};
pub use handler::{ExceptionHandler, RequestHandler};
pub use handlers::{build_skill, create_all_handlers};
pub use input::HandlerInput;
pub use predicates::Predicate;
pub use registry::HandlerChain;
