//! Declarative request predicates
//!
//! - **Version**: 1.0.0
//! - **Since**: 1.0.0

use crate::envelope::{RequestEnvelope, RequestKind};

pub const YES_INTENT: &str = "AMAZON.YesIntent";
pub const HELP_INTENT: &str = "AMAZON.HelpIntent";
pub const CANCEL_INTENT: &str = "AMAZON.CancelIntent";
pub const STOP_INTENT: &str = "AMAZON.StopIntent";

/// Pure, infallible test over a request envelope
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Predicate {
    Always,
    RequestType(RequestKind),
    /// Intent request with exactly this intent name
    IntentName(&'static str),
    AnyOf(Vec<Predicate>),
}

impl Predicate {
    pub fn any_of(predicates: impl IntoIterator<Item = Predicate>) -> Self {
        Predicate::AnyOf(predicates.into_iter().collect())
    }

    pub fn matches(&self, envelope: &RequestEnvelope) -> bool {
        match self {
            Predicate::Always => true,
            Predicate::RequestType(kind) => envelope.kind() == Some(*kind),
            Predicate::IntentName(name) => envelope.intent_name() == Some(*name),
            Predicate::AnyOf(predicates) => predicates.iter().any(|p| p.matches(envelope)),
        }
    }

    /// Whether every request matched by `later` is already matched by `self`
    ///
    /// Conservative: `false` when unsure.
    pub fn shadows(&self, later: &Predicate) -> bool {
        match (self, later) {
            (Predicate::Always, _) => true,
            (Predicate::AnyOf(predicates), _) => predicates.iter().any(|p| p.shadows(later)),
            (_, Predicate::AnyOf(laters)) => {
                !laters.is_empty() && laters.iter().all(|l| self.shadows(l))
            }
            (Predicate::RequestType(RequestKind::Intent), Predicate::IntentName(_)) => true,
            (Predicate::RequestType(a), Predicate::RequestType(b)) => a == b,
            (Predicate::IntentName(a), Predicate::IntentName(b)) => a == b,
            _ => false,
        }
    }
}
