//! Gate checks that must hold before a reaction may be attempted.
//!
//! Preconditions form an open set: the engine only talks to the
//! [`Precondition`] trait, so new kinds plug in without touching it.
//! Evaluation is pure: no side effects and no randomness.

mod knowledge;
mod tool;

pub use knowledge::RequiresKnowledge;
pub use tool::RequiresTool;

use crate::actor::ReactionActor;

/// Outcome of checking one precondition against an actor.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PreconditionResult {
    pub satisfied: bool,
    /// Machine-readable reason, empty when satisfied.
    pub reason_code: String,
    /// Human-readable explanation, empty when satisfied.
    pub message: String,
}

impl PreconditionResult {
    pub fn satisfied() -> Self {
        Self {
            satisfied: true,
            reason_code: String::new(),
            message: String::new(),
        }
    }

    pub fn unsatisfied(reason_code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            satisfied: false,
            reason_code: reason_code.into(),
            message: message.into(),
        }
    }
}

/// A binary gate evaluated against an actor snapshot.
pub trait Precondition: core::fmt::Debug + Send + Sync {
    /// Short name of this precondition kind (used in logging).
    fn kind(&self) -> &'static str;

    fn evaluate(&self, actor: &ReactionActor) -> PreconditionResult;
}
