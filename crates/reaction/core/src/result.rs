//! Execution results.

use std::time::Duration;

use crate::quantity::Quantity;

/// Terminal state an execution ended in.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::AsRefStr,
)]
#[strum(serialize_all = "snake_case")]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum ReactionOutcome {
    Succeeded,
    /// Rejected before any inventory or randomness access.
    FailedPrecondition,
    /// Rejected by the inventory check; nothing consumed.
    FailedInputs,
    /// Inputs consumed, roll missed, nothing produced.
    FailedRoll,
}

/// What an execution did.
///
/// Unsuccessful results are ordinary values, not errors.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ReactionResult {
    pub succeeded: bool,
    pub outcome: ReactionOutcome,
    pub duration: Duration,
    pub produced: Vec<Quantity>,
    pub notes: Vec<String>,
}

impl ReactionResult {
    pub fn succeeded(duration: Duration, produced: Vec<Quantity>) -> Self {
        Self {
            succeeded: true,
            outcome: ReactionOutcome::Succeeded,
            duration,
            produced,
            notes: Vec::new(),
        }
    }

    /// No time spent; `notes` explain which preconditions failed.
    pub fn failed_precondition(notes: Vec<String>) -> Self {
        Self::failed(ReactionOutcome::FailedPrecondition, Duration::ZERO, notes)
    }

    pub fn failed_inputs(note: impl Into<String>) -> Self {
        Self::failed(ReactionOutcome::FailedInputs, Duration::ZERO, vec![note.into()])
    }

    /// Time is still spent on a missed roll.
    pub fn failed_roll(duration: Duration) -> Self {
        Self::failed(ReactionOutcome::FailedRoll, duration, Vec::new())
    }

    fn failed(outcome: ReactionOutcome, duration: Duration, notes: Vec<String>) -> Self {
        Self {
            succeeded: false,
            outcome,
            duration,
            produced: Vec::new(),
            notes,
        }
    }
}
