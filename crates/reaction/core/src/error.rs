//! Common error infrastructure for reaction-core.
//!
//! Domain errors (identifiers, quantities, definitions) live next to the types
//! they guard. This module supplies the shared severity taxonomy and the
//! [`CoreError`] trait every error enum in the crate implements.
//!
//! Only programming or data errors are represented as `Err`. Unmet
//! preconditions, missing inputs and failed rolls are modeled outcomes and
//! never flow through these types.

use crate::ids::{IdentifierKind, ItemTag};

/// Severity level of an error, used for categorization and recovery strategies.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    /// Invalid input that should be rejected without retry.
    ///
    /// Examples: empty identifier, success chance outside `[0, 1]`
    Validation,

    /// The call cannot continue and any partial side effects stand.
    Fatal,
}

impl ErrorSeverity {
    /// Returns a human-readable description of this severity level.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Validation => "validation",
            Self::Fatal => "fatal",
        }
    }

    /// Returns true if the call cannot continue.
    pub const fn is_fatal(&self) -> bool {
        matches!(self, Self::Fatal)
    }
}

/// Common trait for all reaction-core errors.
///
/// # Implementation Guidelines
///
/// - Use `#[derive(thiserror::Error)]` for Display/Error impl
/// - Classify severity based on recoverability, not impact
/// - Error codes are stable, upper snake case strings
pub trait CoreError: core::fmt::Display + core::fmt::Debug {
    /// Returns the severity level of this error.
    fn severity(&self) -> ErrorSeverity;

    /// Returns a static string identifier for this error variant.
    fn error_code(&self) -> &'static str {
        core::any::type_name::<Self>()
    }
}

/// Identifier construction failures.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum IdentifierError {
    /// The raw value was empty after trimming.
    #[error("{kind} must not be empty")]
    Empty { kind: IdentifierKind },
}

impl CoreError for IdentifierError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::Empty { .. } => "IDENTIFIER_EMPTY",
        }
    }
}

/// Violations of the `amount > 0` quantity invariant.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum QuantityError {
    #[error("quantity of '{item}' must be positive, got {amount}")]
    NonPositiveAmount { item: ItemTag, amount: i64 },
}

impl CoreError for QuantityError {
    fn severity(&self) -> ErrorSeverity {
        // A computed output hitting this invariant means a recipe/modifier
        // combination nobody intended to be reachable.
        ErrorSeverity::Fatal
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::NonPositiveAmount { .. } => "QUANTITY_NON_POSITIVE",
        }
    }
}

/// Rejected reaction definitions and modifier effects.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum DefinitionError {
    #[error("base success chance must lie in [0, 1], got {0}")]
    SuccessChanceOutOfRange(f64),

    #[error("success chance delta must be finite, got {0}")]
    NonFiniteDelta(f64),

    #[error("duration multiplier must be finite and non-negative, got {0}")]
    InvalidDurationMultiplier(f64),

    #[error("output multiplier for '{item}' must be finite and non-negative, got {factor}")]
    InvalidOutputMultiplier { item: ItemTag, factor: f64 },

    #[error("invalid quality curve: {reason}")]
    InvalidQualityCurve { reason: &'static str },
}

impl CoreError for DefinitionError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        use DefinitionError::*;
        match self {
            SuccessChanceOutOfRange(_) => "DEFINITION_SUCCESS_CHANCE_OUT_OF_RANGE",
            NonFiniteDelta(_) => "DEFINITION_NON_FINITE_DELTA",
            InvalidDurationMultiplier(_) => "DEFINITION_INVALID_DURATION_MULTIPLIER",
            InvalidOutputMultiplier { .. } => "DEFINITION_INVALID_OUTPUT_MULTIPLIER",
            InvalidQualityCurve { .. } => "DEFINITION_INVALID_QUALITY_CURVE",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quantity_errors_are_fatal() {
        let err = QuantityError::NonPositiveAmount {
            item: ItemTag::parse("plank").unwrap(),
            amount: 0,
        };
        assert_eq!(err.severity(), ErrorSeverity::Fatal);
        assert!(err.severity().is_fatal());
        assert_eq!(err.error_code(), "QUANTITY_NON_POSITIVE");
        assert_eq!(err.to_string(), "quantity of 'plank' must be positive, got 0");
    }

    #[test]
    fn identifier_errors_name_their_kind() {
        let err = IdentifierError::Empty {
            kind: IdentifierKind::ToolTag,
        };
        assert_eq!(err.to_string(), "tool tag must not be empty");
        assert_eq!(err.severity().as_str(), "validation");
    }
}
