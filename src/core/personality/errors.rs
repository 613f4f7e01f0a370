//! Personality Profile Error Types
//!
//! Defines the error type returned by profile construction, trait mutation,
//! Likert conversion and compact-text parsing.
//! Uses `thiserror` for the error impls and `miette` for diagnostic codes.

use miette::Diagnostic;
use thiserror::Error;

use super::types::FfmTrait;

// ============================================================================
// Error Kind
// ============================================================================

/// Coarse classification of a [`PersonalityError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// A trait value fell outside `[0.0, 1.0]`.
    RangeViolation,
    /// The compact text form could not be parsed.
    Parse,
}

// ============================================================================
// Personality Errors
// ============================================================================

/// Errors raised by [`PersonalityProfile`](super::PersonalityProfile) and the
/// Likert conversion functions.
#[derive(Error, Debug, Clone, PartialEq, Diagnostic)]
pub enum PersonalityError {
    /// A per-trait setter received an out-of-range value.
    #[error("{} value must be between 0 and 1.0 inclusive.", .which.label())]
    #[diagnostic(
        code(ffm::range_violation),
        help("trait values are normalized; pass a number in the closed interval [0, 1]")
    )]
    TraitOutOfRange {
        /// The trait whose assignment was rejected.
        which: FfmTrait,
        /// The rejected value.
        value: f64,
    },

    /// Construction or Likert conversion received an out-of-range value.
    #[error("Personality trait values must be between 0 and 1.0 inclusive.")]
    #[diagnostic(
        code(ffm::range_violation),
        help("trait values are normalized; pass a number in the closed interval [0, 1]")
    )]
    ValueOutOfRange {
        /// The rejected value.
        value: f64,
    },

    /// The compact `FFM[...]` text form was malformed.
    #[error("invalid profile text '{input}': {message}")]
    #[diagnostic(
        code(ffm::parse),
        help("expected the compact form produced by PersonalityProfile::to_text")
    )]
    Parse {
        /// The text that failed to parse.
        input: String,
        /// Description of the failure.
        message: String,
    },
}

impl PersonalityError {
    /// Create a new TraitOutOfRange error.
    pub fn trait_out_of_range(which: FfmTrait, value: f64) -> Self {
        Self::TraitOutOfRange { which, value }
    }

    /// Create a new ValueOutOfRange error.
    pub fn value_out_of_range(value: f64) -> Self {
        Self::ValueOutOfRange { value }
    }

    /// Create a new Parse error.
    pub fn parse(input: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Parse {
            input: input.into(),
            message: message.into(),
        }
    }

    /// Classify this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::TraitOutOfRange { .. } | Self::ValueOutOfRange { .. } => ErrorKind::RangeViolation,
            Self::Parse { .. } => ErrorKind::Parse,
        }
    }

    /// Whether this is a range violation.
    pub fn is_range_violation(&self) -> bool {
        self.kind() == ErrorKind::RangeViolation
    }

    /// The trait named by a setter failure, if any.
    pub fn trait_name(&self) -> Option<FfmTrait> {
        match self {
            Self::TraitOutOfRange { which, .. } => Some(*which),
            _ => None,
        }
    }
}

/// Result alias for personality operations.
pub type PersonalityResult<T> = Result<T, PersonalityError>;

// ============================================================================
// Tests
// ============================================================================
