//! Likert Conversion
//!
//! Maps normalized trait values onto the discrete 5-point Likert scale and
//! looks up the adverb used for each score.
//!
//! ## Bucketing
//!
//! `ceil((value + LIKERT_EPSILON) * 5)` clamped into `[1, 5]`. The epsilon
//! keeps exact multiples of 0.2 from landing on the wrong side of a bucket
//! edge through binary rounding, so 0.4 maps to 3 and 1.0 maps to 5.

use super::errors::{PersonalityError, PersonalityResult};
use super::types::{TRAIT_VALUE_MAX, TRAIT_VALUE_MIN};

// ============================================================================
// Constants
// ============================================================================

/// Nudge applied before scaling so bucket edges are stable.
pub const LIKERT_EPSILON: f64 = 1e-10;

/// Number of Likert points; also the scale factor from the normalized range.
pub const LIKERT_POINTS: u8 = 5;

/// Lowest Likert score.
pub const LIKERT_MIN: u8 = 1;

/// Highest Likert score.
pub const LIKERT_MAX: u8 = 5;

/// Adverbs indexed by `score - 1`.
const LIKERT_DESCRIPTORS: [&str; 5] = ["not", "slightly", "somewhat", "moderately", "strongly"];

// ============================================================================
// Functions
// ============================================================================

/// True iff `value` lies in `[TRAIT_VALUE_MIN, TRAIT_VALUE_MAX]`.
///
/// NaN is never in range.
pub fn trait_is_in_range(value: f64) -> bool {
    (TRAIT_VALUE_MIN..=TRAIT_VALUE_MAX).contains(&value)
}

/// Convert a normalized trait value into a Likert score in `1..=5`.
///
/// Fails with [`PersonalityError::ValueOutOfRange`] when `value` is outside
/// the normalized range.
pub fn calculate_likert_score(value: f64) -> PersonalityResult<u8> {
    if !trait_is_in_range(value) {
        return Err(PersonalityError::value_out_of_range(value));
    }
    Ok(likert_bucket(value))
}

/// Bucketing without the range check, for values already known to be valid.
pub(crate) fn likert_bucket(value: f64) -> u8 {
    let scaled = ((value + LIKERT_EPSILON) * f64::from(LIKERT_POINTS)).ceil();
    scaled.clamp(f64::from(LIKERT_MIN), f64::from(LIKERT_MAX)) as u8
}

/// Adverb for a Likert score: 1 "not" through 5 "strongly".
///
/// Scores outside `1..=5` are clamped first.
pub fn likert_descriptor(score: u8) -> &'static str {
    let index = score.clamp(LIKERT_MIN, LIKERT_MAX) - LIKERT_MIN;
    LIKERT_DESCRIPTORS[usize::from(index)]
}

// ============================================================================
// Tests
// ============================================================================
