//! Property-based tests for the Likert conversion
//!
//! Tests invariants:
//! - Range predicate agrees with the closed interval [0, 1]
//! - Score is always within 1..=5
//! - Mapping is monotonic non-decreasing
//! - Out-of-range input is always rejected

use proptest::prelude::*;

use crate::core::personality::{calculate_likert_score, likert_descriptor, trait_is_in_range};

// ============================================================================
// Strategies for generating test inputs
// ============================================================================

/// Generate normalized values, biased towards the bucket edges
fn arb_normalized() -> impl Strategy<Value = f64> {
    prop_oneof![
        0.0f64..=1.0,
        Just(0.0),
        Just(0.2),
        Just(0.4),
        Just(0.6),
        Just(0.8),
        Just(1.0),
    ]
}

/// Generate values outside the normalized range
fn arb_out_of_range() -> impl Strategy<Value = f64> {
    prop_oneof![
        -1.0e6f64..-1.0e-9,
        (1.0f64 + 1.0e-9)..1.0e6,
        Just(f64::NAN),
        Just(f64::INFINITY),
        Just(f64::NEG_INFINITY),
    ]
}

// ============================================================================
// Property Tests
// ============================================================================

proptest! {
    /// Property: Every normalized value is in range
    #[test]
    fn prop_normalized_values_in_range(value in arb_normalized()) {
        prop_assert!(trait_is_in_range(value));
    }

    /// Property: Score is bounded to the 5-point scale
    #[test]
    fn prop_score_is_bounded(value in arb_normalized()) {
        let score = calculate_likert_score(value).unwrap();
        prop_assert!((1..=5).contains(&score), "score {} for {}", score, value);
    }

    /// Property: Higher input never yields a lower score
    #[test]
    fn prop_score_is_monotonic(a in arb_normalized(), b in arb_normalized()) {
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        let lo_score = calculate_likert_score(lo).unwrap();
        let hi_score = calculate_likert_score(hi).unwrap();
        prop_assert!(
            lo_score <= hi_score,
            "{} -> {} but {} -> {}",
            lo, lo_score, hi, hi_score
        );
    }

    /// Property: Out-of-range input fails the predicate and the conversion
    #[test]
    fn prop_out_of_range_rejected(value in arb_out_of_range()) {
        prop_assert!(!trait_is_in_range(value));
        let err = calculate_likert_score(value).unwrap_err();
        prop_assert!(err.is_range_violation());
    }

    /// Property: Every score has a descriptor
    #[test]
    fn prop_descriptor_defined(value in arb_normalized()) {
        let score = calculate_likert_score(value).unwrap();
        prop_assert!(!likert_descriptor(score).is_empty());
    }
}
