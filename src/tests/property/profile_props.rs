//! Property-based tests for the PersonalityProfile value type
//!
//! Tests invariants:
//! - Valid values round-trip exactly through getters
//! - Any out-of-range value rejects construction
//! - Rejected setters leave the stored value unchanged
//! - Compact text parses back to an equal profile

use proptest::prelude::*;

use crate::core::personality::{FfmTrait, PersonalityProfile, TraitValues};

// ============================================================================
// Strategies for generating test inputs
// ============================================================================

fn arb_values() -> impl Strategy<Value = TraitValues<f64>> {
    (
        0.0f64..=1.0,
        0.0f64..=1.0,
        0.0f64..=1.0,
        0.0f64..=1.0,
        0.0f64..=1.0,
    )
        .prop_map(|(o, c, e, a, n)| TraitValues::new(o, c, e, a, n))
}

fn arb_trait() -> impl Strategy<Value = FfmTrait> {
    prop::sample::select(FfmTrait::ALL.to_vec())
}

fn arb_invalid() -> impl Strategy<Value = f64> {
    prop_oneof![
        -100.0f64..-1.0e-9,
        (1.0f64 + 1.0e-9)..100.0,
        Just(f64::NAN),
    ]
}

// ============================================================================
// Property Tests
// ============================================================================

proptest! {
    /// Property: Getters return exactly what was passed in
    #[test]
    fn prop_values_stored_exactly(values in arb_values()) {
        let p = PersonalityProfile::new(
            values.openness,
            values.conscientiousness,
            values.extraversion,
            values.agreeableness,
            values.neuroticism,
        ).unwrap();

        prop_assert_eq!(p.openness(), values.openness);
        prop_assert_eq!(p.conscientiousness(), values.conscientiousness);
        prop_assert_eq!(p.extraversion(), values.extraversion);
        prop_assert_eq!(p.agreeableness(), values.agreeableness);
        prop_assert_eq!(p.neuroticism(), values.neuroticism);
    }

    /// Property: One bad value anywhere rejects the whole profile
    #[test]
    fn prop_single_invalid_value_rejects(
        values in arb_values(),
        which in arb_trait(),
        bad in arb_invalid()
    ) {
        let mut values = values;
        *values.get_mut(which) = bad;
        let err = PersonalityProfile::from_values(values).unwrap_err();
        prop_assert!(err.is_range_violation());
    }

    /// Property: A rejected setter does not change the profile
    #[test]
    fn prop_rejected_setter_is_noop(
        values in arb_values(),
        which in arb_trait(),
        bad in arb_invalid()
    ) {
        let mut p = PersonalityProfile::from_values(values).unwrap();
        let before = p;
        let err = p.set(which, bad).unwrap_err();

        prop_assert_eq!(err.trait_name(), Some(which));
        prop_assert_eq!(p, before);
    }

    /// Property: Record mirrors stored values and derived scores
    #[test]
    fn prop_record_matches_profile(values in arb_values()) {
        let p = PersonalityProfile::from_values(values).unwrap();
        let record = p.to_record();

        prop_assert_eq!(record.normalized, values);
        for which in FfmTrait::ALL {
            prop_assert_eq!(*record.likert.get(which), p.likert(which));
        }
    }

    /// Property: Compact text parses back to the same profile
    #[test]
    fn prop_text_parses_back(values in arb_values()) {
        let p = PersonalityProfile::from_values(values).unwrap();
        let parsed: PersonalityProfile = p.to_text().parse().unwrap();
        prop_assert_eq!(parsed, p);
    }
}
