//! Personality Module
//!
//! Five Factor Model personality profiles:
//! - Bounded normalized trait values in `[0.0, 1.0]`
//! - Conversion onto the 5-point Likert scale
//! - Sentence, structured record and compact text renderings
//!
//! ## Layout
//!
//! - `types`: trait enumeration, value bounds, `TraitValues` record
//! - `errors`: `PersonalityError` with trait-specific range messages
//! - `likert`: range predicate, Likert bucketing, adverb lookup
//! - `profile`: `PersonalityProfile` and `PersonalityRecord`
//!
//! ## Usage
//!
//! ```rust
//! use ffm_personality::core::personality::{FfmTrait, PersonalityProfile};
//!
//! let mut profile = PersonalityProfile::new(0.8, 0.4, 0.6, 0.9, 0.2)?;
//! assert_eq!(profile.likert(FfmTrait::Openness), 5);
//!
//! // A rejected assignment leaves the stored value alone.
//! assert!(profile.set_neuroticism(1.5).is_err());
//! assert_eq!(profile.neuroticism(), 0.2);
//! # Ok::<(), ffm_personality::core::personality::PersonalityError>(())
//! ```

/// Error type for profile operations.
pub mod errors;

/// Trait enumeration, value bounds and the five-field record.
pub mod types;

/// Likert conversion and descriptor lookup.
pub mod likert;

/// The profile value type.
pub mod profile;

pub use errors::{ErrorKind, PersonalityError, PersonalityResult};
pub use likert::{
    calculate_likert_score, likert_descriptor, trait_is_in_range, LIKERT_EPSILON, LIKERT_MAX,
    LIKERT_MIN,
};
pub use profile::{PersonalityProfile, PersonalityRecord};
pub use types::{FfmTrait, TraitValues, TRAIT_VALUE_AVG, TRAIT_VALUE_MAX, TRAIT_VALUE_MIN};
