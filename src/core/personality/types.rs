//! Core Data Models for Five Factor Model Profiles
//!
//! Defines the trait enumeration, the shared value bounds, and the generic
//! five-field record used by both the normalized and Likert views.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::errors::PersonalityError;

// ============================================================================
// Constants
// ============================================================================

/// Lowest normalized trait value.
pub const TRAIT_VALUE_MIN: f64 = 0.0;

/// Highest normalized trait value.
pub const TRAIT_VALUE_MAX: f64 = 1.0;

/// Value used by the average preset.
pub const TRAIT_VALUE_AVG: f64 = 0.5;

// ============================================================================
// FfmTrait
// ============================================================================

/// One of the five Five Factor Model traits.
///
/// Variants are declared in canonical order, which is the order used by every
/// rendering of a profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FfmTrait {
    Openness,
    Conscientiousness,
    Extraversion,
    Agreeableness,
    Neuroticism,
}

impl FfmTrait {
    /// All traits in canonical order.
    pub const ALL: [FfmTrait; 5] = [
        FfmTrait::Openness,
        FfmTrait::Conscientiousness,
        FfmTrait::Extraversion,
        FfmTrait::Agreeableness,
        FfmTrait::Neuroticism,
    ];

    /// Field name, e.g. `openness`.
    pub fn name(self) -> &'static str {
        match self {
            Self::Openness => "openness",
            Self::Conscientiousness => "conscientiousness",
            Self::Extraversion => "extraversion",
            Self::Agreeableness => "agreeableness",
            Self::Neuroticism => "neuroticism",
        }
    }

    /// Capitalized name used in error messages, e.g. `Openness`.
    pub fn label(self) -> &'static str {
        match self {
            Self::Openness => "Openness",
            Self::Conscientiousness => "Conscientiousness",
            Self::Extraversion => "Extraversion",
            Self::Agreeableness => "Agreeableness",
            Self::Neuroticism => "Neuroticism",
        }
    }

    /// Adjective used in the natural-language description, e.g. `open`.
    pub fn adjective(self) -> &'static str {
        match self {
            Self::Openness => "open",
            Self::Conscientiousness => "conscientious",
            Self::Extraversion => "extraverted",
            Self::Agreeableness => "agreeable",
            Self::Neuroticism => "neurotic",
        }
    }

    /// Single-letter key used in the compact text form.
    pub fn abbreviation(self) -> char {
        match self {
            Self::Openness => 'O',
            Self::Conscientiousness => 'C',
            Self::Extraversion => 'E',
            Self::Agreeableness => 'A',
            Self::Neuroticism => 'N',
        }
    }
}

impl fmt::Display for FfmTrait {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for FfmTrait {
    type Err = PersonalityError;

    /// Accepts the full name or the single-letter abbreviation, ignoring case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim();
        let mut chars = needle.chars();
        let letter = match (chars.next(), chars.next()) {
            (Some(c), None) => Some(c.to_ascii_uppercase()),
            _ => None,
        };
        FfmTrait::ALL
            .into_iter()
            .find(|t| t.name().eq_ignore_ascii_case(needle) || letter == Some(t.abbreviation()))
            .ok_or_else(|| PersonalityError::parse(s, "unknown personality trait"))
    }
}

// ============================================================================
// TraitValues
// ============================================================================

/// One value per trait, keyed by full trait name.
///
/// Field order matches [`FfmTrait::ALL`], so serialized output lists
/// openness first and neuroticism last.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct TraitValues<T> {
    pub openness: T,
    pub conscientiousness: T,
    pub extraversion: T,
    pub agreeableness: T,
    pub neuroticism: T,
}

impl<T> TraitValues<T> {
    /// Build from the five values in canonical order.
    pub fn new(openness: T, conscientiousness: T, extraversion: T, agreeableness: T, neuroticism: T) -> Self {
        Self {
            openness,
            conscientiousness,
            extraversion,
            agreeableness,
            neuroticism,
        }
    }

    /// Build by evaluating `f` for each trait in canonical order.
    pub fn from_fn(mut f: impl FnMut(FfmTrait) -> T) -> Self {
        Self {
            openness: f(FfmTrait::Openness),
            conscientiousness: f(FfmTrait::Conscientiousness),
            extraversion: f(FfmTrait::Extraversion),
            agreeableness: f(FfmTrait::Agreeableness),
            neuroticism: f(FfmTrait::Neuroticism),
        }
    }

    /// Borrow the value for `which`.
    pub fn get(&self, which: FfmTrait) -> &T {
        match which {
            FfmTrait::Openness => &self.openness,
            FfmTrait::Conscientiousness => &self.conscientiousness,
            FfmTrait::Extraversion => &self.extraversion,
            FfmTrait::Agreeableness => &self.agreeableness,
            FfmTrait::Neuroticism => &self.neuroticism,
        }
    }

    /// Mutably borrow the value for `which`.
    pub fn get_mut(&mut self, which: FfmTrait) -> &mut T {
        match which {
            FfmTrait::Openness => &mut self.openness,
            FfmTrait::Conscientiousness => &mut self.conscientiousness,
            FfmTrait::Extraversion => &mut self.extraversion,
            FfmTrait::Agreeableness => &mut self.agreeableness,
            FfmTrait::Neuroticism => &mut self.neuroticism,
        }
    }

    /// Apply `f` to every value, preserving trait association.
    pub fn map<U>(self, mut f: impl FnMut(T) -> U) -> TraitValues<U> {
        TraitValues {
            openness: f(self.openness),
            conscientiousness: f(self.conscientiousness),
            extraversion: f(self.extraversion),
            agreeableness: f(self.agreeableness),
            neuroticism: f(self.neuroticism),
        }
    }

    /// Iterate `(trait, value)` pairs in canonical order.
    pub fn iter(&self) -> impl Iterator<Item = (FfmTrait, &T)> + '_ {
        FfmTrait::ALL.into_iter().map(move |t| (t, self.get(t)))
    }
}

impl<T: Copy> TraitValues<T> {
    /// Same value for every trait.
    pub fn splat(value: T) -> Self {
        Self::new(value, value, value, value, value)
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trait_canonical_order() {
        let names: Vec<&str> = FfmTrait::ALL.iter().map(|t| t.name()).collect();
        assert_eq!(
            names,
            vec!["openness", "conscientiousness", "extraversion", "agreeableness", "neuroticism"]
        );
        let letters: String = FfmTrait::ALL.iter().map(|t| t.abbreviation()).collect();
        assert_eq!(letters, "OCEAN");
    }

    #[test]
    fn test_adjectives_differ_from_names() {
        assert_eq!(FfmTrait::Openness.adjective(), "open");
        assert_eq!(FfmTrait::Conscientiousness.adjective(), "conscientious");
        assert_eq!(FfmTrait::Extraversion.adjective(), "extraverted");
        assert_eq!(FfmTrait::Agreeableness.adjective(), "agreeable");
        assert_eq!(FfmTrait::Neuroticism.adjective(), "neurotic");
    }

    #[test]
    fn test_trait_from_str() {
        assert_eq!("openness".parse::<FfmTrait>().unwrap(), FfmTrait::Openness);
        assert_eq!("NEUROTICISM".parse::<FfmTrait>().unwrap(), FfmTrait::Neuroticism);
        assert_eq!("e".parse::<FfmTrait>().unwrap(), FfmTrait::Extraversion);
        assert_eq!(" A ".parse::<FfmTrait>().unwrap(), FfmTrait::Agreeableness);

        let err = "honesty".parse::<FfmTrait>().unwrap_err();
        assert!(matches!(err, PersonalityError::Parse { ref input, .. } if input == "honesty"));
        assert!(err.to_string().contains("unknown personality trait"));
    }

    #[test]
    fn test_trait_serde_lowercase() {
        let json = serde_json::to_string(&FfmTrait::Conscientiousness).unwrap();
        assert_eq!(json, "\"conscientiousness\"");
        let parsed: FfmTrait = serde_json::from_str("\"extraversion\"").unwrap();
        assert_eq!(parsed, FfmTrait::Extraversion);
    }

    #[test]
    fn test_trait_values_get_and_map() {
        let mut values = TraitValues::new(1, 2, 3, 4, 5);
        assert_eq!(*values.get(FfmTrait::Extraversion), 3);

        *values.get_mut(FfmTrait::Neuroticism) = 9;
        let doubled = values.map(|v| v * 2);
        assert_eq!(doubled, TraitValues::new(2, 4, 6, 8, 18));

        let collected: Vec<(FfmTrait, i32)> = doubled.iter().map(|(t, v)| (t, *v)).collect();
        assert_eq!(collected[0], (FfmTrait::Openness, 2));
        assert_eq!(collected[4], (FfmTrait::Neuroticism, 18));
    }

    #[test]
    fn test_trait_values_serialize_in_canonical_order() {
        let values = TraitValues::from_fn(|t| t.abbreviation());
        let json = serde_json::to_string(&values).unwrap();
        assert_eq!(
            json,
            r#"{"openness":"O","conscientiousness":"C","extraversion":"E","agreeableness":"A","neuroticism":"N"}"#
        );
    }

    #[test]
    fn test_constants() {
        assert_eq!(TRAIT_VALUE_MIN, 0.0);
        assert_eq!(TRAIT_VALUE_MAX, 1.0);
        assert_eq!(TRAIT_VALUE_AVG, 0.5);
        assert_eq!(TraitValues::splat(TRAIT_VALUE_AVG).agreeableness, 0.5);
    }
}
