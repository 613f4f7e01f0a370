//! Five Factor Model Personality Profile
//!
//! [`PersonalityProfile`] holds one normalized value per trait and keeps every
//! value inside `[0.0, 1.0]`: construction and each setter validate before
//! anything is stored.
//!
//! ## Renderings
//!
//! - [`describe`](PersonalityProfile::describe): English sentence built from
//!   the Likert adverbs
//! - [`to_record`](PersonalityProfile::to_record): normalized and Likert
//!   sub-records
//! - [`to_text`](PersonalityProfile::to_text): compact `FFM[...]` string,
//!   also available through `Display` and parsed back by `FromStr`

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::errors::{PersonalityError, PersonalityResult};
use super::likert::{likert_bucket, likert_descriptor, trait_is_in_range};
use super::types::{FfmTrait, TraitValues, TRAIT_VALUE_AVG};

// ============================================================================
// PersonalityRecord
// ============================================================================

/// Structured export of a profile.
///
/// Serializes as `{"normalized": {...}, "likert": {...}}` with traits in
/// canonical order inside each sub-record.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PersonalityRecord {
    /// Stored trait values.
    pub normalized: TraitValues<f64>,
    /// Likert score for each stored value.
    pub likert: TraitValues<u8>,
}

// ============================================================================
// PersonalityProfile
// ============================================================================

/// Five bounded trait values.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "TraitValues<f64>", into = "TraitValues<f64>")]
pub struct PersonalityProfile {
    values: TraitValues<f64>,
}

impl PersonalityProfile {
    /// Create a profile from five normalized values.
    ///
    /// Rejects the whole profile if any value is outside `[0.0, 1.0]`.
    /// Values are stored exactly as given.
    pub fn new(
        openness: f64,
        conscientiousness: f64,
        extraversion: f64,
        agreeableness: f64,
        neuroticism: f64,
    ) -> PersonalityResult<Self> {
        Self::from_values(TraitValues::new(
            openness,
            conscientiousness,
            extraversion,
            agreeableness,
            neuroticism,
        ))
    }

    /// Create a profile from a [`TraitValues`] record.
    pub fn from_values(values: TraitValues<f64>) -> PersonalityResult<Self> {
        if let Some((_, &bad)) = values.iter().find(|(_, v)| !trait_is_in_range(**v)) {
            return Err(PersonalityError::value_out_of_range(bad));
        }
        Ok(Self { values })
    }

    /// Profile with every trait at [`TRAIT_VALUE_AVG`].
    pub fn average() -> Self {
        Self {
            values: TraitValues::splat(TRAIT_VALUE_AVG),
        }
    }

    // ------------------------------------------------------------------------
    // Accessors
    // ------------------------------------------------------------------------

    /// Stored openness value.
    pub fn openness(&self) -> f64 {
        self.values.openness
    }

    /// Stored conscientiousness value.
    pub fn conscientiousness(&self) -> f64 {
        self.values.conscientiousness
    }

    /// Stored extraversion value.
    pub fn extraversion(&self) -> f64 {
        self.values.extraversion
    }

    /// Stored agreeableness value.
    pub fn agreeableness(&self) -> f64 {
        self.values.agreeableness
    }

    /// Stored neuroticism value.
    pub fn neuroticism(&self) -> f64 {
        self.values.neuroticism
    }

    /// Replace the openness value; out-of-range input returns
    /// [`PersonalityError::TraitOutOfRange`] naming Openness.
    pub fn set_openness(&mut self, value: f64) -> PersonalityResult<()> {
        self.set(FfmTrait::Openness, value)
    }

    /// Replace the conscientiousness value; out-of-range input returns
    /// [`PersonalityError::TraitOutOfRange`] naming Conscientiousness.
    pub fn set_conscientiousness(&mut self, value: f64) -> PersonalityResult<()> {
        self.set(FfmTrait::Conscientiousness, value)
    }

    /// Replace the extraversion value; out-of-range input returns
    /// [`PersonalityError::TraitOutOfRange`] naming Extraversion.
    pub fn set_extraversion(&mut self, value: f64) -> PersonalityResult<()> {
        self.set(FfmTrait::Extraversion, value)
    }

    /// Replace the agreeableness value; out-of-range input returns
    /// [`PersonalityError::TraitOutOfRange`] naming Agreeableness.
    pub fn set_agreeableness(&mut self, value: f64) -> PersonalityResult<()> {
        self.set(FfmTrait::Agreeableness, value)
    }

    /// Replace the neuroticism value; out-of-range input returns
    /// [`PersonalityError::TraitOutOfRange`] naming Neuroticism.
    pub fn set_neuroticism(&mut self, value: f64) -> PersonalityResult<()> {
        self.set(FfmTrait::Neuroticism, value)
    }

    /// Stored value for `which`.
    pub fn get(&self, which: FfmTrait) -> f64 {
        *self.values.get(which)
    }

    /// Replace the value for `which`.
    ///
    /// On failure the stored value is left untouched and the error names the
    /// trait.
    pub fn set(&mut self, which: FfmTrait, value: f64) -> PersonalityResult<()> {
        if !trait_is_in_range(value) {
            return Err(PersonalityError::trait_out_of_range(which, value));
        }
        *self.values.get_mut(which) = value;
        log::trace!("{} set to {}", which, value);
        Ok(())
    }

    /// All stored values.
    pub fn values(&self) -> TraitValues<f64> {
        self.values
    }

    // ------------------------------------------------------------------------
    // Likert view
    // ------------------------------------------------------------------------

    /// Likert score for `which`.
    pub fn likert(&self, which: FfmTrait) -> u8 {
        likert_bucket(self.get(which))
    }

    /// Likert score for every trait.
    pub fn likert_scores(&self) -> TraitValues<u8> {
        self.values.map(likert_bucket)
    }

    // ------------------------------------------------------------------------
    // Renderings
    // ------------------------------------------------------------------------

    /// English description built from each trait's Likert adverb.
    pub fn describe(&self) -> String {
        let clauses: Vec<String> = FfmTrait::ALL
            .iter()
            .map(|&t| format!("{} {}", likert_descriptor(self.likert(t)), t.adjective()))
            .collect();

        format!(
            "According to the Five Factor Model this personality is: {}, {}, {}, {}, and {}.",
            clauses[0], clauses[1], clauses[2], clauses[3], clauses[4]
        )
    }

    /// Normalized values alongside their Likert scores.
    pub fn to_record(&self) -> PersonalityRecord {
        PersonalityRecord {
            normalized: self.values,
            likert: self.likert_scores(),
        }
    }

    /// Compact single-line form, e.g.
    /// `FFM[Normalized:{O:0.2, C:0.4, E:0.6, A:0.8, N:1}, Likert:{O:2, C:3, E:4, A:5, N:5}]`.
    pub fn to_text(&self) -> String {
        let normalized = join_block(&self.values.map(format_normalized));
        let likert = join_block(&self.likert_scores().map(|s| s.to_string()));
        format!("FFM[Normalized:{{{}}}, Likert:{{{}}}]", normalized, likert)
    }
}

impl Default for PersonalityProfile {
    fn default() -> Self {
        Self::average()
    }
}

impl fmt::Display for PersonalityProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_text())
    }
}

impl TryFrom<TraitValues<f64>> for PersonalityProfile {
    type Error = PersonalityError;

    fn try_from(values: TraitValues<f64>) -> Result<Self, Self::Error> {
        Self::from_values(values)
    }
}

impl From<PersonalityProfile> for TraitValues<f64> {
    fn from(profile: PersonalityProfile) -> Self {
        profile.values
    }
}

impl FromStr for PersonalityProfile {
    type Err = PersonalityError;

    /// Parse the compact form produced by [`PersonalityProfile::to_text`].
    ///
    /// The Likert block must agree with the scores derived from the
    /// normalized block.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let body = s
            .trim()
            .strip_prefix("FFM[")
            .and_then(|rest| rest.strip_suffix(']'))
            .ok_or_else(|| PersonalityError::parse(s, "expected FFM[...] wrapper"))?;

        let (normalized_block, rest) = body
            .strip_prefix("Normalized:{")
            .and_then(|rest| rest.split_once('}'))
            .ok_or_else(|| PersonalityError::parse(s, "missing Normalized block"))?;

        let likert_block = rest
            .strip_prefix(", Likert:{")
            .and_then(|rest| rest.strip_suffix('}'))
            .ok_or_else(|| PersonalityError::parse(s, "missing Likert block"))?;

        let normalized = parse_block(s, normalized_block, |raw| raw.parse::<f64>().ok())?;
        let likert = parse_block(s, likert_block, |raw| raw.parse::<u8>().ok())?;

        let profile = Self::from_values(normalized)?;
        if profile.likert_scores() != likert {
            return Err(PersonalityError::parse(
                s,
                "Likert block does not match normalized values",
            ));
        }
        Ok(profile)
    }
}

// ============================================================================
// Helpers
// ============================================================================

/// Shortest round-trip decimal; `-0.0` renders as `0`.
fn format_normalized(value: f64) -> String {
    if value == 0.0 {
        "0".to_string()
    } else {
        value.to_string()
    }
}

fn join_block(rendered: &TraitValues<String>) -> String {
    rendered
        .iter()
        .map(|(t, v)| format!("{}:{}", t.abbreviation(), v))
        .collect::<Vec<_>>()
        .join(", ")
}

fn parse_block<T>(
    input: &str,
    block: &str,
    parse: impl Fn(&str) -> Option<T>,
) -> PersonalityResult<TraitValues<T>> {
    let entries: Vec<&str> = block.split(',').map(str::trim).collect();
    let found = entries.len();
    let [o, c, e, a, n]: [&str; 5] = entries.try_into().map_err(|_| {
        PersonalityError::parse(
            input,
            format!("expected {} entries, found {}", FfmTrait::ALL.len(), found),
        )
    })?;

    let field = |which: FfmTrait, entry: &str| -> PersonalityResult<T> {
        let raw = entry
            .split_once(':')
            .filter(|(key, _)| key.trim().chars().eq(std::iter::once(which.abbreviation())))
            .map(|(_, raw)| raw.trim())
            .ok_or_else(|| {
                PersonalityError::parse(input, format!("expected {}:<value>, found '{}'", which.abbreviation(), entry))
            })?;
        parse(raw).ok_or_else(|| PersonalityError::parse(input, format!("invalid {} value '{}'", which, raw)))
    };

    Ok(TraitValues::new(
        field(FfmTrait::Openness, o)?,
        field(FfmTrait::Conscientiousness, c)?,
        field(FfmTrait::Extraversion, e)?,
        field(FfmTrait::Agreeableness, a)?,
        field(FfmTrait::Neuroticism, n)?,
    ))
}

// ============================================================================
// Tests
// ============================================================================
