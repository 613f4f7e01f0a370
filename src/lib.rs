//! FFM Personality - Five Factor Model personality profiles
//!
//! Core library providing validated trait values, Likert conversion and
//! sentence, record and compact text renderings of a profile.

pub mod config;
pub mod core;

#[cfg(test)]
mod tests;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const NAME: &str = env!("CARGO_PKG_NAME");

pub use crate::core::personality::{FfmTrait, PersonalityError, PersonalityProfile, PersonalityRecord};
