//! Plant names — validation and suggestions.
//!
//! A name is whatever the user typed with surrounding whitespace removed,
//! between 1 and [`MAX_NAME_CHARS`] characters long. Length is counted in
//! Unicode scalar values so that "Ñandú" counts as five.

use std::fmt;

use rand::Rng;
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};

use crate::error::{NameRejection, PlantError, Result};

/// Maximum name length in characters, after trimming.
pub const MAX_NAME_CHARS: usize = 20;

/// The name every plant starts with.
pub const DEFAULT_NAME: &str = "LYLY";

const SUGGESTED_NAMES: [&str; 12] = [
    "Lily", "Rosie", "Ivy", "Sage", "Fern", "Daisy", "Basil", "Mint", "Willow", "Poppy", "Clover",
    "Sunny",
];

/// A validated plant name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct PlantName(String);

impl PlantName {
    /// Trim and validate a proposed name.
    ///
    /// # Errors
    /// Returns [`PlantError::InvalidName`] if the trimmed input is empty or
    /// longer than [`MAX_NAME_CHARS`].
    pub fn parse(input: &str) -> Result<Self> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Err(PlantError::InvalidName {
                reason: NameRejection::Empty,
            });
        }
        let len = trimmed.chars().count();
        if len > MAX_NAME_CHARS {
            return Err(PlantError::InvalidName {
                reason: NameRejection::TooLong { len },
            });
        }
        Ok(Self(trimmed.to_string()))
    }

    /// The name as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for PlantName {
    fn default() -> Self {
        Self(DEFAULT_NAME.to_string())
    }
}

impl fmt::Display for PlantName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for PlantName {
    type Error = PlantError;

    fn try_from(value: String) -> Result<Self> {
        Self::parse(&value)
    }
}

impl From<PlantName> for String {
    fn from(name: PlantName) -> Self {
        name.0
    }
}

/// The fixed list of names offered by the naming form.
#[must_use]
pub fn suggested_names() -> &'static [&'static str] {
    &SUGGESTED_NAMES
}

/// Pick one suggested name uniformly at random.
pub fn suggest_name<R: Rng + ?Sized>(rng: &mut R) -> &'static str {
    SUGGESTED_NAMES.choose(rng).copied().unwrap_or(DEFAULT_NAME)
}
