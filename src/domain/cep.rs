//! Cep (postal code) value object.

use super::errors::ValidationError;
use crate::format::mask_cep;
use crate::validation::{digits_only, validate_cep};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// An eight-digit Brazilian postal code, displayed as `XXXXX-XXX`.
///
/// Only the digit count is checked; whether the code exists is up to the
/// address lookup service.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Cep(String);

impl Cep {
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidCep` unless the input normalizes to
    /// exactly eight digits.
    pub fn new(raw: impl AsRef<str>) -> Result<Self, ValidationError> {
        let raw = raw.as_ref();
        if !validate_cep(raw) {
            return Err(ValidationError::InvalidCep(raw.to_string()));
        }
        Ok(Self(digits_only(raw)))
    }

    pub fn digits(&self) -> &str {
        &self.0
    }

    pub fn formatted(&self) -> String {
        mask_cep(&self.0)
    }
}

impl FromStr for Cep {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl Serialize for Cep {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.formatted().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Cep {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Cep::new(s).map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for Cep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.formatted())
    }
}
