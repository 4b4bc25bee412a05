//! Cnpj value object.

use super::errors::ValidationError;
use crate::format::mask_cnpj;
use crate::validation::{digits_only, validate_cnpj};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// A checksum-validated organization taxpayer ID.
///
/// Stores the fourteen normalized digits; displays and serializes as
/// `XX.XXX.XXX/XXXX-XX`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Cnpj(String);

impl Cnpj {
    /// Create a new Cnpj from any punctuation of its digits.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidCnpj` if validation fails.
    pub fn new(raw: impl AsRef<str>) -> Result<Self, ValidationError> {
        let raw = raw.as_ref();
        if !validate_cnpj(raw) {
            return Err(ValidationError::InvalidCnpj(raw.to_string()));
        }
        Ok(Self(digits_only(raw)))
    }

    /// The fourteen normalized digits.
    pub fn digits(&self) -> &str {
        &self.0
    }

    /// The canonical `XX.XXX.XXX/XXXX-XX` form.
    pub fn formatted(&self) -> String {
        mask_cnpj(&self.0)
    }
}

impl FromStr for Cnpj {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl Serialize for Cnpj {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.formatted().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Cnpj {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Cnpj::new(s).map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for Cnpj {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.formatted())
    }
}
