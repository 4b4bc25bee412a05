//! Cpf value object.

use super::errors::ValidationError;
use crate::format::mask_cpf;
use crate::validation::{digits_only, validate_cpf};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// A checksum-validated individual taxpayer ID.
///
/// Stores the eleven normalized digits; displays and serializes as
/// `XXX.XXX.XXX-XX`.
///
/// # Example
///
/// ```
/// use lead_intake::domain::Cpf;
///
/// let cpf = Cpf::new("12345678909").unwrap();
/// assert_eq!(cpf.digits(), "12345678909");
/// assert_eq!(cpf.to_string(), "123.456.789-09");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Cpf(String);

impl Cpf {
    /// Create a new Cpf from any punctuation of its digits.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidCpf` if the length, repeated-digit
    /// or check-digit rules fail.
    pub fn new(raw: impl AsRef<str>) -> Result<Self, ValidationError> {
        let raw = raw.as_ref();
        if !validate_cpf(raw) {
            return Err(ValidationError::InvalidCpf(raw.to_string()));
        }
        Ok(Self(digits_only(raw)))
    }

    /// The eleven normalized digits.
    pub fn digits(&self) -> &str {
        &self.0
    }

    /// The canonical `XXX.XXX.XXX-XX` form.
    pub fn formatted(&self) -> String {
        mask_cpf(&self.0)
    }
}

impl FromStr for Cpf {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

// Serde support - serialize in canonical form
impl Serialize for Cpf {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.formatted().serialize(serializer)
    }
}

// Serde support - deserialize from string with validation
impl<'de> Deserialize<'de> for Cpf {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Cpf::new(s).map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for Cpf {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.formatted())
    }
}
