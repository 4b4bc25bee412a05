//! PhoneNumber value object.

use super::errors::ValidationError;
use crate::format::mask_phone;
use crate::validation::{digits_only, validate_phone};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// A Brazilian phone number with area code.
///
/// Ten digits is a landline (`(XX) XXXX-XXXX`), eleven is a mobile
/// (`(XX) XXXXX-XXXX`). The area code itself is not range-checked.
///
/// # Example
///
/// ```
/// use lead_intake::domain::PhoneNumber;
///
/// let phone = PhoneNumber::new("11999999999").unwrap();
/// assert_eq!(phone.digits(), "11999999999");
/// assert_eq!(phone.to_string(), "(11) 99999-9999");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PhoneNumber(String);

impl PhoneNumber {
    /// Create a new PhoneNumber from any punctuation of its digits.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidPhone` unless the input normalizes
    /// to 10 or 11 digits.
    pub fn new(phone: impl AsRef<str>) -> Result<Self, ValidationError> {
        let phone = phone.as_ref();

        if !validate_phone(phone) {
            return Err(ValidationError::InvalidPhone(phone.to_string()));
        }

        Ok(Self(digits_only(phone)))
    }

    /// Get the phone number with only digits (no formatting).
    pub fn digits(&self) -> &str {
        &self.0
    }

    pub fn formatted(&self) -> String {
        mask_phone(&self.0)
    }
}

impl Serialize for PhoneNumber {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.formatted().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for PhoneNumber {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        PhoneNumber::new(s).map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for PhoneNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.formatted())
    }
}
