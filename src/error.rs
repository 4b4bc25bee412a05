//! Error types for lead intake.
//!
//! This module defines custom error types using `thiserror` for precise error handling.
//! The validators and masks themselves never fail; these errors belong to the
//! form, configuration and lookup layers built on top of them.

use crate::lead::FormField;
use thiserror::Error;

/// A rule of the multi-step lead form that the current data breaks.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FormError {
    /// Name or corporate name is blank
    #[error("Name or corporate name is required")]
    MissingName,

    /// Tax id of a natural person fails CPF validation
    #[error("Invalid CPF")]
    InvalidCpf,

    /// Tax id of a legal entity fails CNPJ validation
    #[error("Invalid CNPJ")]
    InvalidCnpj,

    #[error("Responsible person's name is required for organizations")]
    MissingResponsibleName,

    #[error("Invalid CPF for the responsible person")]
    InvalidResponsibleCpf,

    #[error("Invalid phone number")]
    InvalidPhone,

    #[error("Invalid alternate phone number")]
    InvalidAlternatePhone,

    /// Alternate phone normalizes to the same digits as the main phone
    #[error("Alternate phone must differ from the main phone")]
    DuplicatePhone,

    #[error("Invalid email address")]
    InvalidEmail,

    /// Case description is blank or shorter than the configured minimum
    #[error("Describe the case in at least {min} characters")]
    DescriptionTooShort { min: usize },

    /// A required free-text field is blank
    #[error("{0} is required")]
    MissingField(FormField),

    /// A choice field received a value outside its options
    #[error("Invalid choice for {0}")]
    InvalidChoice(FormField),
}

impl FormError {
    /// The form field the error should be reported against.
    pub fn field(&self) -> FormField {
        match self {
            Self::MissingName => FormField::Name,
            Self::InvalidCpf | Self::InvalidCnpj => FormField::TaxId,
            Self::MissingResponsibleName => FormField::ResponsibleName,
            Self::InvalidResponsibleCpf => FormField::ResponsibleCpf,
            Self::InvalidPhone => FormField::Phone,
            Self::InvalidAlternatePhone | Self::DuplicatePhone => FormField::AlternatePhone,
            Self::InvalidEmail => FormField::Email,
            Self::DescriptionTooShort { .. } => FormField::Description,
            Self::MissingField(field) | Self::InvalidChoice(field) => *field,
        }
    }
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Errors raised around the external address and company-registry lookups.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LookupError {
    /// Postal code does not have eight digits
    #[error("Invalid CEP: {0}")]
    InvalidCep(String),

    /// Registry key does not have fourteen digits
    #[error("Invalid CNPJ: {0}")]
    InvalidCnpj(String),

    /// The service answered but has no record for the key
    #[error("Not found: {0}")]
    NotFound(String),

    /// The service could not be reached or answered with an error
    #[error("Lookup service error: {0}")]
    Service(String),
}

/// Convenience type alias for Results with FormError
pub type FormResult<T> = Result<T, FormError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Convenience type alias for Results with LookupError
pub type LookupResult<T> = Result<T, LookupError>;
