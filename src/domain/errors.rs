//! Domain validation errors.

use std::fmt;

/// Errors that can occur during domain value object validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The provided individual taxpayer ID (CPF) is invalid.
    InvalidCpf(String),

    /// The provided organization taxpayer ID (CNPJ) is invalid.
    InvalidCnpj(String),

    /// The provided email address is invalid.
    InvalidEmail(String),

    /// The provided phone number is invalid.
    InvalidPhone(String),

    /// The provided postal code (CEP) is invalid.
    InvalidCep(String),
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidCpf(cpf) => write!(f, "Invalid CPF: {}", cpf),
            Self::InvalidCnpj(cnpj) => write!(f, "Invalid CNPJ: {}", cnpj),
            Self::InvalidEmail(email) => write!(f, "Invalid email address: {}", email),
            Self::InvalidPhone(phone) => write!(f, "Invalid phone number: {}", phone),
            Self::InvalidCep(cep) => write!(f, "Invalid CEP: {}", cep),
        }
    }
}

impl std::error::Error for ValidationError {}
