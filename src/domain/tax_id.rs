//! TaxId value object and the person kind that selects it.

use super::cnpj::Cnpj;
use super::cpf::Cpf;
use super::errors::ValidationError;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Whether a lead is a natural person or a legal entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum PersonKind {
    /// Pessoa física, identified by a CPF.
    #[default]
    Pf,
    /// Pessoa jurídica, identified by a CNPJ.
    Pj,
}

impl fmt::Display for PersonKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Pf => write!(f, "pf"),
            Self::Pj => write!(f, "pj"),
        }
    }
}

impl FromStr for PersonKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "pf" => Ok(Self::Pf),
            "pj" => Ok(Self::Pj),
            other => Err(format!("unknown person kind: {}", other)),
        }
    }
}

/// A taxpayer ID whose kind matches the lead's [`PersonKind`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(untagged)]
pub enum TaxId {
    Cpf(Cpf),
    Cnpj(Cnpj),
}

impl TaxId {
    /// Parse `raw` as the document `kind` requires.
    ///
    /// # Errors
    ///
    /// Returns the CPF or CNPJ validation error for that kind.
    pub fn parse(kind: PersonKind, raw: &str) -> Result<Self, ValidationError> {
        match kind {
            PersonKind::Pf => Cpf::new(raw).map(Self::Cpf),
            PersonKind::Pj => Cnpj::new(raw).map(Self::Cnpj),
        }
    }

    pub fn kind(&self) -> PersonKind {
        match self {
            Self::Cpf(_) => PersonKind::Pf,
            Self::Cnpj(_) => PersonKind::Pj,
        }
    }
}

impl fmt::Display for TaxId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Cpf(cpf) => fmt::Display::fmt(cpf, f),
            Self::Cnpj(cnpj) => fmt::Display::fmt(cnpj, f),
        }
    }
}
