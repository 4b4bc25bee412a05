//! Lead form data as typed by the visitor.

use crate::domain::PersonKind;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Channel the lead prefers to be contacted on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, JsonSchema)]
pub enum ContactChannel {
    #[default]
    #[serde(rename = "whatsapp")]
    WhatsApp,
    #[serde(rename = "telefone")]
    Phone,
    #[serde(rename = "email")]
    Email,
}

impl FromStr for ContactChannel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "whatsapp" => Ok(Self::WhatsApp),
            "telefone" | "phone" => Ok(Self::Phone),
            "email" | "e-mail" => Ok(Self::Email),
            other => Err(format!("unknown contact channel: {}", other)),
        }
    }
}

/// Raw field values of the four-step intake form.
///
/// Values are kept exactly as typed (after masking); nothing here is
/// validated. Field names on the wire follow the intake API.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct LeadForm {
    #[serde(rename = "tipo_pessoa")]
    pub person_kind: PersonKind,

    /// Full name, or corporate name for organizations
    #[serde(rename = "nome_razao")]
    pub name: String,

    /// CPF or CNPJ depending on `person_kind`
    #[serde(rename = "cpf_cnpj")]
    pub tax_id: String,

    /// Responsible person (organizations only)
    #[serde(rename = "responsavel_nome")]
    pub responsible_name: String,

    #[serde(rename = "responsavel_cpf")]
    pub responsible_cpf: String,

    #[serde(rename = "telefone")]
    pub phone: String,

    /// Optional; empty when not given
    #[serde(rename = "telefone_alternativo")]
    pub alternate_phone: String,

    pub email: String,

    #[serde(rename = "canal_contato")]
    pub contact_channel: ContactChannel,

    #[serde(rename = "horario_contato")]
    pub contact_hours: String,

    #[serde(rename = "descricao")]
    pub description: String,

    pub cep: String,

    #[serde(rename = "endereco")]
    pub street: String,

    #[serde(rename = "numero")]
    pub number: String,

    #[serde(rename = "complemento")]
    pub complement: String,

    #[serde(rename = "bairro")]
    pub neighborhood: String,

    #[serde(rename = "cidade")]
    pub city: String,

    #[serde(rename = "estado")]
    pub state: String,

    #[serde(rename = "geolat")]
    pub latitude: Option<f64>,

    #[serde(rename = "geolon")]
    pub longitude: Option<f64>,
}

/// Addressable fields of [`LeadForm`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormField {
    PersonKind,
    Name,
    TaxId,
    ResponsibleName,
    ResponsibleCpf,
    Phone,
    AlternatePhone,
    Email,
    ContactChannel,
    ContactHours,
    Description,
    Cep,
    Street,
    Number,
    Complement,
    Neighborhood,
    City,
    State,
}

impl FormField {
    pub const ALL: [FormField; 18] = [
        Self::PersonKind,
        Self::Name,
        Self::TaxId,
        Self::ResponsibleName,
        Self::ResponsibleCpf,
        Self::Phone,
        Self::AlternatePhone,
        Self::Email,
        Self::ContactChannel,
        Self::ContactHours,
        Self::Description,
        Self::Cep,
        Self::Street,
        Self::Number,
        Self::Complement,
        Self::Neighborhood,
        Self::City,
        Self::State,
    ];

    /// Field name as used on the wire.
    pub fn key(self) -> &'static str {
        match self {
            Self::PersonKind => "tipo_pessoa",
            Self::Name => "nome_razao",
            Self::TaxId => "cpf_cnpj",
            Self::ResponsibleName => "responsavel_nome",
            Self::ResponsibleCpf => "responsavel_cpf",
            Self::Phone => "telefone",
            Self::AlternatePhone => "telefone_alternativo",
            Self::Email => "email",
            Self::ContactChannel => "canal_contato",
            Self::ContactHours => "horario_contato",
            Self::Description => "descricao",
            Self::Cep => "cep",
            Self::Street => "endereco",
            Self::Number => "numero",
            Self::Complement => "complemento",
            Self::Neighborhood => "bairro",
            Self::City => "cidade",
            Self::State => "estado",
        }
    }

    /// Look a field up by its wire name.
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|f| f.key() == key)
    }
}

impl fmt::Display for FormField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::PersonKind => "Person kind",
            Self::Name => "Name",
            Self::TaxId => "CPF/CNPJ",
            Self::ResponsibleName => "Responsible name",
            Self::ResponsibleCpf => "Responsible CPF",
            Self::Phone => "Phone",
            Self::AlternatePhone => "Alternate phone",
            Self::Email => "Email",
            Self::ContactChannel => "Contact channel",
            Self::ContactHours => "Contact hours",
            Self::Description => "Description",
            Self::Cep => "CEP",
            Self::Street => "Street",
            Self::Number => "Number",
            Self::Complement => "Complement",
            Self::Neighborhood => "Neighborhood",
            Self::City => "City",
            Self::State => "State",
        };
        f.write_str(label)
    }
}
