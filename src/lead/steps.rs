//! Per-step rules of the intake form.
//!
//! Each step is checked in a fixed order and the first broken rule is
//! returned, so the visitor fixes one problem at a time.

use super::form::{FormField, LeadForm};
use crate::domain::{Cpf, EmailAddress, PersonKind, PhoneNumber, TaxId};
use crate::error::{FormError, FormResult};
use serde::Serialize;
use std::fmt;

/// Minimum case description length when none is configured.
pub const DEFAULT_MIN_DESCRIPTION_CHARS: usize = 20;

/// The four steps of the form, in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum FormStep {
    /// Natural person or organization
    #[default]
    PersonKind = 1,
    /// Name, documents and contacts
    Identification = 2,
    /// Free-text case description
    CaseDescription = 3,
    /// Address and contact preferences
    Address = 4,
}

impl FormStep {
    pub const ALL: [FormStep; 4] = [
        Self::PersonKind,
        Self::Identification,
        Self::CaseDescription,
        Self::Address,
    ];

    /// 1-based step number.
    pub fn number(self) -> u8 {
        self as u8
    }

    pub fn from_number(n: u8) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.number() == n)
    }

    /// The following step, or `None` on the last one.
    pub fn next(self) -> Option<Self> {
        Self::from_number(self.number() + 1)
    }

    /// The preceding step, or `None` on the first one.
    pub fn prev(self) -> Option<Self> {
        self.number().checked_sub(1).and_then(Self::from_number)
    }

    pub fn is_last(self) -> bool {
        self == Self::Address
    }
}

impl fmt::Display for FormStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::PersonKind => "person kind",
            Self::Identification => "identification",
            Self::CaseDescription => "case description",
            Self::Address => "address",
        };
        write!(f, "step {} ({})", self.number(), name)
    }
}

/// Tunable limits for the step rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepRules {
    pub min_description_chars: usize,
}

impl Default for StepRules {
    fn default() -> Self {
        StepRules {
            min_description_chars: DEFAULT_MIN_DESCRIPTION_CHARS,
        }
    }
}

fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

fn require(value: &str, field: FormField) -> FormResult<()> {
    if is_blank(value) {
        return Err(FormError::MissingField(field));
    }
    Ok(())
}

fn check_identification(form: &LeadForm) -> FormResult<()> {
    if is_blank(&form.name) {
        return Err(FormError::MissingName);
    }

    TaxId::parse(form.person_kind, &form.tax_id).map_err(|_| match form.person_kind {
        PersonKind::Pf => FormError::InvalidCpf,
        PersonKind::Pj => FormError::InvalidCnpj,
    })?;

    if form.person_kind == PersonKind::Pj {
        if is_blank(&form.responsible_name) {
            return Err(FormError::MissingResponsibleName);
        }
        Cpf::new(&form.responsible_cpf).map_err(|_| FormError::InvalidResponsibleCpf)?;
    }

    let phone = PhoneNumber::new(&form.phone).map_err(|_| FormError::InvalidPhone)?;

    if !form.alternate_phone.is_empty() {
        let alternate = PhoneNumber::new(&form.alternate_phone)
            .map_err(|_| FormError::InvalidAlternatePhone)?;
        if alternate == phone {
            return Err(FormError::DuplicatePhone);
        }
    }

    EmailAddress::new(&form.email).map_err(|_| FormError::InvalidEmail)?;

    Ok(())
}

fn check_description(form: &LeadForm, rules: &StepRules) -> FormResult<()> {
    let description = form.description.trim();
    if description.is_empty() || description.chars().count() < rules.min_description_chars {
        return Err(FormError::DescriptionTooShort {
            min: rules.min_description_chars,
        });
    }
    Ok(())
}

fn check_address(form: &LeadForm) -> FormResult<()> {
    require(&form.cep, FormField::Cep)?;
    require(&form.street, FormField::Street)?;
    require(&form.number, FormField::Number)?;
    require(&form.neighborhood, FormField::Neighborhood)?;
    require(&form.city, FormField::City)?;
    require(&form.state, FormField::State)?;
    require(&form.contact_hours, FormField::ContactHours)
}

/// Check the rules of a single step against `form`.
///
/// # Errors
///
/// Returns the first `FormError` the step's rules produce.
pub fn validate_step(form: &LeadForm, step: FormStep, rules: &StepRules) -> FormResult<()> {
    let result = match step {
        // Person kind always carries a value.
        FormStep::PersonKind => Ok(()),
        FormStep::Identification => check_identification(form),
        FormStep::CaseDescription => check_description(form, rules),
        FormStep::Address => check_address(form),
    };

    if let Err(e) = &result {
        tracing::debug!(step = %step, field = e.field().key(), "Step rule failed: {}", e);
    }

    result
}

/// Outcome of one step in a whole-form check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StepOutcome {
    pub step: u8,
    pub valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Check every step independently and report each outcome.
pub fn check_all_steps(form: &LeadForm, rules: &StepRules) -> Vec<StepOutcome> {
    FormStep::ALL
        .into_iter()
        .map(|step| match validate_step(form, step, rules) {
            Ok(()) => StepOutcome {
                step: step.number(),
                valid: true,
                field: None,
                error: None,
            },
            Err(e) => StepOutcome {
                step: step.number(),
                valid: false,
                field: Some(e.field().key()),
                error: Some(e.to_string()),
            },
        })
        .collect()
}
