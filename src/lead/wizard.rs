//! Step-by-step state of a single form session.
//!
//! A [`FormWizard`] is an ordinary value owned by whoever drives the form
//! (one per visitor session). Nothing about a session is kept in shared or
//! global state.

use super::form::{FormField, LeadForm};
use super::steps::{validate_step, FormStep, StepRules};
use crate::domain::PersonKind;
use crate::error::{FormError, FormResult};
use crate::format::{mask_cep, mask_cnpj, mask_cpf, mask_phone};
use crate::validation::{digits_only, CEP_LEN, CNPJ_LEN};
use serde::Serialize;

/// Origin tag attached to submissions from the public landing page.
pub const DEFAULT_ORIGIN: &str = "web-landing";

/// External lookup that a field update has made possible.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LookupRequest {
    /// CEP reached eight digits; carries the digits.
    Address(String),
    /// Organization tax id reached fourteen digits; carries the digits.
    Company(String),
}

/// Payload handed to the lead submission endpoint.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LeadSubmission {
    #[serde(flatten)]
    pub form: LeadForm,

    #[serde(rename = "origem")]
    pub origin: String,
}

/// Drives one visitor through the four form steps.
#[derive(Debug, Clone, Default)]
pub struct FormWizard {
    form: LeadForm,
    step: FormStep,
    rules: StepRules,
}

impl FormWizard {
    /// Start an empty form on the first step.
    pub fn new(rules: StepRules) -> Self {
        Self {
            form: LeadForm::default(),
            step: FormStep::PersonKind,
            rules,
        }
    }

    /// Resume with existing form data on the first step.
    pub fn with_form(form: LeadForm, rules: StepRules) -> Self {
        Self {
            form,
            step: FormStep::PersonKind,
            rules,
        }
    }

    pub fn form(&self) -> &LeadForm {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut LeadForm {
        &mut self.form
    }

    pub fn into_form(self) -> LeadForm {
        self.form
    }

    pub fn step(&self) -> FormStep {
        self.step
    }

    /// Store a typed value, masking document, phone and CEP fields.
    ///
    /// Returns the lookup the caller may now trigger, if any.
    ///
    /// # Errors
    ///
    /// `FormError::InvalidChoice` when a person kind or contact channel
    /// value is not one of the known options; the form is left unchanged.
    pub fn set_field(&mut self, field: FormField, raw: &str) -> FormResult<Option<LookupRequest>> {
        let form = &mut self.form;
        let mut request = None;

        match field {
            FormField::PersonKind => {
                form.person_kind = raw.parse().map_err(|_| FormError::InvalidChoice(field))?;
            }
            FormField::ContactChannel => {
                form.contact_channel = raw.parse().map_err(|_| FormError::InvalidChoice(field))?;
            }
            FormField::TaxId => {
                form.tax_id = match form.person_kind {
                    PersonKind::Pf => mask_cpf(raw),
                    PersonKind::Pj => mask_cnpj(raw),
                };
                let digits = digits_only(&form.tax_id);
                if form.person_kind == PersonKind::Pj && digits.len() == CNPJ_LEN {
                    request = Some(LookupRequest::Company(digits));
                }
            }
            FormField::ResponsibleCpf => form.responsible_cpf = mask_cpf(raw),
            FormField::Phone => form.phone = mask_phone(raw),
            FormField::AlternatePhone => form.alternate_phone = mask_phone(raw),
            FormField::Cep => {
                form.cep = mask_cep(raw);
                let digits = digits_only(&form.cep);
                if digits.len() == CEP_LEN {
                    request = Some(LookupRequest::Address(digits));
                }
            }
            FormField::Name => form.name = raw.to_string(),
            FormField::ResponsibleName => form.responsible_name = raw.to_string(),
            FormField::Email => form.email = raw.to_string(),
            FormField::ContactHours => form.contact_hours = raw.to_string(),
            FormField::Description => form.description = raw.to_string(),
            FormField::Street => form.street = raw.to_string(),
            FormField::Number => form.number = raw.to_string(),
            FormField::Complement => form.complement = raw.to_string(),
            FormField::Neighborhood => form.neighborhood = raw.to_string(),
            FormField::City => form.city = raw.to_string(),
            FormField::State => form.state = raw.to_string(),
        }

        Ok(request)
    }

    /// Record the visitor's coordinates.
    pub fn set_location(&mut self, latitude: f64, longitude: f64) {
        self.form.latitude = Some(latitude);
        self.form.longitude = Some(longitude);
    }

    /// Append transcribed speech to the case description.
    pub fn append_transcript(&mut self, transcript: &str) {
        let transcript = transcript.trim();
        if transcript.is_empty() {
            return;
        }
        if !self.form.description.is_empty() {
            self.form.description.push(' ');
        }
        self.form.description.push_str(transcript);
    }

    /// Validate the current step and move to the next one.
    ///
    /// On the last step this only validates. Returns the step the wizard
    /// is on afterwards.
    ///
    /// # Errors
    ///
    /// The current step's first broken rule; the wizard does not move.
    pub fn advance(&mut self) -> FormResult<FormStep> {
        validate_step(&self.form, self.step, &self.rules)?;
        if let Some(next) = self.step.next() {
            tracing::info!(from = self.step.number(), to = next.number(), "Form step advanced");
            self.step = next;
        }
        Ok(self.step)
    }

    /// Move to the previous step (stays put on the first step).
    pub fn back(&mut self) -> FormStep {
        if let Some(prev) = self.step.prev() {
            self.step = prev;
        }
        self.step
    }

    /// Jump to `target`. Moving backwards is always allowed; moving forward
    /// requires every step in between to validate.
    ///
    /// # Errors
    ///
    /// The first broken rule among the skipped steps; the wizard stops on
    /// that step.
    pub fn go_to(&mut self, target: FormStep) -> FormResult<FormStep> {
        while self.step < target {
            self.advance()?;
        }
        if target < self.step {
            self.step = target;
        }
        Ok(self.step)
    }

    /// Validate every step and build the submission payload.
    ///
    /// # Errors
    ///
    /// The first broken rule, in step order. The wizard moves to the step
    /// that failed so the visitor can fix it.
    pub fn submit(&mut self, origin: &str) -> FormResult<LeadSubmission> {
        for step in FormStep::ALL {
            if let Err(e) = validate_step(&self.form, step, &self.rules) {
                self.step = step;
                return Err(e);
            }
        }

        tracing::info!(
            person_kind = %self.form.person_kind,
            origin = origin,
            "Lead form submitted"
        );

        Ok(LeadSubmission {
            form: self.form.clone(),
            origin: origin.to_string(),
        })
    }
}
