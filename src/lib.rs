//! Lead Intake - Brazilian document and contact validation for a legal
//! lead-intake form.
//!
//! The core is a set of total, side-effect-free functions that validate and
//! mask CPF, CNPJ, phone, email and CEP values. The rest of the crate builds
//! the intake form on top of them.
//!
//! # Architecture
//!
//! - **validation**: checksum and structural validators
//! - **format**: progressive display masks
//! - **domain**: value objects that can only hold valid documents and contacts
//! - **lead**: the four-step intake form, its rules and per-session state
//! - **lookup**: shapes and guards for the external CEP and CNPJ lookups
//! - **config**: configuration from environment variables
//! - **error**: custom error types for precise error handling

pub mod config;
pub mod domain;
pub mod error;
pub mod format;
pub mod lead;
pub mod lookup;
pub mod validation;

pub use config::Config;
pub use domain::{Cep, Cnpj, Cpf, EmailAddress, PersonKind, PhoneNumber, TaxId, ValidationError};
pub use error::{ConfigError, FormError, LookupError};
pub use format::{mask_cep, mask_cnpj, mask_cpf, mask_phone};
pub use lead::{FormField, FormStep, FormWizard, LeadForm, LeadSubmission, StepRules};
pub use lookup::{AddressLookup, AddressRecord, CompanyRecord, CompanyRegistry};
pub use validation::{validate_cep, validate_cnpj, validate_cpf, validate_email, validate_phone};
