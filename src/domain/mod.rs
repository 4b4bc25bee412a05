//! Domain value objects and types.
//!
//! This module contains type-safe wrappers for the documents and contacts a
//! lead submits: taxpayer IDs, email addresses, phone numbers and postal
//! codes. These value objects validate at construction time, store the
//! normalized (digits-only) form and display the canonical punctuated form,
//! so invalid data cannot be represented past the form boundary.

pub mod cep;
pub mod cnpj;
pub mod cpf;
pub mod email;
pub mod errors;
pub mod phone;
pub mod tax_id;

pub use cep::Cep;
pub use cnpj::Cnpj;
pub use cpf::Cpf;
pub use email::EmailAddress;
pub use errors::ValidationError;
pub use phone::PhoneNumber;
pub use tax_id::{PersonKind, TaxId};
