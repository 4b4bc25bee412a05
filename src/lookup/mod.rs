//! External address and company-registry lookups.
//!
//! The services themselves live outside this crate. This module fixes the
//! shape of what they return, guards the keys sent to them, and applies
//! their records to a [`LeadForm`](crate::lead::LeadForm).

pub mod records;
pub mod traits;

pub use records::{AddressRecord, CompanyRecord};
pub use traits::{AddressLookup, CompanyRegistry};

use crate::error::{LookupError, LookupResult};
use crate::format::{mask_cep, mask_phone};
use crate::lead::LeadForm;
use crate::domain::Cep;
use crate::validation::{digits_only, CNPJ_LEN};

/// Look up the address of a postal code typed in any punctuation.
///
/// # Errors
///
/// - `LookupError::InvalidCep` if `raw` does not hold eight digits; the
///   service is not called.
/// - `LookupError::NotFound` if the service flags the CEP as unknown.
/// - Whatever the service itself returns.
pub async fn find_address(lookup: &dyn AddressLookup, raw: &str) -> LookupResult<AddressRecord> {
    let cep = Cep::new(raw).map_err(|_| LookupError::InvalidCep(raw.to_string()))?;

    tracing::debug!(cep = %cep, "Looking up address");
    let record = lookup.fetch_address(cep.digits()).await?;
    if record.not_found {
        tracing::info!(cep = %cep, "CEP not found");
        return Err(LookupError::NotFound(cep.digits().to_string()));
    }

    Ok(record)
}

/// Look up a company by CNPJ typed in any punctuation.
///
/// Only the digit count is checked before calling the registry, matching
/// the auto-search that fires once fourteen digits are typed.
///
/// # Errors
///
/// `LookupError::InvalidCnpj` if `raw` does not hold fourteen digits, or
/// whatever the registry returns.
pub async fn find_company(registry: &dyn CompanyRegistry, raw: &str) -> LookupResult<CompanyRecord> {
    let cnpj = digits_only(raw);
    if cnpj.len() != CNPJ_LEN {
        return Err(LookupError::InvalidCnpj(raw.to_string()));
    }

    tracing::debug!(cnpj = %cnpj, "Looking up company");
    registry.fetch_company(&cnpj).await
}

impl LeadForm {
    /// Fill the street, neighborhood, city and state from an address record.
    pub fn apply_address(&mut self, record: &AddressRecord) {
        self.street = record.street.clone();
        self.neighborhood = record.neighborhood.clone();
        self.city = record.city.clone();
        self.state = record.state.clone();
    }

    /// Fill identification, contact and address fields from a registry
    /// record. Phone and CEP are masked on the way in.
    pub fn apply_company(&mut self, record: &CompanyRecord) {
        self.name = record.corporate_name.clone();
        self.email = record.email.clone();
        self.phone = mask_phone(&record.phone);
        self.cep = mask_cep(&record.cep);
        self.street = record.street.clone();
        self.number = record.number.clone();
        self.complement = record.complement.clone();
        self.neighborhood = record.neighborhood.clone();
        self.city = record.city.clone();
        self.state = record.state.clone();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct FixedAddress {
        record: AddressRecord,
        calls: AtomicUsize,
    }

    #[async_trait]
    impl AddressLookup for FixedAddress {
        async fn fetch_address(&self, cep: &str) -> LookupResult<AddressRecord> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            assert_eq!(cep, "01310100");
            Ok(self.record.clone())
        }
    }

    struct FailingRegistry;

    #[async_trait]
    impl CompanyRegistry for FailingRegistry {
        async fn fetch_company(&self, _cnpj: &str) -> LookupResult<CompanyRecord> {
            Err(LookupError::Service("status 500".to_string()))
        }
    }

    fn paulista() -> AddressRecord {
        AddressRecord {
            cep: "01310-100".to_string(),
            street: "Avenida Paulista".to_string(),
            neighborhood: "Bela Vista".to_string(),
            city: "São Paulo".to_string(),
            state: "SP".to_string(),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_find_address_normalizes_cep() {
        let lookup = FixedAddress {
            record: paulista(),
            calls: AtomicUsize::new(0),
        };
        let record = find_address(&lookup, "01310-100").await.unwrap();
        assert_eq!(record.city, "São Paulo");
        assert_eq!(lookup.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_find_address_rejects_short_cep_without_calling() {
        let lookup = FixedAddress {
            record: paulista(),
            calls: AtomicUsize::new(0),
        };
        let result = find_address(&lookup, "0131").await;
        assert_eq!(result, Err(LookupError::InvalidCep("0131".to_string())));
        assert_eq!(lookup.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_find_address_not_found() {
        let lookup = FixedAddress {
            record: AddressRecord {
                not_found: true,
                ..Default::default()
            },
            calls: AtomicUsize::new(0),
        };
        let result = find_address(&lookup, "01310100").await;
        assert_eq!(result, Err(LookupError::NotFound("01310100".to_string())));
    }

    #[tokio::test]
    async fn test_find_company_guards_length_and_propagates() {
        let result = find_company(&FailingRegistry, "123456").await;
        assert_eq!(result, Err(LookupError::InvalidCnpj("123456".to_string())));

        let result = find_company(&FailingRegistry, "11.222.333/0001-81").await;
        assert!(matches!(result, Err(LookupError::Service(_))));
    }

    #[test]
    fn test_apply_address() {
        let mut form = LeadForm {
            number: "1000".to_string(),
            ..Default::default()
        };
        form.apply_address(&paulista());
        assert_eq!(form.street, "Avenida Paulista");
        assert_eq!(form.state, "SP");
        assert_eq!(form.number, "1000");
    }

    #[test]
    fn test_apply_company_masks_phone_and_cep() {
        let record = CompanyRecord {
            corporate_name: "Empresa Teste LTDA".to_string(),
            phone: "1130000000".to_string(),
            cep: "01310100".to_string(),
            email: "contato@teste.com".to_string(),
            ..Default::default()
        };
        let mut form = LeadForm::default();
        form.apply_company(&record);
        assert_eq!(form.name, "Empresa Teste LTDA");
        assert_eq!(form.phone, "(11) 3000-0000");
        assert_eq!(form.cep, "01310-100");
        assert_eq!(form.email, "contato@teste.com");
    }
}
