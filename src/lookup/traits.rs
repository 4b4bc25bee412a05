use super::records::{AddressRecord, CompanyRecord};
use crate::error::LookupResult;
use async_trait::async_trait;

/// Postal-code to address service.
///
/// Implementations receive a normalized eight-digit CEP and perform the
/// network call; the form layer never talks HTTP itself.
#[async_trait]
pub trait AddressLookup: Send + Sync {
    /// Fetch the address registered for `cep`.
    async fn fetch_address(&self, cep: &str) -> LookupResult<AddressRecord>;
}

/// Company registry keyed by CNPJ.
#[async_trait]
pub trait CompanyRegistry: Send + Sync {
    /// Fetch the registration of the company with the fourteen-digit `cnpj`.
    async fn fetch_company(&self, cnpj: &str) -> LookupResult<CompanyRecord>;
}
