use async_trait::async_trait;
use lead_intake::error::{LookupError, LookupResult};
use lead_intake::{AddressLookup, AddressRecord, CompanyRecord, CompanyRegistry};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// Mock postal-code service keyed by eight-digit CEP.
#[allow(dead_code)]
#[derive(Clone, Default)]
pub struct MockAddressLookup {
    records: Arc<Mutex<HashMap<String, AddressRecord>>>,
    calls: Arc<Mutex<Vec<String>>>,
}

#[allow(dead_code)]
impl MockAddressLookup {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_record(&self, cep: &str, record: AddressRecord) {
        let mut records = self.records.lock().unwrap();
        records.insert(cep.to_string(), record);
    }

    /// Keys the service was called with, in order.
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl AddressLookup for MockAddressLookup {
    async fn fetch_address(&self, cep: &str) -> LookupResult<AddressRecord> {
        self.calls.lock().unwrap().push(cep.to_string());

        let records = self.records.lock().unwrap();
        // The real service answers unknown codes with `{"erro": true}`.
        Ok(records.get(cep).cloned().unwrap_or(AddressRecord {
            not_found: true,
            ..Default::default()
        }))
    }
}

/// Mock company registry keyed by fourteen-digit CNPJ.
#[allow(dead_code)]
#[derive(Clone, Default)]
pub struct MockCompanyRegistry {
    records: Arc<Mutex<HashMap<String, CompanyRecord>>>,
    calls: Arc<Mutex<Vec<String>>>,
}

#[allow(dead_code)]
impl MockCompanyRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_record(&self, cnpj: &str, record: CompanyRecord) {
        let mut records = self.records.lock().unwrap();
        records.insert(cnpj.to_string(), record);
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl CompanyRegistry for MockCompanyRegistry {
    async fn fetch_company(&self, cnpj: &str) -> LookupResult<CompanyRecord> {
        self.calls.lock().unwrap().push(cnpj.to_string());

        let records = self.records.lock().unwrap();
        records
            .get(cnpj)
            .cloned()
            .ok_or_else(|| LookupError::NotFound(format!("CNPJ {} not found", cnpj)))
    }
}
