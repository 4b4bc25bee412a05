//! Sample lead forms and lookup records shared by the integration tests.

#![allow(dead_code)]

use lead_intake::{AddressRecord, CompanyRecord, LeadForm, PersonKind};

/// Known-valid documents.
pub const VALID_CPF: &str = "123.456.789-09";
pub const VALID_CPF_2: &str = "529.982.247-25";
pub const VALID_CNPJ: &str = "11.222.333/0001-81";

/// A complete, valid form for a natural person.
pub fn individual_lead() -> LeadForm {
    LeadForm {
        person_kind: PersonKind::Pf,
        name: "Maria Silva".to_string(),
        tax_id: VALID_CPF.to_string(),
        phone: "(11) 99999-9999".to_string(),
        email: "maria.silva@example.com".to_string(),
        contact_hours: "Manhã, das 9h às 12h".to_string(),
        description: "Fui demitida sem justa causa e não recebi as verbas rescisórias."
            .to_string(),
        cep: "01310-100".to_string(),
        street: "Avenida Paulista".to_string(),
        number: "1000".to_string(),
        neighborhood: "Bela Vista".to_string(),
        city: "São Paulo".to_string(),
        state: "SP".to_string(),
        ..Default::default()
    }
}

/// A complete, valid form for an organization.
pub fn organization_lead() -> LeadForm {
    LeadForm {
        person_kind: PersonKind::Pj,
        name: "Empresa Teste LTDA".to_string(),
        tax_id: VALID_CNPJ.to_string(),
        responsible_name: "João Souza".to_string(),
        responsible_cpf: VALID_CPF_2.to_string(),
        phone: "(11) 3000-0000".to_string(),
        alternate_phone: "(11) 98888-7777".to_string(),
        email: "contato@teste.com".to_string(),
        ..individual_lead()
    }
}

pub fn paulista_address() -> AddressRecord {
    AddressRecord {
        cep: "01310-100".to_string(),
        street: "Avenida Paulista".to_string(),
        complement: "de 612 a 1510 - lado par".to_string(),
        neighborhood: "Bela Vista".to_string(),
        city: "São Paulo".to_string(),
        state: "SP".to_string(),
        not_found: false,
    }
}

pub fn test_company() -> CompanyRecord {
    CompanyRecord {
        cnpj: VALID_CNPJ.to_string(),
        corporate_name: "Empresa Teste LTDA".to_string(),
        trade_name: "Teste".to_string(),
        cep: "01310100".to_string(),
        street: "Av Paulista".to_string(),
        number: "1000".to_string(),
        complement: String::new(),
        neighborhood: "Bela Vista".to_string(),
        city: "São Paulo".to_string(),
        state: "SP".to_string(),
        phone: "1130000000".to_string(),
        email: "contato@teste.com".to_string(),
        status: "ATIVA".to_string(),
        opened_on: "01/01/2020".to_string(),
    }
}
