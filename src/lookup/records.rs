//! Records returned by the external address and company-registry services.

use serde::{Deserialize, Deserializer, Serialize};

/// The postal-code service flags unknown codes with either `true` or `"true"`.
#[derive(Deserialize)]
#[serde(untagged)]
enum ErrorFlag {
    Bool(bool),
    Text(String),
}

fn deserialize_error_flag<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match ErrorFlag::deserialize(deserializer)? {
        ErrorFlag::Bool(flag) => flag,
        ErrorFlag::Text(text) => {
            let text = text.trim();
            !text.is_empty() && !text.eq_ignore_ascii_case("false")
        }
    })
}

/// Postal-code lookup result (ViaCEP shape).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AddressRecord {
    pub cep: String,

    #[serde(rename = "logradouro")]
    pub street: String,

    #[serde(rename = "complemento")]
    pub complement: String,

    #[serde(rename = "bairro")]
    pub neighborhood: String,

    #[serde(rename = "localidade")]
    pub city: String,

    #[serde(rename = "uf")]
    pub state: String,

    /// Set by the service when the postal code does not exist
    #[serde(
        rename = "erro",
        deserialize_with = "deserialize_error_flag",
        skip_serializing_if = "std::ops::Not::not"
    )]
    pub not_found: bool,
}

/// Company-registry lookup result.
///
/// Accepts both the registry's raw field names (`nome`, `fantasia`,
/// `abertura`) and the normalized ones.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CompanyRecord {
    pub cnpj: String,

    #[serde(rename = "razao_social", alias = "nome")]
    pub corporate_name: String,

    #[serde(rename = "nome_fantasia", alias = "fantasia")]
    pub trade_name: String,

    pub cep: String,

    #[serde(rename = "logradouro")]
    pub street: String,

    #[serde(rename = "numero")]
    pub number: String,

    #[serde(rename = "complemento")]
    pub complement: String,

    #[serde(rename = "bairro")]
    pub neighborhood: String,

    #[serde(rename = "municipio")]
    pub city: String,

    #[serde(rename = "uf")]
    pub state: String,

    #[serde(rename = "telefone")]
    pub phone: String,

    pub email: String,

    /// Registration status, e.g. `ATIVA`
    #[serde(rename = "situacao")]
    pub status: String,

    #[serde(rename = "data_abertura", alias = "abertura")]
    pub opened_on: String,
}

impl CompanyRecord {
    /// Whether the registry lists the company as active.
    pub fn is_active(&self) -> bool {
        self.status.trim().eq_ignore_ascii_case("ATIVA")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_address_record_deserialization() {
        let json = r#"{
            "cep": "01310-100",
            "logradouro": "Avenida Paulista",
            "complemento": "de 612 a 1510 - lado par",
            "bairro": "Bela Vista",
            "localidade": "São Paulo",
            "uf": "SP"
        }"#;
        let record: AddressRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.street, "Avenida Paulista");
        assert_eq!(record.city, "São Paulo");
        assert!(!record.not_found);

        let record: AddressRecord = serde_json::from_str(r#"{"erro": true}"#).unwrap();
        assert!(record.not_found);
    }

    #[test]
    fn test_address_record_error_flag_as_string() {
        let record: AddressRecord = serde_json::from_str(r#"{"erro": "true"}"#).unwrap();
        assert!(record.not_found);

        let record: AddressRecord = serde_json::from_str(r#"{"erro": "false"}"#).unwrap();
        assert!(!record.not_found);

        let record: AddressRecord = serde_json::from_str(r#"{"erro": false}"#).unwrap();
        assert!(!record.not_found);
    }

    #[test]
    fn test_company_record_accepts_registry_names() {
        let json = r#"{
            "status": "OK",
            "cnpj": "11.222.333/0001-81",
            "nome": "Empresa Teste LTDA",
            "fantasia": "Teste",
            "municipio": "São Paulo",
            "uf": "SP",
            "situacao": "ATIVA",
            "abertura": "01/01/2020"
        }"#;
        let record: CompanyRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.corporate_name, "Empresa Teste LTDA");
        assert_eq!(record.trade_name, "Teste");
        assert_eq!(record.opened_on, "01/01/2020");
        assert!(record.is_active());
    }

    #[test]
    fn test_company_record_serializes_normalized_names() {
        let record = CompanyRecord {
            corporate_name: "Empresa Teste LTDA".to_string(),
            ..Default::default()
        };
        let value = serde_json::to_value(&record).unwrap();
        assert_eq!(value["razao_social"], "Empresa Teste LTDA");
    }
}
