//! Structural and checksum validation for Brazilian documents and contacts.
//!
//! Every function here is total: malformed input yields `false`, never a
//! panic or an error. Identifiers are normalized with [`digits_only`] before
//! any length or checksum rule is applied, so `"123.456.789-09"` and
//! `"12345678909"` are treated identically.

use once_cell::sync::Lazy;
use regex::Regex;

/// Number of digits in an individual taxpayer ID (CPF).
pub const CPF_LEN: usize = 11;

/// Number of digits in an organization taxpayer ID (CNPJ).
pub const CNPJ_LEN: usize = 14;

/// Number of digits in a postal code (CEP).
pub const CEP_LEN: usize = 8;

/// Weights for the first CNPJ check digit, applied to digits 1..=12.
const CNPJ_FIRST_WEIGHTS: [u32; 12] = [5, 4, 3, 2, 9, 8, 7, 6, 5, 4, 3, 2];

/// Weights for the second CNPJ check digit, applied to digits 1..=13.
const CNPJ_SECOND_WEIGHTS: [u32; 13] = [6, 5, 4, 3, 2, 9, 8, 7, 6, 5, 4, 3, 2];

static EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("Failed to compile email regex")
});

/// Strip every character that is not an ASCII digit.
///
/// # Example
///
/// ```
/// use lead_intake::validation::digits_only;
///
/// assert_eq!(digits_only("123.456.789-09"), "12345678909");
/// assert_eq!(digits_only("(11) 99999-9999"), "11999999999");
/// ```
pub fn digits_only(raw: &str) -> String {
    raw.chars().filter(|c| c.is_ascii_digit()).collect()
}

/// Parse normalized digits into their numeric values.
fn to_values(digits: &str) -> Vec<u32> {
    digits.chars().filter_map(|c| c.to_digit(10)).collect()
}

fn all_same(values: &[u32]) -> bool {
    values.windows(2).all(|w| w[0] == w[1])
}

/// CPF check digit over `values`, weighted from `values.len() + 1` down to 2.
fn cpf_check_digit(values: &[u32]) -> u32 {
    let top = values.len() as u32 + 1;
    let sum: u32 = values
        .iter()
        .enumerate()
        .map(|(i, d)| d * (top - i as u32))
        .sum();
    match (sum * 10) % 11 {
        10 | 11 => 0,
        r => r,
    }
}

fn cnpj_check_digit(values: &[u32], weights: &[u32]) -> u32 {
    let sum: u32 = values.iter().zip(weights).map(|(d, w)| d * w).sum();
    match sum % 11 {
        r if r < 2 => 0,
        r => 11 - r,
    }
}

/// Validate an individual taxpayer ID (CPF).
///
/// Rejects anything that does not normalize to exactly 11 digits, the
/// eleven repeated-digit sequences, and any value whose two mod-11 check
/// digits do not match.
///
/// # Example
///
/// ```
/// use lead_intake::validation::validate_cpf;
///
/// assert!(validate_cpf("123.456.789-09"));
/// assert!(!validate_cpf("123.456.789-00"));
/// assert!(!validate_cpf("111.111.111-11"));
/// ```
pub fn validate_cpf(raw: &str) -> bool {
    let values = to_values(&digits_only(raw));
    if values.len() != CPF_LEN || all_same(&values) {
        return false;
    }

    cpf_check_digit(&values[..9]) == values[9] && cpf_check_digit(&values[..10]) == values[10]
}

/// Validate an organization taxpayer ID (CNPJ).
///
/// # Example
///
/// ```
/// use lead_intake::validation::validate_cnpj;
///
/// assert!(validate_cnpj("11.222.333/0001-81"));
/// assert!(!validate_cnpj("11.222.333/0001-00"));
/// ```
pub fn validate_cnpj(raw: &str) -> bool {
    let values = to_values(&digits_only(raw));
    if values.len() != CNPJ_LEN || all_same(&values) {
        return false;
    }

    cnpj_check_digit(&values[..12], &CNPJ_FIRST_WEIGHTS) == values[12]
        && cnpj_check_digit(&values[..13], &CNPJ_SECOND_WEIGHTS) == values[13]
}

/// Permissive syntactic email check: `local@domain.tld`, no whitespace and
/// no extra `@`. Deliverability is not checked.
pub fn validate_email(raw: &str) -> bool {
    EMAIL_REGEX.is_match(raw)
}

/// A phone is valid when it normalizes to 10 digits (area code + 8-digit
/// landline) or 11 digits (area code + 9-digit mobile).
pub fn validate_phone(raw: &str) -> bool {
    matches!(digits_only(raw).len(), 10 | 11)
}

/// A postal code is valid when it normalizes to exactly 8 digits.
pub fn validate_cep(raw: &str) -> bool {
    digits_only(raw).len() == CEP_LEN
}
