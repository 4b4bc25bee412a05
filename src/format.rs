//! Progressive display masks for documents, phones and postal codes.
//!
//! Masks are meant to run on every keystroke. Input is normalized to digits,
//! truncated to the template's capacity and then re-punctuated; a literal in
//! the template is only written once a digit follows it, so partial input
//! gets partial punctuation and nothing ever fails.

use crate::validation::{digits_only, CEP_LEN, CNPJ_LEN, CPF_LEN};

const CPF_TEMPLATE: &str = "###.###.###-##";
const CNPJ_TEMPLATE: &str = "##.###.###/####-##";
const CEP_TEMPLATE: &str = "#####-###";
const LANDLINE_TEMPLATE: &str = "(##) ####-####";
const MOBILE_TEMPLATE: &str = "(##) #####-####";

/// Digit count that switches a phone from the landline to the mobile layout.
const MOBILE_LEN: usize = 11;

/// Fill `template` with `digits`, one digit per `#` slot.
///
/// Literals are written only while more digits remain, and digits beyond the
/// number of slots are dropped.
///
/// # Example
///
/// ```
/// use lead_intake::format::apply_template;
///
/// assert_eq!(apply_template("12345", "###.###"), "123.45");
/// assert_eq!(apply_template("123", "###.###"), "123");
/// assert_eq!(apply_template("1", "(##)"), "(1");
/// ```
pub fn apply_template(digits: &str, template: &str) -> String {
    let mut out = String::with_capacity(template.len());
    let mut pending = digits.chars().peekable();

    for slot in template.chars() {
        if pending.peek().is_none() {
            break;
        }
        if slot == '#' {
            if let Some(d) = pending.next() {
                out.push(d);
            }
        } else {
            out.push(slot);
        }
    }

    out
}

fn mask(raw: &str, capacity: usize, template: &str) -> String {
    let digits: String = digits_only(raw).chars().take(capacity).collect();
    apply_template(&digits, template)
}

/// Mask an individual taxpayer ID as `XXX.XXX.XXX-XX`.
pub fn mask_cpf(raw: &str) -> String {
    mask(raw, CPF_LEN, CPF_TEMPLATE)
}

/// Mask an organization taxpayer ID as `XX.XXX.XXX/XXXX-XX`.
pub fn mask_cnpj(raw: &str) -> String {
    mask(raw, CNPJ_LEN, CNPJ_TEMPLATE)
}

/// Mask a phone as `(XX) XXXX-XXXX`, or `(XX) XXXXX-XXXX` once it reaches
/// eleven digits.
pub fn mask_phone(raw: &str) -> String {
    let digits: String = digits_only(raw).chars().take(MOBILE_LEN).collect();
    let template = if digits.len() == MOBILE_LEN {
        MOBILE_TEMPLATE
    } else {
        LANDLINE_TEMPLATE
    };
    apply_template(&digits, template)
}

/// Mask a postal code as `XXXXX-XXX`.
pub fn mask_cep(raw: &str) -> String {
    mask(raw, CEP_LEN, CEP_TEMPLATE)
}
