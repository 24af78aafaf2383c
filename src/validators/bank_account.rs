//! PK IBAN (bank account number) validation
//!
//! 24-character Pakistani IBANs: country code, two check digits, a four-letter
//! bank code and a 16-digit account number, verified with the ISO 13616
//! MOD-97 check.

use crate::result::ValidationResult;
use crate::validators::utils;
use lazy_static::lazy_static;
use regex::Regex;
use std::collections::{BTreeMap, HashMap};

lazy_static! {
    static ref IBAN_REGEX: Regex = Regex::new(r"^PK\d{2}[A-Z]{4}\d{16}$").unwrap();
    static ref BANKS: HashMap<&'static str, &'static str> = [
        ("ABPA", "Allied Bank Limited"),
        ("AIIN", "Al Baraka Bank Pakistan"),
        ("AKBL", "Askari Bank"),
        ("ALFH", "Bank Alfalah"),
        ("BAHL", "Bank Al Habib"),
        ("BKIP", "BankIslami Pakistan"),
        ("BPUN", "The Bank of Punjab"),
        ("CITI", "Citibank N.A. Pakistan"),
        ("DEUT", "Deutsche Bank Pakistan"),
        ("DUIB", "Dubai Islamic Bank Pakistan"),
        ("FAYS", "Faysal Bank"),
        ("FWOM", "First Women Bank"),
        ("HABB", "Habib Bank Limited"),
        ("HMBL", "Habib Metropolitan Bank"),
        ("ICBK", "Industrial and Commercial Bank of China"),
        ("JSBL", "JS Bank"),
        ("KHYB", "The Bank of Khyber"),
        ("MEZN", "Meezan Bank"),
        ("MPBL", "Mobilink Microfinance Bank"),
        ("MUCB", "MCB Bank"),
        ("NBPA", "National Bank of Pakistan"),
        ("SCBL", "Standard Chartered Pakistan"),
        ("SIND", "Sindh Bank"),
        ("SMBL", "Summit Bank"),
        ("SONE", "Soneri Bank"),
        ("TMFB", "Telenor Microfinance Bank"),
        ("UNIL", "United Bank Limited"),
        ("ZTBL", "Zarai Taraqiati Bank"),
    ]
    .iter()
    .copied()
    .collect();
}

/// Validate a PK IBAN and derive its metadata.
pub fn validate(input: Option<&str>) -> ValidationResult {
    let Some(raw) = utils::presence(input) else {
        return ValidationResult::required("IBAN");
    };
    if utils::contains_non_ascii(raw) {
        return ValidationResult::failure("IBAN contains non-ASCII characters.");
    }

    let iban = utils::strip_separators(raw, &[' ', '-']).to_uppercase();
    if !iban.starts_with("PK") {
        return ValidationResult::failure("IBAN must start with the country code PK.");
    }
    if iban.len() != 24 {
        return ValidationResult::failure("IBAN must be exactly 24 characters.");
    }
    if !IBAN_REGEX.is_match(&iban) {
        return ValidationResult::failure(
            "IBAN must be PK, two check digits, a 4-letter bank code and a 16-digit account number.",
        );
    }
    if mod97(&iban) != 1 {
        return ValidationResult::failure("IBAN check digits are invalid.");
    }

    let mut metadata = BTreeMap::new();
    let bank_code = &iban[4..8];
    metadata.insert("BankCode".to_string(), bank_code.to_string());
    metadata.insert("AccountNumber".to_string(), iban[8..].to_string());
    metadata.insert("CheckDigits".to_string(), iban[2..4].to_string());
    metadata.insert("Formatted".to_string(), group_by_four(&iban));
    if let Some(name) = BANKS.get(bank_code) {
        metadata.insert("BankName".to_string(), (*name).to_string());
    }

    ValidationResult::success(iban, metadata)
}

/// ISO 13616 remainder: rotate the first four characters to the end, expand
/// letters to their base-36 values and reduce digit by digit. Streaming keeps
/// the 60-plus-digit numeral out of fixed-width integers entirely.
fn mod97(iban: &str) -> u32 {
    let mut remainder: u32 = 0;
    for c in iban[4..].chars().chain(iban[..4].chars()) {
        // `to_digit(36)` maps 0-9 to themselves and A-Z to 10-35; the regex
        // gate guarantees every character is alphanumeric ASCII.
        let value = c.to_digit(36).unwrap_or(0);
        if value < 10 {
            remainder = (remainder * 10 + value) % 97;
        } else {
            remainder = (remainder * 100 + value) % 97;
        }
    }
    remainder
}

fn group_by_four(iban: &str) -> String {
    iban.as_bytes()
        .chunks(4)
        .map(|chunk| String::from_utf8_lossy(chunk).into_owned())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Shorthand for `validate(input).is_valid()`.
pub fn is_valid(input: Option<&str>) -> bool {
    validate(input).is_valid()
}

/// The space-grouped canonical form, or `None` when the input is invalid.
pub fn format(input: Option<&str>) -> Option<String> {
    validate(input).metadata_value("Formatted").map(String::from)
}

/// The issuing bank's display name, when the bank code is listed.
pub fn get_bank_name(input: Option<&str>) -> Option<String> {
    validate(input).metadata_value("BankName").map(String::from)
}
