//! CNIC (national identity number) validation
//!
//! Accepts the dashed `DDDDD-DDDDDDD-D` layout or 13 plain digits and derives
//! gender, locality and province metadata from the digits themselves.

use crate::result::ValidationResult;
use crate::validators::utils;
use lazy_static::lazy_static;
use regex::Regex;
use std::collections::BTreeMap;

lazy_static! {
    static ref CNIC_REGEX: Regex = Regex::new(r"^(?:\d{5}-\d{7}-\d|\d{13})$").unwrap();
}

/// Province by the first CNIC digit. Digits 0, 8 and 9 are unassigned in the
/// NADRA numbering plan, so a missing entry only omits the `Province` key.
static PROVINCES: &[(char, &str)] = &[
    ('1', "Khyber Pakhtunkhwa"),
    ('2', "FATA"),
    ('3', "Punjab"),
    ('4', "Sindh"),
    ('5', "Balochistan"),
    ('6', "Islamabad"),
    ('7', "Gilgit-Baltistan"),
];

/// Validate a CNIC and derive its metadata.
pub fn validate(input: Option<&str>) -> ValidationResult {
    let Some(raw) = utils::presence(input) else {
        return ValidationResult::required("CNIC");
    };
    if utils::contains_non_ascii(raw) {
        return ValidationResult::failure("CNIC contains non-ASCII characters.");
    }

    let digits = utils::strip_separators(raw, &['-']);
    if !digits.chars().all(|c| c.is_ascii_digit()) {
        return ValidationResult::failure("CNIC may contain only digits and dashes.");
    }
    if digits.len() != 13 {
        return ValidationResult::failure("CNIC must be exactly 13 digits.");
    }
    if !CNIC_REGEX.is_match(raw) {
        return ValidationResult::failure("CNIC must be 13 digits in the form DDDDD-DDDDDDD-D.");
    }
    if utils::all_identical(&digits) {
        return ValidationResult::failure("CNIC cannot consist of identical digits.");
    }

    let mut metadata = BTreeMap::new();

    // Parity of the 13th digit encodes gender.
    let last = digits.as_bytes()[12] - b'0';
    let gender = if last % 2 == 0 { "Female" } else { "Male" };
    metadata.insert("Gender".to_string(), gender.to_string());

    metadata.insert("LocalityCode".to_string(), digits[..5].to_string());
    metadata.insert(
        "Formatted".to_string(),
        format!("{}-{}-{}", &digits[..5], &digits[5..12], &digits[12..]),
    );

    let first = digits.chars().next().unwrap_or('0');
    if let Some((_, province)) = PROVINCES.iter().find(|(digit, _)| *digit == first) {
        metadata.insert("Province".to_string(), (*province).to_string());
    }

    ValidationResult::success(digits, metadata)
}

/// Shorthand for `validate(input).is_valid()`.
pub fn is_valid(input: Option<&str>) -> bool {
    validate(input).is_valid()
}

/// The dashed canonical form, or `None` when the input is invalid.
pub fn format(input: Option<&str>) -> Option<String> {
    validate(input).metadata_value("Formatted").map(String::from)
}

/// The province derived from the first digit, when one is assigned.
pub fn get_province(input: Option<&str>) -> Option<String> {
    validate(input).metadata_value("Province").map(String::from)
}

/// The gender encoded in the 13th digit.
pub fn get_gender(input: Option<&str>) -> Option<String> {
    validate(input).metadata_value("Gender").map(String::from)
}
