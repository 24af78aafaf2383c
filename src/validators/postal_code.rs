//! Postal code validation
//!
//! Five digits within the national range, with the first two selecting the
//! delivery region.

use crate::result::ValidationResult;
use crate::validators::utils;
use std::collections::BTreeMap;

const MIN_POSTAL_CODE: u32 = 10_000;
const MAX_POSTAL_CODE: u32 = 97_000;

/// Delivery region by the first two postal code digits.
static REGIONS: &[(&str, &str)] = &[
    ("10", "Mirpur"),
    ("12", "Kotli"),
    ("13", "Muzaffarabad"),
    ("15", "Gilgit"),
    ("22", "Abbottabad"),
    ("23", "Mardan"),
    ("24", "Charsadda"),
    ("25", "Peshawar"),
    ("26", "Kohat"),
    ("28", "Bannu"),
    ("29", "Dera Ismail Khan"),
    ("32", "Dera Ghazi Khan"),
    ("35", "Jhang"),
    ("38", "Faisalabad"),
    ("39", "Sheikhupura"),
    ("40", "Sargodha"),
    ("43", "Attock"),
    ("44", "Islamabad"),
    ("46", "Rawalpindi"),
    ("48", "Chakwal"),
    ("49", "Jhelum"),
    ("50", "Gujrat"),
    ("51", "Sialkot"),
    ("52", "Gujranwala"),
    ("54", "Lahore"),
    ("55", "Kasur"),
    ("56", "Okara"),
    ("57", "Sahiwal"),
    ("60", "Multan"),
    ("63", "Bahawalpur"),
    ("64", "Rahim Yar Khan"),
    ("65", "Sukkur"),
    ("71", "Hyderabad"),
    ("74", "Karachi"),
    ("75", "Karachi"),
    ("77", "Larkana"),
    ("87", "Quetta"),
];

/// Validate a postal code and derive its metadata.
pub fn validate(input: Option<&str>) -> ValidationResult {
    let Some(raw) = utils::presence(input) else {
        return ValidationResult::required("Postal code");
    };
    if utils::contains_non_ascii(raw) {
        return ValidationResult::failure("Postal code contains non-ASCII characters.");
    }

    let digits: String = raw.chars().filter(|c| !c.is_whitespace()).collect();
    if digits.len() != 5 || !digits.chars().all(|c| c.is_ascii_digit()) {
        return ValidationResult::failure("Postal code must be exactly 5 digits.");
    }

    // The pattern guarantees a 5-digit numeral, parsing cannot fail.
    let value: u32 = digits.parse().unwrap_or(0);
    if !(MIN_POSTAL_CODE..=MAX_POSTAL_CODE).contains(&value) {
        return ValidationResult::failure(format!(
            "Postal code must be between {} and {}.",
            MIN_POSTAL_CODE, MAX_POSTAL_CODE
        ));
    }

    let mut metadata = BTreeMap::new();
    let prefix = &digits[..2];
    metadata.insert("RegionPrefix".to_string(), prefix.to_string());
    if let Some((_, region)) = REGIONS.iter().find(|(code, _)| *code == prefix) {
        metadata.insert("Region".to_string(), (*region).to_string());
    }

    ValidationResult::success(digits, metadata)
}

/// Shorthand for `validate(input).is_valid()`.
pub fn is_valid(input: Option<&str>) -> bool {
    validate(input).is_valid()
}

/// The delivery region, when the prefix is listed.
pub fn get_region(input: Option<&str>) -> Option<String> {
    validate(input).metadata_value("Region").map(String::from)
}
