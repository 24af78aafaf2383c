//! STRN (sales tax registration number) validation
//!
//! 13 digits, with the first two selecting the issuing tax jurisdiction.

use crate::result::ValidationResult;
use crate::validators::utils;
use std::collections::BTreeMap;

/// Issuing jurisdiction by the first two STRN digits.
static JURISDICTIONS: &[(&str, &str)] = &[
    ("01", "RTO Peshawar"),
    ("02", "RTO Abbottabad"),
    ("03", "RTO Islamabad"),
    ("04", "RTO Rawalpindi"),
    ("05", "RTO Gujranwala"),
    ("06", "RTO Sialkot"),
    ("07", "RTO Lahore"),
    ("08", "RTO Faisalabad"),
    ("09", "RTO Sargodha"),
    ("10", "RTO Multan"),
    ("11", "RTO Bahawalpur"),
    ("12", "RTO Sukkur"),
    ("13", "RTO Hyderabad"),
    ("14", "RTO Karachi"),
    ("15", "RTO Quetta"),
    ("16", "LTU Karachi"),
    ("17", "LTU Lahore"),
    ("18", "LTU Islamabad"),
];

/// Validate an STRN and derive its metadata.
pub fn validate(input: Option<&str>) -> ValidationResult {
    let Some(raw) = utils::presence(input) else {
        return ValidationResult::required("STRN");
    };
    if utils::contains_non_ascii(raw) {
        return ValidationResult::failure("STRN contains non-ASCII characters.");
    }

    let digits = utils::strip_separators(raw, &['-', ' ']);
    if !digits.chars().all(|c| c.is_ascii_digit()) {
        return ValidationResult::failure("STRN may contain only digits, dashes and spaces.");
    }
    if digits.len() != 13 {
        return ValidationResult::failure("STRN must be exactly 13 digits.");
    }
    if digits.chars().all(|c| c == '0') {
        return ValidationResult::failure("STRN cannot be all zeros.");
    }
    if utils::all_identical(&digits) {
        return ValidationResult::failure("STRN cannot consist of identical digits.");
    }

    let mut metadata = BTreeMap::new();
    let region_code = &digits[..2];
    metadata.insert("RegionCode".to_string(), region_code.to_string());
    metadata.insert(
        "Formatted".to_string(),
        format!(
            "{}-{}-{}-{}",
            &digits[..2],
            &digits[2..6],
            &digits[6..10],
            &digits[10..]
        ),
    );
    if let Some((_, jurisdiction)) = JURISDICTIONS.iter().find(|(code, _)| *code == region_code) {
        metadata.insert("Jurisdiction".to_string(), (*jurisdiction).to_string());
    }

    ValidationResult::success(digits, metadata)
}

/// Shorthand for `validate(input).is_valid()`.
pub fn is_valid(input: Option<&str>) -> bool {
    validate(input).is_valid()
}

/// The grouped canonical form, or `None` when the input is invalid.
pub fn format(input: Option<&str>) -> Option<String> {
    validate(input).metadata_value("Formatted").map(String::from)
}

/// The issuing jurisdiction, when the region code is listed.
pub fn get_jurisdiction(input: Option<&str>) -> Option<String> {
    validate(input)
        .metadata_value("Jurisdiction")
        .map(String::from)
}
