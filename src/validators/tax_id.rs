//! NTN (national tax number) validation
//!
//! Two shapes are accepted: a 13-digit CNIC-based NTN, which delegates to the
//! CNIC validator, and the standard 7-digit NTN with one check digit.

use crate::result::ValidationResult;
use crate::validators::{identity_number, utils};
use lazy_static::lazy_static;
use regex::Regex;
use std::collections::BTreeMap;

lazy_static! {
    static ref STANDARD_NTN_REGEX: Regex = Regex::new(r"^\d{7}-?\d$").unwrap();
}

/// Validate an NTN in either its CNIC-based or standard shape.
pub fn validate(input: Option<&str>) -> ValidationResult {
    let Some(raw) = utils::presence(input) else {
        return ValidationResult::required("NTN");
    };
    if utils::contains_non_ascii(raw) {
        return ValidationResult::failure("NTN contains non-ASCII characters.");
    }

    let digits = utils::strip_separators(raw, &['-']);
    if !digits.chars().all(|c| c.is_ascii_digit()) {
        return ValidationResult::failure("NTN may contain only digits and dashes.");
    }

    match digits.len() {
        13 => {
            let cnic = identity_number::validate(Some(raw));
            if !cnic.is_valid() {
                return ValidationResult::failure("CNIC-based NTN has invalid CNIC format.");
            }
            let mut metadata = BTreeMap::new();
            metadata.insert("Type".to_string(), "CNIC-based".to_string());
            if let Some(formatted) = cnic.metadata_value("Formatted") {
                metadata.insert("Formatted".to_string(), formatted.to_string());
            }
            ValidationResult::success(digits, metadata)
        }
        8 => {
            if !STANDARD_NTN_REGEX.is_match(raw) {
                return ValidationResult::failure(
                    "Standard NTN must be 7 digits followed by a check digit.",
                );
            }
            if utils::all_identical(&digits) {
                return ValidationResult::failure("NTN cannot consist of identical digits.");
            }
            let mut metadata = BTreeMap::new();
            metadata.insert("Type".to_string(), "Standard".to_string());
            metadata.insert(
                "Formatted".to_string(),
                format!("{}-{}", &digits[..7], &digits[7..]),
            );
            ValidationResult::success(digits, metadata)
        }
        _ => ValidationResult::failure("NTN must be 8 or 13 digits."),
    }
}

/// Shorthand for `validate(input).is_valid()`.
pub fn is_valid(input: Option<&str>) -> bool {
    validate(input).is_valid()
}

/// The dashed canonical form, or `None` when the input is invalid.
pub fn format(input: Option<&str>) -> Option<String> {
    validate(input).metadata_value("Formatted").map(String::from)
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case("1234567-8"; "dashed")]
    #[test_case("12345678"; "plain")]
    fn test_valid_standard_ntn(input: &str) {
        let result = validate(Some(input));
        assert!(result.is_valid(), "{:?}", result.error_message());
        assert_eq!(result.metadata_value("Type"), Some("Standard"));
        assert_eq!(result.metadata_value("Formatted"), Some("1234567-8"));
        assert_eq!(result.sanitized(), Some("12345678"));
    }

    #[test]
    fn test_valid_cnic_based_ntn() {
        let result = validate(Some("35202-1234567-1"));
        assert!(result.is_valid());
        assert_eq!(result.metadata_value("Type"), Some("CNIC-based"));
        assert_eq!(result.metadata_value("Formatted"), Some("35202-1234567-1"));
    }

    #[test]
    fn test_cnic_based_ntn_with_bad_cnic() {
        // 13 identical digits fail CNIC validation, so the NTN fails too.
        let result = validate(Some("2222222222222"));
        assert_eq!(
            result.error_message(),
            Some("CNIC-based NTN has invalid CNIC format.")
        );
    }

    #[test]
    fn test_identical_digits_standard() {
        let result = validate(Some("11111111"));
        assert!(result.error_message().unwrap().contains("identical digits"));
    }

    #[test_case("123456"; "six digits")]
    #[test_case("123456789"; "nine digits")]
    fn test_wrong_length(input: &str) {
        assert_eq!(
            validate(Some(input)).error_message(),
            Some("NTN must be 8 or 13 digits.")
        );
    }

    #[test]
    fn test_misplaced_dash_standard() {
        let result = validate(Some("12-345678"));
        assert_eq!(
            result.error_message(),
            Some("Standard NTN must be 7 digits followed by a check digit.")
        );
    }

    #[test]
    fn test_missing_input() {
        assert_eq!(validate(Some("   ")).error_message(), Some("NTN is required."));
    }

    #[test]
    fn test_non_digit_content() {
        assert_eq!(
            validate(Some("ABCDEFG-1")).error_message(),
            Some("NTN may contain only digits and dashes.")
        );
    }
}
