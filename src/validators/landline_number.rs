//! Landline number validation
//!
//! Normalizes `+92`/`92`/`0`-prefixed forms to a local form, then resolves
//! the area code longest-match-first (4-digit codes before 3-digit ones) and
//! enforces the subscriber length that each code requires.

use crate::result::ValidationResult;
use crate::validators::utils;
use log::debug;
use std::collections::BTreeMap;

/// Area code, city, required subscriber digit count.
static AREA_CODES: &[(&str, &str, usize)] = &[
    // 4-digit codes
    ("0992", "Abbottabad", 7),
    ("0937", "Mardan", 7),
    ("0946", "Swat", 7),
    ("0966", "Dera Ismail Khan", 7),
    ("0995", "Haripur", 7),
    ("0997", "Mansehra", 7),
    ("0233", "Mirpur Khas", 7),
    ("0244", "Nawabshah", 7),
    ("0604", "Dera Ghazi Khan", 7),
    // 3-digit codes
    ("021", "Karachi", 8),
    ("042", "Lahore", 8),
    ("051", "Islamabad", 7),
    ("041", "Faisalabad", 7),
    ("061", "Multan", 7),
    ("071", "Sukkur", 7),
    ("081", "Quetta", 7),
    ("091", "Peshawar", 7),
    ("022", "Hyderabad", 7),
    ("025", "Dadu", 7),
    ("044", "Okara", 7),
    ("048", "Sargodha", 7),
    ("052", "Sialkot", 7),
    ("055", "Gujranwala", 7),
    ("057", "Attock", 7),
    ("062", "Bahawalpur", 7),
    ("068", "Rahim Yar Khan", 7),
    ("074", "Larkana", 7),
];

/// Validate a landline number and derive its metadata.
pub fn validate(input: Option<&str>) -> ValidationResult {
    let Some(raw) = utils::presence(input) else {
        return ValidationResult::required("Landline number");
    };
    if utils::contains_non_ascii(raw) {
        return ValidationResult::failure("Landline number contains non-ASCII characters.");
    }

    let compact = utils::strip_separators(raw, &[' ', '-', '(', ')']);
    let local = if let Some(rest) = compact.strip_prefix("+92") {
        format!("0{}", rest)
    } else if compact.starts_with('0') {
        compact
    } else if compact.starts_with("92") && (11..=13).contains(&compact.len()) {
        // Bare country-code form; the length window keeps 9-leading local
        // numbers from being misread as country-prefixed ones.
        format!("0{}", &compact[2..])
    } else {
        return ValidationResult::failure(
            "Landline number must start with an area code or the +92 country code.",
        );
    };

    if !local.chars().all(|c| c.is_ascii_digit()) {
        return ValidationResult::failure("Landline number may contain only digits.");
    }
    if !(10..=12).contains(&local.len()) {
        return ValidationResult::failure("Landline number must be 10 to 12 digits long.");
    }

    let prefix4 = &local[..4];
    let prefix3 = &local[..3];
    let entry = AREA_CODES
        .iter()
        .find(|(code, _, _)| *code == prefix4)
        .or_else(|| AREA_CODES.iter().find(|(code, _, _)| *code == prefix3));

    let international = format!("+92{}", &local[1..]);
    let mut metadata = BTreeMap::new();
    match entry {
        Some((code, city, subscriber_len)) => {
            let subscriber = &local[code.len()..];
            if subscriber.len() != *subscriber_len {
                return ValidationResult::failure(format!(
                    "{} numbers require a {}-digit subscriber number.",
                    city, subscriber_len
                ));
            }
            metadata.insert("AreaCode".to_string(), (*code).to_string());
            metadata.insert("City".to_string(), (*city).to_string());
            metadata.insert("SubscriberNumber".to_string(), subscriber.to_string());
            metadata.insert("LocalFormat".to_string(), local.clone());
            metadata.insert("InternationalFormat".to_string(), international);
            ValidationResult::success(local, metadata)
        }
        None => {
            // Unlisted area codes are tolerated for structurally plausible
            // lengths so new allocations do not fail outright.
            if local.len() == 10 || local.len() == 11 {
                debug!("no area code entry for landline prefix {}", prefix4);
                metadata.insert("AreaCode".to_string(), "Unknown".to_string());
                metadata.insert("LocalFormat".to_string(), local.clone());
                metadata.insert("InternationalFormat".to_string(), international);
                ValidationResult::success(local, metadata)
            } else {
                ValidationResult::failure("Landline number has an unrecognized area code.")
            }
        }
    }
}

/// Shorthand for `validate(input).is_valid()`.
pub fn is_valid(input: Option<&str>) -> bool {
    validate(input).is_valid()
}

/// The canonical local form, or `None` when the input is invalid.
pub fn format(input: Option<&str>) -> Option<String> {
    validate(input).metadata_value("LocalFormat").map(String::from)
}

/// The city for the number's area code, when the code is listed.
pub fn get_city(input: Option<&str>) -> Option<String> {
    validate(input).metadata_value("City").map(String::from)
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test]
    fn test_four_digit_code_takes_precedence() {
        let result = validate(Some("0992-1234567"));
        assert!(result.is_valid(), "{:?}", result.error_message());
        assert_eq!(result.metadata_value("AreaCode"), Some("0992"));
        assert_eq!(result.metadata_value("City"), Some("Abbottabad"));
        assert_eq!(result.metadata_value("SubscriberNumber"), Some("1234567"));
        assert_eq!(result.metadata_value("LocalFormat"), Some("09921234567"));
        assert_eq!(
            result.metadata_value("InternationalFormat"),
            Some("+929921234567")
        );
    }

    #[test_case("021-12345678"; "dashed")]
    #[test_case("+92 21 12345678"; "plus country code")]
    #[test_case("922112345678"; "bare country code")]
    fn test_karachi_forms(input: &str) {
        let result = validate(Some(input));
        assert!(result.is_valid(), "{:?}", result.error_message());
        assert_eq!(result.metadata_value("AreaCode"), Some("021"));
        assert_eq!(result.metadata_value("City"), Some("Karachi"));
        assert_eq!(result.metadata_value("LocalFormat"), Some("02112345678"));
    }

    #[test]
    fn test_three_digit_code_resolved_after_four_digit_miss() {
        // 0511 is not a listed 4-digit code, so lookup falls back to 051.
        let result = validate(Some("051-1234567"));
        assert_eq!(result.metadata_value("AreaCode"), Some("051"));
        assert_eq!(result.metadata_value("City"), Some("Islamabad"));
    }

    #[test]
    fn test_subscriber_length_mismatch() {
        // Karachi requires 8 subscriber digits.
        let result = validate(Some("021-1234567"));
        assert!(!result.is_valid());
        assert_eq!(
            result.error_message(),
            Some("Karachi numbers require a 8-digit subscriber number.")
        );
    }

    #[test]
    fn test_unknown_area_code_fallback() {
        let result = validate(Some("0989-1234567"));
        assert!(result.is_valid());
        assert_eq!(result.metadata_value("AreaCode"), Some("Unknown"));
        assert_eq!(result.metadata_value("City"), None);
        assert_eq!(result.metadata_value("LocalFormat"), Some("09891234567"));
        assert_eq!(
            result.metadata_value("InternationalFormat"),
            Some("+929891234567")
        );
    }

    #[test]
    fn test_unknown_area_code_with_twelve_digits_rejected() {
        let result = validate(Some("098912345678"));
        assert_eq!(
            result.error_message(),
            Some("Landline number has an unrecognized area code.")
        );
    }

    #[test_case("0921234"; "too short")]
    #[test_case("0992123456789"; "too long")]
    fn test_length_bounds(input: &str) {
        assert_eq!(
            validate(Some(input)).error_message(),
            Some("Landline number must be 10 to 12 digits long.")
        );
    }

    #[test]
    fn test_unrecognized_prefix_shape() {
        let result = validate(Some("12345678901"));
        assert_eq!(
            result.error_message(),
            Some("Landline number must start with an area code or the +92 country code.")
        );
    }

    #[test]
    fn test_letters_rejected() {
        let result = validate(Some("0992-ABCDEFG"));
        assert_eq!(
            result.error_message(),
            Some("Landline number may contain only digits.")
        );
    }

    #[test]
    fn test_missing_input() {
        assert_eq!(
            validate(Some(" \t")).error_message(),
            Some("Landline number is required.")
        );
    }
}
