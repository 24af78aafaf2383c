//! Vehicle registration plate validation
//!
//! 1-4 letters and 2-5 digits with an optional separator. Government and
//! diplomatic prefixes accept shorter numbers; the registration city is
//! resolved longest-prefix-first.

use crate::result::ValidationResult;
use crate::validators::utils;
use lazy_static::lazy_static;
use regex::Regex;
use std::collections::BTreeMap;

lazy_static! {
    static ref PLATE_REGEX: Regex = Regex::new(r"^([A-Za-z]{1,4})[ -]?(\d+)$").unwrap();
}

/// Prefixes reserved for government and diplomatic vehicles.
static GOVERNMENT_PREFIXES: &[&str] = &["G", "GS", "GN", "DN", "UN"];

const MAX_DIGITS: usize = 5;
const MIN_DIGITS_GOVERNMENT: usize = 2;
const MIN_DIGITS_CIVILIAN: usize = 3;

/// Registration city by plate letter prefix. Lookup tries the full prefix
/// first, then 3-, 2- and 1-letter leading substrings.
static CITY_PREFIXES: &[(&str, &str)] = &[
    ("ICT", "Islamabad"),
    ("IDS", "Islamabad"),
    ("LE", "Lahore"),
    ("LX", "Lahore"),
    ("FD", "Faisalabad"),
    ("MN", "Multan"),
    ("RI", "Rawalpindi"),
    ("GA", "Gujranwala"),
    ("SW", "Sahiwal"),
    ("BW", "Bahawalpur"),
    ("SG", "Sargodha"),
    ("A", "Karachi"),
    ("B", "Quetta"),
    ("L", "Lahore"),
    ("P", "Peshawar"),
    ("S", "Sukkur"),
];

/// Validate a vehicle plate and derive its metadata.
pub fn validate(input: Option<&str>) -> ValidationResult {
    let Some(raw) = utils::presence(input) else {
        return ValidationResult::required("Vehicle plate");
    };
    if utils::contains_non_ascii(raw) {
        return ValidationResult::failure("Vehicle plate contains non-ASCII characters.");
    }

    let Some(captures) = PLATE_REGEX.captures(raw) else {
        return ValidationResult::failure(
            "Vehicle plate must be 1 to 4 letters followed by 2 to 5 digits.",
        );
    };
    let prefix = captures[1].to_uppercase();
    let number = captures[2].to_string();

    let government = GOVERNMENT_PREFIXES.contains(&prefix.as_str());
    let min_digits = if government {
        MIN_DIGITS_GOVERNMENT
    } else {
        MIN_DIGITS_CIVILIAN
    };
    if number.len() < min_digits {
        return ValidationResult::failure(format!(
            "Vehicle plate number must have at least {} digits.",
            min_digits
        ));
    }
    if number.len() > MAX_DIGITS {
        return ValidationResult::failure(format!(
            "Vehicle plate number must have at most {} digits.",
            MAX_DIGITS
        ));
    }

    let mut metadata = BTreeMap::new();
    metadata.insert("Prefix".to_string(), prefix.clone());
    metadata.insert("Number".to_string(), number.clone());
    metadata.insert("Formatted".to_string(), format!("{}-{}", prefix, number));
    if government {
        metadata.insert("Type".to_string(), "Government/Diplomatic".to_string());
    }
    if let Some(city) = lookup_city(&prefix) {
        metadata.insert("RegistrationCity".to_string(), city.to_string());
    }

    ValidationResult::success(format!("{}{}", prefix, number), metadata)
}

fn lookup_city(prefix: &str) -> Option<&'static str> {
    for len in (1..=prefix.len().min(4)).rev() {
        let candidate = &prefix[..len];
        if let Some((_, city)) = CITY_PREFIXES.iter().find(|(p, _)| *p == candidate) {
            return Some(*city);
        }
    }
    None
}

/// Shorthand for `validate(input).is_valid()`.
pub fn is_valid(input: Option<&str>) -> bool {
    validate(input).is_valid()
}

/// The dashed canonical form, or `None` when the input is invalid.
pub fn format(input: Option<&str>) -> Option<String> {
    validate(input).metadata_value("Formatted").map(String::from)
}

/// The registration city, when any prefix substring is listed.
pub fn get_city(input: Option<&str>) -> Option<String> {
    validate(input)
        .metadata_value("RegistrationCity")
        .map(String::from)
}
