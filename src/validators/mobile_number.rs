//! Mobile number validation
//!
//! Accepts national (`03xx...`) and country-code (`+92`, `92`, `0092`)
//! forms, canonicalizes to the 11-digit local form and resolves the carrier
//! from the 4-digit prefix.

use crate::result::ValidationResult;
use crate::validators::utils;
use lazy_static::lazy_static;
use log::debug;
use regex::Regex;
use std::collections::{BTreeMap, HashMap};

lazy_static! {
    static ref MOBILE_REGEX: Regex = Regex::new(r"^(?:0092|\+92|92|0)(3\d{9})$").unwrap();
    static ref OPERATORS: HashMap<&'static str, &'static str> = [
        ("0300", "Jazz"),
        ("0301", "Jazz"),
        ("0302", "Jazz"),
        ("0303", "Jazz"),
        ("0304", "Jazz"),
        ("0305", "Jazz"),
        ("0306", "Jazz"),
        ("0307", "Jazz"),
        ("0308", "Jazz"),
        ("0309", "Jazz"),
        ("0310", "Zong"),
        ("0311", "Zong"),
        ("0312", "Zong"),
        ("0313", "Zong"),
        ("0314", "Zong"),
        ("0315", "Zong"),
        ("0316", "Zong"),
        ("0317", "Zong"),
        ("0318", "Zong"),
        // Former Warid ranges, folded into Jazz after the merger.
        ("0320", "Jazz"),
        ("0321", "Jazz"),
        ("0322", "Jazz"),
        ("0323", "Jazz"),
        ("0324", "Jazz"),
        ("0325", "Jazz"),
        ("0330", "Ufone"),
        ("0331", "Ufone"),
        ("0332", "Ufone"),
        ("0333", "Ufone"),
        ("0334", "Ufone"),
        ("0335", "Ufone"),
        ("0336", "Ufone"),
        ("0337", "Ufone"),
        ("0340", "Telenor"),
        ("0341", "Telenor"),
        ("0342", "Telenor"),
        ("0343", "Telenor"),
        ("0344", "Telenor"),
        ("0345", "Telenor"),
        ("0346", "Telenor"),
        ("0347", "Telenor"),
        ("0355", "SCOM"),
    ]
    .iter()
    .copied()
    .collect();
}

/// Validate a mobile number and derive its metadata.
pub fn validate(input: Option<&str>) -> ValidationResult {
    let Some(raw) = utils::presence(input) else {
        return ValidationResult::required("Mobile number");
    };
    if utils::contains_non_ascii(raw) {
        return ValidationResult::failure("Mobile number contains non-ASCII characters.");
    }

    let compact = utils::strip_separators(raw, &[' ', '-', '(', ')']);
    let Some(captures) = MOBILE_REGEX.captures(&compact) else {
        return ValidationResult::failure(
            "Mobile number must be a 10-digit subscriber number starting with 3, \
             with an optional 0, 92, +92 or 0092 prefix.",
        );
    };
    let subscriber = &captures[1];

    let local = format!("0{}", subscriber);
    let international = format!("+92{}", subscriber);
    let prefix = format!("0{}", &subscriber[..3]);
    let carrier = OPERATORS.get(prefix.as_str()).copied().unwrap_or_else(|| {
        debug!("no operator entry for mobile prefix {}", prefix);
        "Unknown"
    });

    let mut metadata = BTreeMap::new();
    metadata.insert("LocalFormat".to_string(), local.clone());
    metadata.insert("InternationalFormat".to_string(), international.clone());
    metadata.insert("E164".to_string(), international);
    metadata.insert("Prefix".to_string(), prefix);
    metadata.insert("Carrier".to_string(), carrier.to_string());

    ValidationResult::success(local, metadata)
}

/// Shorthand for `validate(input).is_valid()`.
pub fn is_valid(input: Option<&str>) -> bool {
    validate(input).is_valid()
}

/// The canonical local form, or `None` when the input is invalid.
pub fn format(input: Option<&str>) -> Option<String> {
    validate(input).metadata_value("LocalFormat").map(String::from)
}

/// The operator serving the number's prefix, `"Unknown"` when unlisted.
pub fn get_carrier(input: Option<&str>) -> Option<String> {
    validate(input).metadata_value("Carrier").map(String::from)
}
