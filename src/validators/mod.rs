//! Validator modules
//!
//! One module per identifier format. Each exposes the same contract:
//! `validate(Option<&str>) -> ValidationResult`, an `is_valid` shorthand, and
//! thin accessors that project single metadata keys out of a result.

pub mod bank_account;
pub mod identity_number;
pub mod landline_number;
pub mod mobile_number;
pub mod postal_code;
pub mod tax_id;
pub mod tax_registration;
pub mod vehicle_plate;

/// Shared helpers used by every validator.
pub(crate) mod utils {
    /// Trim surrounding whitespace and reject empty/missing input.
    pub(crate) fn presence(input: Option<&str>) -> Option<&str> {
        input.map(str::trim).filter(|s| !s.is_empty())
    }

    /// True when the string contains any non-ASCII character. Catches
    /// Arabic-Indic digit forms before they reach pattern matching.
    pub(crate) fn contains_non_ascii(s: &str) -> bool {
        s.chars().any(|c| !c.is_ascii())
    }

    /// True when every character equals the first one.
    pub(crate) fn all_identical(s: &str) -> bool {
        let mut chars = s.chars();
        match chars.next() {
            Some(first) => chars.all(|c| c == first),
            None => false,
        }
    }

    /// Drop the given separator characters from the string.
    pub(crate) fn strip_separators(s: &str, separators: &[char]) -> String {
        s.chars().filter(|c| !separators.contains(c)).collect()
    }

}
