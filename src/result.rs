//! Validation result type
//!
//! Every validator in this crate reports its outcome through the same
//! immutable `ValidationResult` value instead of raising errors. This keeps
//! callers in control of error handling and carries enough detail for
//! enrichment (canonical form + derived metadata).

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Outcome of a single validation call.
///
/// Invariants: `is_valid` is true iff `error_message` is absent, and
/// `sanitized` is present only on success. Metadata is populated only on
/// success and only with keys relevant to the validated format.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationResult {
    is_valid: bool,
    error_message: Option<String>,
    sanitized: Option<String>,
    metadata: BTreeMap<String, String>,
}

impl ValidationResult {
    /// Construct a success result with the canonical form and derived metadata.
    pub fn success(sanitized: impl Into<String>, metadata: BTreeMap<String, String>) -> Self {
        Self {
            is_valid: true,
            error_message: None,
            sanitized: Some(sanitized.into()),
            metadata,
        }
    }

    /// Construct a failure result with a human-readable reason.
    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            is_valid: false,
            error_message: Some(message.into()),
            sanitized: None,
            metadata: BTreeMap::new(),
        }
    }

    /// Construct the failure used by every validator for missing input.
    pub(crate) fn required(field: &str) -> Self {
        Self::failure(format!("{} is required.", field))
    }

    /// Overall validity.
    pub fn is_valid(&self) -> bool {
        self.is_valid
    }

    /// Failure reason; present iff the result is invalid.
    pub fn error_message(&self) -> Option<&str> {
        self.error_message.as_deref()
    }

    /// Canonical digit/character-only form; present iff the result is valid.
    pub fn sanitized(&self) -> Option<&str> {
        self.sanitized.as_deref()
    }

    /// Metadata derived from the input; empty on failure.
    pub fn metadata(&self) -> &BTreeMap<String, String> {
        &self.metadata
    }

    /// Look up a single metadata key.
    pub fn metadata_value(&self, key: &str) -> Option<&str> {
        self.metadata.get(key).map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_result() {
        let mut metadata = BTreeMap::new();
        metadata.insert("Formatted".to_string(), "12345-1234567-1".to_string());

        let result = ValidationResult::success("1234512345671", metadata);
        assert!(result.is_valid());
        assert!(result.error_message().is_none());
        assert_eq!(result.sanitized(), Some("1234512345671"));
        assert_eq!(result.metadata_value("Formatted"), Some("12345-1234567-1"));
    }

    #[test]
    fn test_failure_result() {
        let result = ValidationResult::failure("CNIC must be exactly 13 digits.");
        assert!(!result.is_valid());
        assert_eq!(
            result.error_message(),
            Some("CNIC must be exactly 13 digits.")
        );
        assert!(result.sanitized().is_none());
        assert!(result.metadata().is_empty());
    }

    #[test]
    fn test_required_message() {
        let result = ValidationResult::required("IBAN");
        assert_eq!(result.error_message(), Some("IBAN is required."));
    }

    #[test]
    fn test_serializes_to_json() {
        let result = ValidationResult::failure("Postal code is required.");
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["is_valid"], false);
        assert_eq!(json["error_message"], "Postal code is required.");
    }
}
