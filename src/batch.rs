//! Batch validation aggregator
//!
//! Runs several named validations and collects the outcomes, exposing a
//! failed-field view for form-style error reporting.

use crate::result::ValidationResult;
use serde::{Deserialize, Serialize};

/// A named validation to run as part of a batch.
pub type BatchCheck<'a> = (&'a str, Box<dyn FnOnce() -> ValidationResult + 'a>);

/// Aggregated outcome of a batch of named validations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchResult {
    results: Vec<(String, ValidationResult)>,
}

/// Run each check in order and collect the results.
pub fn run_batch(checks: Vec<BatchCheck<'_>>) -> BatchResult {
    BatchResult {
        results: checks
            .into_iter()
            .map(|(field, check)| (field.to_string(), check()))
            .collect(),
    }
}

impl BatchResult {
    /// True when every field validated successfully.
    pub fn is_valid(&self) -> bool {
        self.results.iter().all(|(_, result)| result.is_valid())
    }

    /// All per-field results, in input order.
    pub fn results(&self) -> &[(String, ValidationResult)] {
        &self.results
    }

    /// The result for a single field, if it was part of the batch.
    pub fn get(&self, field: &str) -> Option<&ValidationResult> {
        self.results
            .iter()
            .find(|(name, _)| name == field)
            .map(|(_, result)| result)
    }

    /// Failing fields and their error messages, in input order.
    pub fn errors(&self) -> Vec<(&str, &str)> {
        self.results
            .iter()
            .filter_map(|(name, result)| {
                result
                    .error_message()
                    .map(|message| (name.as_str(), message))
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validators::{identity_number, postal_code};

    #[test]
    fn test_batch_all_valid() {
        let batch = run_batch(vec![
            (
                "cnic",
                Box::new(|| identity_number::validate(Some("35202-1234567-1")))
                    as Box<dyn FnOnce() -> ValidationResult>,
            ),
            (
                "postal_code",
                Box::new(|| postal_code::validate(Some("44000"))) as _,
            ),
        ]);

        assert!(batch.is_valid());
        assert!(batch.errors().is_empty());
        assert!(batch.get("cnic").unwrap().is_valid());
    }

    #[test]
    fn test_batch_collects_failures_in_input_order() {
        let batch = run_batch(vec![
            ("postal_code", Box::new(|| postal_code::validate(Some("09999"))) as _),
            (
                "cnic",
                Box::new(|| identity_number::validate(Some("35202-1234567-1")))
                    as Box<dyn FnOnce() -> ValidationResult>,
            ),
            ("missing", Box::new(|| identity_number::validate(None)) as _),
        ]);

        assert!(!batch.is_valid());
        let errors = batch.errors();
        assert_eq!(errors.len(), 2);
        assert_eq!(errors[0].0, "postal_code");
        assert_eq!(errors[1].0, "missing");
        assert_eq!(errors[1].1, "CNIC is required.");
    }

    #[test]
    fn test_batch_get_unknown_field() {
        let batch = run_batch(vec![]);
        assert!(batch.is_valid());
        assert!(batch.get("anything").is_none());
    }
}
