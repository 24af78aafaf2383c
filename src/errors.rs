//! Error handling for fail-fast callers
//!
//! The core validators never raise errors; every condition is funnelled into
//! a [`ValidationResult`](crate::ValidationResult). This module provides the
//! one adapter that converts a failing result into a real error for callers
//! that want fail-fast semantics.

use crate::result::ValidationResult;
use thiserror::Error;

/// A validation failure promoted to an error.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{field}: {message}")]
pub struct ValidationError {
    /// The field or input that failed validation.
    pub field: String,
    /// The failure reason reported by the validator.
    pub message: String,
}

/// Return `Err` when the given result is a failure, `Ok(())` otherwise.
pub fn ensure_valid(field: &str, result: &ValidationResult) -> Result<(), ValidationError> {
    match result.error_message() {
        Some(message) => Err(ValidationError {
            field: field.to_string(),
            message: message.to_string(),
        }),
        None => Ok(()),
    }
}
