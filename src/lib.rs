//! # Pakistan Validation
//!
//! Validation and enrichment for Pakistani identifier formats. Each validator
//! checks a string against fixed format rules and, on success, derives
//! structured metadata from it (province, carrier, bank, city).
//!
//! ## Supported formats
//!
//! - CNIC national identity numbers ([`validators::identity_number`])
//! - NTN tax numbers ([`validators::tax_id`])
//! - STRN sales tax registration numbers ([`validators::tax_registration`])
//! - PK IBANs with MOD-97 verification ([`validators::bank_account`])
//! - Mobile numbers with carrier lookup ([`validators::mobile_number`])
//! - Landline numbers with area-code lookup ([`validators::landline_number`])
//! - Postal codes ([`validators::postal_code`])
//! - Vehicle registration plates ([`validators::vehicle_plate`])
//!
//! Every validator is a pure function returning a [`ValidationResult`]; no
//! input makes one panic or block. Results are immutable and safe to share
//! across threads, as are the lookup tables behind them.
//!
//! ```
//! use pakistan_validation::validators::mobile_number;
//!
//! let result = mobile_number::validate(Some("0300-1234567"));
//! assert!(result.is_valid());
//! assert_eq!(result.metadata_value("Carrier"), Some("Jazz"));
//! ```

mod batch;
mod errors;
mod result;
pub mod validators;

pub use batch::{run_batch, BatchCheck, BatchResult};
pub use errors::{ensure_valid, ValidationError};
pub use result::ValidationResult;

/// Re-export commonly used items for convenience
pub mod prelude {
    pub use crate::batch::{run_batch, BatchResult};
    pub use crate::errors::{ensure_valid, ValidationError};
    pub use crate::result::ValidationResult;
    pub use crate::validators;
}

/// Version of the validation library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
