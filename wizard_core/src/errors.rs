//! # Error Types
//!
//! Structured error types for wizard_core. The only domain failure is a
//! rejected patient commit; the remaining variant covers front ends that
//! address form fields by name.
//!
//! ## Example
//!
//! ```rust
//! use wizard_core::errors::{WizardError, WizardResult};
//!
//! fn require_name(name: &str) -> WizardResult<()> {
//!     if name.trim().is_empty() {
//!         return Err(WizardError::validation(
//!             vec!["name".to_string()],
//!             "Patient name and age are required.",
//!         ));
//!     }
//!     Ok(())
//! }
//!
//! assert!(require_name("  ").is_err());
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for wizard_core operations
pub type WizardResult<T> = Result<T, WizardError>;

/// Structured error type for wizard operations.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "type", content = "details")]
pub enum WizardError {
    /// Required draft fields were blank when the draft was committed
    #[error("{message}")]
    Validation {
        /// Names of the blank required fields, in form order
        missing: Vec<String>,
        /// User-facing message
        message: String,
    },

    /// A field name did not match any field of the named form
    #[error("Unknown {form} field: '{field}'")]
    UnknownField { form: String, field: String },
}

impl WizardError {
    /// Create a Validation error
    pub fn validation(missing: Vec<String>, message: impl Into<String>) -> Self {
        WizardError::Validation {
            missing,
            message: message.into(),
        }
    }

    /// Create an UnknownField error
    pub fn unknown_field(form: impl Into<String>, field: impl Into<String>) -> Self {
        WizardError::UnknownField {
            form: form.into(),
            field: field.into(),
        }
    }

    /// Whether the operator can fix this by editing the form and retrying.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, WizardError::Validation { .. })
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            WizardError::Validation { .. } => "VALIDATION_ERROR",
            WizardError::UnknownField { .. } => "UNKNOWN_FIELD",
        }
    }
}
