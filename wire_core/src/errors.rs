//! # Error Types
//!
//! Structured error types for wire_core. The taxonomy follows the three kinds
//! of failure the engine can produce:
//!
//! - **Validation**: the request itself is malformed (missing fields, values
//!   out of range, mutually exclusive fields both set). Collected exhaustively.
//! - **Configuration**: the request names a standard the engine does not know.
//!   Reported immediately, before validation.
//! - **No solution**: the request is valid but no catalog entry satisfies the
//!   constraints. Reported with the largest entry tried and what it failed.
//!
//! ## Example
//!
//! ```rust
//! use wire_core::errors::{CalcError, CalcResult};
//!
//! fn validate_length(length: f64) -> CalcResult<()> {
//!     if length <= 0.0 {
//!         return Err(CalcError::invalid_input(
//!             "length",
//!             length.to_string(),
//!             "Circuit length must be positive",
//!         ));
//!     }
//!     Ok(())
//! }
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for wire_core operations
pub type CalcResult<T> = Result<T, CalcError>;

/// Structured error type for sizing operations.
///
/// Each variant provides specific context about what went wrong,
/// enabling programmatic error handling by LLMs and other consumers.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum CalcError {
    /// An input value is invalid (out of range, wrong combination, etc.)
    #[error("Invalid input for '{field}': {value} - {reason}")]
    InvalidInput {
        field: String,
        value: String,
        reason: String,
    },

    /// A required field is missing
    #[error("Missing required field: {field}")]
    MissingField { field: String },

    /// One or more validation problems, collected exhaustively
    #[error("Input validation failed: {}", .messages.join("; "))]
    Validation { messages: Vec<String> },

    /// The standard identifier is not in the supported set
    #[error("Unsupported standard '{received}' (supported: {supported})")]
    UnsupportedStandard { received: String, supported: String },

    /// No conductor in the standard's table satisfies ampacity and voltage drop
    #[error(
        "No suitable conductor: largest size checked {largest_checked} failed {}",
        .failed_constraints.join(" and ")
    )]
    NoSuitableConductor {
        largest_checked: String,
        failed_constraints: Vec<String>,
        required_current_a: f64,
    },

    /// No breaker/fuse in the catalog is large enough
    #[error(
        "No suitable protection device: {required_current_a:.2} A exceeds the largest {catalog} rating ({largest_rating_a} A)"
    )]
    NoSuitableProtection {
        catalog: String,
        required_current_a: f64,
        largest_rating_a: f64,
    },

    /// No conduit trade size keeps the fill within the allowable percentage
    #[error(
        "No suitable conduit: largest trade size {largest_trade_size} would be {fill_pct_at_largest:.1}% full (allowed {allowable_fill_pct:.0}%)"
    )]
    NoSuitableConduit {
        largest_trade_size: String,
        fill_pct_at_largest: f64,
        allowable_fill_pct: f64,
    },

    /// A standards table has no row for the requested key
    #[error("No entry for {key} in {table}")]
    TableLookup { table: String, key: String },

    /// JSON serialization/deserialization error
    #[error("Serialization error: {reason}")]
    SerializationError { reason: String },
}

impl CalcError {
    /// Create an InvalidInput error
    pub fn invalid_input(
        field: impl Into<String>,
        value: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        CalcError::InvalidInput {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create a MissingField error
    pub fn missing_field(field: impl Into<String>) -> Self {
        CalcError::MissingField {
            field: field.into(),
        }
    }

    /// Fold a list of validation problems into a single error
    pub fn validation(errors: Vec<CalcError>) -> Self {
        CalcError::Validation {
            messages: errors.iter().map(ToString::to_string).collect(),
        }
    }

    /// Create an UnsupportedStandard error
    pub fn unsupported_standard(received: impl Into<String>, supported: impl Into<String>) -> Self {
        CalcError::UnsupportedStandard {
            received: received.into(),
            supported: supported.into(),
        }
    }

    /// Create a TableLookup error
    pub fn table_lookup(table: impl Into<String>, key: impl Into<String>) -> Self {
        CalcError::TableLookup {
            table: table.into(),
            key: key.into(),
        }
    }

    /// True for the "valid request, but nothing in the catalog fits" family
    pub fn is_no_solution(&self) -> bool {
        matches!(
            self,
            CalcError::NoSuitableConductor { .. }
                | CalcError::NoSuitableProtection { .. }
                | CalcError::NoSuitableConduit { .. }
        )
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            CalcError::InvalidInput { .. } => "INVALID_INPUT",
            CalcError::MissingField { .. } => "MISSING_FIELD",
            CalcError::Validation { .. } => "VALIDATION_FAILED",
            CalcError::UnsupportedStandard { .. } => "UNSUPPORTED_STANDARD",
            CalcError::NoSuitableConductor { .. } => "NO_SUITABLE_CONDUCTOR",
            CalcError::NoSuitableProtection { .. } => "NO_SUITABLE_PROTECTION",
            CalcError::NoSuitableConduit { .. } => "NO_SUITABLE_CONDUIT",
            CalcError::TableLookup { .. } => "TABLE_LOOKUP",
            CalcError::SerializationError { .. } => "SERIALIZATION_ERROR",
        }
    }
}

impl From<serde_json::Error> for CalcError {
    fn from(err: serde_json::Error) -> Self {
        CalcError::SerializationError {
            reason: err.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_serialization() {
        let error = CalcError::invalid_input("length", "-5", "Circuit length must be positive");
        let json = serde_json::to_string(&error).unwrap();
        let roundtrip: CalcError = serde_json::from_str(&json).unwrap();
        assert_eq!(error, roundtrip);
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(CalcError::missing_field("test").error_code(), "MISSING_FIELD");
        assert_eq!(
            CalcError::unsupported_standard("CEC", "NEC, IEC").error_code(),
            "UNSUPPORTED_STANDARD"
        );
    }

    #[test]
    fn test_validation_message_lists_every_problem() {
        let error = CalcError::validation(vec![
            CalcError::missing_field("standard"),
            CalcError::invalid_input("voltage_v", "0", "Voltage must be positive"),
        ]);
        let text = error.to_string();
        assert!(text.contains("standard"));
        assert!(text.contains("voltage_v"));
    }

    #[test]
    fn test_no_solution_family() {
        let error = CalcError::NoSuitableConductor {
            largest_checked: "500 kcmil".to_string(),
            failed_constraints: vec!["ampacity".to_string(), "voltage drop".to_string()],
            required_current_a: 900.0,
        };
        assert!(error.is_no_solution());
        assert!(error.to_string().contains("ampacity and voltage drop"));
        assert!(!CalcError::missing_field("x").is_no_solution());
    }
}
