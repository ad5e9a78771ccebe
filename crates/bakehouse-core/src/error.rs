//! # Error Types
//!
//! Domain-specific error types for bakehouse-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  bakehouse-core errors (this file)                                     │
//! │  ├── CoreError        - Caller contract violations                     │
//! │  └── ValidationError  - Input validation failures                      │
//! │                                                                         │
//! │  quote CLI errors (apps/quote)                                         │
//! │  └── QuoteError       - I/O, JSON and core failures                    │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → QuoteError → exit code            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## What is NOT an error
//! Malformed price strings degrade to a zero modifier and negative final
//! prices are returned as-is. Neither ever produces a `CoreError`.

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Core business logic errors.
#[derive(Debug, Error)]
pub enum CoreError {
    /// The caller passed data of the wrong shape.
    ///
    /// ## When This Occurs
    /// - The selected variants are not a JSON array
    /// - An element of the array is not a variant record
    ///
    /// This is a programming error in the caller, not bad catalog data.
    #[error("Invalid argument: {reason}")]
    InvalidArgument { reason: String },

    /// A variant cannot be selected (out of stock or zero quantity left).
    #[error("Variant {variant_id} is not available")]
    VariantUnavailable { variant_id: String },

    /// A total left the representable money range.
    #[error("Amount out of range: {context}")]
    AmountOutOfRange { context: String },

    /// Delivery was requested without a shipping zone.
    #[error("A shipping zone is required for delivery")]
    ZoneRequired,

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

impl CoreError {
    /// Creates an invalid argument error.
    pub fn invalid_argument(reason: impl Into<String>) -> Self {
        CoreError::InvalidArgument {
            reason: reason.into(),
        }
    }
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },

    /// Value must be positive.
    #[error("{field} must be positive")]
    MustBePositive { field: String },

    /// Invalid format (e.g., unparseable price).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },

    /// Duplicate value (e.g., two variants from the same group).
    #[error("{field} '{value}' already exists")]
    Duplicate { field: String, value: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = CoreError::invalid_argument("selected variants must be an array, got string");
        assert_eq!(
            err.to_string(),
            "Invalid argument: selected variants must be an array, got string"
        );

        let err = CoreError::VariantUnavailable {
            variant_id: "42".to_string(),
        };
        assert_eq!(err.to_string(), "Variant 42 is not available");

        let err = CoreError::AmountOutOfRange {
            context: "line total".to_string(),
        };
        assert_eq!(err.to_string(), "Amount out of range: line total");
    }

    #[test]
    fn test_validation_error_messages() {
        let err = ValidationError::Duplicate {
            field: "variant group".to_string(),
            value: "Size".to_string(),
        };
        assert_eq!(err.to_string(), "variant group 'Size' already exists");

        let err = ValidationError::MustBePositive {
            field: "quantity".to_string(),
        };
        assert_eq!(err.to_string(), "quantity must be positive");
    }

    #[test]
    fn test_validation_converts_to_core_error() {
        let validation_err = ValidationError::Required {
            field: "base_price".to_string(),
        };
        let core_err: CoreError = validation_err.into();
        assert!(matches!(core_err, CoreError::Validation(_)));
    }
}
