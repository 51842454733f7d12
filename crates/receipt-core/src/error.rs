//! # Error Types
//!
//! Domain-specific error types for receipt-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  receipt-core errors (this file)                                       │
//! │  ├── CoreError        - Submission rejected before scoring             │
//! │  └── ValidationError  - One violated field rule                        │
//! │                                                                         │
//! │  receipt-store errors (separate crate)                                 │
//! │  └── StoreError       - Lookup / insert failures                       │
//! │                                                                         │
//! │  HTTP errors (in app)                                                  │
//! │  └── ApiError         - Status code + {"error": "..."} body            │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → ApiError → Client                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Wire Messages
//! The `Display` output of every variant is sent verbatim to clients in the
//! `error` field, so the strings below are part of the API.

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Reasons a submitted receipt is rejected before scoring.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    /// No usable payload: no bytes, `{}` or `[]`.
    #[error("Empty body")]
    EmptyBody,

    /// Payload present but violates a field rule.
    #[error(transparent)]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// A single violated receipt rule.
///
/// Checks run in field order and stop at the first failure, so a receipt
/// with several problems only ever reports the earliest one.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// `retailer` missing, not a string, or outside `[\w\s\-&]+`.
    #[error("Invalid retailer format")]
    InvalidRetailer,

    /// `purchaseDate` missing, not a string, or not `YYYY-MM-DD`.
    #[error("Invalid purchase date format")]
    InvalidPurchaseDate,

    /// `purchaseTime` missing, not a string, or not `HH:MM`.
    #[error("Invalid purchase time format")]
    InvalidPurchaseTime,

    /// `total` missing, not a string, or not `\d+\.\d{2}`.
    #[error("Invalid total format")]
    InvalidTotal,

    /// `items` missing, not an array, or empty.
    #[error("Items must be a non-empty array")]
    EmptyItems,

    /// `shortDescription` of the item at `index` is invalid.
    #[error("Invalid shortDescription format")]
    InvalidShortDescription { index: usize },

    /// `price` of the item at `index` is invalid.
    #[error("Invalid price format")]
    InvalidPrice { index: usize },
}

impl ValidationError {
    /// Name of the offending field as it appears on the wire.
    pub fn field(&self) -> &'static str {
        match self {
            ValidationError::InvalidRetailer => "retailer",
            ValidationError::InvalidPurchaseDate => "purchaseDate",
            ValidationError::InvalidPurchaseTime => "purchaseTime",
            ValidationError::InvalidTotal => "total",
            ValidationError::EmptyItems => "items",
            ValidationError::InvalidShortDescription { .. } => "shortDescription",
            ValidationError::InvalidPrice { .. } => "price",
        }
    }
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(CoreError::EmptyBody.to_string(), "Empty body");
        assert_eq!(
            ValidationError::InvalidPurchaseDate.to_string(),
            "Invalid purchase date format"
        );
        assert_eq!(
            ValidationError::EmptyItems.to_string(),
            "Items must be a non-empty array"
        );
        assert_eq!(
            ValidationError::InvalidPrice { index: 3 }.to_string(),
            "Invalid price format"
        );
    }

    #[test]
    fn test_validation_converts_to_core_error() {
        let core_err: CoreError = ValidationError::InvalidTotal.into();
        assert!(matches!(core_err, CoreError::Validation(_)));
        // transparent: the wire message is unchanged
        assert_eq!(core_err.to_string(), "Invalid total format");
    }

    #[test]
    fn test_field_names() {
        assert_eq!(ValidationError::InvalidRetailer.field(), "retailer");
        assert_eq!(
            ValidationError::InvalidShortDescription { index: 0 }.field(),
            "shortDescription"
        );
    }
}
