//! # Store Error Types
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Propagation                                    │
//! │                                                                         │
//! │  StoreError (this module)                                              │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ApiError (in receipt-api) ← status code + JSON body                   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Client sees {"error": "No receipt found for that id"}                 │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use thiserror::Error;

use receipt_core::ReceiptId;

/// Receipt store errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// No receipt was ever stored under this id.
    #[error("Receipt not found: {id}")]
    NotFound { id: ReceiptId },

    /// An id was issued twice.
    ///
    /// ## When This Occurs
    /// Never with generated UUID v4 ids. The store refuses rather than
    /// overwrite, so an issued id always keeps its first receipt.
    #[error("Receipt id already in use: {id}")]
    Duplicate { id: ReceiptId },
}

impl StoreError {
    pub fn not_found(id: impl Into<ReceiptId>) -> Self {
        StoreError::NotFound { id: id.into() }
    }

    pub fn duplicate(id: impl Into<ReceiptId>) -> Self {
        StoreError::Duplicate { id: id.into() }
    }
}

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;
