//! # receipt-core: Pure Business Logic for Receipt Points
//!
//! This crate is the **heart** of the receipt points service. It contains the
//! validation contract and the points rule engine as pure functions with zero
//! I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Receipt Points Architecture                         │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    HTTP API (axum)                              │   │
//! │  │    POST /receipts/process     GET /receipts/{id}/points         │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │             ★ receipt-core (THIS CRATE) ★                       │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐      ┌────────────┐      ┌───────────┐         │   │
//! │  │   │   types   │      │ validation │      │  points   │         │   │
//! │  │   │  Receipt  │ ───► │  raw JSON  │ ───► │  7 rules  │         │   │
//! │  │   │   Item    │      │  → Receipt │      │  → u64    │         │   │
//! │  │   └───────────┘      └────────────┘      └───────────┘         │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO STORAGE • NO NETWORK • PURE FUNCTIONS            │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                receipt-store (In-memory repository)             │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Receipt, Item, StoredReceipt, ReceiptId)
//! - [`validation`] - Field format checks on raw JSON input
//! - [`points`] - The points rule engine
//! - [`error`] - Domain error types
//!
//! ## Example Usage
//!
//! ```rust
//! use receipt_core::{points, validation};
//! use serde_json::json;
//!
//! let input = json!({
//!     "retailer": "Costco",
//!     "purchaseDate": "2022-01-15",
//!     "purchaseTime": "13:00",
//!     "total": "10.00",
//!     "items": [{ "shortDescription": "Chicken", "price": "10.00" }]
//! });
//!
//! let receipt = validation::validate_receipt(&input).unwrap();
//! assert_eq!(points::score(&receipt), 87);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod points;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use error::{CoreError, CoreResult, ValidationError};
pub use points::{score, PointsBreakdown};
pub use types::*;
pub use validation::validate_receipt;
