//! # receipt-store: Storage Layer for Receipt Points
//!
//! Keeps every processed receipt, keyed by the id handed back to the caller.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Receipt Points Data Flow                            │
//! │                                                                         │
//! │  POST /receipts/process          GET /receipts/{id}/points             │
//! │       │                                 │                               │
//! │       ▼  put(id, stored)                ▼  get(id)                      │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                 receipt-store (THIS CRATE)                      │   │
//! │  │                                                                 │   │
//! │  │   ReceiptStore                                                  │   │
//! │  │   RwLock<HashMap<ReceiptId, StoredReceipt>>                     │   │
//! │  │                                                                 │   │
//! │  │   • grows monotonically: no update, no delete, no expiry        │   │
//! │  │   • discarded when the process exits                            │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`error`] - Store error types
//! - [`memory`] - The in-memory [`ReceiptStore`]
//!
//! ## Usage
//!
//! ```rust,ignore
//! use receipt_store::ReceiptStore;
//!
//! let store = ReceiptStore::new();
//! store.put(id.clone(), stored).await?;
//! let points = store.get(&id).await?.points();
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod memory;

// =============================================================================
// Re-exports
// =============================================================================

pub use error::{StoreError, StoreResult};
pub use memory::ReceiptStore;
