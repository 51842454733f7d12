//! # In-Memory Receipt Store
//!
//! ## Thread Safety
//! The map sits behind a `tokio::sync::RwLock`:
//! 1. Many lookups may run at once
//! 2. An insert takes the lock exclusively, so a reader never sees a
//!    half-written entry
//! 3. Each operation holds the lock only for the map access itself
//!
//! The store is owned by whoever builds it (the API wraps it in an `Arc`);
//! there is no process-wide instance.

use std::collections::hash_map::Entry;
use std::collections::HashMap;

use tokio::sync::RwLock;
use tracing::debug;

use receipt_core::{ReceiptId, StoredReceipt};

use crate::error::{StoreError, StoreResult};

/// In-memory receipt store.
///
/// ## Usage
/// ```rust,ignore
/// let store = ReceiptStore::new();
///
/// let id = ReceiptId::generate();
/// store.put(id.clone(), StoredReceipt::new(receipt, Utc::now())).await?;
///
/// let stored = store.get(&id).await?;
/// ```
#[derive(Debug, Default)]
pub struct ReceiptStore {
    receipts: RwLock<HashMap<ReceiptId, StoredReceipt>>,
}

impl ReceiptStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        ReceiptStore {
            receipts: RwLock::new(HashMap::new()),
        }
    }

    /// Stores a scored receipt under a fresh id.
    ///
    /// ## Errors
    /// [`StoreError::Duplicate`] if `id` is already taken; the existing entry
    /// is left untouched.
    pub async fn put(&self, id: ReceiptId, stored: StoredReceipt) -> StoreResult<()> {
        let mut receipts = self.receipts.write().await;

        match receipts.entry(id) {
            Entry::Occupied(entry) => Err(StoreError::duplicate(entry.key().clone())),
            Entry::Vacant(entry) => {
                debug!(id = %entry.key(), points = stored.points(), "Stored receipt");
                entry.insert(stored);
                Ok(())
            }
        }
    }

    /// Looks up a receipt by id.
    ///
    /// ## Errors
    /// [`StoreError::NotFound`] if nothing was stored under `id`.
    pub async fn get(&self, id: &ReceiptId) -> StoreResult<StoredReceipt> {
        self.receipts
            .read()
            .await
            .get(id)
            .cloned()
            .ok_or_else(|| StoreError::not_found(id.clone()))
    }

    /// Looks up only the points for `id`, without cloning the receipt.
    pub async fn points(&self, id: &ReceiptId) -> StoreResult<u64> {
        self.receipts
            .read()
            .await
            .get(id)
            .map(StoredReceipt::points)
            .ok_or_else(|| StoreError::not_found(id.clone()))
    }

    /// Number of stored receipts.
    pub async fn len(&self) -> usize {
        self.receipts.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.receipts.read().await.is_empty()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
