//! # Application State
//!
//! Everything a request handler needs, built once at startup and shared
//! through axum's `State` extractor as `Arc<AppState>`.
//!
//! ## Submit Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  raw JSON ──► validate_receipt ──► StoredReceipt::new ──► store.put    │
//! │                   │                  (scores once)          │           │
//! │                   ▼                                         ▼           │
//! │             ApiError::Rejected                      fresh ReceiptId     │
//! │             (store untouched)                                           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use chrono::Utc;
use serde_json::Value;
use tracing::{debug, info, warn};

use receipt_core::{points, validate_receipt, ReceiptId, StoredReceipt};
use receipt_store::ReceiptStore;

use crate::config::ApiConfig;
use crate::error::ApiError;

/// Shared application state.
#[derive(Debug)]
pub struct AppState {
    store: ReceiptStore,
    config: ApiConfig,
}

impl AppState {
    /// Creates state with an empty store.
    pub fn new(config: ApiConfig) -> Self {
        AppState {
            store: ReceiptStore::new(),
            config,
        }
    }

    pub fn store(&self) -> &ReceiptStore {
        &self.store
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    /// Validates, scores and stores a submission, returning its new id.
    ///
    /// A rejected submission leaves the store unchanged.
    pub async fn process_receipt(&self, input: &Value) -> Result<ReceiptId, ApiError> {
        let receipt = validate_receipt(input).map_err(|err| {
            warn!(error = %err, "Receipt rejected");
            ApiError::from(err)
        })?;

        debug!(
            retailer = %receipt.retailer,
            breakdown = ?points::breakdown(&receipt),
            "Scoring receipt"
        );

        let stored = StoredReceipt::new(receipt, Utc::now());
        let points = stored.points();
        let id = ReceiptId::generate();

        self.store.put(id.clone(), stored).await?;

        info!(%id, points, "Receipt processed");
        Ok(id)
    }

    /// Points awarded to a previously processed receipt.
    pub async fn points_for(&self, id: &ReceiptId) -> Result<u64, ApiError> {
        match self.store.points(id).await {
            Ok(points) => {
                debug!(%id, points, "Points lookup");
                Ok(points)
            }
            Err(err) => {
                debug!(%id, "Points lookup for unknown receipt");
                Err(err.into())
            }
        }
    }
}
