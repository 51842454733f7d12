//! # Domain Types
//!
//! Core domain types used throughout the receipt points service.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │    Receipt      │   │      Item       │   │  StoredReceipt  │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  retailer       │   │  shortDesc.     │   │  receipt        │       │
//! │  │  purchaseDate   │ ◄─│  price          │   │  points (once)  │       │
//! │  │  purchaseTime   │   └─────────────────┘   │  created_at     │       │
//! │  │  total          │                         └────────┬────────┘       │
//! │  │  items[1..]     │                                  │ keyed by       │
//! │  └─────────────────┘                         ┌────────▼────────┐       │
//! │                                              │   ReceiptId     │       │
//! │                                              │  (UUID v4 str)  │       │
//! │                                              └─────────────────┘       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## String Amounts
//! `total` and `price` stay strings exactly as submitted. The points rules
//! parse them on demand, so a stored receipt always holds the caller's bytes.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use crate::points;

// =============================================================================
// Receipt Id
// =============================================================================

/// Opaque identifier handed back on submission.
///
/// Generated ids are UUID v4 strings. Lookups accept any string, so an id
/// that was never issued is simply not found.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ReceiptId(String);

impl ReceiptId {
    /// Generates a fresh, globally unique id.
    pub fn generate() -> Self {
        ReceiptId(Uuid::new_v4().to_string())
    }

    /// Returns the id as a string slice.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for ReceiptId {
    fn from(id: String) -> Self {
        ReceiptId(id)
    }
}

impl From<&str> for ReceiptId {
    fn from(id: &str) -> Self {
        ReceiptId(id.to_string())
    }
}

impl fmt::Display for ReceiptId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// =============================================================================
// Item
// =============================================================================

/// One line entry on a receipt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    /// Free-text description, `[\w\s\-]+`.
    pub short_description: String,

    /// Price with exactly two decimals, e.g. `"6.49"`.
    pub price: String,
}

impl Item {
    pub fn new(short_description: impl Into<String>, price: impl Into<String>) -> Self {
        Item {
            short_description: short_description.into(),
            price: price.into(),
        }
    }
}

// =============================================================================
// Receipt
// =============================================================================

/// A purchase submitted for scoring.
///
/// Values of this type come out of [`crate::validation::validate_receipt`],
/// so every field already matches its format rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Receipt {
    /// Store name, `[\w\s\-&]+`.
    pub retailer: String,

    /// `YYYY-MM-DD`. Calendar validity is not checked.
    pub purchase_date: String,

    /// `HH:MM`, 24-hour. Range is not checked.
    pub purchase_time: String,

    /// Total with exactly two decimals, e.g. `"35.35"`.
    pub total: String,

    /// At least one item, in submission order.
    pub items: Vec<Item>,
}

// =============================================================================
// Stored Receipt
// =============================================================================

/// A scored receipt as kept by the store.
///
/// ## Points Are Frozen
/// Points are computed once in [`StoredReceipt::new`] and there is no setter,
/// so a stored value can never drift from what was reported at submission.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StoredReceipt {
    receipt: Receipt,
    points: u64,
    created_at: DateTime<Utc>,
}

impl StoredReceipt {
    /// Scores `receipt` and wraps it for storage.
    pub fn new(receipt: Receipt, created_at: DateTime<Utc>) -> Self {
        let points = points::score(&receipt);
        StoredReceipt {
            receipt,
            points,
            created_at,
        }
    }

    #[inline]
    pub fn receipt(&self) -> &Receipt {
        &self.receipt
    }

    #[inline]
    pub fn points(&self) -> u64 {
        self.points
    }

    #[inline]
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn costco() -> Receipt {
        Receipt {
            retailer: "Costco".to_string(),
            purchase_date: "2022-01-15".to_string(),
            purchase_time: "13:00".to_string(),
            total: "10.00".to_string(),
            items: vec![Item::new("Chicken", "10.00")],
        }
    }

    #[test]
    fn test_generated_ids_are_unique_uuids() {
        let a = ReceiptId::generate();
        let b = ReceiptId::generate();
        assert_ne!(a, b);
        assert!(Uuid::parse_str(a.as_str()).is_ok());
    }

    #[test]
    fn test_stored_receipt_scores_on_creation() {
        let stored = StoredReceipt::new(costco(), Utc::now());
        assert_eq!(stored.points(), 87);
        assert_eq!(stored.receipt().retailer, "Costco");
    }

    #[test]
    fn test_receipt_uses_camel_case_on_the_wire() {
        let value = serde_json::to_value(costco()).unwrap();
        assert_eq!(value["purchaseDate"], "2022-01-15");
        assert_eq!(value["items"][0]["shortDescription"], "Chicken");
    }

    #[test]
    fn test_receipt_id_serializes_as_plain_string() {
        let id = ReceiptId::from("abc");
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"abc\"");
        assert_eq!(id.to_string(), "abc");
    }
}
