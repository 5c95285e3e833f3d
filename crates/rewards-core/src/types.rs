//! # Domain Types
//!
//! Core domain types used throughout Receipt Rewards.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │   Wire form (strings)          Validated form (typed)                   │
//! │  ┌─────────────────┐          ┌──────────────────────┐                  │
//! │  │    Receipt      │ validate │  ValidatedReceipt    │                  │
//! │  │  retailer       │ ───────► │  retailer            │ ──► points       │
//! │  │  purchase_date  │          │  purchase_date: Date │                  │
//! │  │  purchase_time  │          │  purchase_time: Time │                  │
//! │  │  items: [Item]  │          │  items: [Validated-  │                  │
//! │  │  total          │          │          Item]       │                  │
//! │  └─────────────────┘          │  total: Money + text │                  │
//! │                               └──────────────────────┘                  │
//! │                                                                         │
//! │  ┌─────────────────┐                                                    │
//! │  │  ScoredReceipt  │  What the store keeps: id + Receipt + points       │
//! │  └─────────────────┘                                                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! A `Receipt` is only ever scored through its `ValidatedReceipt`, so the
//! points rules never see an unparsed field.

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::money::Money;

// =============================================================================
// Wire Types
// =============================================================================

/// A purchased line item as submitted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Item {
    /// Free-text description, e.g. "Mountain Dew 12PK".
    pub short_description: String,

    /// Price as a decimal string with two decimals, e.g. "6.49".
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

/// A purchase receipt as submitted.
///
/// Construction performs no checks; see [`crate::Validator`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Receipt {
    /// Store name, e.g. "Target".
    pub retailer: String,

    /// `YYYY-MM-DD`.
    pub purchase_date: String,

    /// 24-hour `HH:MM`.
    pub purchase_time: String,

    pub items: Vec<Item>,

    /// Decimal string with two decimals, e.g. "35.35".
    pub total: String,
}

// =============================================================================
// Validated Types
// =============================================================================

/// An item whose price has been parsed to cents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedItem {
    /// Description as submitted (untrimmed).
    pub short_description: String,
    pub price: Money,
}

/// A receipt that passed every validation check.
///
/// Only [`crate::Validator::validate`] builds one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedReceipt {
    pub retailer: String,
    pub purchase_date: NaiveDate,
    pub purchase_time: NaiveTime,
    pub items: Vec<ValidatedItem>,
    pub total: Money,

    /// The total exactly as submitted. The round-dollar rule looks at the
    /// literal `.00` suffix, not at the value.
    pub total_text: String,
}

// =============================================================================
// Scored Receipt
// =============================================================================

/// A receipt together with its generated id and points.
///
/// Created once at submission, never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoredReceipt {
    pub id: String,
    pub receipt: Receipt,
    pub points: u64,
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_receipt_json_shape() {
        let json = r#"{
            "retailer": "Target",
            "purchaseDate": "2022-01-01",
            "purchaseTime": "13:01",
            "items": [
                {"shortDescription": "Mountain Dew 12PK", "price": "6.49"}
            ],
            "total": "6.49"
        }"#;

        let receipt: Receipt = serde_json::from_str(json).unwrap();
        assert_eq!(receipt.retailer, "Target");
        assert_eq!(receipt.items[0], Item::new("Mountain Dew 12PK", "6.49"));
    }

    #[test]
    fn test_missing_field_is_decode_error() {
        let json = r#"{"retailer": "Target", "purchaseDate": "2022-01-01",
                       "purchaseTime": "13:01", "items": []}"#;
        assert!(serde_json::from_str::<Receipt>(json).is_err());
    }

    #[test]
    fn test_unknown_field_is_decode_error() {
        let json = r#"{"retailer": "Target", "purchaseDate": "2022-01-01",
                       "purchaseTime": "13:01", "items": [], "total": "1.00",
                       "cashier": "bob"}"#;
        assert!(serde_json::from_str::<Receipt>(json).is_err());
    }
}
