//! # rewards-store: Receipt Storage for Receipt Rewards
//!
//! Keeps scored receipts in memory for the lifetime of the process.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Receipt Rewards Data Flow                          │
//! │                                                                         │
//! │  rewards-api (submit)                 rewards-api (lookup)              │
//! │       │ id = ids.next_id()                  │                           │
//! │       │ store.save(id, receipt, points)     │ store.get_points(id)      │
//! │       ▼                                     ▼                           │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                  rewards-store (THIS CRATE)                     │   │
//! │  │                                                                 │   │
//! │  │   ┌─────────────────────────┐    ┌──────────────────────────┐  │   │
//! │  │   │      ReceiptStore       │    │       IdGenerator        │  │   │
//! │  │   │   (memory.rs)           │    │   (ids.rs)               │  │   │
//! │  │   │                         │    │                          │  │   │
//! │  │   │ RwLock<HashMap<id,      │    │ UuidGenerator (prod)     │  │   │
//! │  │   │        ScoredReceipt>>  │    │ SequentialIds (tests)    │  │   │
//! │  │   └─────────────────────────┘    └──────────────────────────┘  │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use rewards_core::{Item, Receipt};
//! use rewards_store::{IdGenerator, ReceiptStore, SequentialIds};
//!
//! let store = ReceiptStore::new();
//! let ids = SequentialIds::new("receipt");
//!
//! let receipt = Receipt {
//!     retailer: "Target".to_string(),
//!     purchase_date: "2022-01-01".to_string(),
//!     purchase_time: "13:01".to_string(),
//!     items: vec![Item::new("Pepsi - 12-oz", "1.25")],
//!     total: "1.25".to_string(),
//! };
//!
//! let id = ids.next_id();
//! store.save(&id, receipt, 31);
//! assert_eq!(store.get_points(&id), Some(31));
//! assert_eq!(store.get_points("unknown"), None);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod ids;
pub mod memory;

// =============================================================================
// Re-exports
// =============================================================================

pub use ids::{IdGenerator, SequentialIds, UuidGenerator};
pub use memory::ReceiptStore;
