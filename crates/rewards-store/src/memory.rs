//! # In-Memory Receipt Store
//!
//! ## Locking
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                  RwLock<HashMap<String, ScoredReceipt>>                 │
//! │                                                                         │
//! │  get_points ──► read()  ─┐                                              │
//! │  get_points ──► read()  ─┼─ shared: many readers at once                │
//! │  get_points ──► read()  ─┘                                              │
//! │                                                                         │
//! │  save       ──► write() ─── exclusive: no readers, no other writers     │
//! │                                                                         │
//! │  Receipt and points live in ONE record, replaced by ONE insert, so a    │
//! │  reader sees either the old pair or the new pair, never a mix.          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The lock is never held across an `.await` or a call into other locking
//! code. A poisoned lock is recovered: inserts are a single `HashMap::insert`,
//! so the map never holds a half-written record.

use std::collections::HashMap;
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use rewards_core::{Receipt, ScoredReceipt};
use tracing::debug;

/// Concurrency-safe id → scored receipt map.
///
/// Share it as `Arc<ReceiptStore>`; the map itself is never exposed.
#[derive(Debug, Default)]
pub struct ReceiptStore {
    receipts: RwLock<HashMap<String, ScoredReceipt>>,
}

impl ReceiptStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        ReceiptStore::default()
    }

    /// Stores a receipt and its points under `id`.
    ///
    /// Saving an existing id replaces both receipt and points in one write.
    pub fn save(&self, id: &str, receipt: Receipt, points: u64) {
        let record = ScoredReceipt {
            id: id.to_string(),
            receipt,
            points,
        };

        let replaced = self.write().insert(id.to_string(), record).is_some();
        debug!(id, points, replaced, "Saved scored receipt");
    }

    /// Points for `id`, or `None` if nothing was ever saved under it.
    pub fn get_points(&self, id: &str) -> Option<u64> {
        self.read().get(id).map(|record| record.points)
    }

    /// Number of stored receipts.
    pub fn len(&self) -> usize {
        self.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn read(&self) -> RwLockReadGuard<'_, HashMap<String, ScoredReceipt>> {
        self.receipts.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, HashMap<String, ScoredReceipt>> {
        self.receipts.write().unwrap_or_else(PoisonError::into_inner)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
