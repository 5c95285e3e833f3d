//! # Receipt Service
//!
//! Submission and lookup, independent of HTTP.
//!
//! ```text
//! submit(receipt)
//!   ├── Validator::validate ──✗──► ApiError::InvalidReceipt(violations)
//!   ├── points::calculate
//!   ├── ids.next_id()
//!   └── store.save(id, receipt, points) ──► id
//!
//! lookup(id)
//!   ├── validate_receipt_id ──✗──► ApiError::InvalidId
//!   └── store.get_points(id) ──None──► ApiError::NotFound
//! ```

use std::sync::Arc;

use chrono::{Local, NaiveDateTime};
use rewards_core::{points, validate_receipt_id, Receipt, Validator};
use rewards_store::{IdGenerator, ReceiptStore, UuidGenerator};
use tracing::{debug, info};

use crate::error::{ApiError, ApiResult};

/// Source of "now" for purchase date/time checks.
pub type Clock = Arc<dyn Fn() -> NaiveDateTime + Send + Sync>;

/// Shared by every request for the life of the process.
pub struct ReceiptService {
    store: Arc<ReceiptStore>,
    ids: Arc<dyn IdGenerator>,
    clock: Clock,
}

impl ReceiptService {
    /// Service on the local wall clock.
    pub fn new(store: Arc<ReceiptStore>, ids: Arc<dyn IdGenerator>) -> Self {
        ReceiptService {
            store,
            ids,
            clock: Arc::new(|| Local::now().naive_local()),
        }
    }

    /// Replaces the clock used to decide whether a purchase is in the future.
    pub fn with_clock(
        mut self,
        clock: impl Fn() -> NaiveDateTime + Send + Sync + 'static,
    ) -> Self {
        self.clock = Arc::new(clock);
        self
    }

    /// Service with an empty store and random UUID ids.
    pub fn in_memory() -> Self {
        ReceiptService::new(Arc::new(ReceiptStore::new()), Arc::new(UuidGenerator))
    }

    /// Validates, scores and stores a receipt; returns its new id.
    pub fn submit(&self, receipt: Receipt) -> ApiResult<String> {
        let validator = Validator::at((self.clock)());
        let validated = validator.validate(&receipt).map_err(|violations| {
            debug!(violations = violations.len(), "Receipt rejected");
            ApiError::from(violations)
        })?;

        let breakdown = points::breakdown(&validated);
        let points = breakdown.total();
        let id = self.ids.next_id();

        self.store.save(&id, receipt, points);
        info!(%id, points, ?breakdown, "Receipt processed");

        Ok(id)
    }

    /// Points stored under `id`.
    pub fn lookup(&self, id: &str) -> ApiResult<u64> {
        validate_receipt_id(id)?;

        self.store
            .get_points(id)
            .ok_or_else(|| ApiError::NotFound(id.to_string()))
    }

    /// Number of receipts processed so far.
    pub fn receipt_count(&self) -> usize {
        self.store.len()
    }
}
