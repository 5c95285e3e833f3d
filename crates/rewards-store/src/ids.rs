//! # Receipt Identifiers
//!
//! Id generation is a capability handed to the API, so tests can swap the
//! random UUIDs for predictable ones.

use std::sync::atomic::{AtomicU64, Ordering};

use uuid::Uuid;

/// Produces receipt ids.
///
/// ## Contract
/// - Never returns the same id twice for the life of the generator
/// - Ids are non-empty and contain no whitespace
pub trait IdGenerator: Send + Sync {
    fn next_id(&self) -> String;
}

/// Random UUID v4 ids, e.g. `7fb1377b-b223-49d9-a31a-5a02701dd310`.
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidGenerator;

impl IdGenerator for UuidGenerator {
    fn next_id(&self) -> String {
        Uuid::new_v4().to_string()
    }
}

/// Deterministic ids: `{prefix}-1`, `{prefix}-2`, ...
#[derive(Debug)]
pub struct SequentialIds {
    prefix: String,
    next: AtomicU64,
}

impl SequentialIds {
    /// `prefix` must not contain whitespace.
    pub fn new(prefix: impl Into<String>) -> Self {
        SequentialIds {
            prefix: prefix.into(),
            next: AtomicU64::new(1),
        }
    }
}

impl IdGenerator for SequentialIds {
    fn next_id(&self) -> String {
        let n = self.next.fetch_add(1, Ordering::Relaxed);
        format!("{}-{}", self.prefix, n)
    }
}
