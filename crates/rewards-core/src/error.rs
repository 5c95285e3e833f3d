//! # Error Types
//!
//! Domain-specific error types for rewards-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  rewards-core errors (this file)                                        │
//! │  ├── ValidationError  - One failed check (field + message)              │
//! │  └── Violations       - Every failed check for one receipt              │
//! │                                                                         │
//! │  rewards-api errors (separate crate)                                    │
//! │  └── ApiError         - What HTTP clients see (status + JSON)           │
//! │                                                                         │
//! │  Flow: ValidationError → Violations → ApiError → 400 response           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Every variant names the field it is about
//! 3. Errors are enum variants, never String
//! 4. Validation never stops at the first failure: see [`Violations`]

use thiserror::Error;

use crate::money::Money;

// =============================================================================
// Validation Error
// =============================================================================

/// A single failed validation check.
///
/// The `Display` output is the human-readable message sent back to API
/// clients; [`ValidationError::field`] names the offending field
/// (`retailer`, `items[2].price`, ...).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A required field is missing or blank.
    #[error("{field} cannot be empty")]
    Required { field: String },

    /// Field contains characters outside its allowed set.
    #[error("{field} contains invalid characters (allowed: {allowed})")]
    InvalidCharacters { field: String, allowed: &'static str },

    /// Field has no letter or digit at all (e.g. retailer "&&&").
    #[error("{field} must contain at least one alphanumeric character")]
    NoAlphanumeric { field: String },

    /// Field does not match its textual format.
    #[error("{field} has invalid format (expected {expected})")]
    InvalidFormat {
        field: String,
        expected: &'static str,
    },

    /// Numeric component is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: u32, max: u32 },

    /// Day is past the last day of its month.
    ///
    /// ## When This Occurs
    /// - `2023-02-29` (not a leap year, max 28)
    /// - `2024-04-31` (April has 30 days)
    #[error("{field} has invalid day for month (max {max})")]
    DayOutOfRange { field: String, max: u32 },

    /// Date or date-time is after "now".
    #[error("{field} cannot be in the future")]
    InFuture { field: String },

    /// Money value must be greater than zero.
    #[error("{field} must be greater than 0")]
    MustBePositive { field: String },

    /// Receipt has an empty item list.
    #[error("receipt must include at least one item")]
    NoItems,

    /// Total does not equal the sum of item prices (to the cent).
    #[error("total ({total}) does not match sum of items ({items_sum})")]
    TotalMismatch { total: Money, items_sum: Money },
}

impl ValidationError {
    /// Name of the field this error is about.
    pub fn field(&self) -> &str {
        match self {
            ValidationError::Required { field }
            | ValidationError::InvalidCharacters { field, .. }
            | ValidationError::NoAlphanumeric { field }
            | ValidationError::InvalidFormat { field, .. }
            | ValidationError::OutOfRange { field, .. }
            | ValidationError::DayOutOfRange { field, .. }
            | ValidationError::InFuture { field }
            | ValidationError::MustBePositive { field } => field,
            ValidationError::NoItems => "items",
            ValidationError::TotalMismatch { .. } => "total",
        }
    }

    /// Human-readable message (same as `to_string()`).
    pub fn message(&self) -> String {
        self.to_string()
    }

    pub(crate) fn required(field: impl Into<String>) -> Self {
        ValidationError::Required {
            field: field.into(),
        }
    }

    pub(crate) fn invalid_format(field: impl Into<String>, expected: &'static str) -> Self {
        ValidationError::InvalidFormat {
            field: field.into(),
            expected,
        }
    }
}

// =============================================================================
// Violations
// =============================================================================

/// Every validation failure found on one receipt, in check order.
///
/// Immutable once validation completes: it can be iterated and read, not
/// extended by callers.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("receipt failed {} validation check(s)", .0.len())]
pub struct Violations(Vec<ValidationError>);

impl Violations {
    pub(crate) fn new(errors: Vec<ValidationError>) -> Self {
        Violations(errors)
    }

    /// Number of violations.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always false for a `Violations` returned by the validator.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ValidationError> {
        self.0.iter()
    }

    /// The violation messages, in check order.
    pub fn messages(&self) -> Vec<String> {
        self.0.iter().map(ValidationError::message).collect()
    }

    /// True if any violation is about `field`.
    pub fn has_field(&self, field: &str) -> bool {
        self.0.iter().any(|e| e.field() == field)
    }
}

impl<'a> IntoIterator for &'a Violations {
    type Item = &'a ValidationError;
    type IntoIter = std::slice::Iter<'a, ValidationError>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
