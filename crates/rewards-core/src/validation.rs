//! # Validation Module
//!
//! Receipt and identifier validation for Receipt Rewards.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: JSON decode (rewards-api)                                     │
//! │  ├── Missing / unknown fields                                           │
//! │  └── Wrong JSON types                                                   │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: THIS MODULE                                                   │
//! │  ├── retailer        charset, has a letter or digit                     │
//! │  ├── purchaseDate    YYYY-MM-DD, real calendar day, not in the future   │
//! │  ├── purchaseTime    HH:MM, 00-23 / 00-59, not later today             │
//! │  ├── items           at least one, description, price                   │
//! │  ├── total           money format, positive                             │
//! │  └── cross-check     total == Σ item prices (to the cent)               │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  ValidatedReceipt ──► points::calculate                                 │
//! │                                                                         │
//! │  Every check runs; all failures are reported together.                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use rewards_core::{Item, Receipt, Validator};
//!
//! let receipt = Receipt {
//!     retailer: "".to_string(),
//!     purchase_date: "2022-02-30".to_string(),
//!     purchase_time: "13:01".to_string(),
//!     items: vec![Item::new("Pepsi - 12-oz", "1.25")],
//!     total: "1.25".to_string(),
//! };
//!
//! let violations = Validator::new().validate(&receipt).unwrap_err();
//! assert_eq!(violations.len(), 2); // empty retailer + Feb 30
//! ```

use std::sync::OnceLock;

use chrono::{Local, NaiveDate, NaiveDateTime, NaiveTime};
use regex::Regex;

use crate::error::{ValidationError, Violations};
use crate::money::Money;
use crate::types::{Item, Receipt, ValidatedItem, ValidatedReceipt};

/// Result type for single-check validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Patterns
// =============================================================================

const RETAILER_ALLOWED: &str = "letters, digits, ASCII whitespace, '-' and '&'";
const DESCRIPTION_ALLOWED: &str = "letters, digits, ASCII whitespace and '-'";
const MONEY_FORMAT: &str = "a decimal amount like 12.34";

// Whitespace is spelled out: `\s` in `regex` also matches U+00A0, U+3000, ...
static RETAILER_PATTERN: OnceLock<Regex> = OnceLock::new();
static DESCRIPTION_PATTERN: OnceLock<Regex> = OnceLock::new();
static DATE_PATTERN: OnceLock<Regex> = OnceLock::new();
static TIME_PATTERN: OnceLock<Regex> = OnceLock::new();

fn retailer_pattern() -> &'static Regex {
    RETAILER_PATTERN
        .get_or_init(|| Regex::new(r"^[A-Za-z0-9 \t\n\x0C\r\-&]+$").expect("valid retailer regex"))
}

fn description_pattern() -> &'static Regex {
    DESCRIPTION_PATTERN
        .get_or_init(|| Regex::new(r"^[A-Za-z0-9 \t\n\x0C\r\-]+$").expect("valid description regex"))
}

fn date_pattern() -> &'static Regex {
    DATE_PATTERN
        .get_or_init(|| Regex::new(r"^([0-9]{4})-([0-9]{2})-([0-9]{2})$").expect("valid date regex"))
}

fn time_pattern() -> &'static Regex {
    TIME_PATTERN.get_or_init(|| Regex::new(r"^([0-9]{2}):([0-9]{2})$").expect("valid time regex"))
}

// =============================================================================
// Receipt Validator
// =============================================================================

/// Validates submitted receipts against a fixed notion of "now".
///
/// ## Example
/// ```rust
/// use chrono::NaiveDate;
/// use rewards_core::{Item, Receipt, Validator};
///
/// let now = NaiveDate::from_ymd_opt(2022, 1, 1)
///     .unwrap()
///     .and_hms_opt(12, 0, 0)
///     .unwrap();
///
/// let receipt = Receipt {
///     retailer: "Walgreens".to_string(),
///     purchase_date: "2022-01-01".to_string(),
///     purchase_time: "13:00".to_string(), // an hour from "now"
///     items: vec![Item::new("Pepsi - 12-oz", "1.25")],
///     total: "1.25".to_string(),
/// };
///
/// let violations = Validator::at(now).validate(&receipt).unwrap_err();
/// assert!(violations.has_field("purchaseTime"));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Validator {
    now: NaiveDateTime,
}

impl Validator {
    /// Validator using the local wall clock as "now".
    pub fn new() -> Self {
        Validator::at(Local::now().naive_local())
    }

    /// Validator with a fixed "now" (tests, replays).
    pub fn at(now: NaiveDateTime) -> Self {
        Validator { now }
    }

    /// Runs every check and returns the typed receipt, or every violation.
    ///
    /// ## Check Order
    /// retailer → purchaseDate → purchaseTime → items → total → cross-check.
    /// Violations are reported in this order.
    pub fn validate(&self, receipt: &Receipt) -> Result<ValidatedReceipt, Violations> {
        let mut errors = Vec::new();

        check_retailer(&receipt.retailer, &mut errors);
        let date = self.check_purchase_date(&receipt.purchase_date, &mut errors);
        let time = self.check_purchase_time(&receipt.purchase_time, date, &mut errors);
        let items = check_items(&receipt.items, &mut errors);
        let total = check_money("total", &receipt.total, &mut errors);
        check_total_matches_items(receipt, &mut errors);

        match (date, time, items, total) {
            (Some(purchase_date), Some(purchase_time), Some(items), Some(total))
                if errors.is_empty() =>
            {
                Ok(ValidatedReceipt {
                    retailer: receipt.retailer.clone(),
                    purchase_date,
                    purchase_time,
                    items,
                    total,
                    total_text: receipt.total.clone(),
                })
            }
            _ => {
                debug_assert!(!errors.is_empty(), "a failed check must record a violation");
                Err(Violations::new(errors))
            }
        }
    }

    /// Parses `YYYY-MM-DD`, checks the calendar and rejects future dates.
    ///
    /// Returns the date whenever it parses, even if it is in the future, so
    /// the time check can tell whether it is "today".
    fn check_purchase_date(
        &self,
        text: &str,
        errors: &mut Vec<ValidationError>,
    ) -> Option<NaiveDate> {
        const FIELD: &str = "purchaseDate";

        let Some(caps) = date_pattern().captures(text) else {
            errors.push(ValidationError::invalid_format(FIELD, "YYYY-MM-DD"));
            return None;
        };

        // The pattern guarantees ASCII digits of fixed width.
        let year: i32 = caps[1].parse().ok()?;
        let month: u32 = caps[2].parse().ok()?;
        let day: u32 = caps[3].parse().ok()?;

        if !(1..=12).contains(&month) {
            errors.push(ValidationError::OutOfRange {
                field: format!("{FIELD}.month"),
                min: 1,
                max: 12,
            });
            return None;
        }

        let max = last_day_of_month(year, month);
        if day == 0 || day > max {
            errors.push(ValidationError::DayOutOfRange {
                field: FIELD.to_string(),
                max,
            });
            return None;
        }

        let Some(date) = NaiveDate::from_ymd_opt(year, month, day) else {
            errors.push(ValidationError::invalid_format(FIELD, "YYYY-MM-DD"));
            return None;
        };

        if date > self.now.date() {
            errors.push(ValidationError::InFuture {
                field: FIELD.to_string(),
            });
        }

        Some(date)
    }

    /// Parses 24-hour `HH:MM`; for today's date also rejects a later time.
    fn check_purchase_time(
        &self,
        text: &str,
        date: Option<NaiveDate>,
        errors: &mut Vec<ValidationError>,
    ) -> Option<NaiveTime> {
        const FIELD: &str = "purchaseTime";

        let Some(caps) = time_pattern().captures(text) else {
            errors.push(ValidationError::invalid_format(FIELD, "HH:MM (24-hour)"));
            return None;
        };

        let hour: u32 = caps[1].parse().ok()?;
        let minute: u32 = caps[2].parse().ok()?;

        let mut in_range = true;
        if hour > 23 {
            errors.push(ValidationError::OutOfRange {
                field: format!("{FIELD}.hour"),
                min: 0,
                max: 23,
            });
            in_range = false;
        }
        if minute > 59 {
            errors.push(ValidationError::OutOfRange {
                field: format!("{FIELD}.minute"),
                min: 0,
                max: 59,
            });
            in_range = false;
        }
        if !in_range {
            return None;
        }

        let time = NaiveTime::from_hms_opt(hour, minute, 0)?;

        if let Some(date) = date {
            if date == self.now.date() && date.and_time(time) > self.now {
                errors.push(ValidationError::InFuture {
                    field: FIELD.to_string(),
                });
            }
        }

        Some(time)
    }
}

impl Default for Validator {
    fn default() -> Self {
        Validator::new()
    }
}

// =============================================================================
// Field Checks
// =============================================================================

fn check_retailer(retailer: &str, errors: &mut Vec<ValidationError>) {
    const FIELD: &str = "retailer";

    if retailer.is_empty() {
        errors.push(ValidationError::required(FIELD));
        return;
    }

    if !retailer_pattern().is_match(retailer) {
        errors.push(ValidationError::InvalidCharacters {
            field: FIELD.to_string(),
            allowed: RETAILER_ALLOWED,
        });
    }

    if !retailer.chars().any(char::is_alphanumeric) {
        errors.push(ValidationError::NoAlphanumeric {
            field: FIELD.to_string(),
        });
    }
}

fn check_items(items: &[Item], errors: &mut Vec<ValidationError>) -> Option<Vec<ValidatedItem>> {
    if items.is_empty() {
        errors.push(ValidationError::NoItems);
        return None;
    }

    let mut validated = Vec::with_capacity(items.len());
    let mut all_valid = true;

    for (index, item) in items.iter().enumerate() {
        let field = format!("items[{index}].shortDescription");
        if item.short_description.trim().is_empty() {
            errors.push(ValidationError::required(field));
            all_valid = false;
        } else if !description_pattern().is_match(&item.short_description) {
            errors.push(ValidationError::InvalidCharacters {
                field,
                allowed: DESCRIPTION_ALLOWED,
            });
            all_valid = false;
        }

        match check_money(&format!("items[{index}].price"), &item.price, errors) {
            Some(price) => validated.push(ValidatedItem {
                short_description: item.short_description.clone(),
                price,
            }),
            None => all_valid = false,
        }
    }

    all_valid.then_some(validated)
}

/// Money format `\d+\.\d{2}`, strictly positive.
fn check_money(field: &str, text: &str, errors: &mut Vec<ValidationError>) -> Option<Money> {
    let Some(amount) = Money::parse(text) else {
        errors.push(ValidationError::invalid_format(field, MONEY_FORMAT));
        return None;
    };

    if !amount.is_positive() {
        errors.push(ValidationError::MustBePositive {
            field: field.to_string(),
        });
        return None;
    }

    Some(amount)
}

/// Total and item sum, each rounded half away from zero to the cent, must match.
///
/// Skipped when there are no items or some amount is not a number at all;
/// those receipts already carry a more specific violation.
fn check_total_matches_items(receipt: &Receipt, errors: &mut Vec<ValidationError>) {
    if receipt.items.is_empty() {
        return;
    }

    let Some(total) = Money::sum_rounded([receipt.total.as_str()]) else {
        return;
    };
    let Some(items_sum) = Money::sum_rounded(receipt.items.iter().map(|i| i.price.as_str()))
    else {
        return;
    };

    if total != items_sum {
        errors.push(ValidationError::TotalMismatch { total, items_sum });
    }
}

fn last_day_of_month(year: i32, month: u32) -> u32 {
    match month {
        2 if is_leap_year(year) => 29,
        2 => 28,
        4 | 6 | 9 | 11 => 30,
        _ => 31,
    }
}

fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

// =============================================================================
// Identifier Validation
// =============================================================================

/// Validates a receipt id taken from a lookup path.
///
/// ## Rules
/// - Must not be empty
/// - Must not contain whitespace
///
/// ## Example
/// ```rust
/// use rewards_core::validate_receipt_id;
///
/// assert!(validate_receipt_id("7fb1377b-b223-49d9-a31a-5a02701dd310").is_ok());
/// assert!(validate_receipt_id("").is_err());
/// assert!(validate_receipt_id("abc def").is_err());
/// ```
pub fn validate_receipt_id(id: &str) -> ValidationResult<()> {
    if id.is_empty() {
        return Err(ValidationError::required("id"));
    }

    if id.chars().any(char::is_whitespace) {
        return Err(ValidationError::InvalidCharacters {
            field: "id".to_string(),
            allowed: "any non-whitespace character",
        });
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================
