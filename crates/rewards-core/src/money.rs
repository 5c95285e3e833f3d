//! # Money Module
//!
//! Provides the `Money` type for handling monetary values safely.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  As binary floats:                                                      │
//! │    35.35 * 100 = 3534.9999999999995  ❌ "multiple of 0.25" drifts       │
//! │    6.49 + 12.25 + 1.26 + 3.35 + 12.00 ≠ 35.35 exactly                   │
//! │                                                                         │
//! │  OUR SOLUTION: Integer Cents                                            │
//! │    "35.35" → 3535 cents, exact                                         │
//! │    Rule checks become integer modulo, sums become integer addition     │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use rewards_core::money::Money;
//!
//! // Parse the receipt wire format (always two decimals)
//! let price = Money::parse("10.99").unwrap();
//! assert_eq!(price.cents(), 1099);
//!
//! // Anything else is rejected rather than guessed
//! assert!(Money::parse("10.9").is_none());
//! assert!(Money::parse("$10.99").is_none());
//! ```

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use std::fmt;
use std::str::FromStr;

// =============================================================================
// Money Type
// =============================================================================

/// Represents a monetary value in cents.
///
/// ## Design Decisions
/// - **i64 (signed)**: Room for any receipt total, no unsigned underflow traps
/// - **Single field tuple struct**: Zero-cost abstraction over i64
/// - **No float constructor**: Values come from text or from cents
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from cents.
    ///
    /// ## Example
    /// ```rust
    /// use rewards_core::money::Money;
    ///
    /// let price = Money::from_cents(1099); // Represents $10.99
    /// assert_eq!(price.cents(), 1099);
    /// ```
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Parses the strict receipt money format `\d+\.\d{2}`.
    ///
    /// ## Rules
    /// - At least one digit before the dot
    /// - Exactly two digits after the dot
    /// - No sign, no currency symbol, no whitespace, no grouping
    ///
    /// Returns `None` for anything else, including values that overflow i64.
    ///
    /// ## Example
    /// ```rust
    /// use rewards_core::money::Money;
    ///
    /// assert_eq!(Money::parse("0.25").unwrap().cents(), 25);
    /// assert_eq!(Money::parse("123.00").unwrap().cents(), 12300);
    /// assert!(Money::parse(".25").is_none());
    /// assert!(Money::parse("-1.00").is_none());
    /// ```
    pub fn parse(text: &str) -> Option<Self> {
        let (major, minor) = text.split_once('.')?;

        if major.is_empty() || !major.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        if minor.len() != 2 || !minor.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }

        let major: i64 = major.parse().ok()?;
        let minor: i64 = minor.parse().ok()?;

        major.checked_mul(100)?.checked_add(minor).map(Money)
    }

    /// Rounds an exact decimal to the cent, half away from zero.
    ///
    /// `12.005` → `$12.01`, `11.995` → `$12.00`, `-0.005` → `-$0.01`.
    /// Returns `None` if the result does not fit in i64 cents.
    pub fn from_decimal_rounded(value: Decimal) -> Option<Self> {
        let rounded = value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
        rounded
            .checked_mul(Decimal::ONE_HUNDRED)?
            .to_i64()
            .map(Money)
    }

    /// Sums decimal strings exactly, then rounds the sum to the cent.
    ///
    /// Each input may carry any number of decimals; nothing is rounded
    /// before the sum is complete. Returns `None` if any input is not a
    /// decimal number or the sum overflows.
    ///
    /// ## Example
    /// ```rust
    /// use rewards_core::money::Money;
    ///
    /// let sum = Money::sum_rounded(["6.000", "5.995"]).unwrap();
    /// assert_eq!(sum.cents(), 1200);
    /// ```
    pub fn sum_rounded<'a>(amounts: impl IntoIterator<Item = &'a str>) -> Option<Self> {
        let mut sum = Decimal::ZERO;
        for amount in amounts {
            let value = Decimal::from_str(amount).ok()?;
            sum = sum.checked_add(value)?;
        }
        Money::from_decimal_rounded(sum)
    }

    /// Returns the value in cents.
    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Returns the major unit (dollars) portion.
    #[inline]
    pub const fn dollars(&self) -> i64 {
        self.0 / 100
    }

    /// Returns the minor unit (cents) portion (always 0-99).
    #[inline]
    pub const fn cents_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    /// Returns zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    /// Checks if the value is positive (greater than zero).
    #[inline]
    pub const fn is_positive(&self) -> bool {
        self.0 > 0
    }

    /// True if the amount is a whole multiple of `step` cents.
    ///
    /// ## Example
    /// ```rust
    /// use rewards_core::money::Money;
    ///
    /// assert!(Money::from_cents(975).is_multiple_of(25));
    /// assert!(!Money::from_cents(3535).is_multiple_of(25));
    /// ```
    #[inline]
    pub const fn is_multiple_of(&self, step: i64) -> bool {
        self.0 % step == 0
    }

    /// Takes `pct` percent of the amount and rounds up to whole dollars.
    ///
    /// Integer-only form of `ceil(amount * pct / 100)`:
    /// `$12.25` at 20% is `$2.45`, which rounds up to 3.
    ///
    /// ## Example
    /// ```rust
    /// use rewards_core::money::Money;
    ///
    /// assert_eq!(Money::from_cents(1225).percent_ceil_dollars(20), 3);
    /// assert_eq!(Money::from_cents(500).percent_ceil_dollars(20), 1);
    /// ```
    pub fn percent_ceil_dollars(&self, pct: u32) -> i64 {
        // cents * pct / 100 is the share in cents; / 100 again for dollars.
        let numerator = self.0 as i128 * pct as i128;
        let denominator = 100 * 100;
        let quotient = numerator.div_euclid(denominator);
        let ceil = if numerator.rem_euclid(denominator) == 0 {
            quotient
        } else {
            quotient + 1
        };
        ceil as i64
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Shows money as `$10.99` / `-$5.50`. Used in validation messages.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(
            f,
            "{}${}.{:02}",
            sign,
            self.dollars().abs(),
            self.cents_part()
        )
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
