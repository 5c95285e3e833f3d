//! # Points Rules
//!
//! Scores a validated receipt. Every rule is independent and additive.
//!
//! ```text
//! ┌──────┬─────────────────────────────────────────────────────┬──────────┐
//! │ Rule │ Condition                                           │ Points   │
//! ├──────┼─────────────────────────────────────────────────────┼──────────┤
//! │ R1   │ per letter/digit in the retailer name               │ +1 each  │
//! │ R2   │ total text ends in ".00"                            │ +50      │
//! │ R3   │ total is a multiple of $0.25                        │ +25      │
//! │ R4   │ per pair of items                                   │ +5 each  │
//! │ R5   │ trimmed description length % 3 == 0                │ ⌈20% of  │
//! │      │                                                     │  price⌉  │
//! │ R6   │ (reserved, no rule)                                 │ 0        │
//! │ R7   │ purchase day of month is odd                        │ +6       │
//! │ R8   │ 14:00 <= purchase time < 16:00                      │ +10      │
//! └──────┴─────────────────────────────────────────────────────┴──────────┘
//! ```
//!
//! All arithmetic is on integer cents; no rule can go negative.

use chrono::{Datelike, Timelike};

use crate::types::{ValidatedItem, ValidatedReceipt};

/// Points awarded by each rule for one receipt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PointsBreakdown {
    pub retailer_name: u64,
    pub round_dollar: u64,
    pub quarter_multiple: u64,
    pub item_pairs: u64,
    pub item_descriptions: u64,
    /// R6 has no rule attached; kept so the numbering stays aligned.
    pub reserved: u64,
    pub odd_day: u64,
    pub afternoon: u64,
}

impl PointsBreakdown {
    /// Sum of all rules.
    pub fn total(&self) -> u64 {
        self.retailer_name
            + self.round_dollar
            + self.quarter_multiple
            + self.item_pairs
            + self.item_descriptions
            + self.reserved
            + self.odd_day
            + self.afternoon
    }
}

/// Total points for a validated receipt.
///
/// ## Example
/// ```rust
/// use rewards_core::{points, Item, Receipt, Validator};
///
/// let receipt = Receipt {
///     retailer: "Target".to_string(),
///     purchase_date: "2022-01-02".to_string(),
///     purchase_time: "13:13".to_string(),
///     items: vec![Item::new("Pepsi - 12-oz", "1.25")],
///     total: "1.25".to_string(),
/// };
///
/// let validated = Validator::new().validate(&receipt).unwrap();
/// // 6 (retailer) + 25 (multiple of 0.25)
/// assert_eq!(points::calculate(&validated), 31);
/// ```
pub fn calculate(receipt: &ValidatedReceipt) -> u64 {
    breakdown(receipt).total()
}

/// Per-rule points for a validated receipt.
pub fn breakdown(receipt: &ValidatedReceipt) -> PointsBreakdown {
    PointsBreakdown {
        retailer_name: retailer_name_points(&receipt.retailer),
        round_dollar: if receipt.total_text.ends_with(".00") { 50 } else { 0 },
        quarter_multiple: if receipt.total.is_multiple_of(25) { 25 } else { 0 },
        item_pairs: (receipt.items.len() as u64 / 2) * 5,
        item_descriptions: receipt.items.iter().map(description_points).sum(),
        reserved: 0,
        odd_day: if receipt.purchase_date.day() % 2 == 1 { 6 } else { 0 },
        afternoon: if (14..16).contains(&receipt.purchase_time.hour()) {
            10
        } else {
            0
        },
    }
}

fn retailer_name_points(retailer: &str) -> u64 {
    retailer.chars().filter(|c| c.is_alphanumeric()).count() as u64
}

fn description_points(item: &ValidatedItem) -> u64 {
    let length = item.short_description.trim().chars().count();
    if length == 0 || length % 3 != 0 {
        return 0;
    }
    item.price.percent_ceil_dollars(20).max(0) as u64
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::Money;
    use chrono::{NaiveDate, NaiveTime};
    use rstest::rstest;

    fn validated(retailer: &str, total: &str, items: &[(&str, i64)]) -> ValidatedReceipt {
        ValidatedReceipt {
            retailer: retailer.to_string(),
            purchase_date: NaiveDate::from_ymd_opt(2022, 1, 2).unwrap(),
            purchase_time: NaiveTime::from_hms_opt(10, 0, 0).unwrap(),
            items: items
                .iter()
                .map(|(desc, cents)| ValidatedItem {
                    short_description: desc.to_string(),
                    price: Money::from_cents(*cents),
                })
                .collect(),
            total: Money::parse(total).unwrap(),
            total_text: total.to_string(),
        }
    }

    #[test]
    fn test_retailer_counts_letters_and_digits_only() {
        assert_eq!(retailer_name_points("M&M Corner Market"), 14);
        assert_eq!(retailer_name_points("7-Eleven"), 7);
        assert_eq!(retailer_name_points("  -&- "), 0);
        assert_eq!(retailer_name_points("Café"), 4);
    }

    #[test]
    fn test_round_dollar_and_quarter_both_apply() {
        let r = validated("", "10.00", &[("Gum", 1000)]);
        let b = breakdown(&r);
        assert_eq!(b.round_dollar, 50);
        assert_eq!(b.quarter_multiple, 25);
    }

    #[test]
    fn test_quarter_without_round_dollar() {
        let b = breakdown(&validated("", "10.75", &[("Gum", 1075)]));
        assert_eq!(b.round_dollar, 0);
        assert_eq!(b.quarter_multiple, 25);

        let b = breakdown(&validated("", "10.10", &[("Gum", 1010)]));
        assert_eq!(b.quarter_multiple, 0);
    }

    #[rstest]
    #[case(1, 0)]
    #[case(2, 5)]
    #[case(3, 5)]
    #[case(4, 10)]
    #[case(5, 10)]
    fn test_item_pairs(#[case] count: usize, #[case] expected: u64) {
        let items: Vec<(&str, i64)> = vec![("Dasani", 100); count];
        let total = format!("{}.00", count);
        assert_eq!(breakdown(&validated("", &total, &items)).item_pairs, expected);
    }

    #[rstest]
    #[case("Emils Cheese Pizza", 1225, 3)]
    #[case("   Klarbrunn 12-PK 12 FL OZ  ", 1200, 3)]
    #[case("Mountain Dew 12PK", 649, 0)]
    #[case("abc", 500, 1)]
    #[case("abc", 1, 1)]
    #[case("abcdef", 2500, 5)]
    fn test_description_rule(#[case] desc: &str, #[case] cents: i64, #[case] expected: u64) {
        let item = ValidatedItem {
            short_description: desc.to_string(),
            price: Money::from_cents(cents),
        };
        assert_eq!(description_points(&item), expected);
    }

    #[rstest]
    #[case(13, 59, 0)]
    #[case(14, 0, 10)]
    #[case(15, 59, 10)]
    #[case(16, 0, 0)]
    fn test_afternoon_window(#[case] hour: u32, #[case] minute: u32, #[case] expected: u64) {
        let mut r = validated("", "1.00", &[("Gum", 100)]);
        r.purchase_time = NaiveTime::from_hms_opt(hour, minute, 0).unwrap();
        assert_eq!(breakdown(&r).afternoon, expected);
    }

    #[test]
    fn test_odd_day() {
        let mut r = validated("", "1.00", &[("Gum", 100)]);
        r.purchase_date = NaiveDate::from_ymd_opt(2022, 1, 31).unwrap();
        assert_eq!(breakdown(&r).odd_day, 6);
        r.purchase_date = NaiveDate::from_ymd_opt(2022, 2, 28).unwrap();
        assert_eq!(breakdown(&r).odd_day, 0);
    }

    #[test]
    fn test_reserved_rule_is_zero() {
        let r = validated("Target", "35.35", &[("abc", 3535)]);
        let b = breakdown(&r);
        assert_eq!(b.reserved, 0);
        assert_eq!(calculate(&r), b.total());
    }
}
