//! # Points Module
//!
//! The loyalty points rule engine.
//!
//! ## Rules
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Points Rules (additive)                           │
//! │                                                                         │
//! │  1. retailer name     +1 per ASCII alphanumeric character               │
//! │  2. round total       +50 if total % 1.00 == 0                          │
//! │  3. quarter total     +25 if total % 0.25 == 0   (independent of 2)     │
//! │  4. item pairs        +5 per two items                                  │
//! │  5. descriptions      +ceil(price × 0.2) if trimmed length % 3 == 0     │
//! │  6. odd day           +6 if day-of-month is odd                         │
//! │  7. afternoon         +10 if 14:00 ≤ time < 16:00, or exactly 16:00     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Floating Point
//! Amounts are parsed to `f64` and compared with IEEE remainder. Exact
//! decimals would reclassify some totals and change scores already issued,
//! so [`crate::types::Receipt`] keeps amounts as strings and every rule
//! parses them here.
//!
//! ## Example
//! ```rust
//! use receipt_core::{points, Item, Receipt};
//!
//! let receipt = Receipt {
//!     retailer: "Trader Joes".to_string(),
//!     purchase_date: "2022-04-10".to_string(),
//!     purchase_time: "15:45".to_string(),
//!     total: "3.75".to_string(),
//!     items: vec![Item::new("Bread", "1.25"), Item::new("Butter", "2.50")],
//! };
//!
//! let breakdown = points::breakdown(&receipt);
//! assert_eq!(breakdown.quarter_total, 25);
//! assert_eq!(breakdown.item_descriptions, 1);
//! assert_eq!(points::score(&receipt), 51);
//! ```

use chrono::{Datelike, Days, NaiveDate};
use serde::Serialize;

use crate::types::{Item, Receipt};
use crate::validation::is_pattern_whitespace;

// =============================================================================
// Constants
// =============================================================================

/// Bonus for a total with no cents.
pub const ROUND_TOTAL_POINTS: u64 = 50;

/// Bonus for a total that is a multiple of 0.25.
pub const QUARTER_TOTAL_POINTS: u64 = 25;

/// Awarded for every two items on the receipt.
pub const ITEM_PAIR_POINTS: u64 = 5;

/// Bonus for an odd day of month.
pub const ODD_DAY_POINTS: u64 = 6;

/// Bonus for purchases in the afternoon window.
pub const AFTERNOON_POINTS: u64 = 10;

/// Share of an item's price awarded when its description length is a
/// multiple of three.
const DESCRIPTION_PRICE_FACTOR: f64 = 0.2;

// =============================================================================
// Points Breakdown
// =============================================================================

/// Points awarded by each rule for one receipt.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct PointsBreakdown {
    pub retailer_name: u64,
    pub round_total: u64,
    pub quarter_total: u64,
    pub item_pairs: u64,
    pub item_descriptions: u64,
    pub odd_day: u64,
    pub afternoon: u64,
}

impl PointsBreakdown {
    /// Sum of all rules, saturating at `u64::MAX`.
    ///
    /// Integer addition is exact, so totals above 2^53 keep every unit.
    pub fn total(&self) -> u64 {
        [
            self.retailer_name,
            self.round_total,
            self.quarter_total,
            self.item_pairs,
            self.item_descriptions,
            self.odd_day,
            self.afternoon,
        ]
        .into_iter()
        .fold(0u64, u64::saturating_add)
    }
}

// =============================================================================
// Scoring
// =============================================================================

/// Scores a validated receipt.
///
/// Pure and total: never panics for any receipt the validator accepts.
pub fn score(receipt: &Receipt) -> u64 {
    breakdown(receipt).total()
}

/// Applies every rule and reports each contribution.
pub fn breakdown(receipt: &Receipt) -> PointsBreakdown {
    let total = parse_amount(&receipt.total);

    PointsBreakdown {
        retailer_name: retailer_name_points(&receipt.retailer),
        round_total: if total % 1.0 == 0.0 {
            ROUND_TOTAL_POINTS
        } else {
            0
        },
        quarter_total: if total % 0.25 == 0.0 {
            QUARTER_TOTAL_POINTS
        } else {
            0
        },
        item_pairs: item_pair_points(receipt.items.len()),
        item_descriptions: receipt
            .items
            .iter()
            .map(item_description_points)
            .fold(0u64, u64::saturating_add),
        odd_day: if is_odd_purchase_day(&receipt.purchase_date) {
            ODD_DAY_POINTS
        } else {
            0
        },
        afternoon: if is_afternoon_purchase(&receipt.purchase_time) {
            AFTERNOON_POINTS
        } else {
            0
        },
    }
}

// =============================================================================
// Individual Rules
// =============================================================================

/// One point per ASCII letter or digit.
pub fn retailer_name_points(retailer: &str) -> u64 {
    retailer.chars().filter(char::is_ascii_alphanumeric).count() as u64
}

pub fn item_pair_points(item_count: usize) -> u64 {
    ((item_count / 2) as u64).saturating_mul(ITEM_PAIR_POINTS)
}

/// `ceil(price × 0.2)` when the trimmed description length is a multiple of
/// three (an all-whitespace description trims to zero and qualifies).
///
/// ## Example
/// ```rust
/// use receipt_core::points::item_description_points;
/// use receipt_core::Item;
///
/// // "Emils Cheese Pizza" has 18 characters: ceil(12.25 × 0.2) = ceil(2.45)
/// assert_eq!(item_description_points(&Item::new("Emils Cheese Pizza", "12.25")), 3);
/// // 17 characters: no bonus
/// assert_eq!(item_description_points(&Item::new("Mountain Dew 12PK", "6.49")), 0);
/// ```
pub fn item_description_points(item: &Item) -> u64 {
    let trimmed_len = item
        .short_description
        .trim_matches(is_pattern_whitespace)
        .chars()
        .count();

    if trimmed_len % 3 != 0 {
        return 0;
    }

    // `as` saturates: NaN → 0, +inf → u64::MAX
    (parse_amount(&item.price) * DESCRIPTION_PRICE_FACTOR).ceil() as u64
}

/// Whether the purchase date falls on an odd day of month.
///
/// A date with no day of month (month outside 01..12 or day outside 01..31)
/// counts as odd: an unreadable day is never even.
pub fn is_odd_purchase_day(purchase_date: &str) -> bool {
    day_of_month(purchase_date).map_or(true, |day| day % 2 == 1)
}

/// Day of month of a `YYYY-MM-DD` date read as UTC midnight.
///
/// Days past the end of the month roll into the next one, so `2022-02-30`
/// is 2 March and `2023-04-31` is 1 May.
pub fn day_of_month(purchase_date: &str) -> Option<u32> {
    let mut parts = purchase_date.splitn(3, '-');
    let year: i32 = parts.next()?.parse().ok()?;
    let month: u32 = parts.next()?.parse().ok()?;
    let day: u32 = parts.next()?.parse().ok()?;

    if !(1..=12).contains(&month) || !(1..=31).contains(&day) {
        return None;
    }

    NaiveDate::from_ymd_opt(year, month, 1)?
        .checked_add_days(Days::new(u64::from(day - 1)))
        .map(|date| date.day())
}

/// 14:00 through 15:59, plus 16:00 exactly.
///
/// 14:00 itself qualifies: the window opens on the hour, not a minute after.
pub fn is_afternoon_purchase(purchase_time: &str) -> bool {
    let Some((hour, minute)) = purchase_time.split_once(':') else {
        return false;
    };
    let (Ok(hour), Ok(minute)) = (hour.parse::<u32>(), minute.parse::<u32>()) else {
        return false;
    };

    hour >= 14 && (hour < 16 || (hour == 16 && minute == 0))
}

/// Parses a validated amount; anything unparsable becomes NaN and fails
/// every comparison.
fn parse_amount(amount: &str) -> f64 {
    amount.parse::<f64>().unwrap_or(f64::NAN)
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn receipt(
        retailer: &str,
        date: &str,
        time: &str,
        total: &str,
        items: &[(&str, &str)],
    ) -> Receipt {
        Receipt {
            retailer: retailer.to_string(),
            purchase_date: date.to_string(),
            purchase_time: time.to_string(),
            total: total.to_string(),
            items: items.iter().map(|(d, p)| Item::new(*d, *p)).collect(),
        }
    }

    #[test]
    fn test_five_item_target_receipt() {
        let r = receipt(
            "Target",
            "2022-01-01",
            "13:01",
            "35.35",
            &[
                ("Mountain Dew 12PK", "6.49"),
                ("Emils Cheese Pizza", "12.25"),
                ("Knorr Creamy Chicken", "1.26"),
                ("Doritos Nacho Cheese", "3.35"),
                ("   Klarbrunn 12-PK 12 FL OZ  ", "12.00"),
            ],
        );

        let b = breakdown(&r);
        assert_eq!(b.retailer_name, 6);
        assert_eq!(b.round_total, 0);
        assert_eq!(b.quarter_total, 0);
        assert_eq!(b.item_pairs, 10);
        // ceil(2.45) + ceil(2.4000000000000004)
        assert_eq!(b.item_descriptions, 6);
        assert_eq!(b.odd_day, 6);
        assert_eq!(b.afternoon, 0);
        assert_eq!(score(&r), 28);
    }

    #[test]
    fn test_round_total_walmart() {
        let r = receipt(
            "Walmart",
            "2022-02-15",
            "14:30",
            "8.00",
            &[("Cereal", "5.00"), ("Milk", "3.00")],
        );
        assert_eq!(score(&r), 104);
    }

    #[test]
    fn test_odd_day_costco() {
        let r = receipt("Costco", "2022-01-15", "13:00", "10.00", &[("Chicken", "10.00")]);
        assert_eq!(score(&r), 87);
    }

    #[test]
    fn test_quarter_total_trader_joes() {
        let r = receipt(
            "Trader Joes",
            "2022-04-10",
            "15:45",
            "3.75",
            &[("Bread", "1.25"), ("Butter", "2.50")],
        );
        assert_eq!(score(&r), 10 + 25 + 5 + 1 + 10);
    }

    #[test]
    fn test_round_and_quarter_stack() {
        let r = receipt("A", "2022-01-02", "10:00", "1.00", &[("abcd", "1.00")]);
        let b = breakdown(&r);
        assert_eq!(b.round_total, ROUND_TOTAL_POINTS);
        assert_eq!(b.quarter_total, QUARTER_TOTAL_POINTS);
        assert_eq!(b.total(), 1 + 50 + 25);
    }

    #[test]
    fn test_zero_total_is_round() {
        let r = receipt("A", "2022-01-02", "10:00", "0.00", &[("abcd", "0.00")]);
        assert_eq!(score(&r), 1 + 50 + 25);
    }

    #[test]
    fn test_retailer_name_counts_alphanumerics_only() {
        assert_eq!(retailer_name_points("M&M Corner Market"), 14);
        assert_eq!(retailer_name_points("  -&_ "), 0);
    }

    #[test]
    fn test_item_pairs() {
        assert_eq!(item_pair_points(1), 0);
        assert_eq!(item_pair_points(2), 5);
        assert_eq!(item_pair_points(5), 10);
    }

    #[test]
    fn test_description_exact_multiple_not_rounded_up() {
        // 5.00 × 0.2 == 1.0 exactly
        assert_eq!(item_description_points(&Item::new("abc", "5.00")), 1);
        assert_eq!(item_description_points(&Item::new("abc", "0.00")), 0);
    }

    #[test]
    fn test_whitespace_only_description_qualifies() {
        assert_eq!(item_description_points(&Item::new("   ", "10.00")), 2);
    }

    #[test]
    fn test_afternoon_window_boundaries() {
        assert!(!is_afternoon_purchase("13:59"));
        assert!(is_afternoon_purchase("14:00"));
        assert!(is_afternoon_purchase("14:01"));
        assert!(is_afternoon_purchase("15:59"));
        assert!(is_afternoon_purchase("16:00"));
        assert!(!is_afternoon_purchase("16:01"));
        assert!(!is_afternoon_purchase("99:99"));
    }

    #[test]
    fn test_day_of_month() {
        assert_eq!(day_of_month("2022-01-01"), Some(1));
        assert_eq!(day_of_month("2022-04-10"), Some(10));
        // rolls over past month end
        assert_eq!(day_of_month("2022-02-30"), Some(2));
        assert_eq!(day_of_month("2024-02-30"), Some(1));
        assert_eq!(day_of_month("2022-13-01"), None);
        assert_eq!(day_of_month("2022-01-00"), None);
        assert_eq!(day_of_month("2022-01-32"), None);
    }

    #[test]
    fn test_invalid_date_counts_as_odd() {
        assert!(is_odd_purchase_day("2022-00-10"));
        assert!(!is_odd_purchase_day("2022-02-30"));
    }

    #[test]
    fn test_total_is_exact_above_f64_precision() {
        let breakdown = PointsBreakdown {
            retailer_name: 6,
            round_total: 0,
            quarter_total: 0,
            item_pairs: 5,
            item_descriptions: (1u64 << 53) + 1,
            odd_day: 6,
            afternoon: 0,
        };

        assert_eq!(breakdown.total(), (1u64 << 53) + 18);
    }

    #[test]
    fn test_huge_price_saturates() {
        let price = format!("{}.00", "9".repeat(400));
        let r = receipt("A", "2022-01-02", "10:00", "1.00", &[("abc", price.as_str())]);
        assert_eq!(score(&r), u64::MAX);
    }

    proptest! {
        #[test]
        fn prop_score_is_deterministic(
            retailer in "[A-Za-z0-9 &-]{1,20}",
            day in 1u32..=28,
            hour in 0u32..24,
            minute in 0u32..60,
            cents in 0u64..100_000,
        ) {
            let total = format!("{}.{:02}", cents / 100, cents % 100);
            let date = format!("2022-03-{day:02}");
            let time = format!("{hour:02}:{minute:02}");
            let r = receipt(&retailer, &date, &time, &total, &[("abc", total.as_str())]);
            prop_assert_eq!(score(&r), score(&r.clone()));
            prop_assert_eq!(score(&r), breakdown(&r).total());
        }

        #[test]
        fn prop_quarter_totals(quarters in 0u64..40_000) {
            let cents = quarters * 25;
            let total = format!("{}.{:02}", cents / 100, cents % 100);
            let r = receipt("A", "2022-01-02", "10:00", &total, &[("abcd", "1.00")]);
            prop_assert_eq!(breakdown(&r).quarter_total, QUARTER_TOTAL_POINTS);
        }
    }
}
