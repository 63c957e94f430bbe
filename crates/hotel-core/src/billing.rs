//! # Billing Math
//!
//! Stay length and invoice totals. The billing service in `hotel-service`
//! persists what these functions compute.
//!
//! ```text
//! check_in ──► check_out          nights = days between
//!                                  nights <= 0  →  1   (same-day or inverted)
//!                                  total = nights × nightly price
//!                                  (OutOfRange if it does not fit in i64 cents)
//! ```

use chrono::NaiveDate;

use crate::error::ValidationError;
use crate::money::Money;
use crate::validation::ValidationResult;
use crate::MIN_BILLABLE_NIGHTS;

/// Calendar days between check-in and check-out. Negative when inverted.
pub fn stay_nights(check_in: NaiveDate, check_out: NaiveDate) -> i64 {
    (check_out - check_in).num_days()
}

/// Nights charged for a stay, clamped to at least one.
pub fn billable_nights(check_in: NaiveDate, check_out: NaiveDate) -> i64 {
    stay_nights(check_in, check_out).max(MIN_BILLABLE_NIGHTS)
}

/// Invoice total for a stay at the given nightly price.
///
/// ## Example
/// ```rust
/// use chrono::NaiveDate;
/// use hotel_core::billing::invoice_total;
/// use hotel_core::Money;
///
/// let check_in = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
/// let check_out = NaiveDate::from_ymd_opt(2024, 1, 4).unwrap();
/// let total = invoice_total(check_in, check_out, Money::from_cents(10000)).unwrap();
/// assert_eq!(total.to_string(), "300.00");
/// ```
pub fn invoice_total(
    check_in: NaiveDate,
    check_out: NaiveDate,
    nightly: Money,
) -> ValidationResult<Money> {
    nightly
        .checked_times(billable_nights(check_in, check_out))
        .ok_or_else(|| ValidationError::OutOfRange {
            field: "total".to_string(),
            min: 0,
            max: i64::MAX,
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_three_night_stay() {
        let total = invoice_total(date(2024, 1, 1), date(2024, 1, 4), Money::from_cents(10000)).unwrap();
        assert_eq!(total.cents(), 30000);
    }

    #[test]
    fn test_same_day_is_one_night() {
        let total = invoice_total(date(2024, 1, 1), date(2024, 1, 1), Money::from_cents(10000)).unwrap();
        assert_eq!(total.cents(), 10000);
    }

    #[test]
    fn test_inverted_range_is_one_night() {
        assert_eq!(stay_nights(date(2024, 1, 5), date(2024, 1, 1)), -4);
        assert_eq!(billable_nights(date(2024, 1, 5), date(2024, 1, 1)), 1);
    }

    #[test]
    fn test_total_too_large_is_rejected() {
        let result = invoice_total(
            date(2024, 1, 1),
            date(9999, 12, 31),
            Money::from_cents(5_000_000_000_000),
        );
        assert!(matches!(
            result,
            Err(ValidationError::OutOfRange { ref field, .. }) if field == "total"
        ));
    }

    #[test]
    fn test_month_and_leap_boundaries() {
        assert_eq!(stay_nights(date(2024, 1, 30), date(2024, 2, 2)), 3);
        assert_eq!(stay_nights(date(2024, 2, 28), date(2024, 3, 1)), 2);
        assert_eq!(stay_nights(date(2023, 2, 28), date(2023, 3, 1)), 1);
    }
}
