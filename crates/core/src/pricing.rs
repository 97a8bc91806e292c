//! Rental pricing.
//!
//! Cost is computed in whole currency units from the per-day rate; the
//! payment layer converts to minor units when talking to the gateway.

use crate::availability::DateRange;
use crate::error::CoreError;

/// Priced rental: day count and total cost in whole currency units.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Quote {
    pub total_days: i64,
    pub total_cost: i64,
}

/// Number of billable days for a rental interval.
///
/// Defined as the difference `return - pickup` in days; a valid interval
/// from [`rental_interval`](crate::availability::rental_interval) always
/// yields at least 1.
pub fn rental_days(interval: &DateRange) -> i64 {
    (interval.end - interval.start).num_days()
}

/// Price an interval at the given per-day rate.
///
/// Rejects a non-positive rate; the interval itself is assumed valid.
pub fn quote(interval: &DateRange, price_per_day: i64) -> Result<Quote, CoreError> {
    if price_per_day <= 0 {
        return Err(CoreError::Validation(format!(
            "Price per day must be positive, got {price_per_day}"
        )));
    }
    let total_days = rental_days(interval);
    Ok(Quote {
        total_days,
        total_cost: total_days * price_per_day,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::availability::rental_interval;
    use chrono::NaiveDate;

    fn d(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    #[test]
    fn three_day_rental_at_1000_costs_3000() {
        let interval = rental_interval(d("2025-06-10"), d("2025-06-13")).unwrap();
        let q = quote(&interval, 1000).unwrap();
        assert_eq!(q.total_days, 3);
        assert_eq!(q.total_cost, 3000);
    }

    #[test]
    fn one_night_rental_bills_one_day() {
        let interval = rental_interval(d("2025-06-10"), d("2025-06-11")).unwrap();
        let q = quote(&interval, 750).unwrap();
        assert_eq!(q.total_days, 1);
        assert_eq!(q.total_cost, 750);
    }

    #[test]
    fn quote_rejects_zero_rate() {
        let interval = rental_interval(d("2025-06-10"), d("2025-06-12")).unwrap();
        assert!(matches!(
            quote(&interval, 0),
            Err(CoreError::Validation(_))
        ));
    }

    #[test]
    fn quote_rejects_negative_rate() {
        let interval = rental_interval(d("2025-06-10"), d("2025-06-12")).unwrap();
        assert!(quote(&interval, -50).is_err());
    }

    #[test]
    fn rental_days_spans_month_boundary() {
        let interval = rental_interval(d("2025-06-28"), d("2025-07-02")).unwrap();
        assert_eq!(rental_days(&interval), 4);
    }
}
