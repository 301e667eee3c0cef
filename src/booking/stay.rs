use crate::error::BookingError;
use chrono::{DateTime, NaiveDate, TimeZone};
use serde::{Deserialize, Serialize};

/// Booking summary: nights stayed and what they cost
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct StayQuote {
    pub nights: i64,
    pub total: i64,
}

/// Check-in and check-out pair, already reduced to calendar days
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct StayRange {
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
}

impl StayRange {
    pub fn new(check_in: NaiveDate, check_out: NaiveDate) -> Result<Self, BookingError> {
        if check_out <= check_in {
            return Err(BookingError::InvalidDateRange {
                check_in,
                check_out,
            });
        }

        Ok(Self {
            check_in,
            check_out,
        })
    }

    /// Drops the time of day, so 23:00 to 01:00 the next day is one night
    pub fn from_datetimes<Tz: TimeZone>(
        check_in: &DateTime<Tz>,
        check_out: &DateTime<Tz>,
    ) -> Result<Self, BookingError> {
        Self::new(check_in.date_naive(), check_out.date_naive())
    }

    pub fn nights(&self) -> i64 {
        (self.check_out - self.check_in).num_days()
    }

    pub fn quote(&self, price_per_night: i64) -> Result<StayQuote, BookingError> {
        let nights = self.nights();
        let total = nights
            .checked_mul(price_per_night)
            .ok_or(BookingError::TotalOverflow {
                nights,
                price_per_night,
            })?;

        Ok(StayQuote { nights, total })
    }
}

/// Nights and total price for a stay at `price_per_night`
pub fn compute_stay(
    check_in: NaiveDate,
    check_out: NaiveDate,
    price_per_night: i64,
) -> Result<StayQuote, BookingError> {
    StayRange::new(check_in, check_out)?.quote(price_per_night)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Days, Utc};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn three_nights_at_five_thousand() {
        let quote = compute_stay(date(2024, 10, 1), date(2024, 10, 4), 5000).unwrap();
        assert_eq!(quote, StayQuote { nights: 3, total: 15000 });
    }

    #[test]
    fn next_day_is_one_night_at_base_price() {
        let check_in = date(2024, 2, 28);
        let check_out = check_in.checked_add_days(Days::new(1)).unwrap();
        assert_eq!(
            compute_stay(check_in, check_out, 1500).unwrap(),
            StayQuote { nights: 1, total: 1500 }
        );
    }

    #[test]
    fn spans_month_and_leap_day() {
        let quote = compute_stay(date(2024, 2, 27), date(2024, 3, 2), 3000).unwrap();
        assert_eq!(quote.nights, 4);
        assert_eq!(quote.total, 12000);
    }

    #[test]
    fn same_day_is_invalid() {
        let day = date(2024, 10, 1);
        assert_eq!(
            compute_stay(day, day, 5000),
            Err(BookingError::InvalidDateRange {
                check_in: day,
                check_out: day
            })
        );
    }

    #[test]
    fn reversed_dates_are_invalid() {
        let result = compute_stay(date(2024, 10, 4), date(2024, 10, 1), 5000);
        assert!(matches!(result, Err(BookingError::InvalidDateRange { .. })));
    }

    #[test]
    fn total_never_decreases_as_price_grows() {
        let (check_in, check_out) = (date(2024, 7, 1), date(2024, 7, 15));
        let totals: Vec<i64> = [0, 1, 1500, 3000, 5000, 15000]
            .into_iter()
            .map(|price| compute_stay(check_in, check_out, price).unwrap().total)
            .collect();
        assert!(totals.windows(2).all(|pair| pair[0] <= pair[1]));
    }

    #[test]
    fn overflowing_total_is_reported() {
        let result = compute_stay(date(2024, 1, 1), date(2024, 1, 3), i64::MAX);
        assert!(matches!(result, Err(BookingError::TotalOverflow { nights: 2, .. })));
    }

    #[test]
    fn time_of_day_is_ignored() {
        let check_in = Utc.with_ymd_and_hms(2024, 10, 1, 23, 30, 0).unwrap();
        let check_out = Utc.with_ymd_and_hms(2024, 10, 2, 0, 15, 0).unwrap();
        let range = StayRange::from_datetimes(&check_in, &check_out).unwrap();
        assert_eq!(range.nights(), 1);

        let same_day_later = Utc.with_ymd_and_hms(2024, 10, 1, 23, 59, 0).unwrap();
        assert!(StayRange::from_datetimes(&check_in, &same_day_later).is_err());
    }
}
