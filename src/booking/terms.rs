use crate::booking::session::Booking;
use crate::booking::stay::StayQuote;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// House rules applied to every booking
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct RentalTerms {
    /// Share of the stay total paid when booking, in percent
    pub prepayment_percent: i64,
    /// Refundable damage deposit, returned after check-out
    pub deposit: i64,
    /// Cancelling at least this many days before check-in refunds everything
    pub free_cancellation_days: i64,
    /// Share of the prepayment refunded on a later cancellation, in percent
    pub late_refund_percent: i64,
    pub check_in_hour: u32,
    pub check_out_hour: u32,
}

impl Default for RentalTerms {
    fn default() -> Self {
        Self {
            prepayment_percent: 30,
            deposit: 5000,
            free_cancellation_days: 7,
            late_refund_percent: 50,
            check_in_hour: 14,
            check_out_hour: 12,
        }
    }
}

impl RentalTerms {
    /// Amount due when booking, rounded up to a whole unit
    pub fn prepayment(&self, quote: &StayQuote) -> i64 {
        percent_of(quote.total, self.prepayment_percent)
    }

    pub fn deposit(&self) -> i64 {
        self.deposit
    }

    /// Remainder of the total, paid on arrival
    pub fn balance(&self, quote: &StayQuote) -> i64 {
        quote.total - self.prepayment(quote)
    }

    pub fn is_free_cancellation(&self, booking: &Booking, cancel_on: NaiveDate) -> bool {
        (booking.check_in - cancel_on).num_days() >= self.free_cancellation_days
    }

    /// Part of the prepayment returned when the guest cancels on `cancel_on`
    pub fn refund(&self, booking: &Booking, cancel_on: NaiveDate) -> i64 {
        let prepaid = self.prepayment(&booking.quote);
        if self.is_free_cancellation(booking, cancel_on) {
            prepaid
        } else {
            percent_of(prepaid, self.late_refund_percent)
        }
    }
}

fn percent_of(amount: i64, percent: i64) -> i64 {
    let scaled = (i128::from(amount) * i128::from(percent) + 99) / 100;
    i64::try_from(scaled).unwrap_or(i64::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::booking::session::Guest;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn booking(check_in: NaiveDate, total: i64) -> Booking {
        Booking {
            listing_id: 1,
            guest: Guest::new("Иван", "+7 900 000-00-00", "ivan@example.com"),
            check_in,
            check_out: check_in + chrono::Days::new(3),
            price_per_night: total / 3,
            quote: StayQuote { nights: 3, total },
        }
    }

    #[test]
    fn prepayment_is_thirty_percent() {
        let terms = RentalTerms::default();
        let quote = StayQuote { nights: 3, total: 15000 };
        assert_eq!(terms.prepayment(&quote), 4500);
        assert_eq!(terms.balance(&quote), 10500);
        assert_eq!(terms.deposit(), 5000);
    }

    #[test]
    fn prepayment_rounds_up() {
        let quote = StayQuote { nights: 1, total: 1001 };
        assert_eq!(RentalTerms::default().prepayment(&quote), 301);
    }

    #[test]
    fn cancelling_seven_days_ahead_is_free() {
        let terms = RentalTerms::default();
        let booking = booking(date(2024, 10, 8), 15000);

        assert!(terms.is_free_cancellation(&booking, date(2024, 10, 1)));
        assert_eq!(terms.refund(&booking, date(2024, 10, 1)), 4500);
        assert_eq!(terms.refund(&booking, date(2024, 9, 1)), 4500);
    }

    #[test]
    fn cancelling_six_days_ahead_refunds_half() {
        let terms = RentalTerms::default();
        let booking = booking(date(2024, 10, 8), 15000);

        assert!(!terms.is_free_cancellation(&booking, date(2024, 10, 2)));
        assert_eq!(terms.refund(&booking, date(2024, 10, 2)), 2250);
        assert_eq!(terms.refund(&booking, date(2024, 10, 8)), 2250);
    }

    #[test]
    fn default_hours() {
        let terms = RentalTerms::default();
        assert_eq!((terms.check_in_hour, terms.check_out_hour), (14, 12));
    }
}
