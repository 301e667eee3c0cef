use chrono::NaiveDate;
use thiserror::Error;

/// Errors raised while building a catalog or narrowing it down
#[derive(Debug, Clone, Error, PartialEq)]
pub enum CatalogError {
    #[error("duplicate listing id {0}")]
    DuplicateListingId(u32),

    #[error("listing {id} is invalid: {reason}")]
    InvalidListing { id: u32, reason: String },

    #[error("price range is inverted: min {min} > max {max}")]
    InvalidPriceRange { min: i64, max: i64 },
}

/// Errors raised by stay pricing and the booking session
#[derive(Debug, Clone, Error, PartialEq)]
pub enum BookingError {
    #[error("check-out {check_out} must be after check-in {check_in}")]
    InvalidDateRange {
        check_in: NaiveDate,
        check_out: NaiveDate,
    },

    #[error("listing {0} is not available for booking")]
    UnavailableListingSelected(u32),

    #[error("both check-in and check-out dates are required")]
    MissingDates,

    #[error("guest {0} is required")]
    MissingGuestDetails(&'static str),

    #[error("stay total overflows for {nights} nights at {price_per_night} per night")]
    TotalOverflow { nights: i64, price_per_night: i64 },

    #[error("cannot {action} while {state}")]
    InvalidTransition {
        action: &'static str,
        state: &'static str,
    },
}
