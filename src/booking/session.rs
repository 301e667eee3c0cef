use crate::booking::stay::{StayQuote, StayRange};
use crate::error::BookingError;
use crate::models::Listing;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

/// Listing targeted by the booking dialog and the dates picked so far
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Selection {
    pub listing: Listing,
    pub check_in: Option<NaiveDate>,
    pub check_out: Option<NaiveDate>,
}

/// Contact details entered in the booking dialog
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Guest {
    pub name: String,
    pub phone: String,
    pub email: String,
}

impl Guest {
    pub fn new(
        name: impl Into<String>,
        phone: impl Into<String>,
        email: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            phone: phone.into(),
            email: email.into(),
        }
    }

    /// Copy with surrounding whitespace removed, or the first blank field
    fn validated(&self) -> Result<Self, BookingError> {
        let field = |value: &str, name: &'static str| {
            let value = value.trim();
            if value.is_empty() {
                Err(BookingError::MissingGuestDetails(name))
            } else {
                Ok(value.to_string())
            }
        };

        Ok(Self {
            name: field(&self.name, "name")?,
            phone: field(&self.phone, "phone")?,
            email: field(&self.email, "email")?,
        })
    }
}

/// Confirmed booking, ready for a reservations backend
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Booking {
    pub listing_id: u32,
    pub guest: Guest,
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
    pub price_per_night: i64,
    pub quote: StayQuote,
}

/// Per-view booking state
///
/// Every action returns a fresh snapshot and leaves `self` untouched, so a
/// rejected action keeps the previous state usable.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(tag = "state", content = "data", rename_all = "snake_case")]
pub enum BookingSession {
    #[default]
    Browsing,
    Selecting(Selection),
    Confirmed(Booking),
}

impl BookingSession {
    pub fn new() -> Self {
        Self::Browsing
    }

    pub fn state_name(&self) -> &'static str {
        match self {
            BookingSession::Browsing => "browsing",
            BookingSession::Selecting(_) => "selecting",
            BookingSession::Confirmed(_) => "confirmed",
        }
    }

    /// Open the booking dialog for a listing
    ///
    /// Unavailable listings can be opened for viewing; `confirm` turns them away.
    /// Picking another listing while selecting keeps the chosen dates.
    pub fn select(&self, listing: &Listing) -> Result<Self, BookingError> {
        let (check_in, check_out) = match self {
            BookingSession::Browsing => (None, None),
            BookingSession::Selecting(current) => (current.check_in, current.check_out),
            BookingSession::Confirmed(_) => return Err(self.rejected("select a listing")),
        };

        debug!(listing_id = listing.id, available = listing.available, "Listing selected");

        Ok(BookingSession::Selecting(Selection {
            listing: listing.clone(),
            check_in,
            check_out,
        }))
    }

    pub fn set_check_in(&self, date: NaiveDate) -> Result<Self, BookingError> {
        let mut selection = self.selection_for("pick a check-in date")?.clone();
        selection.check_in = Some(date);
        Ok(BookingSession::Selecting(selection))
    }

    pub fn set_check_out(&self, date: NaiveDate) -> Result<Self, BookingError> {
        let mut selection = self.selection_for("pick a check-out date")?.clone();
        selection.check_out = Some(date);
        Ok(BookingSession::Selecting(selection))
    }

    /// Close the dialog and drop the selection
    pub fn cancel(&self) -> Result<Self, BookingError> {
        match self {
            BookingSession::Confirmed(_) => Err(self.rejected("cancel")),
            _ => Ok(BookingSession::Browsing),
        }
    }

    /// Summary for the dialog, once both dates are picked
    pub fn quote(&self) -> Option<Result<StayQuote, BookingError>> {
        match self {
            BookingSession::Selecting(Selection {
                listing,
                check_in: Some(check_in),
                check_out: Some(check_out),
            }) => Some(
                StayRange::new(*check_in, *check_out)
                    .and_then(|range| range.quote(listing.price_per_night)),
            ),
            BookingSession::Confirmed(booking) => Some(Ok(booking.quote)),
            _ => None,
        }
    }

    /// Submit the dialog: availability first, then dates, then contact details
    pub fn confirm(&self, guest: &Guest) -> Result<Self, BookingError> {
        let selection = self.selection_for("confirm")?;
        let listing = &selection.listing;

        if !listing.is_bookable() {
            warn!(listing_id = listing.id, "Refusing to confirm unavailable listing");
            return Err(BookingError::UnavailableListingSelected(listing.id));
        }

        let (Some(check_in), Some(check_out)) = (selection.check_in, selection.check_out) else {
            return Err(BookingError::MissingDates);
        };

        let range = StayRange::new(check_in, check_out)?;
        let quote = range.quote(listing.price_per_night)?;
        let guest = guest.validated()?;

        info!(
            listing_id = listing.id,
            nights = quote.nights,
            total = quote.total,
            "Booking confirmed"
        );

        Ok(BookingSession::Confirmed(Booking {
            listing_id: listing.id,
            guest,
            check_in,
            check_out,
            price_per_night: listing.price_per_night,
            quote,
        }))
    }

    pub fn booking(&self) -> Option<&Booking> {
        match self {
            BookingSession::Confirmed(booking) => Some(booking),
            _ => None,
        }
    }

    fn selection_for(&self, action: &'static str) -> Result<&Selection, BookingError> {
        match self {
            BookingSession::Selecting(selection) => Ok(selection),
            _ => Err(self.rejected(action)),
        }
    }

    fn rejected(&self, action: &'static str) -> BookingError {
        BookingError::InvalidTransition {
            action,
            state: self.state_name(),
        }
    }
}
