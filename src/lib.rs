pub mod booking;
pub mod catalog;
pub mod error;
pub mod models;

pub use booking::{compute_stay, Booking, BookingSession, Guest, RentalTerms, StayQuote};
pub use catalog::{filter, Catalog, CatalogSource, FilterCriteria, TypeFilter};
pub use error::{BookingError, CatalogError};
pub use models::{Listing, ListingType, Location, Review};
