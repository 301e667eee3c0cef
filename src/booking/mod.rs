pub mod session;
pub mod stay;
pub mod terms;

pub use session::{Booking, BookingSession, Guest, Selection};
pub use stay::{compute_stay, StayQuote, StayRange};
pub use terms::RentalTerms;
