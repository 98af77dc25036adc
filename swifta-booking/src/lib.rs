pub mod loyalty;
pub mod manager;
pub mod models;

pub use loyalty::{LoyaltyEntry, LoyaltyLedger};
pub use manager::{BookingError, BookingManager};
pub use models::{Booking, BookingStatus, Passenger};
