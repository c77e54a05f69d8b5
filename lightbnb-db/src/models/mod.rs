//! Domain models with validation at construction
//!
//! Row types mirror the `users`, `properties` and `reservations` tables.
//! Insert payloads validate their input when built or deserialized.

pub mod email;
pub mod limit;
pub mod property;
pub mod reservation;
pub mod user;
pub mod validation;

pub use email::Email;
pub use limit::Limit;
pub use property::{NewProperty, Property, PropertyListing};
pub use reservation::GuestReservation;
pub use user::{NewUser, User};
pub use validation::ValidationError;
