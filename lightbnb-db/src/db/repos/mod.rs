//! Repository implementations for database access
//!
//! Each repository borrows the shared pool and issues exactly one
//! statement per call. Failures are logged by `#[instrument(err)]` and
//! returned, never swallowed.

pub mod properties;
pub mod reservations;
pub mod users;

pub use properties::PropertyRepo;
pub use reservations::ReservationRepo;
pub use users::UserRepo;
