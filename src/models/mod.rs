//! Domain models for the rental desk.
//!
//! - [`Vehicle`]: a rentable vehicle with a daily rate and an availability flag.
//! - [`RentalPeriod`]: the start and end dates of a rental, never reversed.
//! - [`RentalAgreement`]: binds a vehicle to a customer for a period. Agreements
//!   are kept after the vehicle is returned.
//! - [`SeedVehicle`]: a vehicle entry from the desk configuration.

mod agreement;
mod period;
mod vehicle;

pub use agreement::*;
pub use period::*;
pub use vehicle::*;
