use chrono::NaiveDate;
use thiserror::Error;
use uuid::Uuid;

/// Errors raised by the rental desk.
///
/// Not finding an available vehicle is not an error; see
/// [`Fleet::rent_vehicle`](crate::Fleet::rent_vehicle).
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RentalError {
    #[error("Rental end date {end} is before start date {start}")]
    InvalidPeriod { start: NaiveDate, end: NaiveDate },

    #[error("Invalid date '{0}', expected YYYY-MM-DD")]
    InvalidDate(String),

    #[error("Invalid daily rate '{0}', expected an amount from 0 to 1000000")]
    InvalidRate(String),

    #[error("Rental agreement not found: {0}")]
    AgreementNotFound(Uuid),

    #[error("Vehicle not found: {0}")]
    VehicleNotFound(Uuid),

    #[error("No open rental agreement found for customer '{0}'")]
    NoOpenAgreement(String),

    #[error("Customer '{name}' has {count} open rental agreements")]
    AmbiguousCustomer { name: String, count: usize },
}
