use std::fmt;
use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::RentalError;

/// A rentable vehicle in the fleet.
///
/// Vehicles start out available. Availability only changes when an agreement
/// is reserved against the vehicle or returned, so the setter is crate-private.
/// The registration number is a display identifier and is not required to be
/// unique.
#[derive(Debug, Clone, PartialEq)]
pub struct Vehicle {
    id: Uuid,
    make: String,
    model: String,
    registration_number: String,
    available: bool,
    price_per_day: Decimal,
}

impl Vehicle {
    pub fn new(
        make: impl Into<String>,
        model: impl Into<String>,
        registration_number: impl Into<String>,
        price_per_day: Decimal,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            make: make.into(),
            model: model.into(),
            registration_number: registration_number.into(),
            available: true,
            price_per_day,
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn make(&self) -> &str {
        &self.make
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn registration_number(&self) -> &str {
        &self.registration_number
    }

    pub fn is_available(&self) -> bool {
        self.available
    }

    pub fn price_per_day(&self) -> Decimal {
        self.price_per_day
    }

    pub(crate) fn set_available(&mut self, available: bool) {
        self.available = available;
    }

    /// Case-insensitive match on both make and model.
    pub fn matches(&self, make: &str, model: &str) -> bool {
        eq_ignore_case(&self.make, make) && eq_ignore_case(&self.model, model)
    }
}

impl fmt::Display for Vehicle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} (Reg: {})",
            self.make, self.model, self.registration_number
        )
    }
}

/// Character-by-character comparison where two characters match if they are
/// equal, share an uppercase form, or share a lowercase form of that uppercase.
/// Only single-character case mappings are used, so `ß` or `İ` match nothing
/// but themselves.
fn eq_ignore_case(a: &str, b: &str) -> bool {
    a.chars().count() == b.chars().count()
        && a.chars().zip(b.chars()).all(|(x, y)| {
            if x == y {
                return true;
            }
            let (ux, uy) = (single_upper(x), single_upper(y));
            ux == uy || single_lower(ux) == single_lower(uy)
        })
}

fn single_upper(c: char) -> char {
    let mut mapped = c.to_uppercase();
    match (mapped.next(), mapped.next()) {
        (Some(u), None) => u,
        _ => c,
    }
}

fn single_lower(c: char) -> char {
    let mut mapped = c.to_lowercase();
    match (mapped.next(), mapped.next()) {
        (Some(l), None) => l,
        _ => c,
    }
}

/// Highest daily rate the desk accepts. Keeps every cost over any
/// representable date range inside `Decimal`'s range.
pub const MAX_DAILY_RATE: Decimal = Decimal::from_parts(1_000_000, 0, 0, false, 0);

/// Check a daily rate against the desk's accepted range, `0..=MAX_DAILY_RATE`.
pub fn check_daily_rate(rate: Decimal) -> Result<Decimal, RentalError> {
    if (rate.is_sign_negative() && !rate.is_zero()) || rate > MAX_DAILY_RATE {
        return Err(RentalError::InvalidRate(rate.to_string()));
    }
    Ok(rate)
}

/// Parse a daily rate entered at the desk. Out-of-range amounts are refused
/// here; [`Vehicle::new`] itself takes whatever it is given.
pub fn parse_daily_rate(s: &str) -> Result<Decimal, RentalError> {
    let trimmed = s.trim();
    let rate =
        Decimal::from_str(trimmed).map_err(|_| RentalError::InvalidRate(trimmed.to_string()))?;
    check_daily_rate(rate).map_err(|_| RentalError::InvalidRate(trimmed.to_string()))
}

/// A vehicle listed in the desk configuration, loaded into the fleet at startup.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SeedVehicle {
    pub make: String,
    pub model: String,
    pub registration_number: String,
    pub price_per_day: Decimal,
}

impl From<SeedVehicle> for Vehicle {
    fn from(seed: SeedVehicle) -> Self {
        Vehicle::new(
            seed.make,
            seed.model,
            seed.registration_number,
            seed.price_per_day,
        )
    }
}
