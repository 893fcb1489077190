use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use uuid::Uuid;

use super::period::RentalPeriod;
use super::vehicle::Vehicle;

/// A rental binding one vehicle to one customer for a period.
///
/// Agreements are **append-only**: once created they stay in the fleet's
/// agreement log, and returning the vehicle only moves the agreement from
/// `Open` to `Returned`. The vehicle is referenced by id; the daily rate is
/// captured when the agreement is reserved.
#[derive(Debug, Clone, PartialEq)]
pub struct RentalAgreement {
    pub id: Uuid,
    pub vehicle_id: Uuid,
    pub customer_name: String,
    pub period: RentalPeriod,
    pub daily_rate: Decimal,
    pub status: AgreementStatus,
    pub created_at: DateTime<Utc>,
    pub returned_at: Option<DateTime<Utc>>,
}

/// Whether the agreement's vehicle is still out.
///
/// - `Open`: the vehicle is rented under this agreement
/// - `Returned`: the vehicle came back and is available again
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AgreementStatus {
    Open,
    Returned,
}

impl AgreementStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Open => "open",
            Self::Returned => "returned",
        }
    }
}

impl RentalAgreement {
    /// Reserve `vehicle` for `customer_name` over `period`.
    ///
    /// Creating the agreement and taking the vehicle out of the available pool
    /// happen together here and nowhere else. The caller must only pass a
    /// vehicle that is currently available.
    pub(crate) fn reserve(
        vehicle: &mut Vehicle,
        customer_name: impl Into<String>,
        period: RentalPeriod,
    ) -> Self {
        debug_assert!(vehicle.is_available(), "reserving a rented vehicle");
        vehicle.set_available(false);

        Self {
            id: Uuid::new_v4(),
            vehicle_id: vehicle.id(),
            customer_name: customer_name.into(),
            period,
            daily_rate: vehicle.price_per_day(),
            status: AgreementStatus::Open,
            created_at: Utc::now(),
            returned_at: None,
        }
    }

    /// Mark the agreement returned and put its vehicle back in the pool.
    ///
    /// Returns `false` without touching the vehicle if the agreement was
    /// already returned, so an old agreement cannot release a vehicle that has
    /// since been rented again.
    pub(crate) fn close(&mut self, vehicle: &mut Vehicle) -> bool {
        debug_assert_eq!(vehicle.id(), self.vehicle_id);
        if self.status == AgreementStatus::Returned {
            return false;
        }
        vehicle.set_available(true);
        self.status = AgreementStatus::Returned;
        self.returned_at = Some(Utc::now());
        true
    }

    pub fn is_open(&self) -> bool {
        self.status == AgreementStatus::Open
    }

    pub fn rental_days(&self) -> i64 {
        self.period.days()
    }

    /// Whole rental days times the daily rate. Derived on every call.
    ///
    /// Cannot overflow for rates up to [`MAX_DAILY_RATE`](super::MAX_DAILY_RATE),
    /// the ceiling enforced wherever rates enter the desk.
    pub fn total_cost(&self) -> Decimal {
        self.daily_rate * Decimal::from(self.rental_days())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::MAX_DAILY_RATE;
    use chrono::NaiveDate;

    fn corolla() -> Vehicle {
        Vehicle::new("Toyota", "Corolla", "REG1", Decimal::new(300, 1))
    }

    fn period(start: &str, end: &str) -> RentalPeriod {
        RentalPeriod::parse(start, end).unwrap()
    }

    #[test]
    fn test_reserve_marks_vehicle_unavailable() {
        let mut vehicle = corolla();
        let agreement =
            RentalAgreement::reserve(&mut vehicle, "Alice", period("2024-01-01", "2024-01-04"));

        assert!(!vehicle.is_available());
        assert!(agreement.is_open());
        assert_eq!(agreement.vehicle_id, vehicle.id());
        assert_eq!(agreement.customer_name, "Alice");
        assert!(agreement.returned_at.is_none());
    }

    #[test]
    fn test_total_cost() {
        let mut vehicle = corolla();
        let agreement =
            RentalAgreement::reserve(&mut vehicle, "Alice", period("2024-01-01", "2024-01-04"));

        assert_eq!(agreement.total_cost(), Decimal::from(90));
        assert_eq!(agreement.total_cost(), agreement.total_cost());
    }

    #[test]
    fn test_zero_day_rental_costs_nothing() {
        let mut vehicle = corolla();
        let agreement =
            RentalAgreement::reserve(&mut vehicle, "Alice", period("2024-01-01", "2024-01-01"));
        assert_eq!(agreement.total_cost(), Decimal::ZERO);
    }

    #[test]
    fn test_close_releases_vehicle() {
        let mut vehicle = corolla();
        let mut agreement =
            RentalAgreement::reserve(&mut vehicle, "Alice", period("2024-01-01", "2024-01-04"));

        assert!(agreement.close(&mut vehicle));
        assert!(vehicle.is_available());
        assert_eq!(agreement.status, AgreementStatus::Returned);
        assert!(agreement.returned_at.is_some());
    }

    #[test]
    fn test_closing_twice_leaves_rerented_vehicle_alone() {
        let mut vehicle = corolla();
        let mut first =
            RentalAgreement::reserve(&mut vehicle, "Alice", period("2024-01-01", "2024-01-04"));
        first.close(&mut vehicle);

        let second =
            RentalAgreement::reserve(&mut vehicle, "Bob", period("2024-02-01", "2024-02-03"));

        assert!(!first.close(&mut vehicle));
        assert!(!vehicle.is_available());
        assert!(second.is_open());
    }

    #[test]
    fn test_highest_rate_over_widest_period() {
        let mut vehicle = Vehicle::new("Toyota", "Corolla", "REG1", MAX_DAILY_RATE);
        let widest = RentalPeriod::new(NaiveDate::MIN, NaiveDate::MAX).unwrap();
        let agreement = RentalAgreement::reserve(&mut vehicle, "Alice", widest);

        assert_eq!(
            agreement.total_cost(),
            MAX_DAILY_RATE * Decimal::from(widest.days())
        );
    }
}
