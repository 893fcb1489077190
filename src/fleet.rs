//! The fleet registry: every known vehicle plus the log of rental agreements.
//!
//! The fleet is a plain owned value. Whoever drives the desk (the interactive
//! shell, a test) constructs one and holds it for as long as it needs it.

use uuid::Uuid;

use crate::error::RentalError;
use crate::models::*;

#[derive(Debug, Default)]
pub struct Fleet {
    vehicles: Vec<Vehicle>,
    agreements: Vec<RentalAgreement>,
}

impl Fleet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_vehicles(vehicles: impl IntoIterator<Item = Vehicle>) -> Self {
        let mut fleet = Self::new();
        for vehicle in vehicles {
            fleet.add_vehicle(vehicle);
        }
        fleet
    }

    // ============================================================
    // Vehicles
    // ============================================================

    /// Append a vehicle. Duplicate makes, models and registrations are allowed.
    pub fn add_vehicle(&mut self, vehicle: Vehicle) -> Uuid {
        let id = vehicle.id();
        tracing::info!(vehicle_id = %id, "Added vehicle {}", vehicle);
        self.vehicles.push(vehicle);
        id
    }

    /// All vehicles in insertion order, rented or not.
    pub fn vehicles(&self) -> &[Vehicle] {
        &self.vehicles
    }

    pub fn vehicle(&self, id: Uuid) -> Option<&Vehicle> {
        self.vehicles.iter().find(|v| v.id() == id)
    }

    pub fn available_vehicles(&self) -> impl Iterator<Item = &Vehicle> + '_ {
        self.vehicles.iter().filter(|v| v.is_available())
    }

    /// First available vehicle, in insertion order, whose make and model match
    /// ignoring case.
    pub fn find_available_vehicle(&self, make: &str, model: &str) -> Option<&Vehicle> {
        let found = self
            .vehicles
            .iter()
            .find(|v| v.is_available() && v.matches(make, model));
        tracing::debug!(make, model, found = found.is_some(), "Vehicle lookup");
        found
    }

    // ============================================================
    // Agreements
    // ============================================================

    /// All agreements in the order they were made, open and returned.
    pub fn agreements(&self) -> &[RentalAgreement] {
        &self.agreements
    }

    pub fn agreement(&self, id: Uuid) -> Option<&RentalAgreement> {
        self.agreements.iter().find(|a| a.id == id)
    }

    /// Open agreements whose customer name matches `name` exactly, ignoring
    /// surrounding whitespace.
    pub fn open_agreements_for<'a>(
        &'a self,
        name: &'a str,
    ) -> impl Iterator<Item = &'a RentalAgreement> + 'a {
        let name = name.trim();
        self.agreements
            .iter()
            .filter(move |a| a.is_open() && a.customer_name.trim() == name)
    }

    /// Rent the first available vehicle matching `make` and `model`.
    ///
    /// Returns `None` when nothing matches; that is an expected outcome and the
    /// caller decides how to tell the customer.
    pub fn rent_vehicle(
        &mut self,
        make: &str,
        model: &str,
        customer_name: &str,
        period: RentalPeriod,
    ) -> Option<&RentalAgreement> {
        let Some(index) = self
            .vehicles
            .iter()
            .position(|v| v.is_available() && v.matches(make, model))
        else {
            tracing::info!(
                make,
                model,
                "No available vehicles of the specified make and model"
            );
            return None;
        };

        let vehicle = &mut self.vehicles[index];
        let agreement = RentalAgreement::reserve(vehicle, customer_name, period);
        tracing::info!(
            agreement_id = %agreement.id,
            customer = %agreement.customer_name,
            days = agreement.rental_days(),
            "Rented {}",
            vehicle
        );

        self.agreements.push(agreement);
        self.agreements.last()
    }

    /// Return the vehicle held under the given agreement.
    ///
    /// Returning an agreement that is already returned succeeds and changes
    /// nothing.
    pub fn return_vehicle(&mut self, agreement_id: Uuid) -> Result<&RentalAgreement, RentalError> {
        let index = self
            .agreements
            .iter()
            .position(|a| a.id == agreement_id)
            .ok_or(RentalError::AgreementNotFound(agreement_id))?;
        self.close_agreement(index)
    }

    /// Return the vehicle held by the customer's single open agreement.
    ///
    /// Fails with [`RentalError::AmbiguousCustomer`] when the name has more
    /// than one open agreement; the caller must then pick one and use
    /// [`Fleet::return_vehicle`].
    pub fn return_for_customer(&mut self, name: &str) -> Result<&RentalAgreement, RentalError> {
        let name = name.trim();
        let open: Vec<usize> = self
            .agreements
            .iter()
            .enumerate()
            .filter(|(_, a)| a.is_open() && a.customer_name.trim() == name)
            .map(|(i, _)| i)
            .collect();

        match open.as_slice() {
            [] => Err(RentalError::NoOpenAgreement(name.to_string())),
            [index] => self.close_agreement(*index),
            _ => Err(RentalError::AmbiguousCustomer {
                name: name.to_string(),
                count: open.len(),
            }),
        }
    }

    fn close_agreement(&mut self, index: usize) -> Result<&RentalAgreement, RentalError> {
        let agreement = &mut self.agreements[index];
        let vehicle = self
            .vehicles
            .iter_mut()
            .find(|v| v.id() == agreement.vehicle_id)
            .ok_or(RentalError::VehicleNotFound(agreement.vehicle_id))?;

        if agreement.close(vehicle) {
            tracing::info!(
                agreement_id = %agreement.id,
                customer = %agreement.customer_name,
                "Returned {}",
                vehicle
            );
        } else {
            tracing::debug!(agreement_id = %agreement.id, "Agreement already returned");
        }

        Ok(&self.agreements[index])
    }
}
