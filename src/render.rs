//! Plain-text rendering for the desk shell.

use rust_decimal::Decimal;

use crate::fleet::Fleet;
use crate::models::{RentalAgreement, Vehicle, DATE_FORMAT};

/// Format a money amount with two decimal places.
pub fn money(currency: &str, amount: Decimal) -> String {
    format!("{}{:.2}", currency, amount.round_dp(2))
}

/// Render one vehicle line: `Toyota Corolla (Reg: REG1) - $30.00/day`.
pub fn render_vehicle(vehicle: &Vehicle, currency: &str) -> String {
    format!(
        "{} - {}/day",
        vehicle,
        money(currency, vehicle.price_per_day())
    )
}

/// Render the multi-line summary of an agreement.
///
/// `vehicle` is the agreement's vehicle as currently held by the fleet; a
/// missing vehicle is shown by id.
pub fn render_agreement(
    agreement: &RentalAgreement,
    vehicle: Option<&Vehicle>,
    currency: &str,
) -> String {
    let vehicle = match vehicle {
        Some(v) => v.to_string(),
        None => format!("<unknown vehicle {}>", agreement.vehicle_id),
    };

    format!(
        "Rental Agreement {}:\n\
         Customer: {}\n\
         Vehicle: {}\n\
         Rental Start Date: {}\n\
         Rental End Date: {}\n\
         Status: {}\n\
         Total Cost: {}\n",
        agreement.id,
        agreement.customer_name,
        vehicle,
        agreement.period.start().format(DATE_FORMAT),
        agreement.period.end().format(DATE_FORMAT),
        agreement.status.as_str(),
        money(currency, agreement.total_cost()),
    )
}

pub fn render_available_vehicles(fleet: &Fleet, currency: &str) -> String {
    let mut output = String::from("Available Vehicles:\n");
    let mut any = false;
    for vehicle in fleet.available_vehicles() {
        any = true;
        output.push_str(&render_vehicle(vehicle, currency));
        output.push('\n');
    }
    if !any {
        output.push_str("(none)\n");
    }
    output
}

/// Render every agreement, separated by blank lines.
pub fn render_agreements(fleet: &Fleet, currency: &str) -> String {
    let mut output = String::from("Rental Agreements:\n");
    if fleet.agreements().is_empty() {
        output.push_str("(none)\n");
        return output;
    }
    for agreement in fleet.agreements() {
        output.push_str(&render_agreement(
            agreement,
            fleet.vehicle(agreement.vehicle_id),
            currency,
        ));
        output.push('\n');
    }
    output
}
