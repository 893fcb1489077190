//! Interactive menu shell for the rental desk.
//!
//! The shell owns its [`Fleet`] and talks through any `BufRead`/`Write` pair,
//! so the same loop serves the terminal and the tests. Bad input is reported
//! and the menu shown again; only `Exit` or end of input ends the session.

use std::io::{BufRead, Write};

use anyhow::Result;
use uuid::Uuid;

use crate::error::RentalError;
use crate::fleet::Fleet;
use crate::models::{parse_daily_rate, RentalPeriod, Vehicle};
use crate::render;

const NO_VEHICLE: &str = "No available vehicles of the specified make and model.";

/// A menu entry, numbered as shown to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    AddVehicle,
    ListAvailable,
    Rent,
    Return,
    ListAgreements,
    Exit,
}

impl MenuChoice {
    pub const ALL: [MenuChoice; 6] = [
        Self::AddVehicle,
        Self::ListAvailable,
        Self::Rent,
        Self::Return,
        Self::ListAgreements,
        Self::Exit,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Self::AddVehicle => "Add Vehicle",
            Self::ListAvailable => "Display Available Vehicles",
            Self::Rent => "Rent a Vehicle",
            Self::Return => "Return a Vehicle",
            Self::ListAgreements => "Display Rental Agreements",
            Self::Exit => "Exit",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.trim() {
            "1" => Some(Self::AddVehicle),
            "2" => Some(Self::ListAvailable),
            "3" => Some(Self::Rent),
            "4" => Some(Self::Return),
            "5" => Some(Self::ListAgreements),
            "6" => Some(Self::Exit),
            _ => None,
        }
    }
}

/// Whether the loop keeps going after an action.
enum Flow {
    Continue,
    Exit,
}

pub struct Shell<R, W> {
    fleet: Fleet,
    currency: String,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Shell<R, W> {
    pub fn new(fleet: Fleet, currency: impl Into<String>, input: R, output: W) -> Self {
        Self {
            fleet,
            currency: currency.into(),
            input,
            output,
        }
    }

    pub fn fleet(&self) -> &Fleet {
        &self.fleet
    }

    pub fn into_fleet(self) -> Fleet {
        self.fleet
    }

    /// Run the menu loop until the user exits or input ends.
    pub fn run(&mut self) -> Result<()> {
        loop {
            self.print_menu()?;
            let Some(choice) = self.prompt("Choose an option: ")? else {
                break;
            };

            let flow = match MenuChoice::parse(&choice) {
                Some(MenuChoice::AddVehicle) => self.add_vehicle()?,
                Some(MenuChoice::ListAvailable) => {
                    let listing = render::render_available_vehicles(&self.fleet, &self.currency);
                    write!(self.output, "{}", listing)?;
                    Flow::Continue
                }
                Some(MenuChoice::Rent) => self.rent_vehicle()?,
                Some(MenuChoice::Return) => self.return_vehicle()?,
                Some(MenuChoice::ListAgreements) => {
                    let listing = render::render_agreements(&self.fleet, &self.currency);
                    write!(self.output, "{}", listing)?;
                    Flow::Continue
                }
                Some(MenuChoice::Exit) => Flow::Exit,
                None => {
                    writeln!(self.output, "Invalid choice. Please try again.")?;
                    Flow::Continue
                }
            };

            if let Flow::Exit = flow {
                break;
            }
        }

        writeln!(self.output, "Exiting...")?;
        self.output.flush()?;
        Ok(())
    }

    fn print_menu(&mut self) -> Result<()> {
        writeln!(self.output, "\nCar Rental Service")?;
        for (i, choice) in MenuChoice::ALL.iter().enumerate() {
            writeln!(self.output, "{}. {}", i + 1, choice.label())?;
        }
        Ok(())
    }

    /// Show `label` and read one trimmed line. `None` means input has ended.
    fn prompt(&mut self, label: &str) -> Result<Option<String>> {
        write!(self.output, "{}", label)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            writeln!(self.output)?;
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    fn report(&mut self, err: &RentalError) -> Result<Flow> {
        tracing::debug!("Desk input rejected: {}", err);
        writeln!(self.output, "Error: {}", err)?;
        Ok(Flow::Continue)
    }

    fn add_vehicle(&mut self) -> Result<Flow> {
        let Some(make) = self.prompt("Enter vehicle make: ")? else {
            return Ok(Flow::Exit);
        };
        let Some(model) = self.prompt("Enter vehicle model: ")? else {
            return Ok(Flow::Exit);
        };
        let Some(registration) = self.prompt("Enter registration number: ")? else {
            return Ok(Flow::Exit);
        };
        let Some(rate) = self.prompt("Enter rental price per day: ")? else {
            return Ok(Flow::Exit);
        };

        let rate = match parse_daily_rate(&rate) {
            Ok(rate) => rate,
            Err(e) => return self.report(&e),
        };

        self.fleet.add_vehicle(Vehicle::new(make, model, registration, rate));
        writeln!(self.output, "Vehicle added successfully.")?;
        Ok(Flow::Continue)
    }

    fn rent_vehicle(&mut self) -> Result<Flow> {
        let Some(make) = self.prompt("Enter vehicle make: ")? else {
            return Ok(Flow::Exit);
        };
        let Some(model) = self.prompt("Enter vehicle model: ")? else {
            return Ok(Flow::Exit);
        };
        let Some(customer) = self.prompt("Enter customer name: ")? else {
            return Ok(Flow::Exit);
        };
        let Some(start) = self.prompt("Enter rental start date (yyyy-MM-dd): ")? else {
            return Ok(Flow::Exit);
        };
        let Some(end) = self.prompt("Enter rental end date (yyyy-MM-dd): ")? else {
            return Ok(Flow::Exit);
        };

        let period = match RentalPeriod::parse(&start, &end) {
            Ok(period) => period,
            Err(e) => return self.report(&e),
        };

        let summary = self
            .fleet
            .rent_vehicle(&make, &model, &customer, period)
            .cloned();

        match summary {
            Some(agreement) => {
                let text = render::render_agreement(
                    &agreement,
                    self.fleet.vehicle(agreement.vehicle_id),
                    &self.currency,
                );
                write!(self.output, "\n{}", text)?;
            }
            None => writeln!(self.output, "{}", NO_VEHICLE)?,
        }
        Ok(Flow::Continue)
    }

    fn return_vehicle(&mut self) -> Result<Flow> {
        let Some(name) = self.prompt("Enter customer name for returning vehicle: ")? else {
            return Ok(Flow::Exit);
        };

        let result = self
            .fleet
            .return_for_customer(&name)
            .map(|agreement| agreement.total_cost());

        match result {
            Ok(cost) => {
                let cost = render::money(&self.currency, cost);
                writeln!(
                    self.output,
                    "Vehicle returned successfully. Total cost: {}",
                    cost
                )?;
                Ok(Flow::Continue)
            }
            Err(RentalError::AmbiguousCustomer { .. }) => self.choose_and_return(&name),
            Err(e) => self.report(&e),
        }
    }

    /// The customer holds several open agreements: list them and return the
    /// one picked by id.
    fn choose_and_return(&mut self, name: &str) -> Result<Flow> {
        let open: Vec<(Uuid, String)> = self
            .fleet
            .open_agreements_for(name)
            .map(|a| {
                let vehicle = self
                    .fleet
                    .vehicle(a.vehicle_id)
                    .map(|v| v.to_string())
                    .unwrap_or_default();
                (a.id, vehicle)
            })
            .collect();

        writeln!(
            self.output,
            "{} has {} open rental agreements:",
            name.trim(),
            open.len()
        )?;
        for (id, vehicle) in &open {
            writeln!(self.output, "  {}  {}", id, vehicle)?;
        }

        let Some(input) = self.prompt("Enter agreement id: ")? else {
            return Ok(Flow::Exit);
        };
        let Some(id) = Uuid::parse_str(&input)
            .ok()
            .filter(|id| open.iter().any(|(open_id, _)| open_id == id))
        else {
            writeln!(
                self.output,
                "'{}' is not one of the listed agreements.",
                input
            )?;
            return Ok(Flow::Continue);
        };

        match self.fleet.return_vehicle(id).map(|a| a.total_cost()) {
            Ok(cost) => {
                let cost = render::money(&self.currency, cost);
                writeln!(
                    self.output,
                    "Vehicle returned successfully. Total cost: {}",
                    cost
                )?;
                Ok(Flow::Continue)
            }
            Err(e) => self.report(&e),
        }
    }
}
