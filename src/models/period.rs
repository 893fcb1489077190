use chrono::NaiveDate;

use crate::error::RentalError;

/// Date format used wherever dates cross the desk boundary.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// The calendar dates a vehicle is rented for.
///
/// The end date may equal the start date (a zero-day rental) but never
/// precede it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RentalPeriod {
    start: NaiveDate,
    end: NaiveDate,
}

impl RentalPeriod {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self, RentalError> {
        if end < start {
            return Err(RentalError::InvalidPeriod { start, end });
        }
        Ok(Self { start, end })
    }

    /// Parse `YYYY-MM-DD` start and end dates.
    pub fn parse(start: &str, end: &str) -> Result<Self, RentalError> {
        Self::new(parse_date(start)?, parse_date(end)?)
    }

    pub fn start(&self) -> NaiveDate {
        self.start
    }

    pub fn end(&self) -> NaiveDate {
        self.end
    }

    /// Whole calendar days between start and end.
    pub fn days(&self) -> i64 {
        (self.end - self.start).num_days()
    }
}

pub fn parse_date(s: &str) -> Result<NaiveDate, RentalError> {
    let trimmed = s.trim();
    NaiveDate::parse_from_str(trimmed, DATE_FORMAT)
        .map_err(|_| RentalError::InvalidDate(trimmed.to_string()))
}
