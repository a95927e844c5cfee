// --- File: crates/netcafe_booking/src/validation.rs ---

use chrono::{DateTime, FixedOffset};
use netcafe_common::{BookingError, NewBooking};
use serde::Deserialize;

/// The computer number as sent by clients. The booking form posts it as a
/// string, API clients as a number.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum ComputerField {
    Number(i64),
    Text(String),
}

impl ComputerField {
    fn to_number(&self) -> Result<i64, BookingError> {
        let number = match self {
            ComputerField::Number(n) => *n,
            ComputerField::Text(s) => s
                .trim()
                .parse::<i64>()
                .map_err(|_| BookingError::invalid("computer", "must be a positive integer"))?,
        };
        if number <= 0 {
            return Err(BookingError::invalid("computer", "must be a positive integer"));
        }
        Ok(number)
    }
}

/// Body of `POST /bookings`.
///
/// Every field is optional at the serde level so a missing field surfaces
/// as a named validation error instead of a generic body rejection.
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Clone, Default, Deserialize)]
pub struct BookingRequest {
    #[serde(default)]
    #[cfg_attr(feature = "openapi", schema(example = "Alice"))]
    pub name: Option<String>,
    #[serde(default)]
    #[cfg_attr(feature = "openapi", schema(example = "alice@example.com"))]
    pub contact: Option<String>,
    #[serde(default, alias = "resource")]
    #[cfg_attr(feature = "openapi", schema(value_type = Option<i64>, example = 3))]
    pub computer: Option<ComputerField>,
    #[serde(default, alias = "startTime")]
    #[cfg_attr(
        feature = "openapi",
        schema(value_type = Option<String>, format = DateTime, example = "2025-05-15T10:00:00Z")
    )]
    pub start_time: Option<DateTime<FixedOffset>>,
    #[serde(default, alias = "endTime")]
    #[cfg_attr(
        feature = "openapi",
        schema(value_type = Option<String>, format = DateTime, example = "2025-05-15T11:00:00Z")
    )]
    pub end_time: Option<DateTime<FixedOffset>>,
}

impl BookingRequest {
    /// Checks the request and turns it into a store candidate.
    ///
    /// Fields are checked in declaration order; the first failure wins.
    /// `name` and `contact` are kept verbatim once they are known not to be blank.
    pub fn validate(self) -> Result<NewBooking, BookingError> {
        let name = required_text("name", self.name)?;
        let contact = required_text("contact", self.contact)?;
        let computer = self
            .computer
            .ok_or_else(|| BookingError::invalid("computer", "is required"))?
            .to_number()?;
        let start_time = self
            .start_time
            .ok_or_else(|| BookingError::invalid("start_time", "is required"))?;
        let end_time = self
            .end_time
            .ok_or_else(|| BookingError::invalid("end_time", "is required"))?;

        if start_time >= end_time {
            return Err(BookingError::invalid("end_time", "must be after start_time"));
        }

        Ok(NewBooking {
            name,
            contact,
            computer,
            start_time,
            end_time,
        })
    }
}

fn required_text(field: &'static str, value: Option<String>) -> Result<String, BookingError> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(v),
        Some(_) => Err(BookingError::invalid(field, "must not be empty")),
        None => Err(BookingError::invalid(field, "is required")),
    }
}
