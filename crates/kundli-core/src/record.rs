//! Birth-record descriptors supplied by record sources.

use chrono::{Datelike, NaiveDate, NaiveTime, Timelike};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::errors::CoreError;

/// Local birth date format (`YYYY/MM/DD`).
pub const DATE_FORMAT: &str = "%Y/%m/%d";

/// Local birth time format (`HH:MM`).
pub const TIME_FORMAT: &str = "%H:%M";

/// One birth record as read from a batch file or record store.
///
/// Coordinates, date and time stay text: they are passed through to the
/// generator unchanged and are not re-validated on read.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct BirthRecord {
    pub id: i64,
    pub lat: String,
    pub lon: String,
    /// Local birth time, `HH:MM`.
    pub time: String,
    /// Local birth date, `YYYY/MM/DD`.
    pub date: String,
}

/// Numeric date and time fields, the form the verifier takes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct CivilParts {
    pub day: u32,
    pub month: u32,
    pub year: i32,
    pub hour: u32,
    pub minute: u32,
}

impl BirthRecord {
    /// Parse the record's date and time into numeric parts.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::InvalidRecord`] if `date` is not `YYYY/MM/DD`
    /// or `time` is not `HH:MM`.
    pub fn civil_parts(&self) -> Result<CivilParts, CoreError> {
        let date = NaiveDate::parse_from_str(&self.date, DATE_FORMAT).map_err(|_| {
            CoreError::InvalidRecord {
                id: self.id,
                field: "date",
                value: self.date.clone(),
                format: "YYYY/MM/DD",
            }
        })?;
        let time = NaiveTime::parse_from_str(&self.time, TIME_FORMAT).map_err(|_| {
            CoreError::InvalidRecord {
                id: self.id,
                field: "time",
                value: self.time.clone(),
                format: "HH:MM",
            }
        })?;

        Ok(CivilParts {
            day: date.day(),
            month: date.month(),
            year: date.year(),
            hour: time.hour(),
            minute: time.minute(),
        })
    }
}
