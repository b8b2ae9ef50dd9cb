//! Observation date newtype
//!
//! Measurement dates are stored as ISO strings, so every bound handed to a
//! query goes through [`ObservationDate::as_key`] to keep string comparison
//! chronological.

use std::fmt;

use chrono::{Duration, NaiveDate};

use super::ValidationError;

/// Wire and storage format for dates
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Days in the trailing window used by the precipitation and tobs reports
pub const TRAILING_WINDOW_DAYS: i64 = 365;

/// A validated calendar date
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ObservationDate(NaiveDate);

impl ObservationDate {
    /// Parse a `YYYY-MM-DD` string.
    ///
    /// `field` names the parameter in the resulting error.
    pub fn parse(field: &'static str, value: &str) -> Result<Self, ValidationError> {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty { field });
        }

        NaiveDate::parse_from_str(trimmed, DATE_FORMAT)
            .map(Self)
            .map_err(|_| ValidationError::InvalidDate {
                field,
                value: value.to_owned(),
            })
    }

    /// Start of the trailing window that ends at this date.
    pub fn year_before(&self) -> Self {
        Self(self.0 - Duration::days(TRAILING_WINDOW_DAYS))
    }

    /// Canonical ISO form, suitable for comparison against stored dates.
    pub fn as_key(&self) -> String {
        self.0.format(DATE_FORMAT).to_string()
    }

    pub fn into_inner(self) -> NaiveDate {
        self.0
    }
}

impl From<NaiveDate> for ObservationDate {
    fn from(date: NaiveDate) -> Self {
        Self(date)
    }
}

impl fmt::Display for ObservationDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(DATE_FORMAT))
    }
}
