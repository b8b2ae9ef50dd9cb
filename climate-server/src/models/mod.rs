//! Domain models for the climate API
//!
//! Path parameters are validated into these types before any query runs.
//! Invalid input returns ValidationError, not panic.

pub mod validation;
pub mod date;
pub mod climate;

pub use validation::ValidationError;
pub use date::{ObservationDate, DATE_FORMAT, TRAILING_WINDOW_DAYS};
pub use climate::{
    precipitation_by_date, sort_observations, DailyTemperature, PrecipitationRow, StationList,
    TemperatureObservation, TemperatureStats,
};
