//! Custom Axum extractors

use axum::extract::{FromRequestParts, Path};
use axum::http::request::Parts;

use super::error::ApiError;
use crate::models::{ObservationDate, ValidationError};

/// Extract and validate a single `{start}` path date
pub struct ValidDate(pub ObservationDate);

impl<S> FromRequestParts<S> for ValidDate
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(start): Path<String> = Path::from_request_parts(parts, state)
            .await
            .map_err(|_| ApiError::Validation(ValidationError::Empty { field: "start" }))?;

        Ok(Self(ObservationDate::parse("start", &start)?))
    }
}

/// Extract and validate a `{start}/{end}` path pair
pub struct ValidDateRange {
    pub start: ObservationDate,
    pub end: ObservationDate,
}

impl<S> FromRequestParts<S> for ValidDateRange
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path((start, end)): Path<(String, String)> = Path::from_request_parts(parts, state)
            .await
            .map_err(|_| ApiError::Validation(ValidationError::Empty { field: "end" }))?;

        Ok(Self {
            start: ObservationDate::parse("start", &start)?,
            end: ObservationDate::parse("end", &end)?,
        })
    }
}
