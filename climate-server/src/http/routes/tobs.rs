//! Temperature observations over the trailing year

use std::sync::Arc;

use axum::{extract::State, routing::get, Json, Router};

use super::API_PREFIX;
use crate::db::repos::MeasurementRepo;
use crate::http::error::ApiError;
use crate::http::server::AppState;
use crate::models::{sort_observations, TemperatureObservation};

/// GET /api/v1.0/tobs - observations for the year before the latest date, by date
async fn tobs(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<TemperatureObservation>>, ApiError> {
    let repo = MeasurementRepo::new(&state.pool);
    let since = repo.max_date().await?.year_before();
    tracing::debug!(%since, "serving tobs");

    let rows = repo.observations_since(since).await?;
    Ok(Json(sort_observations(rows)))
}

/// Temperature observation routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new().route(&format!("{API_PREFIX}/tobs"), get(tobs))
}
