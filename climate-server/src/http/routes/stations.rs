//! Station listing

use std::sync::Arc;

use axum::{extract::State, routing::get, Json, Router};

use super::API_PREFIX;
use crate::db::repos::StationRepo;
use crate::http::error::ApiError;
use crate::http::server::AppState;
use crate::models::StationList;

/// GET /api/v1.0/stations - distinct station names
async fn stations(State(state): State<Arc<AppState>>) -> Result<Json<StationList>, ApiError> {
    let stations = StationRepo::new(&state.pool).distinct_names().await?;
    tracing::debug!(count = stations.len(), "serving stations");

    Ok(Json(StationList { stations }))
}

/// Station routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new().route(&format!("{API_PREFIX}/stations"), get(stations))
}
