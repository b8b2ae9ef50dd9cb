//! Precipitation over the trailing year

use std::collections::BTreeMap;
use std::sync::Arc;

use axum::{extract::State, routing::get, Json, Router};

use super::API_PREFIX;
use crate::db::repos::MeasurementRepo;
use crate::http::error::ApiError;
use crate::http::server::AppState;
use crate::models::precipitation_by_date;

/// GET /api/v1.0/precipitation - date -> prcp for the year before the latest date
async fn precipitation(
    State(state): State<Arc<AppState>>,
) -> Result<Json<BTreeMap<String, f64>>, ApiError> {
    let repo = MeasurementRepo::new(&state.pool);
    let since = repo.max_date().await?.year_before();
    tracing::debug!(%since, "serving precipitation");

    let rows = repo.precipitation_since(since).await?;
    Ok(Json(precipitation_by_date(rows)))
}

/// Precipitation routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new().route(&format!("{API_PREFIX}/precipitation"), get(precipitation))
}
