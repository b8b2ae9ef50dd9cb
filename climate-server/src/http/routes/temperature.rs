//! Trip-range temperature aggregates
//!
//! `/{start}` aggregates everything from `start` through the latest date.
//! The per-date breakdown lives under `/daily/{start}` so the two shapes
//! never share a path.

use std::sync::Arc;

use axum::{extract::State, routing::get, Json, Router};

use super::API_PREFIX;
use crate::db::repos::MeasurementRepo;
use crate::http::error::ApiError;
use crate::http::extractors::{ValidDate, ValidDateRange};
use crate::http::server::AppState;
use crate::models::{DailyTemperature, TemperatureStats};

/// GET /api/v1.0/{start} - min/avg/max from start onwards
async fn stats_from(
    State(state): State<Arc<AppState>>,
    ValidDate(start): ValidDate,
) -> Result<Json<TemperatureStats>, ApiError> {
    tracing::debug!(%start, "serving open-ended trip stats");
    let stats = MeasurementRepo::new(&state.pool)
        .stats_on_or_after(start)
        .await?;

    Ok(Json(stats))
}

/// GET /api/v1.0/{start}/{end} - min/avg/max over the inclusive range
async fn stats_between(
    State(state): State<Arc<AppState>>,
    ValidDateRange { start, end }: ValidDateRange,
) -> Result<Json<TemperatureStats>, ApiError> {
    tracing::debug!(%start, %end, "serving trip stats");
    let stats = MeasurementRepo::new(&state.pool)
        .stats_in_range(start, end)
        .await?;

    Ok(Json(stats))
}

/// GET /api/v1.0/daily/{start} - one min/avg/max row per date after start
async fn daily_stats(
    State(state): State<Arc<AppState>>,
    ValidDate(start): ValidDate,
) -> Result<Json<Vec<DailyTemperature>>, ApiError> {
    tracing::debug!(%start, "serving daily stats");
    let rows = MeasurementRepo::new(&state.pool)
        .daily_stats_since(start)
        .await?;

    Ok(Json(rows))
}

/// Temperature aggregate routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route(&format!("{API_PREFIX}/{{start}}"), get(stats_from))
        .route(&format!("{API_PREFIX}/{{start}}/{{end}}"), get(stats_between))
        .route(&format!("{API_PREFIX}/daily/{{start}}"), get(daily_stats))
}
