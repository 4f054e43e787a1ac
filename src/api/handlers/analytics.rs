//! Handler for link analytics.

use axum::{
    extract::{Path, State},
    Json,
};

use crate::api::dto::analytics::AnalyticsResponse;
use crate::error::AppError;
use crate::state::AppState;

/// Returns the click count and the 5 most recent caller IPs for a link,
/// newest first.
///
/// # Endpoint
///
/// `GET /analytics/{code}`
///
/// # Errors
///
/// Returns 404 if the code is unknown.
pub async fn analytics_handler(
    Path(code): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<AnalyticsResponse>, AppError> {
    let analytics = state.analytics_service.get_analytics(&code).await?;

    Ok(Json(AnalyticsResponse::from(analytics)))
}
