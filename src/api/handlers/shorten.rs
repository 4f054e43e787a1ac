//! Handler for link creation.

use axum::{extract::State, Json};

use crate::api::dto::shorten::{LinkResponse, ShortenRequest};
use crate::error::AppError;
use crate::state::AppState;

/// Creates a short link.
///
/// # Endpoint
///
/// `POST /shorten`
///
/// # Request Body
///
/// ```json
/// {
///   "originalUrl": "https://example.com",
///   "alias": "promo2026",                  // optional
///   "expiresAt": "2026-12-31T23:59:59Z"    // optional, RFC 3339
/// }
/// ```
///
/// # Errors
///
/// Returns 400 for validation failures (missing/invalid URL, bad alias,
/// bad or past expiry) and 409 if the alias is already taken.
pub async fn shorten_handler(
    State(state): State<AppState>,
    Json(payload): Json<ShortenRequest>,
) -> Result<Json<LinkResponse>, AppError> {
    let link = state
        .link_service
        .create_short_url(payload.original_url, payload.alias, payload.expires_at)
        .await?;

    tracing::info!(short_code = %link.short_code, "link created");

    Ok(Json(LinkResponse::from(link)))
}
