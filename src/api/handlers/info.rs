//! Handler for link metadata lookup.

use axum::{
    extract::{Path, State},
    Json,
};

use crate::api::dto::shorten::LinkResponse;
use crate::error::AppError;
use crate::state::AppState;

/// Returns the public fields of a link without counting an access.
///
/// # Endpoint
///
/// `GET /info/{code}`
///
/// # Errors
///
/// Returns 404 if the code is unknown.
pub async fn info_handler(
    Path(code): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<LinkResponse>, AppError> {
    let link = state.link_service.get_info(&code).await?;

    Ok(Json(LinkResponse::from(link)))
}
