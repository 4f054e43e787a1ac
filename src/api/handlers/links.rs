//! Handlers for link listing and deletion.

use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde_json::{json, Value};

use crate::api::dto::list::ListQuery;
use crate::api::dto::shorten::LinkResponse;
use crate::error::AppError;
use crate::state::AppState;

/// Lists every stored link.
///
/// # Endpoint
///
/// `GET /urls?sort=created_at&direction=desc`
///
/// Defaults to newest-created-first; `sort` accepts `created_at`,
/// `click_count`, or `short_code`.
pub async fn list_links_handler(
    Query(query): Query<ListQuery>,
    State(state): State<AppState>,
) -> Result<Json<Vec<LinkResponse>>, AppError> {
    let links = state.link_service.list_all(query.order()).await?;

    Ok(Json(links.into_iter().map(LinkResponse::from).collect()))
}

/// Deletes a link and its recorded access events.
///
/// # Endpoint
///
/// `DELETE /delete/{code}`
///
/// # Errors
///
/// Returns 404 if the code is unknown.
pub async fn delete_link_handler(
    Path(code): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<Value>, AppError> {
    state.link_service.delete(&code).await?;

    tracing::info!(short_code = %code, "link deleted");

    Ok(Json(json!({ "message": "URL deleted successfully" })))
}
