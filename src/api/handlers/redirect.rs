//! Handler for short link redirect.

use axum::{
    extract::{ConnectInfo, Path, State},
    response::Redirect,
};
use std::net::SocketAddr;

use crate::error::AppError;
use crate::state::AppState;

/// Redirects a short code to its original URL, counting the access.
///
/// # Endpoint
///
/// `GET /{code}`
///
/// The click-count increment and access-event insert happen atomically in
/// the store before the redirect is issued; if that unit fails the client
/// gets the error, never a redirect.
///
/// # Errors
///
/// Returns 404 for an unknown code and 410 for an expired link.
pub async fn redirect_handler(
    Path(code): Path<String>,
    State(state): State<AppState>,
    ConnectInfo(addr): ConnectInfo<SocketAddr>,
) -> Result<Redirect, AppError> {
    let ip_address = addr.ip().to_string();
    let original_url = state.link_service.resolve(&code, &ip_address).await?;

    Ok(Redirect::temporary(&original_url))
}
