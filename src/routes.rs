//! Router configuration.
//!
//! # Route Structure
//!
//! - `POST   /shorten`           - create a short link
//! - `GET    /urls`              - list links (orderable)
//! - `GET    /{code}`            - redirect (counts the access)
//! - `GET    /info/{code}`       - link metadata, no counting
//! - `DELETE /delete/{code}`     - remove a link and its events
//! - `GET    /analytics/{code}`  - click count + recent caller IPs

use axum::routing::{delete, get, post};
use axum::Router;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

use crate::api::handlers::{
    analytics_handler, delete_link_handler, info_handler, list_links_handler, redirect_handler,
    shorten_handler,
};
use crate::state::AppState;

/// Constructs the application router with request tracing and trailing-slash
/// normalization.
pub fn app_router(state: AppState) -> NormalizePath<Router> {
    let router = Router::new()
        .route("/shorten", post(shorten_handler))
        .route("/urls", get(list_links_handler))
        .route("/{code}", get(redirect_handler))
        .route("/info/{code}", get(info_handler))
        .route("/delete/{code}", delete(delete_link_handler))
        .route("/analytics/{code}", get(analytics_handler))
        .with_state(state)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        );

    NormalizePathLayer::trim_trailing_slash().layer(router)
}
