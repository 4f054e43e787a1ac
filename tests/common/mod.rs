#![allow(dead_code)]

use std::net::SocketAddr;
use std::sync::Arc;

use axum::extract::ConnectInfo;
use chrono::{DateTime, Utc};
use linkshort::domain::entities::{Link, NewLink};
use linkshort::domain::repositories::LinkRepository;
use linkshort::infrastructure::persistence::InMemoryLinkRepository;
use linkshort::state::AppState;

/// Builds an application state over a fresh in-memory store, returning the
/// store too so tests can seed and inspect it directly.
pub fn create_test_state() -> (AppState, Arc<InMemoryLinkRepository>) {
    let repository = Arc::new(InMemoryLinkRepository::new());
    let store: Arc<dyn LinkRepository> = repository.clone();
    (AppState::new(store), repository)
}

pub async fn create_test_link(repo: &InMemoryLinkRepository, code: &str, url: &str) -> Link {
    repo.insert(NewLink {
        short_code: code.to_string(),
        original_url: url.to_string(),
        expires_at: None,
    })
    .await
    .unwrap()
}

pub async fn create_expiring_link(
    repo: &InMemoryLinkRepository,
    code: &str,
    url: &str,
    expires_at: DateTime<Utc>,
) -> Link {
    repo.insert(NewLink {
        short_code: code.to_string(),
        original_url: url.to_string(),
        expires_at: Some(expires_at),
    })
    .await
    .unwrap()
}

/// Injects a fixed peer address so handlers using
/// `ConnectInfo<SocketAddr>` work under `TestServer`.
#[derive(Clone)]
pub struct MockConnectInfoLayer;

impl<S> tower::Layer<S> for MockConnectInfoLayer {
    type Service = MockConnectInfoService<S>;

    fn layer(&self, inner: S) -> Self::Service {
        MockConnectInfoService { inner }
    }
}

#[derive(Clone)]
pub struct MockConnectInfoService<S> {
    inner: S,
}

impl<S, B> tower::Service<axum::http::Request<B>> for MockConnectInfoService<S>
where
    S: tower::Service<axum::http::Request<B>> + Clone + Send + 'static,
    S::Future: Send + 'static,
    B: Send + 'static,
{
    type Response = S::Response;
    type Error = S::Error;
    type Future = S::Future;

    fn poll_ready(
        &mut self,
        cx: &mut std::task::Context<'_>,
    ) -> std::task::Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(cx)
    }

    fn call(&mut self, mut req: axum::http::Request<B>) -> Self::Future {
        let addr: SocketAddr = "127.0.0.1:12345".parse().unwrap();
        req.extensions_mut().insert(ConnectInfo(addr));
        self.inner.call(req)
    }
}
