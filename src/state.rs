//! Shared application state injected into handlers.

use std::sync::Arc;

use crate::application::services::{AnalyticsService, LinkService};
use crate::domain::repositories::LinkRepository;

/// Handler-facing bundle of services.
///
/// Services are built over a trait-object repository so the Postgres and
/// in-memory store backends share one state type; the process entry point
/// owns store construction and teardown, not the services.
#[derive(Clone)]
pub struct AppState {
    pub link_service: Arc<LinkService<dyn LinkRepository>>,
    pub analytics_service: Arc<AnalyticsService<dyn LinkRepository>>,
}

impl AppState {
    /// Builds the service stack over the given store.
    pub fn new(repository: Arc<dyn LinkRepository>) -> Self {
        Self {
            link_service: Arc::new(LinkService::new(repository.clone())),
            analytics_service: Arc::new(AnalyticsService::new(repository)),
        }
    }
}
