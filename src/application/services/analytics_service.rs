//! Click analytics service.

use std::sync::Arc;

use serde_json::json;

use crate::domain::repositories::LinkRepository;
use crate::error::AppError;

/// How many recent access events are reported per link.
pub const RECENT_EVENTS_LIMIT: i64 = 5;

/// Usage summary for a single link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkAnalytics {
    pub click_count: i64,
    /// IP addresses of the most recent accesses, newest first.
    pub recent_ips: Vec<String>,
}

/// Read-only aggregator over the click counter and the access-event log.
///
/// The count comes from the denormalized column on the link rather than being
/// recomputed from events, and the two reads are deliberately non-atomic.
pub struct AnalyticsService<R: LinkRepository + ?Sized> {
    repository: Arc<R>,
}

impl<R: LinkRepository + ?Sized> AnalyticsService<R> {
    /// Creates a new analytics service.
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Returns the click count and the IPs of the 5 most recent accesses,
    /// newest first.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::LinkNotFound`] if no link matches the code,
    /// [`AppError::Storage`] on store errors.
    pub async fn get_analytics(&self, short_code: &str) -> Result<LinkAnalytics, AppError> {
        let link = self
            .repository
            .find_by_code(short_code)
            .await?
            .ok_or_else(|| {
                AppError::link_not_found("URL not found", json!({ "shortCode": short_code }))
            })?;

        let events = self
            .repository
            .find_events_by_link(link.id, RECENT_EVENTS_LIMIT)
            .await?;

        Ok(LinkAnalytics {
            click_count: link.click_count,
            recent_ips: events.into_iter().map(|e| e.ip_address).collect(),
        })
    }
}
