//! In-memory implementation of the link store.
//!
//! Used by integration tests and local runs without a database. One mutex
//! guards links and events together, which gives `increment_and_log` the
//! combined atomicity the resolution path requires for free.

use async_trait::async_trait;
use chrono::Utc;
use serde_json::json;
use std::cmp::Ordering;
use std::sync::Mutex;

use crate::domain::entities::{AccessEvent, Link, NewLink};
use crate::domain::repositories::{LinkOrder, LinkRepository, OrderDirection, OrderField};
use crate::error::AppError;

#[derive(Default)]
struct Inner {
    links: Vec<Link>,
    events: Vec<AccessEvent>,
    next_link_id: i64,
    next_event_id: i64,
}

/// In-process link store with the same contract as the Postgres backend.
#[derive(Default)]
pub struct InMemoryLinkRepository {
    inner: Mutex<Inner>,
}

impl InMemoryLinkRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

fn compare(a: &Link, b: &Link, order: LinkOrder) -> Ordering {
    let by_field = match order.field {
        OrderField::CreatedAt => a.created_at.cmp(&b.created_at),
        OrderField::ClickCount => a.click_count.cmp(&b.click_count),
        OrderField::ShortCode => a.short_code.cmp(&b.short_code),
    };
    // Ties break on id so listings are stable, matching the SQL backend.
    let by_field = by_field.then(a.id.cmp(&b.id));

    match order.direction {
        OrderDirection::Asc => by_field,
        OrderDirection::Desc => by_field.reverse(),
    }
}

#[async_trait]
impl LinkRepository for InMemoryLinkRepository {
    async fn insert(&self, new_link: NewLink) -> Result<Link, AppError> {
        let mut inner = self.inner.lock().expect("link store lock poisoned");

        if inner
            .links
            .iter()
            .any(|l| l.short_code == new_link.short_code)
        {
            return Err(AppError::ConstraintViolation {
                message: "Short code already exists".to_string(),
                details: json!({ "shortCode": new_link.short_code }),
            });
        }

        inner.next_link_id += 1;
        let link = Link::new(
            inner.next_link_id,
            new_link.short_code,
            new_link.original_url,
            Utc::now(),
            new_link.expires_at,
            0,
        );
        inner.links.push(link.clone());

        Ok(link)
    }

    async fn find_by_code(&self, code: &str) -> Result<Option<Link>, AppError> {
        let inner = self.inner.lock().expect("link store lock poisoned");

        Ok(inner
            .links
            .iter()
            .find(|l| l.short_code == code)
            .cloned())
    }

    async fn increment_and_log(&self, link_id: i64, ip_address: &str) -> Result<(), AppError> {
        let mut inner = self.inner.lock().expect("link store lock poisoned");

        // Validate before mutating anything so a miss leaves no trace.
        let Some(pos) = inner.links.iter().position(|l| l.id == link_id) else {
            return Err(AppError::link_not_found(
                "URL not found",
                json!({ "linkId": link_id }),
            ));
        };

        inner.links[pos].click_count += 1;
        inner.next_event_id += 1;
        let event = AccessEvent::new(
            inner.next_event_id,
            link_id,
            ip_address.to_string(),
            Utc::now(),
        );
        inner.events.push(event);

        Ok(())
    }

    async fn list_all(&self, order: LinkOrder) -> Result<Vec<Link>, AppError> {
        let inner = self.inner.lock().expect("link store lock poisoned");

        let mut links = inner.links.clone();
        links.sort_by(|a, b| compare(a, b, order));

        Ok(links)
    }

    async fn delete(&self, code: &str) -> Result<bool, AppError> {
        let mut inner = self.inner.lock().expect("link store lock poisoned");

        let Some(pos) = inner.links.iter().position(|l| l.short_code == code) else {
            return Ok(false);
        };

        let link_id = inner.links[pos].id;
        inner.links.remove(pos);
        // Cascade, mirroring the FK in the Postgres schema.
        inner.events.retain(|e| e.link_id != link_id);

        Ok(true)
    }

    async fn find_events_by_link(
        &self,
        link_id: i64,
        limit: i64,
    ) -> Result<Vec<AccessEvent>, AppError> {
        let inner = self.inner.lock().expect("link store lock poisoned");

        let mut events: Vec<AccessEvent> = inner
            .events
            .iter()
            .filter(|e| e.link_id == link_id)
            .cloned()
            .collect();
        events.sort_by(|a, b| {
            b.accessed_at
                .cmp(&a.accessed_at)
                .then(b.id.cmp(&a.id))
        });
        events.truncate(limit.max(0) as usize);

        Ok(events)
    }
}
