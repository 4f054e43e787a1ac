//! Repository trait for the link store boundary.

use crate::domain::entities::{AccessEvent, Link, NewLink};
use crate::error::AppError;
use async_trait::async_trait;
use serde::Deserialize;

/// Field a link listing can be ordered by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderField {
    CreatedAt,
    ClickCount,
    ShortCode,
}

/// Listing direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderDirection {
    Asc,
    Desc,
}

/// Ordering descriptor for [`LinkRepository::list_all`].
///
/// Defaults to newest-created-first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LinkOrder {
    pub field: OrderField,
    pub direction: OrderDirection,
}

impl Default for LinkOrder {
    fn default() -> Self {
        Self {
            field: OrderField::CreatedAt,
            direction: OrderDirection::Desc,
        }
    }
}

impl LinkOrder {
    pub fn new(field: OrderField, direction: OrderDirection) -> Self {
        Self { field, direction }
    }
}

/// Contract with the external link store.
///
/// The store owns durability and the uniqueness constraint on `short_code`;
/// the service layer holds no cross-call state of its own.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgLinkRepository`] - PostgreSQL
/// - [`crate::infrastructure::persistence::InMemoryLinkRepository`] - in-process
///   store used by tests and local runs
/// - Mocks auto-generated with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LinkRepository: Send + Sync {
    /// Inserts a new link with a zero click counter.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::ConstraintViolation`] if the short code already
    /// exists, [`AppError::Storage`] on other store errors.
    async fn insert(&self, new_link: NewLink) -> Result<Link, AppError>;

    /// Finds a link by its short code.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Storage`] on store errors.
    async fn find_by_code(&self, code: &str) -> Result<Option<Link>, AppError>;

    /// Atomically increments the link's click counter and appends an access
    /// event carrying `ip_address`.
    ///
    /// Either both effects happen or neither does, and concurrent calls for
    /// the same link serialize against each other (no lost updates).
    ///
    /// # Errors
    ///
    /// Returns [`AppError::LinkNotFound`] if `link_id` no longer exists,
    /// [`AppError::Storage`] if the atomic unit fails; in both cases the
    /// counter and the event log are unchanged.
    async fn increment_and_log(&self, link_id: i64, ip_address: &str) -> Result<(), AppError>;

    /// Lists every stored link in the given order.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Storage`] on store errors.
    async fn list_all(&self, order: LinkOrder) -> Result<Vec<Link>, AppError>;

    /// Deletes a link by short code, cascading its access events.
    ///
    /// Returns `Ok(true)` if a link was removed, `Ok(false)` if the code was
    /// not found.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Storage`] on store errors.
    async fn delete(&self, code: &str) -> Result<bool, AppError>;

    /// Returns up to `limit` access events for a link, newest first.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Storage`] on store errors.
    async fn find_events_by_link(
        &self,
        link_id: i64,
        limit: i64,
    ) -> Result<Vec<AccessEvent>, AppError>;
}
