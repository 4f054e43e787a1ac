//! Link entity representing a short-code-to-URL mapping.

use chrono::{DateTime, Utc};

/// A shortened URL mapping with its lifecycle metadata.
///
/// `short_code` is globally unique across all stored links (enforced by the
/// store's uniqueness constraint). `click_count` starts at zero and is only
/// ever incremented through the atomic resolution path.
#[derive(Debug, Clone)]
pub struct Link {
    pub id: i64,
    pub short_code: String,
    pub original_url: String,
    pub created_at: DateTime<Utc>,
    pub expires_at: Option<DateTime<Utc>>,
    pub click_count: i64,
}

impl Link {
    /// Creates a new Link instance.
    pub fn new(
        id: i64,
        short_code: String,
        original_url: String,
        created_at: DateTime<Utc>,
        expires_at: Option<DateTime<Utc>>,
        click_count: i64,
    ) -> Self {
        Self {
            id,
            short_code,
            original_url,
            created_at,
            expires_at,
            click_count,
        }
    }

    /// Returns true if the link has passed its expiry time.
    ///
    /// Expiration is a point-in-time check against the given instant; an
    /// expired link is never mutated or removed by resolution.
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        self.expires_at.is_some_and(|e| now > e)
    }
}

/// Input data for creating a new link.
///
/// `created_at`, the id, and the zero click counter are assigned by the store.
#[derive(Debug, Clone)]
pub struct NewLink {
    pub short_code: String,
    pub original_url: String,
    pub expires_at: Option<DateTime<Utc>>,
}
