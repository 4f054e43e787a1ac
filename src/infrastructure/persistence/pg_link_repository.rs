//! PostgreSQL implementation of the link store.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde_json::json;
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::{AccessEvent, Link, NewLink};
use crate::domain::repositories::{LinkOrder, LinkRepository, OrderDirection, OrderField};
use crate::error::AppError;

const LINK_COLUMNS: &str = "id, short_code, original_url, created_at, expires_at, click_count";

#[derive(sqlx::FromRow)]
struct LinkRow {
    id: i64,
    short_code: String,
    original_url: String,
    created_at: DateTime<Utc>,
    expires_at: Option<DateTime<Utc>>,
    click_count: i64,
}

impl From<LinkRow> for Link {
    fn from(row: LinkRow) -> Self {
        Link::new(
            row.id,
            row.short_code,
            row.original_url,
            row.created_at,
            row.expires_at,
            row.click_count,
        )
    }
}

#[derive(sqlx::FromRow)]
struct AccessEventRow {
    id: i64,
    link_id: i64,
    ip_address: String,
    accessed_at: DateTime<Utc>,
}

impl From<AccessEventRow> for AccessEvent {
    fn from(row: AccessEventRow) -> Self {
        AccessEvent::new(row.id, row.link_id, row.ip_address, row.accessed_at)
    }
}

/// PostgreSQL repository for links and access events.
///
/// Uniqueness of `short_code` is guaranteed by the `links_short_code_key`
/// constraint; the atomic resolve unit uses a transaction so the counter
/// update's row lock serializes concurrent resolutions of the same link.
pub struct PgLinkRepository {
    pool: Arc<PgPool>,
}

impl PgLinkRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

/// Whitelisted ORDER BY clauses; `id` breaks ties so listings are stable.
fn order_clause(order: LinkOrder) -> &'static str {
    match (order.field, order.direction) {
        (OrderField::CreatedAt, OrderDirection::Asc) => "created_at ASC, id ASC",
        (OrderField::CreatedAt, OrderDirection::Desc) => "created_at DESC, id DESC",
        (OrderField::ClickCount, OrderDirection::Asc) => "click_count ASC, id ASC",
        (OrderField::ClickCount, OrderDirection::Desc) => "click_count DESC, id DESC",
        (OrderField::ShortCode, OrderDirection::Asc) => "short_code ASC",
        (OrderField::ShortCode, OrderDirection::Desc) => "short_code DESC",
    }
}

#[async_trait]
impl LinkRepository for PgLinkRepository {
    async fn insert(&self, new_link: NewLink) -> Result<Link, AppError> {
        let sql = format!(
            "INSERT INTO links (short_code, original_url, expires_at) \
             VALUES ($1, $2, $3) \
             RETURNING {LINK_COLUMNS}"
        );

        let row = sqlx::query_as::<_, LinkRow>(&sql)
            .bind(&new_link.short_code)
            .bind(&new_link.original_url)
            .bind(new_link.expires_at)
            .fetch_one(self.pool.as_ref())
            .await?;

        Ok(row.into())
    }

    async fn find_by_code(&self, code: &str) -> Result<Option<Link>, AppError> {
        let sql = format!("SELECT {LINK_COLUMNS} FROM links WHERE short_code = $1");

        let row = sqlx::query_as::<_, LinkRow>(&sql)
            .bind(code)
            .fetch_optional(self.pool.as_ref())
            .await?;

        Ok(row.map(Link::from))
    }

    async fn increment_and_log(&self, link_id: i64, ip_address: &str) -> Result<(), AppError> {
        let mut tx = self.pool.begin().await?;

        // The UPDATE takes a row lock, serializing concurrent resolutions of
        // the same link; the event insert rides in the same transaction so
        // the pair commits or rolls back together.
        let updated = sqlx::query("UPDATE links SET click_count = click_count + 1 WHERE id = $1")
            .bind(link_id)
            .execute(&mut *tx)
            .await?;

        if updated.rows_affected() == 0 {
            return Err(AppError::link_not_found(
                "URL not found",
                json!({ "linkId": link_id }),
            ));
        }

        sqlx::query("INSERT INTO access_events (link_id, ip_address) VALUES ($1, $2)")
            .bind(link_id)
            .bind(ip_address)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;

        Ok(())
    }

    async fn list_all(&self, order: LinkOrder) -> Result<Vec<Link>, AppError> {
        let sql = format!(
            "SELECT {LINK_COLUMNS} FROM links ORDER BY {}",
            order_clause(order)
        );

        let rows = sqlx::query_as::<_, LinkRow>(&sql)
            .fetch_all(self.pool.as_ref())
            .await?;

        Ok(rows.into_iter().map(Link::from).collect())
    }

    async fn delete(&self, code: &str) -> Result<bool, AppError> {
        // Access events go with the link via ON DELETE CASCADE.
        let result = sqlx::query("DELETE FROM links WHERE short_code = $1")
            .bind(code)
            .execute(self.pool.as_ref())
            .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn find_events_by_link(
        &self,
        link_id: i64,
        limit: i64,
    ) -> Result<Vec<AccessEvent>, AppError> {
        let rows = sqlx::query_as::<_, AccessEventRow>(
            "SELECT id, link_id, ip_address, accessed_at \
             FROM access_events \
             WHERE link_id = $1 \
             ORDER BY accessed_at DESC, id DESC \
             LIMIT $2",
        )
        .bind(link_id)
        .bind(limit)
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows.into_iter().map(AccessEvent::from).collect())
    }
}
