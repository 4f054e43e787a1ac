//! Link creation, resolution, and lifecycle service.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde_json::json;

use crate::domain::entities::{clip_ip_address, Link, NewLink};
use crate::domain::repositories::{LinkOrder, LinkRepository};
use crate::error::AppError;
use crate::utils::code_generator::{generate_code, validate_alias};
use crate::utils::url_validator::is_valid_url;

/// Service orchestrating validation, code generation, expiry checks, and the
/// atomic record-and-count operation.
///
/// The service is stateless between calls; all durable state lives behind
/// the injected [`LinkRepository`].
pub struct LinkService<R: LinkRepository + ?Sized> {
    repository: Arc<R>,
}

impl<R: LinkRepository + ?Sized> LinkService<R> {
    /// Creates a new link service.
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Creates a short link from a target URL and optional alias/expiry.
    ///
    /// `expires_at` is an RFC 3339 string; when given it must parse and lie
    /// strictly in the future. Validation runs fully before any store write:
    /// alias format first, then the target URL, then expiry.
    ///
    /// # Errors
    ///
    /// - [`AppError::InvalidAlias`] - alias fails format/length rules
    /// - [`AppError::MissingField`] - no `original_url`
    /// - [`AppError::InvalidUrl`] - `original_url` is not an absolute URL
    /// - [`AppError::InvalidExpiry`] / [`AppError::ExpiryInPast`] - bad expiry
    /// - [`AppError::AliasConflict`] - the effective short code is taken,
    ///   detected either defensively before insert or via the store's
    ///   uniqueness constraint (never retried)
    pub async fn create_short_url(
        &self,
        original_url: Option<String>,
        alias: Option<String>,
        expires_at: Option<String>,
    ) -> Result<Link, AppError> {
        if let Some(alias) = alias.as_deref() {
            validate_alias(alias)?;
        }

        let original_url = original_url.ok_or_else(|| {
            AppError::missing_field("originalUrl is required", json!({ "field": "originalUrl" }))
        })?;

        if !is_valid_url(&original_url) {
            return Err(AppError::invalid_url(
                "Invalid URL format",
                json!({ "originalUrl": original_url }),
            ));
        }

        let expires_at = expires_at
            .as_deref()
            .map(|raw| parse_future_expiry(raw, Utc::now()))
            .transpose()?;

        let short_code = match alias {
            Some(alias) => alias,
            None => generate_code(),
        };

        // Defensive pre-check so an occupied code yields a clean conflict
        // instead of a raw constraint error. The insert below still races
        // against concurrent creates; the constraint is the authority.
        if self.repository.find_by_code(&short_code).await?.is_some() {
            return Err(AppError::alias_conflict(
                "URL alias already exists",
                json!({ "shortCode": short_code }),
            ));
        }

        let new_link = NewLink {
            short_code,
            original_url,
            expires_at,
        };

        match self.repository.insert(new_link).await {
            Ok(link) => Ok(link),
            Err(AppError::ConstraintViolation { .. }) => Err(AppError::alias_conflict(
                "URL alias already exists",
                json!({}),
            )),
            Err(e) => Err(e),
        }
    }

    /// Resolves a short code to its target URL, counting the access.
    ///
    /// The click-count increment and the access-event insert happen in one
    /// atomic store unit: on any failure both are left unchanged and the
    /// caller must not issue a redirect.
    ///
    /// # Errors
    ///
    /// - [`AppError::LinkNotFound`] - unknown code (terminal, no retry)
    /// - [`AppError::LinkExpired`] - past `expires_at`; the link itself is
    ///   neither mutated nor deleted
    /// - [`AppError::Storage`] - the atomic unit failed
    pub async fn resolve(&self, short_code: &str, ip_address: &str) -> Result<String, AppError> {
        let link = self.require_link(short_code).await?;

        if link.is_expired_at(Utc::now()) {
            return Err(AppError::link_expired(
                "URL has expired",
                json!({ "shortCode": short_code, "expiresAt": link.expires_at }),
            ));
        }

        self.repository
            .increment_and_log(link.id, clip_ip_address(ip_address))
            .await?;

        Ok(link.original_url)
    }

    /// Returns the public fields of a link.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::LinkNotFound`] if no link matches the code.
    pub async fn get_info(&self, short_code: &str) -> Result<Link, AppError> {
        self.require_link(short_code).await
    }

    /// Lists every stored link in the given order.
    pub async fn list_all(&self, order: LinkOrder) -> Result<Vec<Link>, AppError> {
        self.repository.list_all(order).await
    }

    /// Deletes a link and its access events.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::LinkNotFound`] if no link matches the code.
    pub async fn delete(&self, short_code: &str) -> Result<(), AppError> {
        if self.repository.delete(short_code).await? {
            Ok(())
        } else {
            Err(not_found(short_code))
        }
    }

    async fn require_link(&self, short_code: &str) -> Result<Link, AppError> {
        self.repository
            .find_by_code(short_code)
            .await?
            .ok_or_else(|| not_found(short_code))
    }
}

fn not_found(short_code: &str) -> AppError {
    AppError::link_not_found("URL not found", json!({ "shortCode": short_code }))
}

/// Parses an RFC 3339 expiry and checks it lies strictly after `now`.
fn parse_future_expiry(raw: &str, now: DateTime<Utc>) -> Result<DateTime<Utc>, AppError> {
    let parsed = DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|_| {
            AppError::invalid_expiry("Invalid expiration date", json!({ "expiresAt": raw }))
        })?;

    if parsed <= now {
        return Err(AppError::expiry_in_past(
            "Expiration date must be in the future",
            json!({ "expiresAt": raw }),
        ));
    }

    Ok(parsed)
}
