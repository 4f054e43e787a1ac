//! Application error taxonomy and HTTP response mapping.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use serde_json::{json, Value};

use crate::utils::db_error::is_unique_violation_on_code;

#[derive(Serialize)]
struct ErrorBody {
    error: ErrorInfo,
}

#[derive(Serialize)]
struct ErrorInfo {
    code: &'static str,
    message: String,
    details: Value,
}

/// Typed failures produced by the resolution core.
///
/// Every variant carries a human-readable message (used verbatim in HTTP
/// responses) plus structured details. Validation variants are always raised
/// before any store write; `ConstraintViolation` is a store-level error that
/// the service layer translates to [`AppError::AliasConflict`] before it
/// reaches a caller.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("{message}")]
    MissingField { message: String, details: Value },
    #[error("{message}")]
    InvalidUrl { message: String, details: Value },
    #[error("{message}")]
    InvalidAlias { message: String, details: Value },
    #[error("{message}")]
    InvalidExpiry { message: String, details: Value },
    #[error("{message}")]
    ExpiryInPast { message: String, details: Value },
    #[error("{message}")]
    AliasConflict { message: String, details: Value },
    #[error("{message}")]
    LinkNotFound { message: String, details: Value },
    #[error("{message}")]
    LinkExpired { message: String, details: Value },
    /// Unique-constraint violation reported by the store on insert.
    #[error("{message}")]
    ConstraintViolation { message: String, details: Value },
    /// Any other store failure. Callers must not treat this as "not found".
    #[error("{message}")]
    Storage { message: String, details: Value },
}

impl AppError {
    pub fn missing_field(message: impl Into<String>, details: Value) -> Self {
        Self::MissingField {
            message: message.into(),
            details,
        }
    }
    pub fn invalid_url(message: impl Into<String>, details: Value) -> Self {
        Self::InvalidUrl {
            message: message.into(),
            details,
        }
    }
    pub fn invalid_alias(message: impl Into<String>, details: Value) -> Self {
        Self::InvalidAlias {
            message: message.into(),
            details,
        }
    }
    pub fn invalid_expiry(message: impl Into<String>, details: Value) -> Self {
        Self::InvalidExpiry {
            message: message.into(),
            details,
        }
    }
    pub fn expiry_in_past(message: impl Into<String>, details: Value) -> Self {
        Self::ExpiryInPast {
            message: message.into(),
            details,
        }
    }
    pub fn alias_conflict(message: impl Into<String>, details: Value) -> Self {
        Self::AliasConflict {
            message: message.into(),
            details,
        }
    }
    pub fn link_not_found(message: impl Into<String>, details: Value) -> Self {
        Self::LinkNotFound {
            message: message.into(),
            details,
        }
    }
    pub fn link_expired(message: impl Into<String>, details: Value) -> Self {
        Self::LinkExpired {
            message: message.into(),
            details,
        }
    }
    pub fn storage(message: impl Into<String>, details: Value) -> Self {
        Self::Storage {
            message: message.into(),
            details,
        }
    }

    /// Stable machine-readable code for the error kind.
    pub fn code(&self) -> &'static str {
        match self {
            AppError::MissingField { .. } => "missing_field",
            AppError::InvalidUrl { .. } => "invalid_url",
            AppError::InvalidAlias { .. } => "invalid_alias",
            AppError::InvalidExpiry { .. } => "invalid_expiry",
            AppError::ExpiryInPast { .. } => "expiry_in_past",
            AppError::AliasConflict { .. } => "alias_conflict",
            AppError::LinkNotFound { .. } => "link_not_found",
            AppError::LinkExpired { .. } => "link_expired",
            AppError::ConstraintViolation { .. } => "constraint_violation",
            AppError::Storage { .. } => "storage_error",
        }
    }

    fn status(&self) -> StatusCode {
        match self {
            AppError::MissingField { .. }
            | AppError::InvalidUrl { .. }
            | AppError::InvalidAlias { .. }
            | AppError::InvalidExpiry { .. }
            | AppError::ExpiryInPast { .. } => StatusCode::BAD_REQUEST,
            AppError::LinkNotFound { .. } => StatusCode::NOT_FOUND,
            AppError::AliasConflict { .. } | AppError::ConstraintViolation { .. } => {
                StatusCode::CONFLICT
            }
            AppError::LinkExpired { .. } => StatusCode::GONE,
            AppError::Storage { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn into_parts(self) -> (String, Value) {
        match self {
            AppError::MissingField { message, details }
            | AppError::InvalidUrl { message, details }
            | AppError::InvalidAlias { message, details }
            | AppError::InvalidExpiry { message, details }
            | AppError::ExpiryInPast { message, details }
            | AppError::AliasConflict { message, details }
            | AppError::LinkNotFound { message, details }
            | AppError::LinkExpired { message, details }
            | AppError::ConstraintViolation { message, details }
            | AppError::Storage { message, details } => (message, details),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let code = self.code();

        if status.is_server_error() {
            tracing::error!(code, message = %self, "request failed");
        }

        let (message, details) = self.into_parts();
        let body = ErrorBody {
            error: ErrorInfo {
                code,
                message,
                details,
            },
        };

        (status, Json(body)).into_response()
    }
}

impl From<sqlx::Error> for AppError {
    fn from(e: sqlx::Error) -> Self {
        if is_unique_violation_on_code(&e) {
            return AppError::ConstraintViolation {
                message: "Short code already exists".to_string(),
                details: json!({ "constraint": "links_short_code_key" }),
            };
        }

        tracing::error!(error = %e, "database error");
        AppError::storage("Database error", json!({}))
    }
}
