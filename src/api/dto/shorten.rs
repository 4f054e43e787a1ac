//! DTOs for link creation and the public link view.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::entities::Link;

/// Request to create a short link.
///
/// `original_url` is required by the service (kept optional here so a missing
/// field maps to the typed `missing_field` error instead of a deserialization
/// rejection). `expires_at` is an RFC 3339 timestamp string.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShortenRequest {
    pub original_url: Option<String>,
    pub alias: Option<String>,
    pub expires_at: Option<String>,
}

/// Public view of a link, returned by create and info endpoints.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LinkResponse {
    pub short_code: String,
    pub original_url: String,
    pub created_at: DateTime<Utc>,
    pub expires_at: Option<DateTime<Utc>>,
    pub click_count: i64,
}

impl From<Link> for LinkResponse {
    fn from(link: Link) -> Self {
        Self {
            short_code: link.short_code,
            original_url: link.original_url,
            created_at: link.created_at,
            expires_at: link.expires_at,
            click_count: link.click_count,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_accepts_camel_case_keys() {
        let req: ShortenRequest = serde_json::from_str(
            r#"{"originalUrl":"https://example.com","alias":"promo","expiresAt":"2027-01-01T00:00:00Z"}"#,
        )
        .unwrap();

        assert_eq!(req.original_url.as_deref(), Some("https://example.com"));
        assert_eq!(req.alias.as_deref(), Some("promo"));
        assert_eq!(req.expires_at.as_deref(), Some("2027-01-01T00:00:00Z"));
    }

    #[test]
    fn test_response_serializes_camel_case() {
        let link = Link::new(
            1,
            "abc12345".to_string(),
            "https://example.com".to_string(),
            Utc::now(),
            None,
            3,
        );

        let value = serde_json::to_value(LinkResponse::from(link)).unwrap();

        assert_eq!(value["shortCode"], "abc12345");
        assert_eq!(value["originalUrl"], "https://example.com");
        assert_eq!(value["clickCount"], 3);
        assert!(value["expiresAt"].is_null());
        assert!(value.get("id").is_none());
    }
}
