//! DTO for the analytics endpoint.

use serde::Serialize;

use crate::application::services::LinkAnalytics;

/// Usage summary for a link: total clicks plus the most recent caller IPs,
/// newest first.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyticsResponse {
    pub click_count: i64,
    pub recent_ips: Vec<String>,
}

impl From<LinkAnalytics> for AnalyticsResponse {
    fn from(analytics: LinkAnalytics) -> Self {
        Self {
            click_count: analytics.click_count,
            recent_ips: analytics.recent_ips,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serializes_camel_case() {
        let response = AnalyticsResponse::from(LinkAnalytics {
            click_count: 7,
            recent_ips: vec!["10.0.0.1".to_string()],
        });

        let value = serde_json::to_value(response).unwrap();

        assert_eq!(value["clickCount"], 7);
        assert_eq!(value["recentIps"][0], "10.0.0.1");
    }
}
