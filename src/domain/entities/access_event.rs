//! Access event entity representing a single recorded resolution.

use chrono::{DateTime, Utc};

/// Maximum stored length of a caller-observed network address.
///
/// 45 characters covers the longest IPv6 textual form.
pub const MAX_IP_LENGTH: usize = 45;

/// One recorded resolution of a link, capturing caller origin and time.
///
/// Access events are created only as a side effect of a successful resolution
/// and are never mutated or individually deleted. They are owned by their
/// link: deleting a link removes its events.
#[derive(Debug, Clone)]
pub struct AccessEvent {
    pub id: i64,
    pub link_id: i64,
    pub ip_address: String,
    pub accessed_at: DateTime<Utc>,
}

impl AccessEvent {
    /// Creates a new AccessEvent instance.
    pub fn new(id: i64, link_id: i64, ip_address: String, accessed_at: DateTime<Utc>) -> Self {
        Self {
            id,
            link_id,
            ip_address,
            accessed_at,
        }
    }
}

/// Truncates a caller-observed address to the storable length.
///
/// Recording must not fail a resolution over an oversized origin string, so
/// the address is clipped rather than rejected.
pub fn clip_ip_address(ip_address: &str) -> &str {
    let end = ip_address
        .char_indices()
        .map(|(i, _)| i)
        .nth(MAX_IP_LENGTH)
        .unwrap_or(ip_address.len());
    &ip_address[..end]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_access_event_creation() {
        let now = Utc::now();
        let event = AccessEvent::new(1, 42, "192.168.1.1".to_string(), now);

        assert_eq!(event.id, 1);
        assert_eq!(event.link_id, 42);
        assert_eq!(event.ip_address, "192.168.1.1");
        assert_eq!(event.accessed_at, now);
    }

    #[test]
    fn test_clip_ip_address_keeps_short_values() {
        assert_eq!(clip_ip_address("10.0.0.1"), "10.0.0.1");
        assert_eq!(
            clip_ip_address("2001:0db8:85a3:0000:0000:8a2e:0370:7334"),
            "2001:0db8:85a3:0000:0000:8a2e:0370:7334"
        );
    }

    #[test]
    fn test_clip_ip_address_truncates_long_values() {
        let long = "x".repeat(100);
        assert_eq!(clip_ip_address(&long).len(), MAX_IP_LENGTH);
    }
}
