//! Target URL well-formedness checks.

use url::Url;

/// Maximum accepted length of an original URL (also the column width).
pub const MAX_URL_LENGTH: usize = 2048;

/// Returns true if `raw` is a structurally complete absolute URL.
///
/// A valid target parses with the WHATWG rules and carries at least a scheme
/// and a host. There is no scheme allow-list and no network reachability
/// check. Strings longer than [`MAX_URL_LENGTH`] are rejected outright.
pub fn is_valid_url(raw: &str) -> bool {
    if raw.len() > MAX_URL_LENGTH {
        return false;
    }

    match Url::parse(raw) {
        Ok(parsed) => parsed.has_host(),
        Err(_) => false,
    }
}
