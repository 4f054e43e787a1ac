//! Core domain entities representing the business data model.
//!
//! Entities are plain data structures without persistence logic:
//!
//! - [`Link`] - a short-code-to-URL mapping
//! - [`AccessEvent`] - a single recorded resolution of a link
//!
//! Creation inputs use separate `New*` structs so store-assigned fields
//! (ids, creation timestamps, the click counter) cannot be forged by callers.

pub mod access_event;
pub mod link;

pub use access_event::{clip_ip_address, AccessEvent, MAX_IP_LENGTH};
pub use link::{Link, NewLink};
