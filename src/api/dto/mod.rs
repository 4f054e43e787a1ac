//! Data Transfer Objects for API requests and responses.
//!
//! Wire field names are camelCase, matching the public API contract.

pub mod analytics;
pub mod list;
pub mod shorten;
