//! Application layer services implementing business logic.
//!
//! Services consume the repository traits from the domain layer and expose a
//! clean API for the HTTP handlers:
//!
//! - [`services::LinkService`] - creation, resolution, info, listing, deletion
//! - [`services::AnalyticsService`] - click counts and recent accesses

pub mod services;
