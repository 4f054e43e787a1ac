//! Domain layer containing business entities and store contracts.
//!
//! - [`entities`] - core business data structures
//! - [`repositories`] - data access trait definitions
//!
//! The domain layer has no dependency on infrastructure or transport
//! concerns; business logic lives in [`crate::application::services`].

pub mod entities;
pub mod repositories;
