//! Repository trait definitions for the domain layer.
//!
//! Traits here define the contract with the external store; concrete
//! implementations live in `crate::infrastructure::persistence` and mock
//! implementations are auto-generated via `mockall` for unit tests.

pub mod link_repository;

pub use link_repository::{LinkOrder, LinkRepository, OrderDirection, OrderField};

#[cfg(test)]
pub use link_repository::MockLinkRepository;
