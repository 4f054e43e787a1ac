//! Concrete link store implementations.
//!
//! - [`PgLinkRepository`] - PostgreSQL backend for production
//! - [`InMemoryLinkRepository`] - in-process backend for tests and local runs

pub mod memory;
pub mod pg_link_repository;

pub use memory::InMemoryLinkRepository;
pub use pg_link_repository::PgLinkRepository;
