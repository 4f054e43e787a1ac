//! HTTP layer translating requests into service calls.
//!
//! - [`dto`] - request/response serialization types
//! - [`handlers`] - thin handlers over the application services

pub mod dto;
pub mod handlers;
