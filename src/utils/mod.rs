//! Utility functions shared across the application:
//!
//! - [`code_generator`] - short code generation and alias validation
//! - [`url_validator`] - target URL well-formedness
//! - [`db_error`] - database error classification

pub mod code_generator;
pub mod db_error;
pub mod url_validator;
