//! Infrastructure layer implementing the domain's store contracts.

pub mod persistence;
