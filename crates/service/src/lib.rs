//! Service layer providing business-oriented operations on top of models.
//! - Separates payload validation and bulk file handling from data access.
//! - Reuses entity definitions in the `models` crate.
//! - Provides clear error types for HTTP mapping.

pub mod company;
pub mod errors;
