//! Core domain concepts shared across all subdomains.
//!
//! - [`error::DomainError`] — construction-time validation errors

pub mod error;
