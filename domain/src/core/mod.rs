//! Core domain concepts shared across all subdomains.
//!
//! - [`locale::Locale`]: content locale (English, Indonesian)
//! - [`error::DomainError`]: domain-level errors

pub mod error;
pub mod locale;
