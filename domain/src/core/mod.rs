//! Core domain concepts shared across all subdomains.
//!
//! - [`error::DomainError`]: domain-level errors
//! - [`secret::Secret`]: a string value that never shows up in logs

pub mod error;
pub mod secret;
