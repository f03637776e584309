//! Domain error types

use thiserror::Error;

/// Domain-level errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("No value resolved for {0}")]
    MissingValue(&'static str),

    #[error("Invalid ROLE '{0}': expected MASTER or BACKUP")]
    InvalidRole(String),

    #[error("Invalid PRIORITY '{0}': expected an integer between 1 and 254")]
    InvalidPriority(String),

    #[error("Invalid {key} '{value}': expected {expected}")]
    InvalidNumber {
        key: &'static str,
        value: String,
        expected: &'static str,
    },
}

impl DomainError {
    /// Name of the configuration key this error is about, if any
    pub fn key(&self) -> Option<&'static str> {
        match self {
            DomainError::MissingValue(key) => Some(key),
            DomainError::InvalidRole(_) => Some("ROLE"),
            DomainError::InvalidPriority(_) => Some("PRIORITY"),
            DomainError::InvalidNumber { key, .. } => Some(key),
        }
    }
}
