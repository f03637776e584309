//! Prompt port for asking the operator for missing values.
//!
//! # Architecture
//!
//! Following the Ports and Adapters pattern:
//! - **Port**: [`PromptPort`] - defined here in application layer
//! - **Adapter**: `TerminalPrompt` - implemented in presentation layer
//!
//! # Built-in Implementations
//!
//! - [`NoPrompt`] - never interactive; missing values become an error

use provision_domain::ConfigKeyInfo;
use thiserror::Error;

/// Failures while reading an answer, not the answer itself.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PromptError {
    /// Input stream closed before a line was read.
    #[error("Input closed while reading {0}")]
    Closed(&'static str),

    /// Terminal read/write failure.
    #[error("I/O error: {0}")]
    IoError(String),
}

/// Port for reading a value from the operator.
pub trait PromptPort: Send + Sync {
    /// Whether an operator can answer. When `false` the resolver never
    /// calls [`PromptPort::prompt`].
    fn is_interactive(&self) -> bool;

    /// Ask once for `key` and return the line as typed (without the
    /// trailing newline). Empty answers are valid.
    fn prompt(&self, key: &ConfigKeyInfo) -> Result<String, PromptError>;
}

/// Prompt used when no terminal is attached (or `--non-interactive`).
pub struct NoPrompt;

impl PromptPort for NoPrompt {
    fn is_interactive(&self) -> bool {
        false
    }

    fn prompt(&self, key: &ConfigKeyInfo) -> Result<String, PromptError> {
        Err(PromptError::Closed(key.env))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use provision_domain::ConfigKey;

    #[test]
    fn test_no_prompt_is_not_interactive() {
        assert!(!NoPrompt.is_interactive());
        assert_eq!(
            NoPrompt.prompt(ConfigKey::HostIp.info()),
            Err(PromptError::Closed("HOST_IP"))
        );
    }
}
