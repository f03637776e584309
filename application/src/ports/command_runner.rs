//! Command runner port for host programs (package manager, compose, systemd).

use provision_domain::HostCommand;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    #[error("Program not found: {0}")]
    NotFound(String),

    #[error("Failed to start `{command}`: {message}")]
    Spawn { command: String, message: String },

    #[error("`{command}` exited with {}", exit_display(.code))]
    Failed { command: String, code: Option<i32> },
}

fn exit_display(code: &Option<i32>) -> String {
    match code {
        Some(code) => format!("status {}", code),
        None => "a signal".to_string(),
    }
}

/// Runs one command to completion. Any non-zero exit is an error.
pub trait CommandRunner: Send + Sync {
    fn run(&self, command: &HostCommand) -> Result<(), CommandError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_failed_display() {
        let err = CommandError::Failed {
            command: "apt-get update".to_string(),
            code: Some(100),
        };
        assert_eq!(err.to_string(), "`apt-get update` exited with status 100");

        let err = CommandError::Failed {
            command: "x".to_string(),
            code: None,
        };
        assert_eq!(err.to_string(), "`x` exited with a signal");
    }
}
