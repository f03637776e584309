//! Runs host commands with inherited stdio, to completion.
//!
//! No timeout: a hanging package manager blocks the run, as an operator
//! watching the terminal would expect.

use provision_application::{CommandError, CommandRunner};
use provision_domain::HostCommand;
use std::process::Command;
use tracing::debug;

#[derive(Debug, Clone, Copy, Default)]
pub struct SystemCommandRunner;

impl SystemCommandRunner {
    pub fn new() -> Self {
        Self
    }

    /// Whether `program` resolves on `PATH`.
    pub fn is_available(program: &str) -> bool {
        which::which(program).is_ok()
    }
}

impl CommandRunner for SystemCommandRunner {
    fn run(&self, command: &HostCommand) -> Result<(), CommandError> {
        let program = which::which(&command.program)
            .map_err(|_| CommandError::NotFound(command.program.clone()))?;
        debug!(program = %program.display(), args = ?command.args, "Spawning");

        let status = Command::new(&program)
            .args(&command.args)
            .status()
            .map_err(|e| CommandError::Spawn {
                command: command.command_line(),
                message: e.to_string(),
            })?;

        if status.success() {
            Ok(())
        } else {
            Err(CommandError::Failed {
                command: command.command_line(),
                code: status.code(),
            })
        }
    }
}
