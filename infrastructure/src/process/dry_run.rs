//! Command runner that only logs, for `apply --dry-run`.
//!
//! The commands that would have run come back in `ApplyOutput::commands`.

use provision_application::{CommandError, CommandRunner};
use provision_domain::HostCommand;
use tracing::info;

#[derive(Debug, Clone, Copy, Default)]
pub struct DryRunCommandRunner;

impl CommandRunner for DryRunCommandRunner {
    fn run(&self, command: &HostCommand) -> Result<(), CommandError> {
        info!(command = %command, "Dry run: not executing");
        Ok(())
    }
}
