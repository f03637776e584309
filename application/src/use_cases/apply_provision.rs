//! Apply provision use case
//!
//! Runs the full provisioning sequence, strictly in order and fail-fast:
//!
//! ```text
//! install commands  (apt-get update / install)
//!        ↓
//! render + write artifacts
//!        ↓
//! start commands    (docker compose up, systemctl enable/restart)
//! ```
//!
//! There is no retry and no rollback: after a failure, files already
//! written stay on disk.

use super::render_artifacts::{RenderArtifactsUseCase, RenderError, RenderOutput};
use crate::ports::artifact_writer::ArtifactWriter;
use crate::ports::command_runner::{CommandError, CommandRunner};
use crate::ports::progress::{NoProgress, ProvisionProgress};
use provision_domain::{HostCommand, ProvisionConfig, ProvisionPlan, StackLayout};
use serde::Serialize;
use std::sync::Arc;
use thiserror::Error;
use tracing::{error, info};

#[derive(Error, Debug)]
pub enum ApplyError {
    #[error("Command failed: {0}")]
    Command(#[from] CommandError),

    #[error(transparent)]
    Render(#[from] RenderError),
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct ApplyOutput {
    pub render: RenderOutput,
    /// Commands that completed successfully, in order.
    pub commands: Vec<HostCommand>,
}

pub struct ApplyProvisionUseCase {
    runner: Arc<dyn CommandRunner>,
    render: RenderArtifactsUseCase,
}

impl ApplyProvisionUseCase {
    pub fn new(runner: Arc<dyn CommandRunner>, writer: Arc<dyn ArtifactWriter>) -> Self {
        Self {
            runner,
            render: RenderArtifactsUseCase::new(writer),
        }
    }

    pub fn execute(
        &self,
        config: &ProvisionConfig,
        layout: &StackLayout,
        plan: &ProvisionPlan,
    ) -> Result<ApplyOutput, ApplyError> {
        self.execute_with_progress(config, layout, plan, &NoProgress)
    }

    pub fn execute_with_progress(
        &self,
        config: &ProvisionConfig,
        layout: &StackLayout,
        plan: &ProvisionPlan,
        progress: &dyn ProvisionProgress,
    ) -> Result<ApplyOutput, ApplyError> {
        let total = plan.len();
        let mut output = ApplyOutput::default();

        info!(commands = total, "Applying provision plan");

        for (offset, command) in plan.install.iter().enumerate() {
            self.run_step(command, offset + 1, total, progress)?;
            output.commands.push(command.clone());
        }

        output.render = self.render.execute_with_progress(config, layout, progress)?;

        for (offset, command) in plan.start.iter().enumerate() {
            let index = plan.install.len() + offset + 1;
            self.run_step(command, index, total, progress)?;
            output.commands.push(command.clone());
        }

        Ok(output)
    }

    fn run_step(
        &self,
        command: &HostCommand,
        index: usize,
        total: usize,
        progress: &dyn ProvisionProgress,
    ) -> Result<(), CommandError> {
        progress.on_command_start(command, index, total);
        info!(step = index, total, command = %command, "Running");

        let result = self.runner.run(command);
        progress.on_command_complete(command, result.is_ok());

        if let Err(e) = &result {
            error!(command = %command, error = %e, "Step failed");
        }
        result
    }
}
